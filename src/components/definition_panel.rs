use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DefinitionPanelProps {
    pub text: String,
    pub download_href: String,
    pub on_input: Callback<String>,
    pub on_update: Callback<()>,
}

#[function_component(DefinitionPanel)]
pub fn definition_panel(props: &DefinitionPanelProps) -> Html {
    let input_cb = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlTextAreaElement = e.target_unchecked_into();
            cb.emit(el.value());
        })
    };
    let update_cb = {
        let cb = props.on_update.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; flex-direction:column; gap:6px;">
        <label for="maze-definition" style="font-weight:600;">{"Maze definition"}</label>
        <textarea id="maze-definition" rows="8" spellcheck="false" style="font-family:monospace; font-size:12px; background:#0d1117; color:#c9d1d9; border:1px solid #30363d; border-radius:6px; padding:6px;" value={props.text.clone()} oninput={input_cb}></textarea>
        <div style="display:flex; gap:8px; align-items:center;">
            <button onclick={update_cb}>{"Update maze"}</button>
            <a href={props.download_href.clone()} download="maze.json" style="color:#58a6ff; font-size:12px;">{"Download maze.json"}</a>
        </div>
    </div>}
}
