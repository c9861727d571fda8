use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SolutionPanelProps {
    pub text: String,
    pub on_input: Callback<String>,
    pub on_test: Callback<()>,
    pub on_load_sample: Callback<()>,
}

#[function_component(SolutionPanel)]
pub fn solution_panel(props: &SolutionPanelProps) -> Html {
    let input_cb = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlTextAreaElement = e.target_unchecked_into();
            cb.emit(el.value());
        })
    };
    let test_cb = {
        let cb = props.on_test.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let sample_cb = {
        let cb = props.on_load_sample.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; flex-direction:column; gap:6px;">
        <label for="solution" style="font-weight:600;">{"Solution"}</label>
        <textarea id="solution" rows="6" spellcheck="false" placeholder={r#"[{"row":0,"col":0},{"row":0,"col":1}]"#} style="font-family:monospace; font-size:12px; background:#0d1117; color:#c9d1d9; border:1px solid #30363d; border-radius:6px; padding:6px;" value={props.text.clone()} oninput={input_cb}></textarea>
        <div style="display:flex; gap:8px;">
            <button onclick={test_cb}>{"Test solution"}</button>
            <button onclick={sample_cb}>{"Load sample maze"}</button>
        </div>
    </div>}
}
