use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::MAX_OPS_PER_TICK;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsPanelProps {
    pub ops_per_tick: usize,
    pub on_change_ops_per_tick: Callback<usize>,
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let change_cb = {
        let cb = props.on_change_ops_per_tick.clone();
        Callback::from(move |e: Event| {
            let el: HtmlInputElement = e.target_unchecked_into();
            // unparsable input falls back to the slowest speed
            cb.emit(el.value().parse::<usize>().unwrap_or(1));
        })
    };
    html! {<div style="display:flex; align-items:center; gap:8px; font-size:13px;">
        <label for="ops-per-tick">{"Cells per frame"}</label>
        <input id="ops-per-tick" type="number" min="1" max={MAX_OPS_PER_TICK.to_string()} style="width:64px;" value={props.ops_per_tick.to_string()} onchange={change_cb} />
    </div>}
}
