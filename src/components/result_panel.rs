use yew::prelude::*;

/// What the result region currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultStatus {
    NoSolution,
    Valid(String),
    Invalid(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct ResultPanelProps {
    pub status: ResultStatus,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let (class, color, text) = match &props.status {
        ResultStatus::NoSolution => ("no-solution", "#8b949e", ""),
        ResultStatus::Valid(msg) => ("solution-valid", "#3fb950", msg.as_str()),
        ResultStatus::Invalid(msg) => ("solution-invalid", "#f85149", msg.as_str()),
    };
    html! {
        <div id="solution-results" class={class} style={format!("min-height:20px; font-size:13px; line-height:1.4; color:{};", color)}>{ text }</div>
    }
}
