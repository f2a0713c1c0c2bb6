use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScoreSubmitPanelProps {
    pub name: String,
    pub disabled: bool,
    pub show_success: bool,
    pub show_error: bool,
    pub on_name_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component]
pub fn ScoreSubmitPanel(props: &ScoreSubmitPanelProps) -> Html {
    let oninput = {
        let cb = props.on_name_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let submit_cb = {
        let cb = props.on_submit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let button_bg = if props.disabled { "#9ca3af" } else { "#16a34a" };
    let cursor = if props.disabled { "not-allowed" } else { "pointer" };
    html! {<div style="width:100%; max-width:384px; display:flex; flex-direction:column; gap:16px;">
        <input
            type="text"
            placeholder="Your Name"
            value={props.name.clone()}
            {oninput}
            style="background:#ffffff; border:none; border-radius:12px; padding:16px;"
        />
        <button
            onclick={submit_cb}
            disabled={props.disabled}
            style={format!("background:{}; color:#ffffff; padding:16px 32px; font-weight:700; border:none; border-radius:12px; cursor:{};", button_bg, cursor)}
        >{"Submit Score"}</button>
        { if props.show_success { html!{ <p style="color:#22c55e; text-align:center; margin:0;">{"Score Submitted!"}</p> } } else { html!{} } }
        { if props.show_error { html!{ <p style="color:#ef4444; text-align:center; margin:0;">{"Failed To Submit"}</p> } } else { html!{} } }
    </div>}
}
