use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScoreDisplayProps {
    pub score: u32,
}

#[function_component(ScoreDisplay)]
pub fn score_display(props: &ScoreDisplayProps) -> Html {
    html! {<div style="position:absolute; top:32px; left:50%; transform:translateX(-50%); z-index:10; font-size:36px; font-weight:700; color:#ffffff; text-shadow:0 2px 6px #000000; pointer-events:none; font-variant-numeric:tabular-nums;">
        { props.score }
    </div>}
}
