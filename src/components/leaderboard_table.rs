use yew::prelude::*;

use crate::leaderboard::Score;
use crate::model::Remote;

#[derive(Properties, PartialEq, Clone)]
pub struct LeaderboardTableProps {
    pub rows: Remote<Vec<Score>>,
}

#[function_component]
pub fn LeaderboardTable(props: &LeaderboardTableProps) -> Html {
    let cell = "text-align:left; padding:12px 16px;";
    let notice = |text: &str| {
        html! { <tr><td colspan="2" style="text-align:center; padding:20px; color:#6b7280;">{ text.to_string() }</td></tr> }
    };
    let body = match &props.rows {
        Remote::Loading => notice("Loading..."),
        Remote::Failed(e) => html! {
            <tr><td colspan="2" title={e.clone()} style="text-align:center; padding:20px; color:#b91c1c;">{"Leaderboard unavailable"}</td></tr>
        },
        Remote::Ready(rows) if rows.is_empty() => notice("No scores yet"),
        Remote::Ready(rows) => rows
            .iter()
            .map(|s| {
                html! { <tr key={s.key()} style="border-top:1px solid #e5e7eb;">
                    <td style={cell}>{ s.name.clone() }</td>
                    <td style={cell}>{ s.score }</td>
                </tr> }
            })
            .collect::<Html>(),
    };
    html! {<table style="width:100%; max-width:384px; margin-top:32px; background:#ffffff; color:#111827; border-radius:12px; border-collapse:collapse; overflow:hidden; box-shadow:0 1px 3px rgba(0,0,0,0.3);">
        <thead style="background:#d1d5db;">
            <tr>
                <th style={format!("{} font-weight:500;", cell)}>{"Name"}</th>
                <th style={format!("{} font-weight:500;", cell)}>{"Score"}</th>
            </tr>
        </thead>
        <tbody>{ body }</tbody>
    </table>}
}
