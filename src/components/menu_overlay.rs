use yew::prelude::*;

use super::leaderboard_table::LeaderboardTable;
use crate::leaderboard::Score;
use crate::model::Remote;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuOverlayProps {
    pub show: bool,
    pub leaderboard: Remote<Vec<Score>>,
    pub on_start: Callback<()>,
}

#[function_component(MenuOverlay)]
pub fn menu_overlay(props: &MenuOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let start_btn = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; inset:0; z-index:10; background:rgba(0,0,0,0.6); display:flex; flex-direction:column; align-items:center; justify-content:center; padding:24px;">
            <button onclick={start_btn} style="background:#16a34a; color:#ffffff; padding:12px 32px; font-weight:700; border:none; border-radius:8px; cursor:pointer;">{"Start"}</button>
            <LeaderboardTable rows={props.leaderboard.clone()} />
        </div>
    }
}
