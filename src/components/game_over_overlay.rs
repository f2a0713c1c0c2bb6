use yew::prelude::*;

use super::score_submit_panel::ScoreSubmitPanel;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub score: u32,
    pub name: String,
    pub submit_disabled: bool,
    pub submit_success: bool,
    pub submit_error: bool,
    pub restart: Callback<()>,
    pub to_menu: Callback<()>,
    pub on_name_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    let menu_btn = {
        let cb = props.to_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; inset:0; z-index:10; background:rgba(0,0,0,0.6); display:flex; flex-direction:column; align-items:center; justify-content:center; padding:24px; gap:32px;">
            <div style="background:#f9fafb; width:100%; max-width:384px; padding:32px; border-radius:12px; display:flex; flex-direction:column; align-items:center; box-shadow:0 10px 25px rgba(0,0,0,0.4); box-sizing:border-box;">
                <p style="margin:0; font-size:24px; font-weight:700; color:#dc2626;">{"Gameover"}</p>
                <p style="margin:32px 0 0 0; font-size:18px;">{ format!("Score : {}", props.score) }</p>
                <button onclick={restart_btn} style="margin-top:32px; background:#16a34a; color:#ffffff; padding:16px 32px; font-weight:700; border:none; border-radius:8px; cursor:pointer;">{"Restart"}</button>
                <button onclick={menu_btn} style="margin-top:16px; background:none; border:none; color:#16a34a; font-size:14px; padding:12px 0; cursor:pointer;">{"Main Menu"}</button>
            </div>
            <ScoreSubmitPanel
                name={props.name.clone()}
                disabled={props.submit_disabled}
                show_success={props.submit_success}
                show_error={props.submit_error}
                on_name_change={props.on_name_change.clone()}
                on_submit={props.on_submit.clone()}
            />
        </div>
    }
}
