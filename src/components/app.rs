use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{
    game_canvas::GameCanvas, game_over_overlay::GameOverOverlay, menu_overlay::MenuOverlay,
    score_display::ScoreDisplay,
};
use crate::config::{GameConfig, PLAYER_NAME_STORAGE_KEY};
use crate::leaderboard::{self, Score};
use crate::model::{GamePhase, UiAction, UiState};
use crate::rng::Rng;
use crate::scene::{Scene, SceneEvent};
use crate::state::SceneHandle;
use crate::util::{storage_get, storage_set};

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(GameConfig::load);
    let scene = {
        let config = (*config).clone();
        use_state(move || SceneHandle::new(Scene::new(config, Rng::from_entropy())))
    };
    let ui = use_reducer(|| UiState::new(storage_get(PLAYER_NAME_STORAGE_KEY).unwrap_or_default()));

    let load_leaderboard = {
        let dispatcher = ui.dispatcher();
        let url = config.leaderboard_url.clone();
        Callback::from(move |_: ()| {
            let dispatcher = dispatcher.clone();
            let url = url.clone();
            dispatcher.dispatch(UiAction::LeaderboardLoading);
            spawn_local(async move {
                match leaderboard::fetch_leaderboard(&url).await {
                    Ok(rows) => {
                        log::info!("leaderboard loaded: {} rows", rows.len());
                        dispatcher.dispatch(UiAction::LeaderboardLoaded(rows));
                    }
                    Err(e) => {
                        log::error!("leaderboard fetch failed: {e}");
                        dispatcher.dispatch(UiAction::LeaderboardFailed(e.to_string()));
                    }
                }
            });
        })
    };

    {
        let load_leaderboard = load_leaderboard.clone();
        use_effect_with((), move |_| {
            load_leaderboard.emit(());
            || ()
        });
    }

    // Log phase transitions
    {
        let score = ui.score;
        use_effect_with(ui.phase, move |phase| {
            match phase {
                GamePhase::Menu => log::info!("menu"),
                GamePhase::Running => log::info!("run started"),
                GamePhase::Lost => log::info!("run lost with score {score}"),
            }
            || ()
        });
    }

    let on_scene_event = {
        let dispatcher = ui.dispatcher();
        Callback::from(move |ev: SceneEvent| dispatcher.dispatch(UiAction::Scene(ev)))
    };

    let on_start = {
        let scene = (*scene).clone();
        let dispatcher = ui.dispatcher();
        Callback::from(move |_: ()| {
            scene.borrow_mut().start();
            dispatcher.dispatch(UiAction::StartClicked);
        })
    };
    let on_restart = {
        let scene = (*scene).clone();
        let dispatcher = ui.dispatcher();
        Callback::from(move |_: ()| {
            scene.borrow_mut().restart();
            dispatcher.dispatch(UiAction::RestartClicked);
        })
    };
    let to_menu = {
        let dispatcher = ui.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(UiAction::MainMenu))
    };
    let on_name_change = {
        let dispatcher = ui.dispatcher();
        Callback::from(move |name: String| dispatcher.dispatch(UiAction::SetName(name)))
    };
    let on_submit = {
        let dispatcher = ui.dispatcher();
        let url = config.leaderboard_url.clone();
        let load_leaderboard = load_leaderboard.clone();
        let raw_name = ui.name.clone();
        let score = ui.score;
        Callback::from(move |_: ()| {
            let remembered = raw_name.trim().to_string();
            let entry = Score {
                name: leaderboard::player_name(&raw_name),
                score,
            };
            dispatcher.dispatch(UiAction::SubmitStarted);
            let dispatcher = dispatcher.clone();
            let url = url.clone();
            let load_leaderboard = load_leaderboard.clone();
            spawn_local(async move {
                match leaderboard::submit_score(&url, &entry).await {
                    Ok(()) => {
                        log::info!("submitted {} for {}", entry.score, entry.name);
                        if !remembered.is_empty() {
                            storage_set(PLAYER_NAME_STORAGE_KEY, &remembered);
                        }
                        dispatcher.dispatch(UiAction::SubmitSucceeded(remembered));
                        load_leaderboard.emit(());
                    }
                    Err(e) => {
                        log::error!("score submission failed: {e}");
                        dispatcher.dispatch(UiAction::SubmitFailed);
                    }
                }
            });
        })
    };

    html! {
        <div id="app" style="position:relative; width:100vw; height:100vh; overflow:hidden; display:flex; flex-direction:column; align-items:center; justify-content:center; font-family:sans-serif;">
            <GameCanvas scene={(*scene).clone()} on_event={on_scene_event} />
            <ScoreDisplay score={ui.score} />
            <GameOverOverlay
                show={ui.phase == GamePhase::Lost}
                score={ui.score}
                name={ui.name.clone()}
                submit_disabled={ui.submit_disabled()}
                submit_success={ui.show_submit_success()}
                submit_error={ui.show_submit_error()}
                restart={on_restart}
                {to_menu}
                {on_name_change}
                {on_submit}
            />
            <MenuOverlay
                show={ui.phase == GamePhase::Menu}
                leaderboard={ui.leaderboard.clone()}
                {on_start}
            />
        </div>
    }
}
