mod components;
mod config;
mod leaderboard;
mod model;
mod rng;
mod scene;
mod state;
mod tween;
mod util;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("flappy bird: starting");
    yew::Renderer::<App>::new().render();
}
