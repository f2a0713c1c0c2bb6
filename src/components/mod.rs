pub mod app;
pub mod game_canvas;
pub mod game_over_overlay;
pub mod leaderboard_table;
pub mod menu_overlay;
pub mod score_display;
pub mod score_submit_panel;

pub use app::App;
