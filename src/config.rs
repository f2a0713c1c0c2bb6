//! Tunables for the scene and the leaderboard client.
//!
//! Defaults mirror the classic arcade feel (480x800 portrait world, strong
//! gravity, short snappy flaps). A JSON object stored under
//! [`CONFIG_STORAGE_KEY`] is merged over the defaults at startup.

use serde::{Deserialize, Serialize};

use crate::util::storage_get;

pub const CONFIG_STORAGE_KEY: &str = "fb_config";
pub const PLAYER_NAME_STORAGE_KEY: &str = "fb_player_name";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical world size used before the canvas reports its real size.
    pub world_width: f64,
    pub world_height: f64,
    pub background: String,

    /// World gravity (px/s²).
    pub gravity: f64,
    /// Extra gravity applied to the bird's own body (px/s²).
    pub bird_gravity: f64,
    pub flap_velocity: f64,
    pub flap_angle: f64,
    pub dive_angle: f64,
    /// Tilt tween duration in seconds.
    pub tilt_secs: f64,

    pub bird_x: f64,
    pub bird_y: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    pub bird_color: String,
    pub hit_color: String,

    pub pipe_width: f64,
    pub pipe_color: String,
    pub pipe_velocity: f64,
    pub spawn_interval_secs: f64,
    pub gap: f64,
    /// Minimum distance between the gap and the top/bottom of the world.
    pub gap_margin: f64,
    pub score_line_height: f64,

    pub fixed_dt: f64,
    pub leaderboard_url: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 480.0,
            world_height: 800.0,
            background: "#87CEEB".to_string(),
            gravity: 1500.0,
            bird_gravity: 10.0,
            flap_velocity: -550.0,
            flap_angle: -20.0,
            dive_angle: 45.0,
            tilt_secs: 0.15,
            bird_x: 100.0,
            bird_y: 300.0,
            bird_width: 60.0,
            bird_height: 40.0,
            bird_color: "#FFD700".to_string(),
            hit_color: "#ff0000".to_string(),
            pipe_width: 50.0,
            pipe_color: "#008000".to_string(),
            pipe_velocity: -200.0,
            spawn_interval_secs: 1.5,
            gap: 250.0,
            gap_margin: 100.0,
            score_line_height: 600.0,
            fixed_dt: 1.0 / 60.0,
            leaderboard_url: "https://flappybird-nest.onrender.com/".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse an override blob; anything missing keeps its default.
    pub fn from_override(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match serde_json::from_str::<GameConfig>(raw) {
            Ok(cfg) => match cfg.validate() {
                Ok(()) => cfg,
                Err(e) => {
                    log::warn!("ignoring {CONFIG_STORAGE_KEY}: {e}");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("ignoring invalid {CONFIG_STORAGE_KEY}: {e}");
                Self::default()
            }
        }
    }

    /// Defaults merged with the override in localStorage, if any.
    pub fn load() -> Self {
        let raw = storage_get(CONFIG_STORAGE_KEY);
        let cfg = Self::from_override(raw.as_deref());
        if raw.is_some() {
            log::info!("config override loaded from localStorage");
        }
        cfg
    }

    /// Reject values the scene can't run with.
    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("gravity", self.gravity),
            ("bird_gravity", self.bird_gravity),
            ("flap_velocity", self.flap_velocity),
            ("flap_angle", self.flap_angle),
            ("dive_angle", self.dive_angle),
            ("tilt_secs", self.tilt_secs),
            ("bird_x", self.bird_x),
            ("bird_y", self.bird_y),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_velocity", self.pipe_velocity),
            ("score_line_height", self.score_line_height),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return Err(format!("{name} must be finite, got {v}"));
            }
        }
        let non_negative = [
            ("gap", self.gap),
            ("gap_margin", self.gap_margin),
            ("pipe_width", self.pipe_width),
        ];
        for (name, v) in non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(format!("{name} must be a non-negative number, got {v}"));
            }
        }
        let positive = [
            ("fixed_dt", self.fixed_dt),
            ("spawn_interval_secs", self.spawn_interval_secs),
        ];
        for (name, v) in positive {
            if !v.is_finite() || v <= 0.0 {
                return Err(format!("{name} must be positive, got {v}"));
            }
        }
        Ok(())
    }

    /// Total downward acceleration acting on the bird.
    pub fn bird_acceleration(&self) -> f64 {
        self.gravity + self.bird_gravity
    }
}
