//! The game scene: bird physics, pipe-pair spawning, collisions and scoring.
//!
//! The scene knows nothing about the DOM. The canvas component drives it with
//! fixed-size [`Scene::tick`] calls and drains [`SceneEvent`]s for the UI shell.

pub mod body;

use crate::config::GameConfig;
use crate::rng::Rng;
use crate::tween::Tween;
pub use body::Body;

/// Notifications from the scene to the UI shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    GameStart,
    ScoreUpdate(u32),
    GameLose,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bird {
    pub body: Body,
    /// Tilt in degrees; positive noses down.
    pub tilt: Tween,
    /// Set once the bird hits a pipe (drawn with the hit tint).
    pub hit: bool,
}

impl Bird {
    fn spawn(cfg: &GameConfig) -> Self {
        Self {
            body: Body::new(cfg.bird_x, cfg.bird_y, cfg.bird_width, cfg.bird_height),
            tilt: Tween::idle(0.0),
            hit: false,
        }
    }

    pub fn angle(&self) -> f64 {
        self.tilt.value()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pipe {
    pub body: Body,
    /// Top pipes are drawn upside down.
    pub flipped: bool,
}

/// Invisible trigger placed in the gap; crossing it scores a point.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreLine {
    pub body: Body,
}

pub struct Scene {
    pub config: GameConfig,
    pub width: f64,
    pub height: f64,
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub score_lines: Vec<ScoreLine>,
    pub score: u32,
    pub alive: bool,
    /// Waiting for the first Start; spawning is disabled and physics frozen.
    pub paused: bool,
    pub physics_running: bool,
    spawn_elapsed: f64,
    rng: Rng,
    events: Vec<SceneEvent>,
}

impl Scene {
    pub fn new(config: GameConfig, rng: Rng) -> Self {
        let mut scene = Self {
            width: config.world_width,
            height: config.world_height,
            bird: Bird::spawn(&config),
            pipes: Vec::new(),
            score_lines: Vec::new(),
            score: 0,
            alive: true,
            paused: true,
            physics_running: false,
            spawn_elapsed: 0.0,
            rng,
            events: Vec::new(),
            config,
        };
        scene.create();
        scene
    }

    /// (Re)build the play field. Physics only runs once the scene is unpaused.
    fn create(&mut self) {
        self.alive = true;
        self.score = 0;
        self.bird = Bird::spawn(&self.config);
        self.pipes.clear();
        self.score_lines.clear();
        self.spawn_elapsed = 0.0;
        self.physics_running = !self.paused;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.width = width;
            self.height = height;
        }
    }

    pub fn start(&mut self) {
        self.paused = false;
        self.restart();
    }

    pub fn restart(&mut self) {
        self.score = 0;
        self.events.push(SceneEvent::GameStart);
        self.events.push(SceneEvent::ScoreUpdate(self.score));
        self.create();
        log::info!("scene restarted ({}x{})", self.width, self.height);
    }

    pub fn flap(&mut self) {
        if !self.alive || !self.physics_running {
            return;
        }
        self.bird.body.vy = self.config.flap_velocity;
        self.bird.tilt.retarget(self.config.flap_angle, self.config.tilt_secs);
    }

    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the scene by one step of `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        if self.physics_running {
            self.step_physics(dt);
        }
        if self.alive {
            self.update();
        }
        self.advance_spawn_timer(dt);
        self.bird.tilt.tick(dt);
    }

    fn step_physics(&mut self, dt: f64) {
        let accel = self.config.bird_acceleration();
        self.bird.body.step(dt, accel);
        self.bird.body.clamp_to(self.width, self.height);
        for pipe in &mut self.pipes {
            pipe.body.step(dt, 0.0);
        }
        for line in &mut self.score_lines {
            line.body.step(dt, 0.0);
        }

        if self.pipes.iter().any(|p| p.body.overlaps(&self.bird.body)) {
            self.on_hit();
            return;
        }

        let bird = &self.bird.body;
        let before = self.score_lines.len();
        self.score_lines.retain(|l| !l.body.overlaps(bird));
        let crossed = (before - self.score_lines.len()) as u32;
        if crossed > 0 {
            self.score += crossed;
            log::debug!("score {}", self.score);
            self.events.push(SceneEvent::ScoreUpdate(self.score));
        }
    }

    /// Per-frame housekeeping while the bird is alive.
    fn update(&mut self) {
        let cutoff = -self.config.pipe_width;
        self.pipes.retain(|p| p.body.x >= cutoff);
        self.score_lines.retain(|l| l.body.x >= cutoff);

        if self.bird.body.vy > 0.0 {
            self.bird.tilt.retarget(self.config.dive_angle, self.config.tilt_secs);
        }
    }

    fn advance_spawn_timer(&mut self, dt: f64) {
        let interval = self.config.spawn_interval_secs;
        if interval <= 0.0 {
            return;
        }
        self.spawn_elapsed += dt;
        while self.spawn_elapsed >= interval {
            self.spawn_elapsed -= interval;
            self.spawn_pipe_pair();
        }
    }

    /// Centre of the next gap, kept `gap_margin` away from both world edges.
    fn pick_gap_center(&mut self) -> f64 {
        let half_gap = self.config.gap / 2.0;
        let min = (self.config.gap_margin + half_gap).ceil() as i64;
        let max = (self.height - self.config.gap_margin - half_gap).floor() as i64;
        if max < min {
            return (self.height / 2.0).round();
        }
        self.rng.between(min, max) as f64
    }

    pub fn spawn_pipe_pair(&mut self) {
        if !self.alive || self.paused {
            return;
        }
        let cfg = &self.config;
        let (gap, pipe_width, velocity, line_height) =
            (cfg.gap, cfg.pipe_width, cfg.pipe_velocity, cfg.score_line_height);
        let center = self.pick_gap_center();
        let x = self.width;

        let top_len = (center - gap / 2.0).max(0.0);
        let bottom_len = (self.height - (center + gap / 2.0)).max(0.0);

        self.pipes.push(Pipe {
            body: Body::new(x, top_len / 2.0, pipe_width, top_len).with_velocity_x(velocity),
            flipped: true,
        });
        self.score_lines.push(ScoreLine {
            body: Body::new(x, center, 1.0, line_height).with_velocity_x(velocity),
        });
        self.pipes.push(Pipe {
            body: Body::new(x, center + gap / 2.0 + bottom_len / 2.0, pipe_width, bottom_len)
                .with_velocity_x(velocity),
            flipped: false,
        });
    }

    fn on_hit(&mut self) {
        self.alive = false;
        self.bird.hit = true;
        self.bird.body.vx = 0.0;
        self.bird.body.vy = 0.0;
        self.physics_running = false;
        log::info!("game over, score {}", self.score);
        self.events.push(SceneEvent::GameLose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    fn scene() -> Scene {
        Scene::new(GameConfig::default(), Rng::new(1234))
    }

    fn started() -> Scene {
        let mut s = scene();
        s.start();
        s.drain_events();
        s
    }

    #[test]
    fn new_scene_is_frozen_until_start() {
        let mut s = scene();
        let y = s.bird.body.y;
        for _ in 0..200 {
            s.tick(DT);
        }
        assert_eq!(s.bird.body.y, y);
        assert!(s.pipes.is_empty());
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn start_emits_start_and_zero_score() {
        let mut s = scene();
        s.start();
        assert_eq!(
            s.drain_events(),
            vec![SceneEvent::GameStart, SceneEvent::ScoreUpdate(0)]
        );
        assert!(s.physics_running);
        let y = s.bird.body.y;
        s.tick(DT);
        assert!(s.bird.body.y > y);
    }

    #[test]
    fn flap_sets_upward_velocity_and_tilts_up() {
        let mut s = started();
        s.flap();
        assert_eq!(s.bird.body.vy, -550.0);
        assert_eq!(s.bird.tilt.target(), -20.0);
        for _ in 0..9 {
            s.tick(DT);
        }
        assert!(s.bird.angle() < 0.0);
    }

    #[test]
    fn falling_bird_tilts_down() {
        let mut s = started();
        s.tick(DT);
        assert!(s.bird.body.vy > 0.0);
        assert_eq!(s.bird.tilt.target(), 45.0);
    }

    #[test]
    fn pipes_spawn_every_interval_with_fixed_gap() {
        let mut s = started();
        s.tick(0.75);
        assert!(s.pipes.is_empty());
        s.tick(0.75);
        assert_eq!(s.pipes.len(), 2);
        assert_eq!(s.score_lines.len(), 1);

        let top = &s.pipes[0];
        let bottom = &s.pipes[1];
        assert!(top.flipped && !bottom.flipped);
        assert_eq!(top.body.x, s.width);
        assert_eq!(top.body.top(), 0.0);
        assert_eq!(bottom.body.bottom(), s.height);
        assert_eq!(bottom.body.top() - top.body.bottom(), 250.0);

        let center = s.score_lines[0].body.y;
        assert!(center >= 225.0 && center <= s.height - 225.0);
        assert_eq!(top.body.vx, -200.0);
    }

    #[test]
    fn gap_center_stays_in_range() {
        let mut s = started();
        for _ in 0..500 {
            let c = s.pick_gap_center();
            assert!((225.0..=575.0).contains(&c), "center {c}");
        }
    }

    #[test]
    fn tiny_world_uses_midpoint() {
        let mut s = started();
        s.resize(320.0, 300.0);
        assert_eq!(s.pick_gap_center(), 150.0);
    }

    #[test]
    fn no_spawn_while_paused_or_dead() {
        let mut s = scene();
        s.spawn_pipe_pair();
        assert!(s.pipes.is_empty());
        let mut s = started();
        s.alive = false;
        s.spawn_pipe_pair();
        assert!(s.pipes.is_empty());
    }

    #[test]
    fn pipes_scroll_left() {
        let mut s = started();
        s.spawn_pipe_pair();
        let x = s.pipes[0].body.x;
        s.tick(0.5);
        assert!((s.pipes[0].body.x - (x - 100.0)).abs() < 1e-9);
    }

    #[test]
    fn hitting_a_pipe_ends_the_game() {
        let mut s = started();
        let b = s.bird.body.clone();
        s.pipes.push(Pipe {
            body: Body::new(b.x + 40.0, b.y, 50.0, 400.0),
            flipped: false,
        });
        s.tick(DT);
        assert!(!s.alive);
        assert!(s.bird.hit);
        assert!(!s.physics_running);
        assert_eq!(s.bird.body.vy, 0.0);
        assert_eq!(s.drain_events(), vec![SceneEvent::GameLose]);

        let frozen = s.bird.body.clone();
        let pipe_x = s.pipes[0].body.x;
        s.tick(DT);
        assert_eq!(s.bird.body, frozen);
        assert_eq!(s.pipes[0].body.x, pipe_x);
        s.flap();
        assert_eq!(s.bird.body.vy, 0.0);
    }

    #[test]
    fn crossing_a_score_line_scores_once() {
        let mut s = started();
        let b = s.bird.body.clone();
        s.score_lines.push(ScoreLine {
            body: Body::new(b.x, b.y, 1.0, 600.0),
        });
        s.tick(DT);
        assert_eq!(s.score, 1);
        assert!(s.score_lines.is_empty());
        assert_eq!(s.drain_events(), vec![SceneEvent::ScoreUpdate(1)]);
        s.tick(DT);
        assert_eq!(s.score, 1);
    }

    #[test]
    fn hit_and_score_in_same_step_does_not_score() {
        let mut s = started();
        let b = s.bird.body.clone();
        s.pipes.push(Pipe {
            body: Body::new(b.x, b.y, 50.0, 50.0),
            flipped: false,
        });
        s.score_lines.push(ScoreLine {
            body: Body::new(b.x, b.y, 1.0, 600.0),
        });
        s.tick(DT);
        assert_eq!(s.score, 0);
        assert_eq!(s.drain_events(), vec![SceneEvent::GameLose]);
    }

    #[test]
    fn offscreen_pipes_are_removed() {
        let mut s = started();
        s.pipes.push(Pipe {
            body: Body::new(-49.0, 0.0, 50.0, 10.0).with_velocity_x(-200.0),
            flipped: true,
        });
        s.tick(DT);
        assert!(s.pipes.is_empty());
    }

    #[test]
    fn offscreen_score_lines_are_removed() {
        let mut s = started();
        s.score_lines.push(ScoreLine {
            body: Body::new(-49.0, 0.0, 50.0, 600.0).with_velocity_x(-200.0),
        });
        s.tick(DT);
        assert!(s.score_lines.is_empty());
        assert_eq!(s.score, 0);
    }

    #[test]
    fn ceiling_clamps_without_losing() {
        let mut s = started();
        for _ in 0..120 {
            s.flap();
            s.tick(DT);
            s.pipes.clear();
        }
        assert!(s.alive);
        assert_eq!(s.bird.body.top(), 0.0);
    }

    #[test]
    fn extreme_gap_config_still_spawns() {
        for margin in [-1e30, 1e30] {
            let cfg = GameConfig {
                gap_margin: margin,
                ..GameConfig::default()
            };
            let mut s = Scene::new(cfg, Rng::new(5));
            s.start();
            s.spawn_pipe_pair();
            assert_eq!(s.pipes.len(), 2);
            assert!(s.pick_gap_center().is_finite());
        }
    }

    #[test]
    fn floor_clamps_without_losing() {
        let mut s = started();
        for _ in 0..300 {
            s.tick(DT);
            s.pipes.clear();
        }
        assert!(s.alive);
        assert_eq!(s.bird.body.bottom(), s.height);
    }

    #[test]
    fn restart_after_loss_resets_field() {
        let mut s = started();
        s.score = 7;
        s.spawn_pipe_pair();
        s.on_hit();
        s.drain_events();
        s.restart();
        assert!(s.alive && s.physics_running && !s.bird.hit);
        assert_eq!(s.score, 0);
        assert!(s.pipes.is_empty() && s.score_lines.is_empty());
        assert_eq!(s.bird.body.y, 300.0);
        assert_eq!(
            s.drain_events(),
            vec![SceneEvent::GameStart, SceneEvent::ScoreUpdate(0)]
        );
    }

    #[test]
    fn same_seed_same_gaps() {
        let mut a = started();
        let mut b = started();
        for _ in 0..5 {
            a.spawn_pipe_pair();
            b.spawn_pipe_pair();
        }
        assert_eq!(a.pipes, b.pipes);
    }
}
