//! Linear value tween, used for the bird's tilt.
//!
//! Usage:
//!   let mut tilt = Tween::idle(0.0);
//!   tilt.retarget(-20.0, 0.15);
//!   tilt.tick(dt);
//!   let angle = tilt.value();

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    /// Duration in seconds.
    duration: f64,
    elapsed: f64,
}

impl Tween {
    /// A finished tween resting at `value`.
    pub fn idle(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            duration: 0.0,
            elapsed: 0.0,
        }
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn value(&self) -> f64 {
        self.from + (self.to - self.from) * self.progress()
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Start a new tween from the current value towards `to`. A tween already
    /// heading to `to` keeps running.
    pub fn retarget(&mut self, to: f64, duration: f64) {
        if self.target() == to && !self.is_complete() {
            return;
        }
        self.from = self.value();
        self.to = to;
        self.duration = duration;
        self.elapsed = 0.0;
    }

    pub fn tick(&mut self, dt: f64) {
        if !self.is_complete() {
            self.elapsed += dt;
        }
    }
}
