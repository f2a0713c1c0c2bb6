// Turns requestAnimationFrame timestamps into fixed simulation steps

const MAX_STEPS_PER_FRAME: u32 = 10;

#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Fixed delta time per step, in seconds.
    dt: f64,
    accumulator: f64,
    /// Last RAF timestamp in milliseconds.
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(dt: f64) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            last_ms: None,
        }
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Feed a RAF timestamp; returns how many fixed steps to run. The first
    /// frame only records the timestamp.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let Some(last) = self.last_ms.replace(now_ms) else {
            return 0;
        };
        let frame_secs = ((now_ms - last) / 1000.0).max(0.0);
        self.accumulate(frame_secs)
    }

    pub fn accumulate(&mut self, frame_secs: f64) -> u32 {
        self.accumulator += frame_secs;
        // cap so a backgrounded tab doesn't replay minutes of simulation
        self.accumulator = self.accumulator.min(self.dt * MAX_STEPS_PER_FRAME as f64);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f64 * self.dt;
        steps
    }
}
