/// Axis-aligned body positioned by its centre, in world pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Body {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            vx: 0.0,
            vy: 0.0,
        }
    }

    pub fn with_velocity_x(mut self, vx: f64) -> Self {
        self.vx = vx;
        self
    }

    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }
    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }
    pub fn top(&self) -> f64 {
        self.y - self.height / 2.0
    }
    pub fn bottom(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Semi-implicit Euler: velocity first, then position.
    pub fn step(&mut self, dt: f64, accel_y: f64) {
        self.vy += accel_y * dt;
        self.x += self.vx * dt;
        self.y += self.vy * dt;
    }

    /// Strict overlap; touching edges do not count.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Keep the body inside `[0, width] x [0, height]`, zeroing velocity on the
    /// blocked axis.
    pub fn clamp_to(&mut self, width: f64, height: f64) {
        if self.top() < 0.0 {
            self.y = self.height / 2.0;
            self.vy = 0.0;
        } else if self.bottom() > height {
            self.y = height - self.height / 2.0;
            self.vy = 0.0;
        }
        if self.left() < 0.0 {
            self.x = self.width / 2.0;
            self.vx = 0.0;
        } else if self.right() > width {
            self.x = width - self.width / 2.0;
            self.vx = 0.0;
        }
    }
}
