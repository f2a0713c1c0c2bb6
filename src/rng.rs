//! Seedable pseudo-random number generator (xorshift64).
//! The scene owns one so pipe gaps are reproducible from a seed.

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Seed from the browser's `Math.random`.
    pub fn from_entropy() -> Self {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        Self::new(seed)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Integer in `[min, max]`, both ends inclusive. Returns `min` when the
    /// range is inverted.
    pub fn between(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        // widen so extreme bounds can't overflow the span
        let span = (max as i128 - min as i128 + 1) as u128;
        (min as i128 + (self.next_u64() as u128 % span) as i128) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut a = Rng::new(42);
        let mut b = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(a.between(0, 1000), b.between(0, 1000));
        }
    }

    #[test]
    fn between_is_inclusive_and_bounded() {
        let mut rng = Rng::new(7);
        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..2000 {
            let v = rng.between(3, 6);
            assert!((3..=6).contains(&v));
            saw_min |= v == 3;
            saw_max |= v == 6;
        }
        assert!(saw_min && saw_max);
    }

    #[test]
    fn extreme_bounds_stay_in_range() {
        let mut rng = Rng::new(99);
        for _ in 0..100 {
            let v = rng.between(i64::MIN, i64::MAX);
            assert!((i64::MIN..=i64::MAX).contains(&v));
            let w = rng.between(-5, i64::MAX);
            assert!(w >= -5);
        }
    }

    #[test]
    fn inverted_range_returns_min() {
        let mut rng = Rng::new(0);
        assert_eq!(rng.between(10, 2), 10);
        assert_eq!(rng.between(5, 5), 5);
    }
}
