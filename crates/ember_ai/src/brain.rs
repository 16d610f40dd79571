//! Shared per-strategy state.

/// Frames per second of the table data's frame-based delays.
pub const FRAMES_PER_SECOND: f32 = 25.0;

/// Clock and think timer every strategy embeds.
///
/// Strategies call [`Brain::update`] first on every update and only run their
/// own decision logic when it reports that a think is due.
#[derive(Debug, Clone, PartialEq)]
pub struct Brain {
    elapsed: f32,
    think_interval: f32,
    next_think: f32,
    thinks: u64,
}

impl Brain {
    /// A brain that thinks every `think_frames` frames. Zero or negative
    /// thinks on every update.
    #[must_use]
    pub fn new(think_frames: i32) -> Self {
        Self {
            elapsed: 0.0,
            think_interval: think_frames.max(0) as f32 / FRAMES_PER_SECOND,
            next_think: 0.0,
            thinks: 0,
        }
    }

    /// Advance the clock. Returns `true` if a think is due.
    pub fn update(&mut self, delta: f32) -> bool {
        self.elapsed += delta;
        if self.elapsed < self.next_think {
            return false;
        }
        self.next_think = self.elapsed + self.think_interval;
        self.thinks += 1;
        true
    }

    /// Seconds of simulated time seen so far.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Number of thinks so far.
    #[must_use]
    pub fn thinks(&self) -> u64 {
        self.thinks
    }
}

impl Default for Brain {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_thinks_every_update() {
        let mut brain = Brain::new(0);
        assert!(brain.update(0.04));
        assert!(brain.update(0.04));
        assert_eq!(brain.thinks(), 2);
    }

    #[test]
    fn test_interval_in_frames() {
        // 5 frames at 25 fps is 0.2 s.
        let mut brain = Brain::new(5);
        assert!(brain.update(0.15));
        assert!(!brain.update(0.15));
        assert!(brain.update(0.15));
        assert_eq!(brain.thinks(), 2);
        assert!((brain.elapsed() - 0.45).abs() < 1e-6);
    }
}
