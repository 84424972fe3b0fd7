//! Frame counting for fixed-step simulations

/// Counts simulated frames.
///
/// Simulations driven by a host frame clock advance exactly one step per
/// frame, so elapsed time is measured in frames rather than seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock {
    frame: u64,
}

impl FrameClock {
    /// Create a clock at frame zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame and return the new frame number
    pub fn tick(&mut self) -> u64 {
        self.frame += 1;
        self.frame
    }

    /// Number of frames ticked so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_counts_frames() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.tick(), 1);
        assert_eq!(clock.tick(), 2);
        assert_eq!(clock.frame(), 2);
    }
}
