/// Manages UI animation timing for the typing spinner.
pub struct AnimationClock {
    /// Frame counter that advances each tick (~100ms)
    frame_counter: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self { frame_counter: 0 }
    }

    /// Advance the animation clock by one frame
    pub fn tick(&mut self) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    /// Get current spinner character for the "agent is typing" indicator
    pub fn spinner_char(&self) -> char {
        const SPINNERS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
        // Divide by 2 to slow down the animation (every 2 frames = ~200ms at 10fps)
        SPINNERS[(self.frame_counter / 2) as usize % SPINNERS.len()]
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_advances_every_two_ticks() {
        let mut clock = AnimationClock::new();
        let first = clock.spinner_char();
        clock.tick();
        assert_eq!(clock.spinner_char(), first);
        clock.tick();
        assert_ne!(clock.spinner_char(), first);
    }
}
