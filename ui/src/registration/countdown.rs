/// Seconds left before the post-registration redirect
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownState {
    remaining: u32,
}

impl CountdownState {
    pub fn new(start: u32) -> Self {
        Self { remaining: start }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Removes one second and returns what is left; stays at zero once elapsed
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn is_elapsed(&self) -> bool {
        self.remaining == 0
    }
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_from_five() {
        let mut countdown = CountdownState::default();
        assert_eq!(countdown.remaining(), 5);

        let ticks: Vec<u32> = (0..5).map(|_| countdown.tick()).collect();
        assert_eq!(ticks, vec![4, 3, 2, 1, 0]);
        assert!(countdown.is_elapsed());
    }

    #[test]
    fn test_tick_saturates_at_zero() {
        let mut countdown = CountdownState::new(1);
        assert_eq!(countdown.tick(), 0);
        assert_eq!(countdown.tick(), 0);
        assert!(countdown.is_elapsed());
    }
}
