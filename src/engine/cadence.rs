//! Fixed-cadence helper for driving loops.

/// Countdown that fires once every `interval` ticks.
///
/// Driving loops usually train on every input but step the mimic less often
/// so that it moves visibly slower than the player.
///
/// # Example
///
/// ```rust
/// use mimicry::engine::Cadence;
///
/// let mut cadence = Cadence::new(3);
/// let fired: Vec<bool> = (0..6).map(|_| cadence.tick()).collect();
/// assert_eq!(fired, vec![false, false, true, false, false, true]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cadence {
    interval: u32,
    remaining: u32,
}

impl Cadence {
    /// An interval of 0 is treated as 1 (fire on every tick).
    pub fn new(interval: u32) -> Self {
        let interval = interval.max(1);
        Self {
            interval,
            remaining: interval,
        }
    }

    /// Advance one tick; returns `true` when the engine should step.
    pub fn tick(&mut self) -> bool {
        self.remaining -= 1;
        if self.remaining == 0 {
            self.remaining = self.interval;
            true
        } else {
            false
        }
    }

    /// Restart the countdown.
    pub fn reset(&mut self) {
        self.remaining = self.interval;
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_every_interval_ticks() {
        let mut cadence = Cadence::new(10);
        let fired: Vec<usize> = (1..=35).filter(|_| cadence.tick()).collect();
        assert_eq!(fired.len(), 3);
    }

    #[test]
    fn fires_on_the_interval_tick() {
        let mut cadence = Cadence::new(4);
        let fired: Vec<usize> = (1..=12).filter(|_| cadence.tick()).collect();
        assert_eq!(fired, vec![4, 8, 12]);
    }

    #[test]
    fn zero_interval_fires_every_tick() {
        let mut cadence = Cadence::new(0);
        assert_eq!(cadence.interval(), 1);
        assert!(cadence.tick());
        assert!(cadence.tick());
    }

    #[test]
    fn reset_restarts_countdown() {
        let mut cadence = Cadence::new(3);
        cadence.tick();
        cadence.tick();
        cadence.reset();
        assert!(!cadence.tick());
        assert!(!cadence.tick());
        assert!(cadence.tick());
    }
}
