//! Countdown counter for dhikr repetitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    target: u32,
    remaining: u32,
}

impl Counter {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            remaining: target,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    /// Count one repetition. Returns true when this press finished the count.
    pub fn press(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn reset(&mut self) {
        self.remaining = self.target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_done() {
        let mut c = Counter::new(3);
        assert!(!c.press());
        assert!(!c.press());
        assert!(c.press());
        assert!(c.is_done());
        assert!(!c.press());
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn zero_target_starts_done() {
        assert!(Counter::new(0).is_done());
    }

    #[test]
    fn reset_restores_target() {
        let mut c = Counter::new(33);
        c.press();
        c.reset();
        assert_eq!(c.remaining(), 33);
    }
}
