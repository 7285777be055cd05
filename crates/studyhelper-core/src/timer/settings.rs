use serde::{Deserialize, Serialize};

/// User-adjustable Pomodoro durations and behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroSettings {
    /// Focus duration in minutes.
    pub focus_min: u32,
    pub short_break_min: u32,
    pub long_break_min: u32,
    /// Start the next phase as soon as the current one ends.
    pub auto_advance: bool,
    pub sound_enabled: bool,
}

impl PomodoroSettings {
    /// Floor every duration at one minute.
    pub fn normalized(self) -> Self {
        Self {
            focus_min: self.focus_min.max(1),
            short_break_min: self.short_break_min.max(1),
            long_break_min: self.long_break_min.max(1),
            ..self
        }
    }

    pub fn focus_secs(&self) -> u64 {
        u64::from(self.focus_min).saturating_mul(60)
    }

    pub fn short_break_secs(&self) -> u64 {
        u64::from(self.short_break_min).saturating_mul(60)
    }

    pub fn long_break_secs(&self) -> u64 {
        u64::from(self.long_break_min).saturating_mul(60)
    }
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            focus_min: 25,
            short_break_min: 5,
            long_break_min: 15,
            auto_advance: true,
            sound_enabled: true,
        }
    }
}
