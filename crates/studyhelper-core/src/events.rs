use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Phase;

/// Every Pomodoro state change produces an Event.
/// The CLI renders them; tests assert on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerStopped {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A phase ended, either by countdown or skip.
    PhaseChanged {
        from: Phase,
        to: Phase,
        focus_sessions_completed: u32,
        /// Whether an audible cue should be played.
        cue: bool,
        /// Whether the next countdown started on its own.
        running: bool,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        focus_sessions_completed: u32,
        remaining_secs: u64,
        total_secs: u64,
        running: bool,
        at: DateTime<Utc>,
    },
}
