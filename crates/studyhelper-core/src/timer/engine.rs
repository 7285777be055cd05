//! Pomodoro phase state machine.
//!
//! The engine does not use internal threads. The caller owns the single
//! one-second ticker and passes the [`TickHandle`] it was given by `start()`
//! to every `tick()`.
//!
//! ## Phase Transitions
//!
//! ```text
//! Focus -> ShortBreak -> Focus -> ... -> LongBreak (every 4th focus) -> Focus
//! Focus (5th completion) -> Done
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = PomodoroEngine::new(PomodoroSettings::default());
//! engine.start();
//! while let Some(handle) = engine.tick_handle() {
//!     sleep(1s);
//!     engine.tick(handle); // Returns Some(Event) when a phase ends
//! }
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::settings::PomodoroSettings;
use crate::events::Event;

/// Focus completions after which the cycle is finished.
pub const MAX_FOCUS_SESSIONS: u32 = 5;

/// A long break follows every this-many focus sessions.
const LONG_BREAK_EVERY: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Focus,
    ShortBreak,
    LongBreak,
    Done,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Focus => "Focus",
            Phase::ShortBreak => "Short Rest",
            Phase::LongBreak => "Long Rest",
            Phase::Done => "Done",
        }
    }
}

/// Identifies the one ticker allowed to drive the countdown.
///
/// Issuing a new handle invalidates every earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

#[derive(Debug, Clone)]
pub struct PomodoroEngine {
    settings: PomodoroSettings,
    phase: Phase,
    focus_sessions_completed: u32,
    remaining_secs: u64,
    handle: Option<TickHandle>,
    /// Source of handle ids; never reused.
    handle_seq: u64,
}

impl PomodoroEngine {
    /// Create a stopped engine at the start of the first focus phase.
    pub fn new(settings: PomodoroSettings) -> Self {
        let settings = settings.normalized();
        Self {
            remaining_secs: settings.focus_secs(),
            settings,
            phase: Phase::Focus,
            focus_sessions_completed: 0,
            handle: None,
            handle_seq: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn focus_sessions_completed(&self) -> u32 {
        self.focus_sessions_completed
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn settings(&self) -> &PomodoroSettings {
        &self.settings
    }

    /// Handle of the ticker currently allowed to drive the countdown.
    pub fn tick_handle(&self) -> Option<TickHandle> {
        self.handle
    }

    /// Configured length of a phase in seconds.
    pub fn phase_duration_secs(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Focus => self.settings.focus_secs(),
            Phase::ShortBreak => self.settings.short_break_secs(),
            Phase::LongBreak => self.settings.long_break_secs(),
            Phase::Done => 0,
        }
    }

    /// Short status text for headers.
    pub fn badge(&self) -> String {
        if self.phase == Phase::Done {
            format!("Finished ({MAX_FOCUS_SESSIONS} focus)")
        } else {
            self.phase.label().to_string()
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            focus_sessions_completed: self.focus_sessions_completed,
            remaining_secs: self.remaining_secs,
            total_secs: self.phase_duration_secs(self.phase),
            running: self.is_running(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start (or restart) the countdown and return the new ticker handle.
    ///
    /// Any earlier handle is invalidated first. Starting in `Done` is a no-op.
    pub fn start(&mut self) -> Option<TickHandle> {
        if self.phase == Phase::Done {
            return None;
        }
        if self.remaining_secs == 0 {
            self.remaining_secs = self.phase_duration_secs(self.phase);
        }
        self.handle = None;
        self.handle_seq += 1;
        let handle = TickHandle(self.handle_seq);
        self.handle = Some(handle);
        tracing::debug!(phase = ?self.phase, remaining = self.remaining_secs, "timer started");
        Some(handle)
    }

    pub fn stop(&mut self) -> Option<Event> {
        self.handle.take()?;
        Some(Event::TimerStopped {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Start when stopped, stop when running.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.is_running() {
            return self.stop();
        }
        self.start()?;
        Some(Event::TimerStarted {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// End the current phase immediately. Ignored once `Done`.
    pub fn skip(&mut self) -> Option<Event> {
        if self.phase == Phase::Done {
            return None;
        }
        self.remaining_secs = 0;
        self.advance()
    }

    /// Back to the first focus phase with counters zeroed.
    pub fn reset(&mut self) -> Option<Event> {
        self.handle = None;
        self.phase = Phase::Focus;
        self.focus_sessions_completed = 0;
        self.remaining_secs = self.settings.focus_secs();
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// One second elapsed on the ticker identified by `handle`.
    ///
    /// Ticks from stale handles, or while stopped, are ignored. Returns
    /// `Some(Event::PhaseChanged)` when the countdown reaches zero.
    pub fn tick(&mut self, handle: TickHandle) -> Option<Event> {
        if self.handle != Some(handle) {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }
        self.advance()
    }

    /// Store new settings; they shape the next phase computation.
    ///
    /// A stopped timer that has not begun its first focus phase also shows
    /// the new focus duration right away. A countdown in progress is kept.
    pub fn apply_settings(&mut self, settings: PomodoroSettings) {
        let untouched = !self.is_running()
            && self.phase == Phase::Focus
            && self.focus_sessions_completed == 0
            && self.remaining_secs == self.settings.focus_secs();

        self.settings = settings.normalized();
        if untouched {
            self.remaining_secs = self.settings.focus_secs();
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn advance(&mut self) -> Option<Event> {
        let from = self.phase;
        match from {
            Phase::Focus => {
                self.focus_sessions_completed += 1;
                if self.focus_sessions_completed >= MAX_FOCUS_SESSIONS {
                    self.phase = Phase::Done;
                    self.remaining_secs = 0;
                    self.handle = None;
                    tracing::debug!("pomodoro cycle finished");
                    return Some(self.phase_changed(from));
                }
                self.phase = if self.focus_sessions_completed % LONG_BREAK_EVERY == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                };
            }
            Phase::ShortBreak | Phase::LongBreak => self.phase = Phase::Focus,
            Phase::Done => return None,
        }
        self.remaining_secs = self.phase_duration_secs(self.phase);

        if self.settings.auto_advance {
            self.start();
        } else {
            self.handle = None;
        }
        tracing::debug!(from = ?from, to = ?self.phase, "phase changed");
        Some(self.phase_changed(from))
    }

    fn phase_changed(&self, from: Phase) -> Event {
        Event::PhaseChanged {
            from,
            to: self.phase,
            focus_sessions_completed: self.focus_sessions_completed,
            cue: self.settings.sound_enabled,
            running: self.is_running(),
            at: Utc::now(),
        }
    }
}

impl Default for PomodoroEngine {
    fn default() -> Self {
        Self::new(PomodoroSettings::default())
    }
}

/// Format seconds as `MM:SS`.
pub fn format_mm_ss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
