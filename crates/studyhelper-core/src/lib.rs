//! # Student Helper Core Library
//!
//! Core logic for the Student Helper toolkit: semester grade averaging, a
//! Pomodoro timer, a habit tracker, a short quiz and a dhikr counter. The
//! `studyhelper` CLI is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Grades**: static curriculum catalog plus a pure engine that turns raw
//!   `input id -> text` maps into weighted semester averages
//! - **Timer**: a phase state machine driven by the caller, one `tick()` per
//!   second, guarded by tick handles so a stale ticker cannot advance it
//! - **Habits**: habit list with a per-day completion log, streaks and stats
//! - **Storage**: SQLite key-value snapshots and TOML configuration
//!
//! ## Key Components
//!
//! - [`compute_semester`]: semester average and pass/fail
//! - [`PomodoroEngine`]: Pomodoro state machine
//! - [`HabitTracker`]: habits and completion log
//! - [`QuizSession`]: shuffled single-pass quiz
//! - [`Database`]: persistent key-value store
//! - [`Config`]: application configuration

pub mod counter;
pub mod error;
pub mod events;
pub mod grades;
pub mod habits;
pub mod quiz;
pub mod storage;
pub mod timer;

pub use counter::Counter;
pub use error::{ConfigError, CoreError, GradeError, StorageError, ValidationError};
pub use events::Event;
pub use grades::{compute_semester, semester, MarkInputs, SemesterResult};
pub use habits::{Habit, HabitTracker};
pub use quiz::{Question, QuizSession};
pub use storage::{Config, Database, HabitStore, KeyValueStore, MarksStore, MemoryStore};
pub use timer::{Phase, PomodoroEngine, PomodoroSettings, TickHandle};
