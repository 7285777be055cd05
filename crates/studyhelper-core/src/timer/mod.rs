mod engine;
mod settings;

pub use engine::{format_mm_ss, Phase, PomodoroEngine, TickHandle, MAX_FOCUS_SESSIONS};
pub use settings::PomodoroSettings;
