mod habit;
mod tracker;

pub use habit::{random_color, Habit, DEFAULT_CATEGORY, PALETTE};
pub use tracker::{CompletionLog, HabitStats, HabitTracker, Progress, GRAPH_DAYS, STREAK_WINDOW_DAYS};
