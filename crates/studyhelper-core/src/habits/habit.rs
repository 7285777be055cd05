use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Colors a new habit is tagged with.
pub const PALETTE: [&str; 7] = [
    "#6ea8fe", "#31d0aa", "#ffd166", "#ff6b6b", "#9bb0d0", "#a78bfa", "#fb923c",
];

pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Derived from the creation time in epoch milliseconds.
    pub id: String,
    pub name: String,
    /// Completions per day needed to count the day.
    pub goal: u32,
    #[serde(default = "default_category")]
    pub category: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Pick a palette color at random.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    PALETTE
        .choose(rng)
        .copied()
        .unwrap_or(PALETTE[0])
        .to_string()
}
