//! Habit list with its per-day completion log.
//!
//! Both halves are serialized together as one snapshot:
//!
//! ```text
//! { "habits": [ ... ], "completions": { "2026-10-16": { "<id>": 2 } } }
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::habit::{random_color, Habit, DEFAULT_CATEGORY};
use crate::error::ValidationError;

/// Hard stop for the streak walk.
pub const STREAK_WINDOW_DAYS: u32 = 365;

/// Days shown in the contribution graph.
pub const GRAPH_DAYS: u32 = 91;

/// Date -> habit id -> completion count.
pub type CompletionLog = BTreeMap<NaiveDate, BTreeMap<String, u32>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HabitStats {
    pub total_habits: usize,
    pub completed_today: usize,
    pub best_streak: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub count: u32,
    pub goal: u32,
    /// 0.0 ..= 100.0
    pub percent: f64,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.count >= self.goal
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HabitTracker {
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub completions: CompletionLog,
}

impl HabitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn habit(&self, id: &str) -> Result<&Habit, ValidationError> {
        self.habits
            .iter()
            .find(|h| h.id == id)
            .ok_or_else(|| ValidationError::UnknownHabit(id.to_string()))
    }

    /// Add a habit created at `now`.
    ///
    /// The name is trimmed and must not be empty. A zero goal becomes 1 and a
    /// blank category becomes "General".
    pub fn add_habit<R: Rng + ?Sized>(
        &mut self,
        name: &str,
        goal: u32,
        category: &str,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<&Habit, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "name".into(),
                message: "Please enter a habit name".into(),
            });
        }
        let category = match category.trim() {
            "" => DEFAULT_CATEGORY,
            c => c,
        };

        let habit = Habit {
            id: self.next_id(now),
            name: name.to_string(),
            goal: goal.max(1),
            category: category.to_string(),
            color: random_color(rng),
            created_at: now,
        };
        tracing::debug!(id = %habit.id, name = %habit.name, "habit added");
        self.habits.push(habit);
        Ok(&self.habits[self.habits.len() - 1])
    }

    /// Remove a habit and every completion entry it left behind.
    pub fn delete_habit(&mut self, id: &str) -> Result<Habit, ValidationError> {
        let pos = self
            .habits
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| ValidationError::UnknownHabit(id.to_string()))?;
        let removed = self.habits.remove(pos);

        for counts in self.completions.values_mut() {
            counts.remove(id);
        }
        self.completions.retain(|_, counts| !counts.is_empty());
        Ok(removed)
    }

    /// Count one completion for today.
    ///
    /// Going past the goal wraps the counter back to zero. Returns the new count.
    pub fn record_progress(&mut self, id: &str, today: NaiveDate) -> Result<u32, ValidationError> {
        let goal = self.habit(id)?.goal;
        let count = self
            .completions
            .entry(today)
            .or_default()
            .entry(id.to_string())
            .or_insert(0);

        *count += 1;
        if *count > goal {
            *count = 0;
        }
        Ok(*count)
    }

    pub fn count_on(&self, id: &str, date: NaiveDate) -> u32 {
        self.completions
            .get(&date)
            .and_then(|counts| counts.get(id))
            .copied()
            .unwrap_or(0)
    }

    pub fn progress(&self, id: &str, today: NaiveDate) -> Result<Progress, ValidationError> {
        let goal = self.habit(id)?.goal;
        let count = self.count_on(id, today);
        Ok(Progress {
            count,
            goal,
            percent: (f64::from(count) / f64::from(goal) * 100.0).min(100.0),
        })
    }

    /// Consecutive days, ending today, on which the goal was met.
    ///
    /// An unfinished today neither counts nor breaks the streak.
    pub fn streak(&self, id: &str, today: NaiveDate) -> Result<u32, ValidationError> {
        self.streak_within(id, today, STREAK_WINDOW_DAYS)
    }

    /// [`HabitTracker::streak`] with an explicit walk limit in days.
    pub fn streak_within(
        &self,
        id: &str,
        today: NaiveDate,
        window_days: u32,
    ) -> Result<u32, ValidationError> {
        let goal = self.habit(id)?.goal;
        let mut streak = 0;

        for back in 0..window_days {
            let date = today - Duration::days(i64::from(back));
            if self.count_on(id, date) >= goal {
                streak += 1;
            } else if back > 0 {
                break;
            }
        }
        Ok(streak)
    }

    pub fn stats(&self, today: NaiveDate) -> HabitStats {
        self.stats_within(today, STREAK_WINDOW_DAYS)
    }

    /// [`HabitTracker::stats`] with streaks walked at most `window_days` back.
    pub fn stats_within(&self, today: NaiveDate, window_days: u32) -> HabitStats {
        let mut completed_today = 0;
        let mut best_streak = 0;

        for habit in &self.habits {
            if self.count_on(&habit.id, today) >= habit.goal {
                completed_today += 1;
            }
            let streak = self.streak_within(&habit.id, today, window_days).unwrap_or(0);
            best_streak = best_streak.max(streak);
        }

        HabitStats {
            total_habits: self.habits.len(),
            completed_today,
            best_streak,
        }
    }

    /// Intensity levels (0..=4) for the last [`GRAPH_DAYS`] days, oldest first.
    pub fn contribution_levels(
        &self,
        id: &str,
        today: NaiveDate,
    ) -> Result<Vec<(NaiveDate, u8)>, ValidationError> {
        let goal = self.habit(id)?.goal;
        let levels = (0..GRAPH_DAYS)
            .rev()
            .map(|back| {
                let date = today - Duration::days(i64::from(back));
                let ratio = f64::from(self.count_on(id, date)) / f64::from(goal);
                (date, (ratio * 4.0).floor().min(4.0) as u8)
            })
            .collect();
        Ok(levels)
    }

    /// Habits grouped by category, categories in first-seen order.
    pub fn grouped_by_category(&self) -> Vec<(&str, Vec<&Habit>)> {
        let mut groups: Vec<(&str, Vec<&Habit>)> = Vec::new();
        for habit in &self.habits {
            let category = habit.category.as_str();
            match groups.iter_mut().find(|(c, _)| *c == category) {
                Some((_, list)) => list.push(habit),
                None => groups.push((category, vec![habit])),
            }
        }
        groups
    }

    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut millis = now.timestamp_millis();
        while self.habits.iter().any(|h| h.id == millis.to_string()) {
            millis += 1;
        }
        millis.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn tracker_with(goal: u32) -> (HabitTracker, String) {
        let mut tracker = HabitTracker::new();
        let mut rng = Pcg64::seed_from_u64(1);
        let id = tracker
            .add_habit("Read", goal, "", Utc::now(), &mut rng)
            .unwrap()
            .id
            .clone();
        (tracker, id)
    }

    fn set(tracker: &mut HabitTracker, id: &str, date: NaiveDate, count: u32) {
        tracker
            .completions
            .entry(date)
            .or_default()
            .insert(id.to_string(), count);
    }

    #[test]
    fn add_habit_applies_defaults() {
        let (tracker, id) = tracker_with(0);
        let habit = tracker.habit(&id).unwrap();
        assert_eq!(habit.goal, 1);
        assert_eq!(habit.category, "General");
    }

    #[test]
    fn add_habit_rejects_blank_name() {
        let mut tracker = HabitTracker::new();
        let mut rng = Pcg64::seed_from_u64(1);
        assert!(tracker.add_habit("   ", 1, "", Utc::now(), &mut rng).is_err());
    }

    #[test]
    fn ids_stay_unique_within_same_millisecond() {
        let mut tracker = HabitTracker::new();
        let mut rng = Pcg64::seed_from_u64(1);
        let now = Utc::now();
        let a = tracker.add_habit("A", 1, "", now, &mut rng).unwrap().id.clone();
        let b = tracker.add_habit("B", 1, "", now, &mut rng).unwrap().id.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn record_progress_wraps_past_goal() {
        let (mut tracker, id) = tracker_with(2);
        let today = day("2026-10-16");
        assert_eq!(tracker.record_progress(&id, today).unwrap(), 1);
        assert_eq!(tracker.record_progress(&id, today).unwrap(), 2);
        assert_eq!(tracker.record_progress(&id, today).unwrap(), 0);
    }

    #[test]
    fn record_progress_unknown_habit() {
        let (mut tracker, _) = tracker_with(1);
        assert_eq!(
            tracker.record_progress("nope", day("2026-10-16")).unwrap_err(),
            ValidationError::UnknownHabit("nope".into())
        );
    }

    #[test]
    fn streak_skips_unfinished_today() {
        let (mut tracker, id) = tracker_with(2);
        let today = day("2026-10-16");
        set(&mut tracker, &id, today, 1);
        set(&mut tracker, &id, day("2026-10-15"), 2);
        set(&mut tracker, &id, day("2026-10-14"), 3);
        assert_eq!(tracker.streak(&id, today).unwrap(), 2);
    }

    #[test]
    fn streak_counts_finished_today() {
        let (mut tracker, id) = tracker_with(1);
        let today = day("2026-10-16");
        set(&mut tracker, &id, today, 1);
        set(&mut tracker, &id, day("2026-10-15"), 1);
        assert_eq!(tracker.streak(&id, today).unwrap(), 2);
    }

    #[test]
    fn streak_breaks_on_missed_day() {
        let (mut tracker, id) = tracker_with(1);
        let today = day("2026-10-16");
        set(&mut tracker, &id, day("2026-10-15"), 1);
        set(&mut tracker, &id, day("2026-10-13"), 1);
        assert_eq!(tracker.streak(&id, today).unwrap(), 1);
    }

    #[test]
    fn streak_walk_is_bounded() {
        let (mut tracker, id) = tracker_with(1);
        let today = day("2026-10-16");
        for back in 0..400 {
            set(&mut tracker, &id, today - Duration::days(back), 1);
        }
        assert_eq!(tracker.streak(&id, today).unwrap(), STREAK_WINDOW_DAYS);
        assert_eq!(tracker.streak_within(&id, today, 30).unwrap(), 30);
    }

    #[test]
    fn stats_share_the_streak_window() {
        let (mut tracker, id) = tracker_with(1);
        let today = day("2026-10-16");
        for back in 0..40 {
            set(&mut tracker, &id, today - Duration::days(back), 1);
        }
        assert_eq!(tracker.stats(today).best_streak, 40);
        assert_eq!(tracker.stats_within(today, 30).best_streak, 30);
        assert_eq!(
            tracker.stats_within(today, 30).best_streak,
            tracker.streak_within(&id, today, 30).unwrap()
        );
    }

    #[test]
    fn delete_purges_completions() {
        let (mut tracker, id) = tracker_with(1);
        let mut rng = Pcg64::seed_from_u64(2);
        let other = tracker
            .add_habit("Run", 1, "Sport", Utc::now(), &mut rng)
            .unwrap()
            .id
            .clone();
        set(&mut tracker, &id, day("2026-10-15"), 1);
        set(&mut tracker, &id, day("2026-10-16"), 1);
        set(&mut tracker, &other, day("2026-10-16"), 1);

        tracker.delete_habit(&id).unwrap();

        assert!(tracker.habit(&id).is_err());
        assert!(tracker.completions.values().all(|c| !c.contains_key(&id)));
        assert!(!tracker.completions.contains_key(&day("2026-10-15")));
        assert_eq!(tracker.count_on(&other, day("2026-10-16")), 1);
    }

    #[test]
    fn progress_is_capped() {
        let (mut tracker, id) = tracker_with(2);
        let today = day("2026-10-16");
        set(&mut tracker, &id, today, 5);
        let p = tracker.progress(&id, today).unwrap();
        assert_eq!(p.percent, 100.0);
        assert!(p.is_complete());
    }

    #[test]
    fn stats_summarize_today() {
        let (mut tracker, id) = tracker_with(1);
        let today = day("2026-10-16");
        set(&mut tracker, &id, today, 1);
        set(&mut tracker, &id, day("2026-10-15"), 1);
        let stats = tracker.stats(today);
        assert_eq!(stats.total_habits, 1);
        assert_eq!(stats.completed_today, 1);
        assert_eq!(stats.best_streak, 2);
    }

    #[test]
    fn contribution_levels_cover_window() {
        let (mut tracker, id) = tracker_with(4);
        let today = day("2026-10-16");
        set(&mut tracker, &id, today, 2);
        let levels = tracker.contribution_levels(&id, today).unwrap();
        assert_eq!(levels.len(), GRAPH_DAYS as usize);
        assert_eq!(levels.last(), Some(&(today, 2)));
        assert_eq!(levels[0].0, today - Duration::days(90));
        assert_eq!(levels[0].1, 0);
    }

    #[test]
    fn grouping_keeps_first_seen_order() {
        let mut tracker = HabitTracker::new();
        let mut rng = Pcg64::seed_from_u64(3);
        let now = Utc::now();
        tracker.add_habit("A", 1, "Health", now, &mut rng).unwrap();
        tracker.add_habit("B", 1, "Study", now, &mut rng).unwrap();
        tracker.add_habit("C", 1, "Health", now, &mut rng).unwrap();
        let groups = tracker.grouped_by_category();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Health");
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn snapshot_uses_iso_dates() {
        let (mut tracker, id) = tracker_with(1);
        set(&mut tracker, &id, day("2026-10-16"), 1);
        let json = serde_json::to_value(&tracker).unwrap();
        assert_eq!(json["completions"]["2026-10-16"][&id], 1);
        assert!(json["habits"][0]["createdAt"].is_string());
    }
}
