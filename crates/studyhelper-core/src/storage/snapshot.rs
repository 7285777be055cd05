//! Whole-snapshot persistence for marks, notes and habits.
//!
//! Every operation is a read-modify-write of one JSON document. Failed
//! writes are logged and dropped; a corrupt document reads as empty.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::KeyValueStore;
use crate::error::StorageError;
use crate::grades::MarkInputs;
use crate::habits::HabitTracker;

/// Key holding the marks and notes snapshot.
pub const STATE_KEY: &str = "studyhelper_state_v1";
/// Key holding the habit tracker snapshot.
pub const HABITS_KEY: &str = "habit_tracker_data";

/// Raw mark inputs keyed by input id, plus free-text notes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub marks: BTreeMap<String, String>,
    #[serde(default)]
    pub notes: String,
}

fn read_snapshot<S, T>(store: &S, key: &str) -> T
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned + Default,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "snapshot read failed, starting empty");
            return T::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            let err = StorageError::Corrupt {
                key: key.to_string(),
                message: e.to_string(),
            };
            tracing::warn!(error = %err, "ignoring stored snapshot");
            T::default()
        }
    }
}

fn write_snapshot<S, T>(store: &S, key: &str, value: &T)
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let result = serde_json::to_string(value)
        .map_err(|e| StorageError::Query(e.to_string()))
        .and_then(|json| store.set(key, &json));
    match result {
        Ok(()) => tracing::debug!(key, "snapshot saved"),
        Err(e) => tracing::warn!(key, error = %e, "snapshot write dropped"),
    }
}

/// Marks and notes, stored under [`STATE_KEY`].
pub struct MarksStore<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> MarksStore<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> PersistedState {
        read_snapshot(self.store, STATE_KEY)
    }

    pub fn save(&self, state: &PersistedState) {
        write_snapshot(self.store, STATE_KEY, state);
    }

    /// Raw inputs for the grade engine.
    pub fn marks(&self) -> MarkInputs {
        self.load().marks
    }

    /// Record one raw input exactly as typed.
    pub fn persist_input(&self, id: &str, raw: &str) {
        let mut state = self.load();
        state.marks.insert(id.to_string(), raw.to_string());
        self.save(&state);
    }

    /// Merge a batch of inputs over the stored ones.
    pub fn restore(&self, inputs: &MarkInputs) {
        let mut state = self.load();
        state
            .marks
            .extend(inputs.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.save(&state);
    }

    /// Drop every mark whose id starts with `semester`. Returns how many went.
    pub fn clear_semester(&self, semester: &str) -> usize {
        let mut state = self.load();
        let before = state.marks.len();
        state.marks.retain(|id, _| !id.starts_with(semester));
        let removed = before - state.marks.len();
        self.save(&state);
        removed
    }

    pub fn notes(&self) -> String {
        self.load().notes
    }

    pub fn set_notes(&self, notes: &str) {
        let mut state = self.load();
        state.notes = notes.to_string();
        self.save(&state);
    }
}

/// Habit list and completion log, stored under [`HABITS_KEY`].
pub struct HabitStore<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> HabitStore<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> HabitTracker {
        read_snapshot(self.store, HABITS_KEY)
    }

    pub fn save(&self, tracker: &HabitTracker) {
        write_snapshot(self.store, HABITS_KEY, tracker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn empty_store_loads_default_state() {
        let store = MemoryStore::new();
        assert_eq!(MarksStore::new(&store).load(), PersistedState::default());
        assert!(HabitStore::new(&store).load().habits.is_empty());
    }

    #[test]
    fn persist_input_keeps_raw_text() {
        let store = MemoryStore::new();
        let marks = MarksStore::new(&store);
        marks.persist_input("s1an1td", " 12.5 ");
        marks.persist_input("s1an1ex", "abc");
        let loaded = marks.marks();
        assert_eq!(loaded["s1an1td"], " 12.5 ");
        assert_eq!(loaded["s1an1ex"], "abc");
    }

    #[test]
    fn snapshot_uses_documented_shape() {
        let store = MemoryStore::new();
        let marks = MarksStore::new(&store);
        marks.persist_input("s2an2td", "10");
        marks.set_notes("revise proofs");
        let raw = store.get(STATE_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["marks"]["s2an2td"], "10");
        assert_eq!(json["notes"], "revise proofs");
    }

    #[test]
    fn corrupt_snapshot_loads_empty() {
        let store = MemoryStore::new();
        store.set(STATE_KEY, "{not json").unwrap();
        store.set(HABITS_KEY, "42").unwrap();
        assert_eq!(MarksStore::new(&store).load(), PersistedState::default());
        assert_eq!(HabitStore::new(&store).load(), HabitTracker::default());
    }

    #[test]
    fn missing_fields_default() {
        let store = MemoryStore::new();
        store.set(STATE_KEY, r#"{"notes":"only notes"}"#).unwrap();
        let state = MarksStore::new(&store).load();
        assert!(state.marks.is_empty());
        assert_eq!(state.notes, "only notes");
    }

    #[test]
    fn clear_semester_matches_prefix_only() {
        let store = MemoryStore::new();
        let marks = MarksStore::new(&store);
        marks.persist_input("s1an1td", "10");
        marks.persist_input("s1an1ex", "11");
        marks.persist_input("s2an2td", "12");
        marks.set_notes("keep me");
        assert_eq!(marks.clear_semester("s1"), 2);
        let state = marks.load();
        assert_eq!(state.marks.len(), 1);
        assert!(state.marks.contains_key("s2an2td"));
        assert_eq!(state.notes, "keep me");
    }

    #[test]
    fn restore_merges_over_existing() {
        let store = MemoryStore::new();
        let marks = MarksStore::new(&store);
        marks.persist_input("s1an1td", "1");
        let mut batch = MarkInputs::new();
        batch.insert("s1an1td".into(), "15".into());
        batch.insert("s1an1ex".into(), "16".into());
        marks.restore(&batch);
        assert_eq!(marks.marks(), batch);
    }

    #[test]
    fn failed_write_is_swallowed() {
        let store = MemoryStore::new();
        let marks = MarksStore::new(&store);
        marks.persist_input("s1an1td", "10");
        store.fail_writes(true);
        marks.persist_input("s1an1td", "18");
        marks.set_notes("lost");
        let state = marks.load();
        assert_eq!(state.marks["s1an1td"], "10");
        assert!(state.notes.is_empty());
    }
}
