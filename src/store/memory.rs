//! In-process review store.
use super::ReviewStore;
use crate::error::Result;
use crate::models::{ReviewLogEntry, ReviewState};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Default)]
pub struct MemoryStore {
    states: BTreeMap<i64, ReviewState>,
    excluded: BTreeSet<i64>,
    log: Vec<ReviewLogEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every log entry in the order it was appended.
    pub fn log(&self) -> &[ReviewLogEntry] {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl ReviewStore for MemoryStore {
    fn state(&self, item_id: i64) -> Result<Option<ReviewState>> {
        Ok(self.states.get(&item_id).cloned())
    }

    fn insert_state(&mut self, item_id: i64, state: &ReviewState) -> Result<bool> {
        if self.states.contains_key(&item_id) {
            return Ok(false);
        }
        self.states.insert(item_id, state.clone());
        Ok(true)
    }

    fn save_state_and_log(
        &mut self,
        item_id: i64,
        state: &ReviewState,
        entry: &ReviewLogEntry,
    ) -> Result<()> {
        self.states.insert(item_id, state.clone());
        self.log.push(entry.clone());
        Ok(())
    }

    fn set_excluded(&mut self, item_id: i64, excluded: bool) -> Result<()> {
        if excluded {
            self.excluded.insert(item_id);
        } else {
            self.excluded.remove(&item_id);
        }
        Ok(())
    }

    fn due_items(&self, now_ms: i64, limit: usize) -> Result<Vec<i64>> {
        let mut due: Vec<(i64, i64)> = self
            .states
            .iter()
            .filter(|(id, state)| state.is_due(now_ms) && !self.excluded.contains(*id))
            .map(|(&id, state)| (state.due_at, id))
            .collect();
        due.sort_unstable();

        Ok(due.into_iter().take(limit).map(|(_, id)| id).collect())
    }

    fn log_for(&self, item_id: i64) -> Result<Vec<ReviewLogEntry>> {
        Ok(self
            .log
            .iter()
            .filter(|entry| entry.item_id == item_id)
            .cloned()
            .collect())
    }
}
