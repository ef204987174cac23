//! Bounded undo/redo over immutable mechanic snapshots.
//!
//! Every edit produces a new [`MechanicData`]; history keeps a list of them and a cursor. Undo and
//! redo only move the cursor, so nothing is ever mutated in place and the engine never observes a
//! half-applied edit.

use crate::MechanicData;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct HistoryEntry {
    /// What the edit did, e.g. "Move AoE".
    pub label: String,
    pub mechanic: Arc<MechanicData>,
}

#[derive(Clone, Debug)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    capacity: usize,
}

impl History {
    /// Starts a history at `initial`, keeping at most `capacity` snapshots (at least one).
    pub fn new(initial: impl Into<Arc<MechanicData>>, capacity: usize) -> Self {
        Self {
            entries: vec![HistoryEntry {
                label: "Initial".to_string(),
                mechanic: initial.into(),
            }],
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    pub fn current(&self) -> &Arc<MechanicData> {
        &self.entries[self.cursor].mechanic
    }

    pub fn current_label(&self) -> &str {
        &self.entries[self.cursor].label
    }

    /// Records a new snapshot after the current one.
    ///
    /// Redo entries past the cursor are dropped; the oldest entries are evicted beyond capacity.
    pub fn push(&mut self, label: &str, mechanic: impl Into<Arc<MechanicData>>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            label: label.to_string(),
            mechanic: mechanic.into(),
        });

        let overflow = self.entries.len().saturating_sub(self.capacity);
        if overflow > 0 {
            self.entries.drain(..overflow);
        }
        self.cursor = self.entries.len() - 1;

        log::debug!(
            "history push '{label}': {} entries, cursor {}",
            self.entries.len(),
            self.cursor
        );
    }

    pub fn undo(&mut self) -> Option<&Arc<MechanicData>> {
        if !self.can_undo() {
            return None;
        }
        log::debug!("history undo '{}'", self.entries[self.cursor].label);
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn redo(&mut self) -> Option<&Arc<MechanicData>> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        log::debug!("history redo '{}'", self.entries[self.cursor].label);
        Some(self.current())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a history holds at least its initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
