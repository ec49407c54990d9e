// Rust guideline compliant 2026-10-17

//! Shared test directories.

#![allow(dead_code)]

use bizgroups_core::{BusinessGroup, Directory, FetchError, ResourceType};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Builds business groups from `(id, label)` pairs.
pub fn groups(pairs: &[(&str, &str)]) -> Vec<BusinessGroup> {
    pairs
        .iter()
        .map(|(id, label)| BusinessGroup::new(*id, *label))
        .collect()
}

/// In-memory directory that replays queued snapshots.
///
/// Each fetch pops the next queued snapshot; the last one is repeated once
/// the queue is down to a single entry. Fetch calls are counted.
pub struct ScriptedDirectory {
    snapshots: RefCell<VecDeque<Vec<BusinessGroup>>>,
    fetches: Cell<usize>,
}

impl ScriptedDirectory {
    /// Serves the same snapshot on every fetch.
    pub fn fixed(snapshot: Vec<BusinessGroup>) -> Self {
        Self::sequence(vec![snapshot])
    }

    /// Serves `snapshots` in order, repeating the last.
    pub fn sequence(snapshots: Vec<Vec<BusinessGroup>>) -> Self {
        Self {
            snapshots: RefCell::new(snapshots.into()),
            fetches: Cell::new(0),
        }
    }

    /// Returns the number of fetches performed so far.
    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }
}

impl Directory for ScriptedDirectory {
    type Item = BusinessGroup;

    fn resource_type(&self) -> ResourceType {
        ResourceType::BusinessGroup
    }

    fn fetch(&self) -> Result<Vec<BusinessGroup>, FetchError> {
        self.fetches.set(self.fetches.get() + 1);
        let mut snapshots = self.snapshots.borrow_mut();
        if snapshots.len() > 1 {
            return Ok(snapshots.pop_front().unwrap_or_default());
        }
        Ok(snapshots.front().cloned().unwrap_or_default())
    }
}

/// Directory whose fetches always fail with a decode error.
pub struct BrokenDirectory;

impl Directory for BrokenDirectory {
    type Item = BusinessGroup;

    fn resource_type(&self) -> ResourceType {
        ResourceType::BusinessGroup
    }

    fn fetch(&self) -> Result<Vec<BusinessGroup>, FetchError> {
        let err = serde_json::from_str::<Vec<BusinessGroup>>("{").unwrap_err();
        Err(FetchError::Decode(err))
    }
}
