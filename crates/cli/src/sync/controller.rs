// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronization controller for the record collection.
//!
//! A [`Session`] holds the single in-memory collection and mutates it
//! through the remote store, substituting local behavior whenever a
//! remote call does not succeed:
//!
//! - load failure: the mode's seed set replaces the collection
//! - create failure: a record with a locally generated id is appended
//! - update failure: the input is merged over the existing record
//! - delete failure: the record is removed anyway
//!
//! Every outcome is surfaced as a [`Notice`]; nothing is fatal and no
//! error state persists across operations.

use roster_core::{seed_records, Notice, StorageMode, StudentInput, StudentRecord};
use tracing::{debug, warn};

use super::store::{RecordStore, StoreResult};

/// Synchronization controller: the state holder behind every command.
pub struct Session<S: RecordStore> {
    /// Store backing this session.
    store: S,
    /// Currently selected storage mode.
    mode: StorageMode,
    /// The in-memory record collection.
    records: Vec<StudentRecord>,
    /// True while a load is outstanding.
    loading: bool,
    /// Notices accumulated since the last drain.
    notices: Vec<Notice>,
}

impl<S: RecordStore> Session<S> {
    /// Create a session with an empty collection.
    pub fn new(store: S, mode: StorageMode) -> Self {
        Session {
            store,
            mode,
            records: Vec::new(),
            loading: false,
            notices: Vec::new(),
        }
    }

    /// The currently selected storage mode.
    pub fn mode(&self) -> StorageMode {
        self.mode
    }

    /// The current record collection.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// True while a load is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Drain accumulated notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Load the current mode's records, replacing the collection.
    pub async fn reload(&mut self) {
        let requested = self.mode;
        self.loading = true;
        let outcome = self.store.list(requested).await;
        self.apply_list_outcome(requested, outcome);
    }

    /// Apply a list outcome tagged with the mode it was requested for.
    ///
    /// A response for a mode that is no longer current is discarded so
    /// that a late-resolving load cannot overwrite a newer mode's
    /// records.
    pub(crate) fn apply_list_outcome(
        &mut self,
        requested: StorageMode,
        outcome: StoreResult<Vec<StudentRecord>>,
    ) {
        if requested != self.mode {
            debug!(requested = %requested, current = %self.mode, "discarding stale list response");
            return;
        }
        self.loading = false;
        match outcome {
            Ok(records) => {
                self.records = records;
            }
            Err(e) => {
                warn!(error = %e, mode = %requested, "list failed, substituting demo data");
                self.records = seed_records(requested);
                self.notify(Notice::warning(format!(
                    "backend unreachable, showing demo data for {} mode",
                    requested
                )));
            }
        }
    }

    /// Create a record, appending it to the collection.
    pub async fn create(&mut self, input: StudentInput) {
        match self.store.create(self.mode, input.clone()).await {
            Ok(record) => {
                self.records.push(record);
                self.notify(Notice::success("student added"));
            }
            Err(e) => {
                warn!(error = %e, mode = %self.mode, "create failed, adding locally");
                let id = self.next_fallback_id();
                self.records.push(StudentRecord::from_input(id, &input));
                self.notify(Notice::success(format!(
                    "student added locally ({} mode)",
                    self.mode
                )));
            }
        }
    }

    /// Update the record with the given id.
    ///
    /// An id absent from the collection changes nothing; the notice is
    /// emitted either way.
    pub async fn update(&mut self, id: i64, input: StudentInput) {
        match self.store.update(self.mode, id, input.clone()).await {
            Ok(record) => {
                self.replace_record(record);
                self.notify(Notice::success("student updated"));
            }
            Err(e) => {
                warn!(error = %e, mode = %self.mode, "update failed, merging locally");
                if let Some(existing) = self.records.iter().find(|r| r.id == id).cloned() {
                    self.replace_record(existing.apply(&input));
                }
                self.notify(Notice::success(format!(
                    "student updated locally ({} mode)",
                    self.mode
                )));
            }
        }
    }

    /// Delete the record with the given id.
    ///
    /// Failure is not distinguished from success: the record is removed
    /// from the collection either way, and deleting an absent id is a
    /// no-op.
    pub async fn delete(&mut self, id: i64) {
        match self.store.delete(self.mode, id).await {
            Ok(()) => {
                self.notify(Notice::success("student deleted"));
            }
            Err(e) => {
                warn!(error = %e, mode = %self.mode, "delete failed, removing locally");
                self.notify(Notice::success(format!(
                    "student deleted locally ({} mode)",
                    self.mode
                )));
            }
        }
        self.records.retain(|r| r.id != id);
    }

    /// Switch to another storage mode and reload.
    ///
    /// The previous mode's records are discarded, never merged.
    pub async fn switch_mode(&mut self, mode: StorageMode) {
        self.mode = mode;
        self.notify(Notice::info(format!("switched to {} mode", mode)));
        self.reload().await;
    }

    fn replace_record(&mut self, record: StudentRecord) {
        if let Some(slot) = self.records.iter_mut().find(|r| r.id == record.id) {
            *slot = record;
        }
    }

    /// Next locally generated id: one past the largest id in the
    /// collection, unique for the session.
    fn next_fallback_id(&self) -> i64 {
        self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }
}
