// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync and command tests.

#![allow(clippy::unwrap_used)]

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use roster_core::{StorageMode, StudentInput, StudentRecord};

use super::store::{RecordStore, StoreError, StoreResult};

/// Canonical input payload shared across tests.
pub fn sample_input() -> StudentInput {
    StudentInput {
        name: "X".to_string(),
        age: 20,
        course: "Y".to_string(),
        grade: "A".to_string(),
        email: "x@y.com".to_string(),
        phone: "000".to_string(),
    }
}

/// A minimal record with the given id and name.
pub fn record(id: i64, name: &str) -> StudentRecord {
    StudentRecord {
        id,
        name: name.to_string(),
        age: 21,
        course: "Testing".to_string(),
        grade: "B".to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "+1-555-0000".to_string(),
    }
}

struct MockInner {
    online: bool,
    primary: Vec<StudentRecord>,
    alternate: Vec<StudentRecord>,
    next_id: i64,
}

impl MockInner {
    fn records_mut(&mut self, mode: StorageMode) -> &mut Vec<StudentRecord> {
        match mode {
            StorageMode::Primary => &mut self.primary,
            StorageMode::Alternate => &mut self.alternate,
        }
    }
}

/// A scriptable in-memory store.
///
/// Clones share state, so tests can keep a handle and flip the store
/// online/offline while a session owns another clone.
#[derive(Clone)]
pub struct MockStore {
    inner: Arc<Mutex<MockInner>>,
}

impl MockStore {
    fn with_state(online: bool) -> Self {
        MockStore {
            inner: Arc::new(Mutex::new(MockInner {
                online,
                primary: Vec::new(),
                alternate: Vec::new(),
                next_id: 100,
            })),
        }
    }

    /// A reachable store with empty namespaces.
    pub fn online() -> Self {
        Self::with_state(true)
    }

    /// An unreachable store: every operation fails.
    pub fn offline() -> Self {
        Self::with_state(false)
    }

    /// Flip reachability.
    pub fn set_online(&self, online: bool) {
        self.inner.lock().unwrap().online = online;
    }

    /// Replace a namespace's records.
    pub fn put_records(&self, mode: StorageMode, records: Vec<StudentRecord>) {
        let mut inner = self.inner.lock().unwrap();
        let max_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        inner.next_id = inner.next_id.max(max_id + 1);
        *inner.records_mut(mode) = records;
    }

    /// The store-side view of a namespace.
    pub fn records(&self, mode: StorageMode) -> Vec<StudentRecord> {
        self.inner.lock().unwrap().records_mut(mode).clone()
    }
}

impl RecordStore for MockStore {
    fn list(
        &self,
        mode: StorageMode,
    ) -> Pin<Box<dyn Future<Output = StoreResult<Vec<StudentRecord>>> + Send + '_>> {
        let inner = self.inner.clone();
        Box::pin(async move {
            let mut inner = inner.lock().unwrap();
            if !inner.online {
                return Err(StoreError::ConnectionFailed("connection refused".to_string()));
            }
            Ok(inner.records_mut(mode).clone())
        })
    }

    fn create(
        &self,
        mode: StorageMode,
        input: StudentInput,
    ) -> Pin<Box<dyn Future<Output = StoreResult<StudentRecord>> + Send + '_>> {
        let inner = self.inner.clone();
        Box::pin(async move {
            let mut inner = inner.lock().unwrap();
            if !inner.online {
                return Err(StoreError::ConnectionFailed("connection refused".to_string()));
            }
            let id = inner.next_id;
            inner.next_id += 1;
            let record = StudentRecord::from_input(id, &input);
            inner.records_mut(mode).push(record.clone());
            Ok(record)
        })
    }

    fn update(
        &self,
        mode: StorageMode,
        id: i64,
        input: StudentInput,
    ) -> Pin<Box<dyn Future<Output = StoreResult<StudentRecord>> + Send + '_>> {
        let inner = self.inner.clone();
        Box::pin(async move {
            let mut inner = inner.lock().unwrap();
            if !inner.online {
                return Err(StoreError::ConnectionFailed("connection refused".to_string()));
            }
            let records = inner.records_mut(mode);
            match records.iter_mut().find(|r| r.id == id) {
                Some(slot) => {
                    *slot = StudentRecord::from_input(id, &input);
                    Ok(slot.clone())
                }
                None => Err(StoreError::Status(404)),
            }
        })
    }

    fn delete(
        &self,
        mode: StorageMode,
        id: i64,
    ) -> Pin<Box<dyn Future<Output = StoreResult<()>> + Send + '_>> {
        let inner = self.inner.clone();
        Box::pin(async move {
            let mut inner = inner.lock().unwrap();
            if !inner.online {
                return Err(StoreError::ConnectionFailed("connection refused".to_string()));
            }
            inner.records_mut(mode).retain(|r| r.id != id);
            Ok(())
        })
    }
}
