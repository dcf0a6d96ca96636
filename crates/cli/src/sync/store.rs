// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote store abstraction for student records.
//!
//! Provides a trait-based store layer that enables:
//! - Real HTTP requests against the configured backend for production
//! - Mock stores for unit testing
//!
//! Every operation carries the storage mode as a query parameter; the
//! client has no other behavioral branch on the mode.

use std::future::Future;
use std::pin::Pin;

use roster_core::{StorageMode, StudentInput, StudentRecord};

/// Error type for store operations.
///
/// The synchronization controller treats every variant identically:
/// "remote unavailable". The distinction exists for logs only.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Request never reached the backend.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Backend answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// Response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store trait for record CRUD against a backend namespace.
///
/// This trait abstracts over the actual transport mechanism, allowing
/// for easy testing with mock implementations.
pub trait RecordStore: Send + Sync {
    /// Fetch all records in the given mode's namespace.
    fn list(
        &self,
        mode: StorageMode,
    ) -> Pin<Box<dyn Future<Output = StoreResult<Vec<StudentRecord>>> + Send + '_>>;

    /// Create a record; the backend assigns the id.
    fn create(
        &self,
        mode: StorageMode,
        input: StudentInput,
    ) -> Pin<Box<dyn Future<Output = StoreResult<StudentRecord>> + Send + '_>>;

    /// Replace the record with the given id.
    fn update(
        &self,
        mode: StorageMode,
        id: i64,
        input: StudentInput,
    ) -> Pin<Box<dyn Future<Output = StoreResult<StudentRecord>> + Send + '_>>;

    /// Delete the record with the given id. No body is required.
    fn delete(
        &self,
        mode: StorageMode,
        id: i64,
    ) -> Pin<Box<dyn Future<Output = StoreResult<()>> + Send + '_>>;
}

/// HTTP store implementation using reqwest.
pub struct HttpStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStore {
    /// Create a new HTTP store against the given base address.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        HttpStore {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub(crate) fn students_url(&self) -> String {
        format!("{}/students", self.base_url)
    }

    pub(crate) fn student_url(&self, id: i64) -> String {
        format!("{}/students/{}", self.base_url, id)
    }
}

/// Map a non-success status to a store error.
fn check_status(resp: reqwest::Response) -> StoreResult<reqwest::Response> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(StoreError::Status(resp.status().as_u16()))
    }
}

impl RecordStore for HttpStore {
    fn list(
        &self,
        mode: StorageMode,
    ) -> Pin<Box<dyn Future<Output = StoreResult<Vec<StudentRecord>>> + Send + '_>> {
        Box::pin(async move {
            let resp = self
                .client
                .get(self.students_url())
                .query(&[("mode", mode.as_str())])
                .send()
                .await
                .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;
            let resp = check_status(resp)?;
            resp.json::<Vec<StudentRecord>>()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))
        })
    }

    fn create(
        &self,
        mode: StorageMode,
        input: StudentInput,
    ) -> Pin<Box<dyn Future<Output = StoreResult<StudentRecord>> + Send + '_>> {
        Box::pin(async move {
            let resp = self
                .client
                .post(self.students_url())
                .query(&[("mode", mode.as_str())])
                .json(&input)
                .send()
                .await
                .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;
            let resp = check_status(resp)?;
            resp.json::<StudentRecord>()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))
        })
    }

    fn update(
        &self,
        mode: StorageMode,
        id: i64,
        input: StudentInput,
    ) -> Pin<Box<dyn Future<Output = StoreResult<StudentRecord>> + Send + '_>> {
        Box::pin(async move {
            let resp = self
                .client
                .put(self.student_url(id))
                .query(&[("mode", mode.as_str())])
                .json(&input)
                .send()
                .await
                .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;
            let resp = check_status(resp)?;
            resp.json::<StudentRecord>()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))
        })
    }

    fn delete(
        &self,
        mode: StorageMode,
        id: i64,
    ) -> Pin<Box<dyn Future<Output = StoreResult<()>> + Send + '_>> {
        Box::pin(async move {
            let resp = self
                .client
                .delete(self.student_url(id))
                .query(&[("mode", mode.as_str())])
                .send()
                .await
                .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;
            check_status(resp)?;
            Ok(())
        })
    }
}
