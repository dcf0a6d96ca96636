// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! roster-core - student record types for the roster sync client.
//!
//! This crate provides the fundamental data types shared by the `roster`
//! CLI and its tests:
//!
//! - [`StudentRecord`] / [`StudentInput`] - the record shape and the
//!   subset of fields accepted on create/update
//! - [`StorageMode`] - the backend namespace selector
//! - [`seed_records`] - fixed demo data used when the remote store is
//!   unreachable
//! - [`Notice`] - leveled user-facing messages (the terminal rendition
//!   of a toast)
//! - [`Error`] - error types for all operations

pub mod error;
pub mod notice;
pub mod record;
pub mod seed;

pub use error::{Error, Result};
pub use notice::{Notice, NoticeLevel};
pub use record::{StorageMode, StudentInput, StudentRecord};
pub use seed::seed_records;
