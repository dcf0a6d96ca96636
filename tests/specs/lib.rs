// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder library target for the CLI spec suite.
//!
//! The actual specs live in `cli/` and are wired into the roster CLI
//! crate as `[[test]]` targets so they run against the built binary.
