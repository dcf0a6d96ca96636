// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for terminal color utilities.

use roster_core::Notice;

use super::*;

#[test]
fn grades_map_to_bands_by_first_letter() {
    assert_eq!(grade_code("A"), codes::SUCCESS);
    assert_eq!(grade_code("A+"), codes::SUCCESS);
    assert_eq!(grade_code("B-"), codes::GRADE_B);
    assert_eq!(grade_code("C"), codes::WARNING);
    assert_eq!(grade_code("D"), codes::GRADE_LOW);
    assert_eq!(grade_code("F"), codes::GRADE_LOW);
    assert_eq!(grade_code(""), codes::GRADE_LOW);
}

#[test]
fn notice_rendering_keeps_level_and_message() {
    // Without a TTY the output is plain text.
    let rendered = notice(&Notice::warning("backend unreachable"));
    assert!(rendered.contains("warning"));
    assert!(rendered.contains("backend unreachable"));
}
