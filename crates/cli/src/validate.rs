// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use roster_core::StudentInput;

use crate::error::{Error, Result};

// Input length limits
pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_COURSE_LENGTH: usize = 200;
pub const MAX_GRADE_LENGTH: usize = 16;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_PHONE_LENGTH: usize = 32;

// Accepted age range
pub const MIN_AGE: u8 = 5;
pub const MAX_AGE: u8 = 120;

/// Validate that a text field is non-empty after trimming and within limits.
fn validate_text(field: &'static str, value: &str, max: usize) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field });
    }
    if trimmed.len() > max {
        return Err(Error::FieldTooLong {
            field,
            actual: trimmed.len(),
            max,
        });
    }
    Ok(())
}

/// Validate a student name.
pub fn validate_name(name: &str) -> Result<()> {
    validate_text("Name", name, MAX_NAME_LENGTH)
}

/// Validate a course name.
pub fn validate_course(course: &str) -> Result<()> {
    validate_text("Course", course, MAX_COURSE_LENGTH)
}

/// Validate a letter grade.
pub fn validate_grade(grade: &str) -> Result<()> {
    validate_text("Grade", grade, MAX_GRADE_LENGTH)
}

/// Validate a phone number (free-form, non-empty).
pub fn validate_phone(phone: &str) -> Result<()> {
    validate_text("Phone", phone, MAX_PHONE_LENGTH)
}

/// Validate an age.
pub fn validate_age(age: u8) -> Result<()> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(Error::AgeOutOfRange(age));
    }
    Ok(())
}

/// Validate an email address: a non-empty user and domain part.
pub fn validate_email(email: &str) -> Result<()> {
    validate_text("Email", email, MAX_EMAIL_LENGTH)?;
    let Some((user, domain)) = email.split_once('@') else {
        return Err(Error::InvalidEmail(email.to_string()));
    };
    if user.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(Error::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Validate a full input payload before it reaches the store.
pub fn validate_input(input: &StudentInput) -> Result<()> {
    validate_name(&input.name)?;
    validate_age(input.age)?;
    validate_course(&input.course)?;
    validate_grade(&input.grade)?;
    validate_email(&input.email)?;
    validate_phone(&input.phone)?;
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
