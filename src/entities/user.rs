// 🪪 User Identity - shared shape of every participant
//
// A participant is an id plus a display name. The name is validated exactly
// once, when the participant is built: there is no way to hold a Doctor,
// Patient or Admin whose name failed the check.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Letters, with single spaces between words. Applied after trimming.
// Stricter than the old `[A-Za-z|\s]+` class: doubled spaces, tabs and `|` are rejected.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+( [A-Za-z]+)*$").unwrap());

// ============================================================================
// VALIDATION ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must contain only alphabets and single spaces between words.")]
    InvalidName { input: String },
}

// ============================================================================
// PERSON NAME
// ============================================================================

/// Trimmed, validated display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Trim `raw` and check it against the name pattern
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();

        if NAME_PATTERN.is_match(trimmed) {
            Ok(PersonName(trimmed.to_string()))
        } else {
            Err(ValidationError::InvalidName {
                input: raw.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// ROLE
// ============================================================================

/// Which kind of participant this is.
///
/// Descriptive only: nothing in the crate checks a role before letting a
/// caller invoke an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Admin,
    Doctor,
    Patient,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Doctor => "Doctor",
            Role::Patient => "Patient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PARTICIPANT
// ============================================================================

/// Common behaviour of doctors, patients and admins
pub trait Participant {
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn role(&self) -> Role;

    /// Role-specific one-line profile
    fn profile(&self) -> String {
        format!("{} ID: {}, Name: {}", self.role(), self.id(), self.name())
    }
}

// ============================================================================
// TESTS
// ============================================================================
