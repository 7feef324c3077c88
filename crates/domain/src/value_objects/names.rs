//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Long enough for their field (most player-facing names need 3 characters)
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for name fields
const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for description fields
const MAX_DESCRIPTION_LENGTH: usize = 5000;

/// Minimum length for character names, quest titles and skill names
pub const MIN_NAME_LENGTH: usize = 3;

/// Minimum length for quest and skill descriptions
pub const MIN_DESCRIPTION_LENGTH: usize = 10;

fn validated(raw: String, label: &str, min: usize) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    let chars = trimmed.chars().count();
    if chars == 0 {
        return Err(DomainError::validation(format!("{label} cannot be empty")));
    }
    if chars < min {
        return Err(DomainError::validation(format!(
            "{label} must be at least {min} characters"
        )));
    }
    if chars > MAX_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "{label} cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a free-text description with a minimum length.
///
/// Returns the trimmed text.
pub fn validate_description(
    raw: impl Into<String>,
    label: &str,
    min: usize,
) -> Result<String, DomainError> {
    let raw = raw.into();
    let trimmed = raw.trim();
    let chars = trimmed.chars().count();
    if chars < min {
        return Err(DomainError::validation(format!(
            "{label} must be at least {min} characters long"
        )));
    }
    if chars > MAX_DESCRIPTION_LENGTH {
        return Err(DomainError::validation(format!(
            "{label} cannot exceed {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}

macro_rules! name_impls {
    ($name:ident) => {
        impl $name {
            /// Returns the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(name: $name) -> String {
                name.0
            }
        }
    };
}

// ============================================================================
// CharacterName
// ============================================================================

/// A validated character name (>=3 chars, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the trimmed name is shorter than
    /// 3 characters or longer than 200.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validated(name.into(), "Name", MIN_NAME_LENGTH).map(Self)
    }
}

name_impls!(CharacterName);

// ============================================================================
// QuestTitle
// ============================================================================

/// A validated quest title (>=3 chars, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestTitle(String);

impl QuestTitle {
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        validated(title.into(), "Title", MIN_NAME_LENGTH).map(Self)
    }
}

name_impls!(QuestTitle);

// ============================================================================
// SkillName
// ============================================================================

/// A validated skill name (>=3 chars, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SkillName(String);

impl SkillName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validated(name.into(), "Name", MIN_NAME_LENGTH).map(Self)
    }
}

name_impls!(SkillName);

// ============================================================================
// ItemName
// ============================================================================

/// A validated item name (non-empty, <=200 chars, trimmed)
///
/// Item names are the stacking key of the inventory: two COMPLETED items
/// of one character never share a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validated(name.into(), "Item name", 1).map(Self)
    }
}

name_impls!(ItemName);
