//! Character attribute points.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Points every new character distributes across the three attributes.
pub const INITIAL_ATTRIBUTE_TOTAL: u32 = 20;

/// Floor for each attribute at creation time.
pub const MIN_INITIAL_ATTRIBUTE: u32 = 5;

/// Persisted attribute state of a character.
///
/// `strength + intelligence + endurance + available_points` equals every
/// point ever granted to the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributePoints {
    pub strength: u32,
    pub intelligence: u32,
    pub endurance: u32,
    pub available_points: u32,
}

impl AttributePoints {
    /// Opening distribution for a freshly created character.
    ///
    /// Each attribute needs at least 5 points and the three must add up to
    /// exactly 20; nothing is left unallocated.
    pub fn initial(strength: u32, intelligence: u32, endurance: u32) -> Result<Self, DomainError> {
        for (label, value) in [
            ("strength", strength),
            ("intelligence", intelligence),
            ("endurance", endurance),
        ] {
            if value < MIN_INITIAL_ATTRIBUTE {
                return Err(DomainError::validation(format!(
                    "{label} must be at least {MIN_INITIAL_ATTRIBUTE}"
                )));
            }
        }
        let total = u64::from(strength) + u64::from(intelligence) + u64::from(endurance);
        if total != u64::from(INITIAL_ATTRIBUTE_TOTAL) {
            return Err(DomainError::validation("Invalid attribute point distribution"));
        }
        Ok(Self {
            strength,
            intelligence,
            endurance,
            available_points: 0,
        })
    }

    /// Sum of spent and unspent points.
    pub fn total(&self) -> u64 {
        u64::from(self.strength)
            + u64::from(self.intelligence)
            + u64::from(self.endurance)
            + u64::from(self.available_points)
    }
}

/// Desired post-allocation state as submitted by a player.
///
/// Signed on purpose: callers hand over raw numbers and the allocation
/// validator is the one that rejects negatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeProposal {
    pub strength: i64,
    pub intelligence: i64,
    pub endurance: i64,
    pub available_points: i64,
}
