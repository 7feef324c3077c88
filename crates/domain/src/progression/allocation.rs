//! Attribute point reallocation rules.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value_objects::{AttributePoints, AttributeProposal};

/// One of the three spendable attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Strength,
    Intelligence,
    Endurance,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strength => write!(f, "strength"),
            Self::Intelligence => write!(f, "intelligence"),
            Self::Endurance => write!(f, "endurance"),
        }
    }
}

/// Which allocation rule a proposal broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("Cannot decrease {attribute} below its current value ({baseline} -> {proposed})")]
    AttributeDecreased {
        attribute: AttributeKind,
        baseline: u32,
        proposed: i64,
    },

    #[error("Available points cannot be negative ({0})")]
    NegativeAvailablePoints(i64),

    #[error("{attribute} value {proposed} is out of range")]
    OutOfRange {
        attribute: AttributeKind,
        proposed: i64,
    },

    #[error(
        "Points calculation error: {spent} spent + {remaining} remaining != {available} available"
    )]
    PointsNotConserved {
        spent: i64,
        remaining: i64,
        available: u32,
    },
}

/// Accepted reallocation: per-attribute increase and the state to persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationDelta {
    pub strength: u32,
    pub intelligence: u32,
    pub endurance: u32,
    pub resulting: AttributePoints,
}

impl AllocationDelta {
    /// Points moved out of `available_points` by this allocation.
    pub fn spent(&self) -> u64 {
        u64::from(self.strength) + u64::from(self.intelligence) + u64::from(self.endurance)
    }
}

fn raised(
    attribute: AttributeKind,
    baseline: u32,
    proposed: i64,
) -> Result<(u32, u32), AllocationError> {
    if proposed < i64::from(baseline) {
        return Err(AllocationError::AttributeDecreased {
            attribute,
            baseline,
            proposed,
        });
    }
    let value =
        u32::try_from(proposed).map_err(|_| AllocationError::OutOfRange { attribute, proposed })?;
    Ok((value, value - baseline))
}

/// Check a proposed attribute state against the persisted one.
///
/// Rules, checked in this order:
/// 1. no attribute drops below its current value,
/// 2. `available_points` stays non-negative,
/// 3. every point taken from `available_points` lands in exactly one
///    attribute.
pub fn validate_reallocation(
    current: &AttributePoints,
    proposed: &AttributeProposal,
) -> Result<AllocationDelta, AllocationError> {
    let (strength, strength_delta) =
        raised(AttributeKind::Strength, current.strength, proposed.strength)?;
    let (intelligence, intelligence_delta) = raised(
        AttributeKind::Intelligence,
        current.intelligence,
        proposed.intelligence,
    )?;
    let (endurance, endurance_delta) =
        raised(AttributeKind::Endurance, current.endurance, proposed.endurance)?;

    if proposed.available_points < 0 {
        return Err(AllocationError::NegativeAvailablePoints(
            proposed.available_points,
        ));
    }

    let spent =
        i64::from(strength_delta) + i64::from(intelligence_delta) + i64::from(endurance_delta);
    if spent + proposed.available_points != i64::from(current.available_points) {
        return Err(AllocationError::PointsNotConserved {
            spent,
            remaining: proposed.available_points,
            available: current.available_points,
        });
    }

    // Conservation bounds the remainder by the current pool, so it fits.
    let available_points = u32::try_from(proposed.available_points).map_err(|_| {
        AllocationError::NegativeAvailablePoints(proposed.available_points)
    })?;

    Ok(AllocationDelta {
        strength: strength_delta,
        intelligence: intelligence_delta,
        endurance: endurance_delta,
        resulting: AttributePoints {
            strength,
            intelligence,
            endurance,
            available_points,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> AttributePoints {
        AttributePoints {
            strength: 8,
            intelligence: 6,
            endurance: 6,
            available_points: 5,
        }
    }

    fn proposal(s: i64, i: i64, e: i64, a: i64) -> AttributeProposal {
        AttributeProposal {
            strength: s,
            intelligence: i,
            endurance: e,
            available_points: a,
        }
    }

    #[test]
    fn spending_all_points_is_accepted() {
        let delta = validate_reallocation(&current(), &proposal(10, 7, 8, 0)).unwrap();

        assert_eq!(delta.strength, 2);
        assert_eq!(delta.intelligence, 1);
        assert_eq!(delta.endurance, 2);
        assert_eq!(delta.spent(), 5);
        assert_eq!(delta.resulting.available_points, 0);
        assert_eq!(delta.resulting.total(), current().total());
    }

    #[test]
    fn partial_spend_is_accepted() {
        let delta = validate_reallocation(&current(), &proposal(9, 6, 6, 4)).unwrap();
        assert_eq!(delta.spent(), 1);
        assert_eq!(delta.resulting.available_points, 4);
    }

    #[test]
    fn unchanged_state_is_a_valid_noop() {
        let delta = validate_reallocation(&current(), &proposal(8, 6, 6, 5)).unwrap();
        assert_eq!(delta.spent(), 0);
    }

    #[test]
    fn lowering_strength_is_rejected() {
        // total stays at 25, but strength may not be reclaimed
        let err = validate_reallocation(&current(), &proposal(7, 7, 6, 5)).unwrap_err();
        assert_eq!(
            err,
            AllocationError::AttributeDecreased {
                attribute: AttributeKind::Strength,
                baseline: 8,
                proposed: 7,
            }
        );
    }

    #[test]
    fn lowering_endurance_is_rejected() {
        let err = validate_reallocation(&current(), &proposal(8, 6, 5, 6)).unwrap_err();
        assert!(matches!(
            err,
            AllocationError::AttributeDecreased {
                attribute: AttributeKind::Endurance,
                ..
            }
        ));
    }

    #[test]
    fn negative_remainder_is_rejected() {
        let err = validate_reallocation(&current(), &proposal(14, 6, 6, -1)).unwrap_err();
        assert_eq!(err, AllocationError::NegativeAvailablePoints(-1));
    }

    #[test]
    fn created_points_are_rejected() {
        let err = validate_reallocation(&current(), &proposal(10, 6, 6, 5)).unwrap_err();
        assert_eq!(
            err,
            AllocationError::PointsNotConserved {
                spent: 2,
                remaining: 5,
                available: 5,
            }
        );
    }

    #[test]
    fn destroyed_points_are_rejected() {
        let err = validate_reallocation(&current(), &proposal(9, 6, 6, 0)).unwrap_err();
        assert!(matches!(err, AllocationError::PointsNotConserved { .. }));
    }

    #[test]
    fn absurd_values_are_out_of_range() {
        let err =
            validate_reallocation(&current(), &proposal(i64::from(u32::MAX) + 1, 6, 6, 0))
                .unwrap_err();
        assert!(matches!(err, AllocationError::OutOfRange { .. }));
    }
}
