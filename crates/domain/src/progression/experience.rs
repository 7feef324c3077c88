//! Experience and level arithmetic.
//!
//! Pure transform from a progress snapshot plus an experience grant to the
//! next snapshot. Persisting the result is the caller's business.
//!
//! # Thresholds
//!
//! `max_exp_needed` is the experience total at which the next level is
//! reached. Each level-up multiplies it by 2.5 (rounded down). A value of
//! `0` is a sentinel: the character sits at its level ceiling, experience
//! keeps accruing and no further level-up is ever computed.

use serde::{Deserialize, Serialize};

use super::settings::LevelUpPolicy;

/// Unallocated attribute points granted per level gained.
pub const AVAILABLE_POINTS_PER_LEVEL: u32 = 5;

/// Threshold growth factor 2.5 expressed as 5/2 so floor() stays exact.
pub const LEVEL_THRESHOLD_GROWTH_NUMERATOR: u64 = 5;
pub const LEVEL_THRESHOLD_GROWTH_DENOMINATOR: u64 = 2;

/// The slice of a character that leveling reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub level: u32,
    pub experience: u64,
    pub available_points: u32,
    pub max_exp_needed: u64,
    pub max_level_reached: u32,
}

impl ProgressSnapshot {
    /// Whether the experience cap has been removed for good.
    pub fn is_uncapped(&self) -> bool {
        self.max_exp_needed == 0
    }
}

/// Result of [`apply_experience`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceOutcome {
    pub progress: ProgressSnapshot,
    pub levels_gained: u32,
}

impl ExperienceOutcome {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

fn next_threshold(current: u64) -> u64 {
    current.saturating_mul(LEVEL_THRESHOLD_GROWTH_NUMERATOR) / LEVEL_THRESHOLD_GROWTH_DENOMINATOR
}

/// Add `experience_gained` to `snapshot` and compute level-ups.
///
/// With [`LevelUpPolicy::Single`] at most one level is gained per call even
/// when the new total crosses several thresholds; [`LevelUpPolicy::Exhaustive`]
/// keeps leveling until the total falls below the threshold or the ceiling
/// is hit.
pub fn apply_experience(
    snapshot: ProgressSnapshot,
    experience_gained: u64,
    policy: LevelUpPolicy,
) -> ExperienceOutcome {
    let mut next = snapshot;
    next.experience = snapshot.experience.saturating_add(experience_gained);
    let mut levels_gained = 0;

    while !next.is_uncapped() && next.experience >= next.max_exp_needed {
        if next.level >= next.max_level_reached {
            next.max_exp_needed = 0;
            break;
        }

        next.level += 1;
        next.available_points = next
            .available_points
            .saturating_add(AVAILABLE_POINTS_PER_LEVEL);
        next.max_exp_needed = next_threshold(next.max_exp_needed);
        levels_gained += 1;

        if policy == LevelUpPolicy::Single {
            break;
        }
    }

    ExperienceOutcome {
        progress: next,
        levels_gained,
    }
}
