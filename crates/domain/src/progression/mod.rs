//! Progression rules: leveling arithmetic and attribute allocation.
//!
//! Everything here is synchronous and side-effect free.

mod allocation;
mod experience;
mod settings;

pub use allocation::{validate_reallocation, AllocationDelta, AllocationError, AttributeKind};
pub use experience::{
    apply_experience, ExperienceOutcome, ProgressSnapshot, AVAILABLE_POINTS_PER_LEVEL,
    LEVEL_THRESHOLD_GROWTH_DENOMINATOR, LEVEL_THRESHOLD_GROWTH_NUMERATOR,
};
pub use settings::{CancelledRewardPolicy, LevelUpPolicy, ProgressionSettings};
