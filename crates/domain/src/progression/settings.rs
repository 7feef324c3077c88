//! Tunable progression behaviour.
//!
//! Both policies default to the behaviour already present in stored data,
//! so switching them is an explicit opt-in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// How many levels a single experience grant may yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelUpPolicy {
    /// At most one level per grant, whatever the grant size.
    #[default]
    Single,
    /// Keep leveling while the new total clears the next threshold.
    Exhaustive,
}

impl fmt::Display for LevelUpPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

impl FromStr for LevelUpPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "exhaustive" => Ok(Self::Exhaustive),
            other => Err(DomainError::parse(format!("unknown level-up policy '{other}'"))),
        }
    }
}

/// What happens to escrowed reward items when their quest is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelledRewardPolicy {
    /// Quantity is incremented by itself, then the row is marked FAILED.
    #[default]
    DoubleEscrow,
    /// The row is marked FAILED with its quantity untouched.
    Release,
}

impl fmt::Display for CancelledRewardPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DoubleEscrow => write!(f, "double_escrow"),
            Self::Release => write!(f, "release"),
        }
    }
}

impl FromStr for CancelledRewardPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "double_escrow" => Ok(Self::DoubleEscrow),
            "release" => Ok(Self::Release),
            other => Err(DomainError::parse(format!(
                "unknown cancelled-reward policy '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgressionSettings {
    #[serde(default)]
    pub level_up: LevelUpPolicy,
    #[serde(default)]
    pub cancelled_rewards: CancelledRewardPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_stored_behaviour() {
        let settings = ProgressionSettings::default();
        assert_eq!(settings.level_up, LevelUpPolicy::Single);
        assert_eq!(settings.cancelled_rewards, CancelledRewardPolicy::DoubleEscrow);
    }

    #[test]
    fn policies_parse_case_insensitively() {
        assert_eq!("Exhaustive".parse::<LevelUpPolicy>().unwrap(), LevelUpPolicy::Exhaustive);
        assert_eq!(
            " release ".parse::<CancelledRewardPolicy>().unwrap(),
            CancelledRewardPolicy::Release
        );
        assert!("loop".parse::<LevelUpPolicy>().is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: ProgressionSettings =
            serde_json::from_str(r#"{"level_up":"exhaustive"}"#).unwrap();
        assert_eq!(settings.level_up, LevelUpPolicy::Exhaustive);
        assert_eq!(settings.cancelled_rewards, CancelledRewardPolicy::DoubleEscrow);
    }
}
