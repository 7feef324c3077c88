//! Engine configuration

use std::env;

use questbound_domain::{CancelledRewardPolicy, LevelUpPolicy, ProgressionSettings};

use crate::use_cases::character::DEFAULT_LEADERBOARD_SIZE;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:questbound.db?mode=rwc";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Engine configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// SQLite connection URL
    pub database_url: String,
    /// Leveling and cancellation policies
    pub settings: ProgressionSettings,
    /// Number of characters shown on the leaderboard
    pub leaderboard_size: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            settings: ProgressionSettings::default(),
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`; unset keys fall back to defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let level_up: LevelUpPolicy =
            parse_var(&lookup, "QUESTBOUND_LEVEL_UP_POLICY", defaults.settings.level_up)?;
        let cancelled_rewards: CancelledRewardPolicy = parse_var(
            &lookup,
            "QUESTBOUND_CANCELLED_REWARDS",
            defaults.settings.cancelled_rewards,
        )?;
        let leaderboard_size: u32 = parse_var(
            &lookup,
            "QUESTBOUND_LEADERBOARD_SIZE",
            defaults.leaderboard_size,
        )?;
        if leaderboard_size == 0 {
            return Err(ConfigError::Invalid {
                var: "QUESTBOUND_LEADERBOARD_SIZE",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            database_url: lookup("QUESTBOUND_DATABASE_URL").unwrap_or(defaults.database_url),
            settings: ProgressionSettings {
                level_up,
                cancelled_rewards,
            },
            leaderboard_size,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            })
        }
    }
}
