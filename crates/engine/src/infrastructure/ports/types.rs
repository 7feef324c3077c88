//! Row shapes returned by store queries that do not map to a single entity.

use questbound_domain::Character;

/// A character as it appears on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCharacter {
    pub character: Character,
    pub completed_quests: u64,
}
