// Domain layer - pure reputation logic with no I/O
// Everything here is a function of its inputs and safe to call from any thread

pub mod levels;
pub mod tags;
pub mod leaderboard;

// Domain error type - only raised for records that cannot be assembled
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate contributor: {0}")]
    Duplicate(String),
}

// Re-export commonly used types and functions
pub use levels::{level_from_xp, xp_for_level, LevelStats, MAX_LEVEL};
pub use tags::{aggregate, top_tags};
pub use leaderboard::{
    assemble, assemble_all, rank_by_total_xp, Leaderboard, LeaderboardExport, LeaderboardSet,
    SkippedRecord,
};
