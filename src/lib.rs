pub mod models;
pub mod domain;
pub mod wallets;
pub mod snapshot;
pub mod config;
pub mod telemetry;

// Re-export commonly used types
pub use models::{
    LeaderboardPeriod, RawContributorStats, TagCategory, TagData, TagScore,
    UserFocusAreaData, UserStats, WalletLink,
};

pub use domain::{
    aggregate, assemble, assemble_all, level_from_xp, rank_by_total_xp, top_tags,
    xp_for_level, DomainError, Leaderboard, LeaderboardSet, LevelStats, SkippedRecord,
};

pub use wallets::{
    build_wallet_section, chain_by_chain_id, chain_id, create_account_id,
    parse_account_id, parse_wallet_section, upsert_wallet_section, validate_address, Chain,
};

pub use snapshot::{load_snapshot, parse_snapshot, SnapshotError};

pub use config::EngineConfig;
