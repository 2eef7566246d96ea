use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::{TagCategory, TagData, TagScore};

/// Published leaderboard windows. Each is computed from its own snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardPeriod {
    All,
    Monthly,
    Weekly,
}

impl LeaderboardPeriod {
    pub const ALL: [LeaderboardPeriod; 3] = [Self::All, Self::Monthly, Self::Weekly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
        }
    }

    /// Window covered by the period, ending at `now`. `All` is unbounded.
    pub fn date_range(&self, now: DateTime<Utc>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match self {
            Self::All => None,
            Self::Monthly => Some((now - Duration::days(30), now)),
            Self::Weekly => Some((now - Duration::days(7), now)),
        }
    }
}

impl fmt::Display for LeaderboardPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaderboardPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "monthly" => Ok(Self::Monthly),
            "weekly" => Ok(Self::Weekly),
            other => Err(format!("unknown leaderboard period: {}", other)),
        }
    }
}

/// Pull request statistics carried through from ingestion untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStats {
    pub total_prs: u64,
    pub merged_prs: u64,
    pub closed_prs: u64,
    pub total_files: u64,
    pub total_additions: u64,
    pub total_deletions: u64,
    pub files_by_type: HashMap<String, u64>,
    pub prs_by_month: HashMap<String, u64>,
}

/// One contributor's entry in a period snapshot, as produced by ingestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContributorStats {
    pub username: String,
    #[serde(default)]
    pub role_tags: Vec<TagScore>,
    #[serde(default)]
    pub skill_tags: Vec<TagScore>,
    #[serde(default)]
    pub focus_area_tags: Vec<TagScore>,
    #[serde(default)]
    pub stats: UserStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl RawContributorStats {
    pub fn tags(&self, category: TagCategory) -> &[TagScore] {
        match category {
            TagCategory::Role => &self.role_tags,
            TagCategory::Skill => &self.skill_tags,
            TagCategory::FocusArea => &self.focus_area_tags,
        }
    }
}

/// Aggregated contributor view that the leaderboard and profile pages bind to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFocusAreaData {
    pub username: String,
    pub role_tags: Vec<TagData>,
    pub skill_tags: Vec<TagData>,
    pub focus_area_tags: Vec<TagData>,
    pub score: f64,
    pub stats: UserStats,
    pub total_xp: f64,
    pub total_level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserFocusAreaData {
    pub fn tags(&self, category: TagCategory) -> &[TagData] {
        match category {
            TagCategory::Role => &self.role_tags,
            TagCategory::Skill => &self.skill_tags,
            TagCategory::FocusArea => &self.focus_area_tags,
        }
    }
}
