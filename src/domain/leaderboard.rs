use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use tracing::{info, warn};

use super::levels::level_from_xp;
use super::tags::aggregate;
use super::DomainError;
use crate::models::{LeaderboardPeriod, RawContributorStats, TagCategory, TagScore, UserFocusAreaData};

const TAG_CATEGORIES: [TagCategory; 3] = [TagCategory::Role, TagCategory::Skill, TagCategory::FocusArea];

/// A record that was left out of a batch, with its position in the source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    pub index: usize,
    pub username: Option<String>,
    pub reason: String,
}

/// Contributors assembled for one period, in snapshot order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaderboard {
    pub period: LeaderboardPeriod,
    pub contributors: Vec<UserFocusAreaData>,
    pub skipped: Vec<SkippedRecord>,
}

/// Published form of a leaderboard with its time window attached
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardExport {
    pub period: LeaderboardPeriod,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub generated_at: DateTime<Utc>,
    pub users: Vec<UserFocusAreaData>,
}

impl Leaderboard {
    pub fn get(&self, username: &str) -> Option<&UserFocusAreaData> {
        self.contributors.iter().find(|c| c.username == username)
    }

    /// Rank for display and stamp the period window ending at `now`
    pub fn into_export(self, now: DateTime<Utc>) -> LeaderboardExport {
        let range = self.period.date_range(now);
        let mut users = self.contributors;
        rank_by_total_xp(&mut users);

        LeaderboardExport {
            period: self.period,
            start_date: range.map(|(start, _)| start),
            end_date: range.map(|(_, end)| end),
            generated_at: now,
            users,
        }
    }
}

/// All published periods. A period without a snapshot is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeaderboardSet {
    pub leaderboards: BTreeMap<LeaderboardPeriod, Leaderboard>,
}

impl LeaderboardSet {
    pub fn get(&self, period: LeaderboardPeriod) -> Option<&Leaderboard> {
        self.leaderboards.get(&period)
    }
}

fn validate_record(record: &RawContributorStats) -> Result<(), DomainError> {
    if record.username.trim().is_empty() {
        return Err(DomainError::Validation("username is empty".to_string()));
    }

    for category in TAG_CATEGORIES {
        if let Some(bad) = record
            .tags(category)
            .iter()
            .find(|t| !t.raw_score.is_finite() || t.raw_score < 0.0)
        {
            return Err(DomainError::Validation(format!(
                "{} tag '{}' has invalid raw score {}",
                category.as_str(),
                bad.tag_name,
                bad.raw_score
            )));
        }
    }

    Ok(())
}

fn sum_scores(tags: &[TagScore]) -> f64 {
    tags.iter().map(|t| t.raw_score).sum()
}

fn build_contributor(record: &RawContributorStats) -> UserFocusAreaData {
    // Only skills measure effort; roles and focus areas are display facets
    let total_xp = sum_scores(&record.skill_tags);
    let score: f64 = TAG_CATEGORIES
        .iter()
        .map(|c| sum_scores(record.tags(*c)))
        .sum();

    UserFocusAreaData {
        username: record.username.clone(),
        role_tags: aggregate(&record.role_tags),
        skill_tags: aggregate(&record.skill_tags),
        focus_area_tags: aggregate(&record.focus_area_tags),
        score,
        stats: record.stats.clone(),
        total_xp,
        total_level: level_from_xp(total_xp).level,
        avatar_url: record.avatar_url.clone(),
    }
}

/// Build one period's leaderboard from its raw snapshot.
///
/// Contributors are processed independently and keep snapshot order. Malformed
/// records (blank username, negative or non-finite scores, repeated username)
/// are skipped with a warning and reported in `skipped`.
#[tracing::instrument(skip(raw_contributors), fields(period = %period, records = raw_contributors.len()))]
pub fn assemble(period: LeaderboardPeriod, raw_contributors: &[RawContributorStats]) -> Leaderboard {
    let mut contributors = Vec::with_capacity(raw_contributors.len());
    let mut skipped = Vec::new();
    let mut seen = HashSet::new();

    for (index, record) in raw_contributors.iter().enumerate() {
        let checked = validate_record(record).and_then(|_| {
            if seen.insert(record.username.as_str()) {
                Ok(())
            } else {
                Err(DomainError::Duplicate(record.username.clone()))
            }
        });

        match checked {
            Ok(()) => contributors.push(build_contributor(record)),
            Err(e) => {
                warn!(index, username = %record.username, error = %e, "Skipping contributor record");
                skipped.push(SkippedRecord {
                    index,
                    username: Some(record.username.clone()).filter(|u| !u.trim().is_empty()),
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        assembled = contributors.len(),
        skipped = skipped.len(),
        "Assembled leaderboard"
    );

    Leaderboard {
        period,
        contributors,
        skipped,
    }
}

/// Assemble every period that has a snapshot. Periods never share data.
pub fn assemble_all(
    snapshots: &BTreeMap<LeaderboardPeriod, Vec<RawContributorStats>>,
) -> LeaderboardSet {
    let mut leaderboards = BTreeMap::new();

    for period in LeaderboardPeriod::ALL {
        match snapshots.get(&period) {
            Some(raw) => {
                leaderboards.insert(period, assemble(period, raw));
            }
            None => warn!(period = %period, "No snapshot for period, leaderboard not built"),
        }
    }

    LeaderboardSet { leaderboards }
}

/// Display order: descending total XP, ties keep their existing order
pub fn rank_by_total_xp(contributors: &mut [UserFocusAreaData]) {
    contributors.sort_by(|a, b| b.total_xp.partial_cmp(&a.total_xp).unwrap_or(Ordering::Equal));
}
