use std::cmp::Ordering;

use super::levels::level_from_xp;
use crate::models::{TagData, TagScore};

/// Level every tag score. Output order matches input order; the raw score is
/// carried through as `score` unchanged.
pub fn aggregate(tag_scores: &[TagScore]) -> Vec<TagData> {
    tag_scores
        .iter()
        .map(|tag| {
            let stats = level_from_xp(tag.raw_score);
            TagData {
                tag_name: tag.tag_name.clone(),
                score: tag.raw_score,
                level: stats.level,
                progress: stats.progress,
                points_to_next: stats.xp_to_next_level,
            }
        })
        .collect()
}

/// Highest scoring `n` tags for display highlighting. Ties keep input order.
pub fn top_tags(tags: &[TagData], n: usize) -> Vec<&TagData> {
    let mut ranked: Vec<&TagData> = tags.iter().collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}
