use serde::{Deserialize, Serialize};

/// Tag classes a contributor's activity is scored under.
/// The ingestion side still emits the legacy ROLE / TECH / AREA labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagCategory {
    #[serde(alias = "ROLE")]
    Role,
    #[serde(alias = "TECH")]
    Skill,
    #[serde(alias = "AREA")]
    FocusArea,
}

impl TagCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Skill => "skill",
            Self::FocusArea => "focus_area",
        }
    }
}

/// Raw accumulated experience for one (contributor, tag) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagScore {
    pub tag_name: String,
    pub raw_score: f64,
}

impl TagScore {
    pub fn new(tag_name: impl Into<String>, raw_score: f64) -> Self {
        Self {
            tag_name: tag_name.into(),
            raw_score,
        }
    }
}

/// Leveled view of a tag score, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagData {
    pub tag_name: String,
    pub score: f64,
    pub level: u32,
    pub progress: f64,
    pub points_to_next: f64,
}
