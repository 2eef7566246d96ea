use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Runtime settings for the leaderboard binaries
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub snapshot_dir: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub top_tags: usize,
    pub log_format: LogFormat,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: PathBuf::from("data"),
            output_dir: None,
            top_tags: 3,
            log_format: LogFormat::Json,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset, blank or unparseable values fall back to the defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            snapshot_dir: get("SNAPSHOT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.snapshot_dir),
            output_dir: get("LEADERBOARD_OUTPUT_DIR").map(PathBuf::from),
            top_tags: get("LEADERBOARD_TOP_TAGS")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(defaults.top_tags),
            log_format: match get("LOG_FORMAT").map(|v| v.trim().to_ascii_lowercase()).as_deref() {
                Some("pretty") => LogFormat::Pretty,
                _ => LogFormat::Json,
            },
        }
    }
}
