use chrono::Utc;
use dotenv::dotenv;
use eyre::{Result, WrapErr};
use futures::try_join;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use contributor_reputation::{
    assemble_all, snapshot::snapshot_path, telemetry::init_tracing, top_tags, EngineConfig,
    LeaderboardPeriod, SnapshotError,
};
use contributor_reputation::snapshot::{load_snapshot, ParsedSnapshot};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = EngineConfig::from_env();
    init_tracing(config.log_format);

    info!(snapshot_dir = %config.snapshot_dir.display(), "Building leaderboards");

    let (all, monthly, weekly) = try_join!(
        load_period(&config, LeaderboardPeriod::All),
        load_period(&config, LeaderboardPeriod::Monthly),
        load_period(&config, LeaderboardPeriod::Weekly)
    )?;

    let mut snapshots = BTreeMap::new();
    for (period, parsed) in [
        (LeaderboardPeriod::All, all),
        (LeaderboardPeriod::Monthly, monthly),
        (LeaderboardPeriod::Weekly, weekly),
    ] {
        if let Some(parsed) = parsed {
            snapshots.insert(period, parsed.records);
        }
    }

    let set = assemble_all(&snapshots);
    let now = Utc::now();

    if let Some(dir) = &config.output_dir {
        tokio::fs::create_dir_all(dir)
            .await
            .wrap_err_with(|| format!("creating output directory {}", dir.display()))?;
    }

    for (period, leaderboard) in set.leaderboards {
        for contributor in &leaderboard.contributors {
            let highlights: Vec<&str> = top_tags(&contributor.skill_tags, config.top_tags)
                .into_iter()
                .map(|t| t.tag_name.as_str())
                .collect();
            debug!(
                period = %period,
                username = %contributor.username,
                total_level = contributor.total_level,
                top_skills = ?highlights,
                "Contributor assembled"
            );
        }

        let export = leaderboard.into_export(now);
        let body = serde_json::to_string_pretty(&export)?;

        match &config.output_dir {
            Some(dir) => {
                let path = snapshot_path(dir, period);
                tokio::fs::write(&path, body)
                    .await
                    .wrap_err_with(|| format!("writing {}", path.display()))?;
                info!(period = %period, path = %path.display(), users = export.users.len(), "Wrote leaderboard");
            }
            None => println!("{}", body),
        }
    }

    Ok(())
}

/// A missing snapshot file only drops that period; anything else is fatal
async fn load_period(config: &EngineConfig, period: LeaderboardPeriod) -> Result<Option<ParsedSnapshot>> {
    let path = snapshot_path(&config.snapshot_dir, period);
    match load_snapshot(&path).await {
        Ok(parsed) => {
            if !parsed.skipped.is_empty() {
                warn!(period = %period, skipped = parsed.skipped.len(), "Snapshot had undecodable records");
            }
            Ok(Some(parsed))
        }
        Err(SnapshotError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            warn!(period = %period, path = %path.display(), "Snapshot not found, skipping period");
            Ok(None)
        }
        Err(e) => Err(e).wrap_err_with(|| format!("loading {} snapshot", period)),
    }
}
