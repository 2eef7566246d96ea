#[cfg(test)]
mod test_leaderboard {
    use contributor_reputation::{
        assemble, assemble_all, level_from_xp, parse_snapshot, xp_for_level, LeaderboardPeriod,
    };
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    const SNAPSHOT: &str = r#"[
        {
            "username": "alice",
            "roleTags": [{"tagName": "maintainer", "rawScore": 900}],
            "skillTags": [
                {"tagName": "typescript", "rawScore": 1200},
                {"tagName": "rust", "rawScore": 300}
            ],
            "focusAreaTags": [{"tagName": "plugins", "rawScore": 450}],
            "stats": {"total_prs": 12, "merged_prs": 10, "closed_prs": 1}
        },
        {
            "username": "bob",
            "skillTags": [{"tagName": "python", "rawScore": 80}]
        },
        {"username": "", "skillTags": [{"tagName": "go", "rawScore": 10}]},
        {"skillTags": []}
    ]"#;

    #[test]
    fn test_snapshot_to_leaderboard() {
        let parsed = parse_snapshot(SNAPSHOT).unwrap();
        assert_eq!(parsed.skipped.len(), 1);

        let board = assemble(LeaderboardPeriod::All, &parsed.records);
        assert_eq!(board.contributors.len(), 2);
        assert_eq!(board.skipped.len(), 1);

        let alice = board.get("alice").unwrap();
        assert_eq!(alice.total_xp, 1500.0);
        assert_eq!(alice.total_level, level_from_xp(1500.0).level);
        assert_eq!(alice.score, 2850.0);
        assert_eq!(alice.stats.total_prs, 12);

        let skills: Vec<(&str, f64)> = alice
            .skill_tags
            .iter()
            .map(|t| (t.tag_name.as_str(), t.score))
            .collect();
        assert_eq!(skills, vec![("typescript", 1200.0), ("rust", 300.0)]);

        for tag in alice.skill_tags.iter().chain(&alice.role_tags).chain(&alice.focus_area_tags) {
            assert!((1..=99).contains(&tag.level));
            assert!((0.0..=1.0).contains(&tag.progress));
            assert!(tag.points_to_next > 0.0);
        }
    }

    #[test]
    fn test_weekly_removal_does_not_touch_other_periods() {
        let parsed = parse_snapshot(SNAPSHOT).unwrap();

        let mut snapshots = BTreeMap::new();
        for period in LeaderboardPeriod::ALL {
            snapshots.insert(period, parsed.records.clone());
        }
        let before = assemble_all(&snapshots);

        let weekly: Vec<_> = parsed
            .records
            .iter()
            .filter(|r| r.username != "alice")
            .cloned()
            .collect();
        snapshots.insert(LeaderboardPeriod::Weekly, weekly);
        let after = assemble_all(&snapshots);

        assert!(after.get(LeaderboardPeriod::Weekly).unwrap().get("alice").is_none());
        for period in [LeaderboardPeriod::All, LeaderboardPeriod::Monthly] {
            let was = before.get(period).unwrap().get("alice").unwrap();
            let now = after.get(period).unwrap().get("alice").unwrap();
            assert_eq!(was, now);
        }
    }

    #[test]
    fn test_level_curve_boundaries() {
        let zero = level_from_xp(0.0);
        assert_eq!((zero.level, zero.progress), (1, 0.0));
        assert_eq!(level_from_xp(xp_for_level(50) as f64).level, 50);

        let capped = level_from_xp(xp_for_level(99) as f64 + 1.0);
        assert_eq!(capped.level, 99);
        assert_eq!(capped.progress, 0.0);
        assert_eq!(capped.xp_to_next_level, 0.0);
    }
}
