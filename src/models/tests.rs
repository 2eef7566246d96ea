#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::wallets::Chain;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_tag_category_accepts_legacy_labels() {
        let legacy: Vec<TagCategory> = serde_json::from_value(json!(["ROLE", "TECH", "AREA"])).unwrap();
        assert_eq!(
            legacy,
            vec![TagCategory::Role, TagCategory::Skill, TagCategory::FocusArea]
        );

        let current: TagCategory = serde_json::from_value(json!("focus_area")).unwrap();
        assert_eq!(current, TagCategory::FocusArea);
        assert_eq!(serde_json::to_value(TagCategory::Skill).unwrap(), json!("skill"));
    }

    #[test]
    fn test_tag_data_serializes_camel_case() {
        let tag = TagData {
            tag_name: "rust".to_string(),
            score: 120.0,
            level: 3,
            progress: 0.5,
            points_to_next: 10.0,
        };
        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            json!({
                "tagName": "rust",
                "score": 120.0,
                "level": 3,
                "progress": 0.5,
                "pointsToNext": 10.0
            })
        );
    }

    #[test]
    fn test_user_focus_area_data_shape() {
        let user = UserFocusAreaData {
            username: "alice".to_string(),
            role_tags: vec![],
            skill_tags: vec![],
            focus_area_tags: vec![],
            score: 12.0,
            stats: UserStats::default(),
            total_xp: 10.0,
            total_level: 1,
            avatar_url: None,
        };
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["username"], json!("alice"));
        assert_eq!(value["totalXp"], json!(10.0));
        assert_eq!(value["totalLevel"], json!(1));
        assert_eq!(value["focusAreaTags"], json!([]));
        assert_eq!(value["stats"]["total_prs"], json!(0));
        assert!(value.get("avatarUrl").is_none());
    }

    #[test]
    fn test_period_parsing_and_display() {
        assert_eq!("weekly".parse::<LeaderboardPeriod>(), Ok(LeaderboardPeriod::Weekly));
        assert_eq!(" Monthly ".parse::<LeaderboardPeriod>(), Ok(LeaderboardPeriod::Monthly));
        assert_eq!("ALL".parse::<LeaderboardPeriod>(), Ok(LeaderboardPeriod::All));
        assert!("daily".parse::<LeaderboardPeriod>().is_err());

        for period in LeaderboardPeriod::ALL {
            assert_eq!(period.to_string().parse::<LeaderboardPeriod>(), Ok(period));
            assert_eq!(serde_json::to_value(period).unwrap(), json!(period.as_str()));
        }
    }

    #[test]
    fn test_raw_tags_by_category() {
        let raw = RawContributorStats {
            username: "alice".to_string(),
            role_tags: vec![TagScore::new("maintainer", 1.0)],
            skill_tags: vec![TagScore::new("rust", 2.0)],
            focus_area_tags: vec![TagScore::new("core", 3.0)],
            stats: UserStats::default(),
            avatar_url: None,
        };
        assert_eq!(raw.tags(TagCategory::Role)[0].tag_name, "maintainer");
        assert_eq!(raw.tags(TagCategory::Skill)[0].tag_name, "rust");
        assert_eq!(raw.tags(TagCategory::FocusArea)[0].tag_name, "core");
    }

    #[test]
    fn test_linked_wallet_from_link() {
        let link = WalletLink::new(Chain::Ethereum, "0x000000000000000000000000000000000000dEaD");
        assert!(link.is_valid());
        assert_eq!(
            serde_json::to_value(LinkedWallet::from(&link)).unwrap(),
            json!({
                "chain": "ethereum",
                "chainId": "eip155:1",
                "address": "0x000000000000000000000000000000000000dEaD",
                "accountId": "eip155:1:0x000000000000000000000000000000000000dEaD"
            })
        );
    }
}
