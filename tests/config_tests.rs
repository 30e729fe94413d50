//! Mixer configuration integration tests.
//!
//! Verifies that a weight tree written as JSON deserialises, flattens to the
//! same entries as hand-composed `add_children` calls, and builds a mixer
//! that behaves like one constructed directly.
//!
//! Run with: `cargo test --features serde`

#[cfg(feature = "serde")]
mod tests {
    use feed_mix::config::{MixerConfig, WeightSpec};
    use feed_mix::mixer::{FeedMixer, SelectionPolicy};
    use feed_mix::post::Post;
    use feed_mix::quota::RoundingMode;
    use feed_mix::reference::reference_weights;
    use feed_mix::weights::WeightEntry;
    use feed_mix::MixerError;

    // ── Helpers ──────────────────────────────────────────────────────────────

    const REFERENCE_JSON: &str = r#"{
        "weights": [
            { "category": "top", "ratio": 0.2, "children": [
                { "category": "daily", "ratio": 0.5 },
                { "category": "weekly", "ratio": 0.3 },
                { "category": "monthly", "ratio": 0.2 }
            ] },
            { "category": "trending", "ratio": 0.2, "children": [
                { "category": "city", "ratio": 0.4 },
                { "category": "area", "ratio": 0.3 },
                { "category": "country", "ratio": 0.3 }
            ] },
            { "category": "promoted", "ratio": 0.1 },
            { "category": "following", "ratio": 0.5, "children": [
                { "category": "immediate-follow", "ratio": 0.6 },
                { "category": "follow-of-follow", "ratio": 0.4 }
            ] }
        ]
    }"#;

    fn sample_posts() -> Vec<Post> {
        [
            "top/daily",
            "following/immediate-follow",
            "trending/area",
            "top/monthly",
            "following/follow-of-follow",
            "promoted",
            "top",
            "following/immediate-follow",
            "promoted",
        ]
        .iter()
        .enumerate()
        .map(|(i, c)| Post::new(format!("p{i}"), *c))
        .collect()
    }

    // ── Tests ────────────────────────────────────────────────────────────────

    #[test]
    fn test_reference_tree_matches_composed_weights() {
        let config: MixerConfig = serde_json::from_str(REFERENCE_JSON).expect("valid config");
        assert_eq!(config.entries(), reference_weights());
    }

    #[test]
    fn test_options_default_when_omitted() {
        let config: MixerConfig = serde_json::from_str(REFERENCE_JSON).expect("valid config");
        assert_eq!(config.rounding, RoundingMode::Floor);
        assert_eq!(config.policy, SelectionPolicy::CounterExhaustion);
    }

    #[test]
    fn test_built_mixer_matches_direct_construction() {
        let config: MixerConfig = serde_json::from_str(REFERENCE_JSON).expect("valid config");
        let from_config = config.build().expect("non-empty config");
        let direct = FeedMixer::new(reference_weights()).expect("non-empty weights");

        let posts = sample_posts();
        assert_eq!(from_config.mix(&posts), direct.mix(&posts));
    }

    #[test]
    fn test_snake_case_options() {
        let json = r#"{
            "weights": [
                { "category": "a", "ratio": 0.5 },
                { "category": "b", "ratio": 0.5 }
            ],
            "rounding": "ceil",
            "policy": "membership_only"
        }"#;
        let config: MixerConfig = serde_json::from_str(json).expect("valid config");
        assert_eq!(config.rounding, RoundingMode::Ceil);
        assert_eq!(config.policy, SelectionPolicy::MembershipOnly);

        let mixer = config.build().expect("non-empty config");
        let posts = vec![Post::new("1", "a"), Post::new("2", "a"), Post::new("3", "a")];
        assert_eq!(mixer.mix(&posts).len(), 3);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let json = r#"{ "weights": [], "policy": "shuffle" }"#;
        assert!(serde_json::from_str::<MixerConfig>(json).is_err());
    }

    #[test]
    fn test_empty_weights_fail_to_build() {
        let config: MixerConfig = serde_json::from_str(r#"{ "weights": [] }"#).expect("valid json");
        assert_eq!(config.build().unwrap_err(), MixerError::EmptyConfiguration);
    }

    #[test]
    fn test_config_round_trip() {
        let config = MixerConfig {
            weights: vec![
                WeightSpec::node("following", 0.5, vec![WeightSpec::leaf("friends", 1.0)]),
                WeightSpec::leaf("promoted", 0.5),
            ],
            rounding: RoundingMode::Ceil,
            policy: SelectionPolicy::Positional,
        };
        let json = serde_json::to_string(&config).expect("serialise");
        assert!(json.contains("\"positional\""));
        let restored: MixerConfig = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(restored, config);
    }

    #[test]
    fn test_post_and_entry_serialise() {
        let post = Post::new("ricks-vacation", "following/immediate-follow");
        let json = serde_json::to_string(&post).expect("serialise");
        assert_eq!(json, r#"{"id":"ricks-vacation","category":"following/immediate-follow"}"#);

        let entry: WeightEntry =
            serde_json::from_str(r#"{"category":"promoted","ratio":0.1}"#).expect("deserialise");
        assert_eq!(entry, WeightEntry::new("promoted", 0.1));
    }
}
