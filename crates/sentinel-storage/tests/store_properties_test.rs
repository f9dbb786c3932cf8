//! Property tests: stored rows keep their values; risk ordering is total.

use proptest::prelude::*;

use sentinel_core::query::{Direction, Query};
use sentinel_core::traits::IThreatStore;
use sentinel_storage::StorageEngine;
use test_fixtures::activity_draft;

proptest! {
    #[test]
    fn prop_activity_round_trip(
        username in "[a-zA-Z ]{1,40}",
        score in 0.0f64..=100.0,
    ) {
        let store = StorageEngine::open_in_memory().unwrap();
        let draft = activity_draft(&username, score);
        let inserted = store.insert_activities(std::slice::from_ref(&draft)).unwrap();
        let fetched = store
            .select_activities(&Query::new().eq("id", inserted[0].id.as_str()))
            .unwrap();

        prop_assert_eq!(fetched.len(), 1);
        prop_assert_eq!(&fetched[0].username, &username);
        prop_assert_eq!(fetched[0].risk_score, score);
        prop_assert_eq!(fetched[0].threat_level, draft.threat_level);
    }

    #[test]
    fn prop_risk_order_is_descending(
        scores in prop::collection::vec(0.0f64..=100.0, 1..30),
    ) {
        let store = StorageEngine::open_in_memory().unwrap();
        let drafts: Vec<_> = scores
            .iter()
            .enumerate()
            .map(|(i, s)| activity_draft(&format!("user{i}"), *s))
            .collect();
        store.insert_activities(&drafts).unwrap();

        let rows = store
            .select_activities(&Query::new().order_by("risk_score", Direction::Desc))
            .unwrap();
        prop_assert_eq!(rows.len(), scores.len());
        for pair in rows.windows(2) {
            prop_assert!(pair[0].risk_score >= pair[1].risk_score);
        }
    }
}
