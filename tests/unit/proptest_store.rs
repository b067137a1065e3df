//! Property-based tests for the repository store
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::collections::HashSet;

use proptest::prelude::*;
use repo_catalog::core::models::RepositoryPatch;

use crate::common::{new_repo, store};

proptest! {
    /// Every created record gets a distinct ID
    #[test]
    fn created_ids_are_pairwise_distinct(titles in prop::collection::vec("[a-z]{0,8}", 1..40)) {
        let mut store = store();
        let ids: HashSet<String> = titles
            .iter()
            .map(|t| store.create(new_repo(t, "", &[])).id)
            .collect();
        prop_assert_eq!(ids.len(), titles.len());
        prop_assert_eq!(store.len(), titles.len());
    }

    /// n likes add exactly n, and each call reports the stored value
    #[test]
    fn likes_add_up(n in 0u64..50) {
        let mut store = store();
        let id = store.create(new_repo("A", "B", &[])).id;

        for expected in 1..=n {
            let likes = store.like(&id).unwrap();
            prop_assert_eq!(likes, expected);
            prop_assert_eq!(store.get(&id).map(|r| r.likes), Some(expected));
        }
        prop_assert_eq!(store.get(&id).map(|r| r.likes), Some(n));
    }

    /// Updates never change likes, whatever the patch carries
    #[test]
    fn update_never_changes_likes(
        likes in 0u64..20,
        claimed in any::<u64>(),
        title in proptest::option::of("[a-zA-Z ]{0,12}"),
    ) {
        let mut store = store();
        let id = store.create(new_repo("A", "B", &["x"])).id;
        for _ in 0..likes {
            store.like(&id).unwrap();
        }

        let updated = store
            .update(&id, RepositoryPatch {
                likes: Some(claimed),
                title: title.clone(),
                ..RepositoryPatch::default()
            })
            .unwrap();

        prop_assert_eq!(updated.likes, likes);
        prop_assert_eq!(updated.title, title.unwrap_or_else(|| "A".to_string()));
        prop_assert_eq!(updated.url, "B");
    }

    /// Deleting one record keeps the others in their original order
    #[test]
    fn delete_preserves_relative_order(count in 1usize..15, pick in any::<prop::sample::Index>()) {
        let mut store = store();
        for i in 0..count {
            store.create(new_repo(&format!("r{i}"), "", &[]));
        }
        let mut expected = store.list().to_vec();
        let victim = expected.remove(pick.index(count));

        store.delete(&victim.id).unwrap();

        prop_assert_eq!(store.list(), expected.as_slice());
        prop_assert!(store.delete(&victim.id).is_err());
    }
}
