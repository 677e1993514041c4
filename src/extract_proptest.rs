//! Property-based tests for contributor extraction and collation.
//!
//! These tests use proptest to generate random author logs and verify that
//! the list invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use std::cmp::Ordering;
    use std::collections::BTreeSet;

    use crate::collate::{Collator, Sensitivity};
    use crate::extract::collect_contributors;
    use proptest::prelude::*;

    fn identity() -> impl Strategy<Value = String> {
        "[A-Za-zÀ-ÖØ-öø-ÿ]{1,8} <[a-z]{1,5}@x\\.com>"
    }

    fn history() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(identity(), 0..40)
    }

    fn sensitivity() -> impl Strategy<Value = Sensitivity> {
        prop_oneof![
            Just(Sensitivity::Base),
            Just(Sensitivity::Accent),
            Just(Sensitivity::Variant),
        ]
    }

    proptest! {
        /// Property: the extracted list never contains duplicates
        #[test]
        fn collect_has_no_duplicates(lines in history()) {
            let result = collect_contributors(&lines.join("\n"), &BTreeSet::new(), &Collator::default());
            let unique: BTreeSet<&String> = result.iter().collect();
            prop_assert_eq!(unique.len(), result.len());
        }

        /// Property: every distinct input line appears exactly once
        #[test]
        fn collect_keeps_every_identity(lines in history()) {
            let result = collect_contributors(&lines.join("\n"), &BTreeSet::new(), &Collator::default());
            let expected: BTreeSet<&String> = lines.iter().collect();
            let actual: BTreeSet<&String> = result.iter().collect();
            prop_assert_eq!(expected, actual);
        }

        /// Property: the extracted list is ascending under the collator
        #[test]
        fn collect_is_sorted(lines in history(), sensitivity in sensitivity()) {
            let collator = Collator::new("en", sensitivity).unwrap();
            let result = collect_contributors(&lines.join("\n"), &BTreeSet::new(), &collator);
            for pair in result.windows(2) {
                prop_assert_ne!(
                    collator.compare(&pair[0], &pair[1]),
                    Ordering::Greater,
                    "{:?} sorted before {:?}",
                    pair[0],
                    pair[1]
                );
            }
        }

        /// Property: output order does not depend on input order
        #[test]
        fn collect_is_order_independent(lines in history()) {
            let mut reversed = lines.clone();
            reversed.reverse();
            let forward = collect_contributors(&lines.join("\n"), &BTreeSet::new(), &Collator::default());
            let backward = collect_contributors(&reversed.join("\n"), &BTreeSet::new(), &Collator::default());
            prop_assert_eq!(forward, backward);
        }

        /// Property: excluding an identity removes exactly that identity
        #[test]
        fn exclude_removes_exactly_one(lines in prop::collection::vec(identity(), 1..40), pick in any::<prop::sample::Index>()) {
            let excluded = pick.get(&lines).clone();
            let raw = lines.join("\n");
            let exclude: BTreeSet<String> = [excluded.clone()].into_iter().collect();

            let full = collect_contributors(&raw, &BTreeSet::new(), &Collator::default());
            let filtered = collect_contributors(&raw, &exclude, &Collator::default());

            prop_assert_eq!(filtered.len() + 1, full.len());
            prop_assert!(!filtered.contains(&excluded));
        }

        /// Property: collation is antisymmetric
        #[test]
        fn compare_is_antisymmetric(a in identity(), b in identity(), sensitivity in sensitivity()) {
            let collator = Collator::new("en", sensitivity).unwrap();
            prop_assert_eq!(collator.compare(&a, &b), collator.compare(&b, &a).reverse());
        }
    }
}
