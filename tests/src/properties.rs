//! # Property Tests
//!
//! Custody invariants checked over generated inputs:
//!
//! - a carton created with `packageNum = n` has exactly `n` unsold packages
//! - a carton sale succeeds iff the caller is the current owner
//! - selling one package never changes its siblings or the carton owner
//! - composite keys never collide across component boundaries
//! - ids derived for one transaction never repeat

#[cfg(test)]
mod tests {
    use crate::harness::Harness;
    use cf_02_custody_chaincode::{derive_id, IdSequence};
    use cf_shared_types::CompositeKey;
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Identity names: short, lowercase, never empty.
    fn arb_identity() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,7}"
    }

    /// Key components: any text without the reserved runes.
    fn arb_component() -> impl Strategy<Value = String> {
        "[^\\x00\\x{10FFFF}]{0,12}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_package_count_matches(package_num in 0u32..40) {
            let h = Harness::new();
            let created = h.create_carton("producer1", package_num);

            prop_assert_eq!(created.packages.len(), package_num as usize);
            prop_assert!(created.packages.iter().all(|p| !p.sold && p.sell_date.is_none()));
            prop_assert_eq!(h.packages(&created.carton.id).len(), package_num as usize);
        }

        #[test]
        fn prop_sale_requires_current_owner(
            owner in arb_identity(),
            caller in arb_identity(),
            buyer in arb_identity(),
        ) {
            let h = Harness::new();
            let created = h.create_carton(&owner, 1);
            let id = created.carton.id;

            let response = h.sell_carton(&caller, &id, &buyer);
            prop_assert_eq!(response.is_ok(), caller == owner);

            let expected = if caller == owner { &buyer } else { &owner };
            prop_assert_eq!(&h.get_carton(&id).owner, expected);
        }

        #[test]
        fn prop_package_sale_isolated(package_num in 1u32..12, pick in any::<prop::sample::Index>()) {
            let h = Harness::new();
            let created = h.create_carton("producer1", package_num);
            let id = created.carton.id.clone();
            let target = pick.get(created.packages.as_slice()).id.clone();

            prop_assert!(h.sell_package("producer1", &id, &target).is_ok());

            for package in h.packages(&id) {
                prop_assert_eq!(package.sold, package.id == target);
            }
            prop_assert_eq!(h.get_carton(&id).owner, "producer1");
        }

        #[test]
        fn prop_composite_keys_injective(
            a in prop::collection::vec(arb_component(), 1..4),
            b in prop::collection::vec(arb_component(), 1..4),
        ) {
            let left = CompositeKey::new("cn~package", a.as_slice()).unwrap();
            let right = CompositeKey::new("cn~package", b.as_slice()).unwrap();
            prop_assert_eq!(left == right, a == b);
        }

        #[test]
        fn prop_partial_key_range_contains_extensions(
            prefix in arb_component(),
            suffix in arb_component(),
        ) {
            let partial = CompositeKey::partial("cn~package", &[prefix.as_str()]).unwrap();
            let full = CompositeKey::new("cn~package", &[prefix.as_str(), suffix.as_str()]).unwrap();
            prop_assert!(full.as_str() >= partial.as_str());
            prop_assert!(full.as_str() < partial.range_end().as_str());
        }

        #[test]
        fn prop_id_sequence_unique(tx_id in "[0-9a-f]{64}", count in 1usize..200) {
            let mut ids = IdSequence::new(tx_id.clone());
            let issued: HashSet<String> = (0..count).map(|_| ids.next_id()).collect();
            prop_assert_eq!(issued.len(), count);
            prop_assert!(issued.contains(&derive_id(&tx_id, 0)));
        }
    }
}
