//! Property-based tests for natural ordering and qubit identity.
//!
//! Checks that natural-order keys are deterministic and induce a strict
//! total order, and that named qubits keep equality, hashing and ordering
//! consistent with their names.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use qdiag::{LineQubit, NamedQubit, Qubit, natural_order_key};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Names mixing letters, digit runs (including leading zeros) and separators.
fn arb_name() -> impl Strategy<Value = String> {
    "[a-c_]{0,3}[0-9]{0,10}[a-c]{0,2}[0-9]{0,3}"
}

proptest! {
    #[test]
    fn key_is_deterministic(name in arb_name()) {
        prop_assert_eq!(natural_order_key(&name), natural_order_key(&name.clone()));
    }

    #[test]
    fn key_ties_only_on_identical_names(a in arb_name(), b in arb_name()) {
        let same_key = natural_order_key(&a) == natural_order_key(&b);
        prop_assert_eq!(same_key, a == b);
    }

    #[test]
    fn numbers_sort_by_value(prefix in "[a-z]{0,3}", x in 0_u64..1_000_000, y in 0_u64..1_000_000) {
        let a = NamedQubit::new(format!("{prefix}{x}"));
        let b = NamedQubit::new(format!("{prefix}{y}"));
        prop_assert_eq!(a.cmp(&b), x.cmp(&y));
    }

    #[test]
    fn equality_matches_names(a in arb_name(), b in arb_name()) {
        let qa = NamedQubit::new(a.clone());
        let qb = NamedQubit::new(b.clone());
        prop_assert_eq!(qa == qb, a == b);
        if qa == qb {
            prop_assert_eq!(hash_of(&qa), hash_of(&qb));
        }
    }

    #[test]
    fn ordering_is_antisymmetric(a in arb_name(), b in arb_name()) {
        let qa = NamedQubit::new(a);
        let qb = NamedQubit::new(b);
        prop_assert_eq!(qa.cmp(&qb), qb.cmp(&qa).reverse());
        prop_assert_eq!(qa.cmp(&qb) == Ordering::Equal, qa == qb);
    }

    #[test]
    fn ordering_is_transitive(a in arb_name(), b in arb_name(), c in arb_name()) {
        let mut qubits = [NamedQubit::new(a), NamedQubit::new(b), NamedQubit::new(c)];
        qubits.sort();
        prop_assert!(qubits[0] <= qubits[1]);
        prop_assert!(qubits[1] <= qubits[2]);
        prop_assert!(qubits[0] <= qubits[2]);
    }

    #[test]
    fn ordering_reduces_to_key_order(a in arb_name(), b in arb_name()) {
        let expected = natural_order_key(&a).cmp(&natural_order_key(&b));
        prop_assert_eq!(NamedQubit::new(a).cmp(&NamedQubit::new(b)), expected);
    }

    #[test]
    fn kinds_never_compare(name in arb_name(), index in 0_u32..100) {
        let named = Qubit::from(NamedQubit::new(name));
        let line = Qubit::from(LineQubit(index));
        prop_assert!(named != line);
        prop_assert_eq!(named.partial_cmp(&line), None);
        prop_assert_eq!(line.try_eq(&named), None);
    }
}
