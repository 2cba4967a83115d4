//! Property-based tests for union instances.
//!
//! Random sequences of writes (including clears and writes to undeclared
//! names) must keep at most one member set, agree between `active_member`
//! and `active_value`, and never partially apply a rejected write.

use proptest::prelude::*;
use union_struct_core::{Symbol, UnionError, UnionInstance, UnionType, Value};

const MEMBERS: [&str; 4] = ["name", "age", "height", "tags"];

#[derive(Debug, Clone)]
enum Op {
    Set(usize, Option<Value>),
    SetSymbol(usize, Value),
    Unknown(String),
}

fn value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6..1.0e6f64).prop_map(Value::Float),
        ".{0,8}".prop_map(Value::Str),
        Just(Value::Array(vec![])),
        Just(Value::Map(vec![])),
    ];
    leaf.prop_recursive(2, 8, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::Array)
    })
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..MEMBERS.len(), proptest::option::of(value()))
            .prop_map(|(member, value)| Op::Set(member, value)),
        2 => (0..MEMBERS.len(), value()).prop_map(|(member, value)| Op::SetSymbol(member, value)),
        1 => "[a-zA-Z_]{1,8}"
            .prop_filter("must not be declared", |name| !MEMBERS.contains(&name.as_str()))
            .prop_map(Op::Unknown),
    ]
}

fn new_union() -> UnionInstance {
    UnionType::new("Sample", MEMBERS).unwrap().new_instance()
}

fn set_count(union: &UnionInstance) -> usize {
    union.iter().filter(|(_, value)| value.is_some()).count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_invariants_hold_after_every_operation(ops in prop::collection::vec(op(), 0..40)) {
        let mut union = new_union();

        for op in ops {
            match op {
                Op::Set(member, value) => {
                    let name = MEMBERS[member];
                    let stored = union.set(name, value.clone()).unwrap().cloned();
                    prop_assert_eq!(&stored, &value);
                    prop_assert_eq!(union.get(name).unwrap(), value.as_ref());
                    for other in MEMBERS.iter().filter(|other| **other != name) {
                        prop_assert_eq!(union.get(other).unwrap(), None);
                    }
                }
                Op::SetSymbol(member, value) => {
                    let name = MEMBERS[member];
                    union.set(Symbol::from(name), value.clone()).unwrap();
                    prop_assert_eq!(union.active_member(), Some(name));
                    prop_assert_eq!(union.get(name).unwrap(), Some(&value));
                }
                Op::Unknown(name) => {
                    let before = union.clone();
                    let err = union.set(name.as_str(), Value::Int(1)).unwrap_err();
                    let is_unknown_member = matches!(
                        &err,
                        UnionError::UnknownMember { member, .. } if *member == name
                    );
                    prop_assert!(is_unknown_member);
                    prop_assert!(union.get(name.as_str()).is_err());
                    prop_assert_eq!(&union, &before);
                }
            }

            prop_assert!(set_count(&union) <= 1);
            match union.active_member() {
                Some(active) => {
                    prop_assert_eq!(union.active_value(), union.get(active).unwrap());
                    prop_assert!(union.active_value().is_some());
                }
                None => {
                    prop_assert_eq!(union.active_value(), None);
                    prop_assert!(union.is_empty());
                }
            }
        }
    }

    #[test]
    fn prop_last_write_wins(first in 0..MEMBERS.len(), second in 0..MEMBERS.len(), a in value(), b in value()) {
        let mut union = new_union();
        union.set(MEMBERS[first], a.clone()).unwrap();
        union.set(MEMBERS[second], b.clone()).unwrap();

        prop_assert_eq!(union.active(), Some((MEMBERS[second], &b)));
        if first != second {
            prop_assert_eq!(union.get(MEMBERS[first]).unwrap(), None);
        }
    }
}
