use std::sync::Arc;

use once_cell::sync::Lazy;
use union_struct::{UnionInstance, UnionType, Value, define};

/// `Human` in the process-wide registry, defined once for every test.
pub static HUMAN: Lazy<Arc<UnionType>> =
    Lazy::new(|| define("Human", ["name", "age", "height"]).unwrap());

pub fn human() -> UnionInstance {
    HUMAN.new_instance()
}

/// Number of members currently holding a value.
pub fn set_count(union: &UnionInstance) -> usize {
    union.iter().filter(|(_, value)| value.is_some()).count()
}

/// Values that are present even though other languages treat them as false.
pub fn falsy_values() -> Vec<Value> {
    vec![
        Value::Bool(false),
        Value::Int(0),
        Value::Float(0.0),
        Value::from(""),
        Value::Array(vec![]),
        Value::Map(vec![]),
    ]
}
