use crate::values::{Symbol, Value};

#[test]
fn test_from_primitives() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(38), Value::Int(38));
    assert_eq!(Value::from(38i64), Value::Int(38));
    assert_eq!(Value::from(180.5), Value::Float(180.5));
    assert_eq!(Value::from("Daniel"), Value::Str("Daniel".to_string()));
    assert_eq!(Value::from(String::from("x")), Value::Str("x".to_string()));
}

#[test]
fn test_from_collections() {
    assert_eq!(
        Value::from(vec![1, 2, 3]),
        Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
    );
    assert_eq!(
        Value::from(["a", "b"]),
        Value::Array(vec![Value::from("a"), Value::from("b")])
    );
    assert_eq!(
        Value::map([("k", true)]),
        Value::Map(vec![(Value::from("k"), Value::Bool(true))])
    );
}

#[test]
fn test_accessors_match_variant() {
    assert_eq!(Value::Int(0).as_int(), Some(0));
    assert_eq!(Value::Int(0).as_float(), None);
    assert_eq!(Value::Bool(false).as_bool(), Some(false));
    assert_eq!(Value::from("").as_str(), Some(""));
    assert_eq!(Value::bytes(b"ab".to_vec()).as_bytes(), Some(&b"ab"[..]));
    assert_eq!(Value::Array(vec![]).as_array(), Some(&[][..]));
    assert_eq!(Value::Map(vec![]).as_map().map(<[_]>::len), Some(0));
    assert_eq!(
        Value::from(Symbol::from("s")).as_symbol(),
        Some(&Symbol::from("s"))
    );
}

#[test]
fn test_kind() {
    assert_eq!(Value::Int(1).kind(), "Int");
    assert_eq!(Value::map(Vec::<(Value, Value)>::new()).kind(), "Map");
}

#[test]
fn test_symbol_compares_by_text() {
    let symbol = Symbol::from("name");
    assert_eq!(symbol, "name");
    assert_eq!(symbol.as_str(), "name");
    assert_eq!(symbol, Symbol::new(String::from("name")));
}
