//! union-struct - named records where at most one member is set
//!
//! # Overview
//!
//! A union type has a fixed set of named members, declared when the type is
//! defined. Like a C union (or an enum with payloads), at most one member
//! holds a value at any moment: setting any member clears all the others.
//! Unlike an enum, members are read and written by name, and any value of
//! any shape can be stored.
//!
//! # Quick Start
//!
//! Define a type at runtime, from a name and a member list:
//!
//! ```
//! use union_struct::{UnionRegistry, Value};
//!
//! let mut registry = UnionRegistry::new();
//! let human = registry.define("Human", ["name", "age", "height"]).unwrap();
//!
//! let mut union = human.new_instance();
//! union.assign("name", "Daniel").unwrap();
//! union.assign("age", 38).unwrap();
//!
//! assert_eq!(union.get("name").unwrap(), None);
//! assert_eq!(union.active_member(), Some("age"));
//! assert_eq!(union.active_value(), Some(&Value::Int(38)));
//! ```
//!
//! Or at compile time, with one getter and setter per member:
//!
//! ```
//! use union_struct::{Value, union_struct};
//!
//! union_struct! {
//!     pub union Human { name, age, height }
//! }
//!
//! let mut human = Human::new();
//! human.set_name(Value::from("Daniel")).unwrap();
//! human.set_age(Value::from(38)).unwrap();
//!
//! assert_eq!(human.name(), None);
//! assert_eq!(human.age(), Some(&Value::Int(38)));
//! ```
//!
//! Code generated by `union_struct!` names `::union_struct_core`, so a
//! crate using the macro lists both packages:
//!
//! ```toml
//! [dependencies]
//! union-struct = "1.2"
//! union-struct-core = "1.2"
//! ```
//!
//! # Empty versus falsy
//!
//! An empty slot is `None`. Values such as `false`, `0`, `""` or `[]` are
//! ordinary values: a member holding one of them is the active member.
//!
//! # Sharing across threads
//!
//! Instances are plain values without internal locking. Wrap one in
//! [`SharedUnion`] to read and write it from several threads; each
//! operation then runs under a single lock.

// Re-export public API from union_struct_core
pub use union_struct_core::api::{
    DefinitionError, RedefinitionPolicy, RegistryOptions, UnionError, UnionRegistry, define,
    lookup,
};

// Re-export commonly used types and values
pub use union_struct_core::types::{StaticUnion, UnionType};
pub use union_struct_core::values::{SharedUnion, Symbol, UnionInstance, Value};
pub use union_struct_core::{VERSION, api, types, values};

// Re-export the compile-time union generator
pub use union_struct_macros::union_struct;
