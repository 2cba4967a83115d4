//! Core of `union-struct`: named records where at most one member is set.
//!
//! A union type is defined once from a type name and an ordered list of
//! member names. Every instance of it starts empty, and writing any member
//! clears all the others.
//!
//! ```
//! use union_struct_core::{UnionType, Value};
//!
//! let human = UnionType::new("Human", ["name", "age", "height"]).unwrap();
//! let mut union = human.new_instance();
//!
//! union.assign("name", "Daniel").unwrap();
//! union.assign("age", 38).unwrap();
//!
//! assert_eq!(union.get("name").unwrap(), None);
//! assert_eq!(union.active_member(), Some("age"));
//! assert_eq!(union.active_value(), Some(&Value::Int(38)));
//! ```

pub mod api;
pub mod types;
pub mod values;

pub use api::{
    DefinitionError, RedefinitionPolicy, RegistryOptions, UnionError, UnionRegistry, define,
    lookup,
};
pub use types::{StaticUnion, UnionType};
pub use values::{SharedUnion, Symbol, UnionInstance, Value};

/// Version of the library, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
