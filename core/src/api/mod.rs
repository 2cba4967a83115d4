//! Public API for defining union types and registering them by name.
//!
//! # Example
//!
//! ```
//! use union_struct_core::api::UnionRegistry;
//!
//! let mut registry = UnionRegistry::new();
//! let ty = registry.define("Contact", ["email", "phone"]).unwrap();
//!
//! let mut contact = ty.new_instance();
//! contact.assign("phone", "555-0100").unwrap();
//! assert_eq!(contact.active_member(), Some("phone"));
//! ```

pub mod error;
pub mod options;
pub mod registry;

#[cfg(test)]
mod registry_test;

pub use error::{DefinitionError, UnionError};
pub use options::{RedefinitionPolicy, RegistryOptions};
pub use registry::{UnionRegistry, define, lookup};
