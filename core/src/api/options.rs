//! Configuration options for union registries.

/// What a registry does when a type name is defined a second time.
///
/// A registry never silently replaces an existing definition: instances
/// created from the old one would otherwise disagree with new lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedefinitionPolicy {
    /// Any second definition under the same name fails with
    /// [`DefinitionError::AlreadyDefined`](super::DefinitionError::AlreadyDefined).
    #[default]
    Reject,

    /// A second definition with exactly the same members returns the
    /// existing type. Different members still fail, with
    /// [`DefinitionError::ConflictingRedefinition`](super::DefinitionError::ConflictingRedefinition).
    ReuseIdentical,
}

/// Configuration options for a [`UnionRegistry`](super::UnionRegistry).
///
/// # Example
///
/// ```
/// use union_struct_core::{RedefinitionPolicy, RegistryOptions, UnionRegistry};
///
/// let options = RegistryOptions {
///     redefinition: RedefinitionPolicy::ReuseIdentical,
/// };
/// let mut registry = UnionRegistry::with_options(options);
///
/// let first = registry.define("Shape", ["circle", "square"]).unwrap();
/// let again = registry.define("Shape", ["circle", "square"]).unwrap();
/// assert!(std::sync::Arc::ptr_eq(&first, &again));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistryOptions {
    /// Handling of repeated definitions under one name.
    ///
    /// Default: [`RedefinitionPolicy::Reject`]
    pub redefinition: RedefinitionPolicy,
}
