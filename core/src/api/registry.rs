//! Registries mapping type names to union definitions.
//!
//! [`UnionRegistry`] is an explicit, owned registry. The free functions
//! [`define`] and [`lookup`] operate on one process-wide registry that uses
//! the default [`RegistryOptions`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hashbrown::HashMap;
use once_cell::sync::Lazy;
use tracing::debug;

use super::{DefinitionError, RedefinitionPolicy, RegistryOptions, UnionError};
use crate::{types::UnionType, values::{UnionInstance, Value}};

/// Named union definitions with one explicit redefinition policy.
///
/// # Example
///
/// ```
/// use union_struct_core::{UnionError, UnionRegistry};
///
/// let mut registry = UnionRegistry::new();
/// registry.define("Human", ["name", "age", "height"]).unwrap();
///
/// let mut human = registry.instantiate("Human", &[]).unwrap();
/// human.assign("age", 38).unwrap();
///
/// assert!(matches!(
///     registry.define("Human", ["name"]),
///     Err(UnionError::InvalidDefinition(_))
/// ));
/// ```
#[derive(Debug, Default)]
pub struct UnionRegistry {
    options: RegistryOptions,
    types: HashMap<String, Arc<UnionType>>,
}

impl UnionRegistry {
    /// Create an empty registry that rejects redefinitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with custom options.
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            options,
            types: HashMap::new(),
        }
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Define a union type and register it under `type_name`.
    ///
    /// The definition is validated before the registry is consulted, so an
    /// invalid member list is reported as such even when the name is taken.
    pub fn define<I, S>(&mut self, type_name: &str, members: I) -> Result<Arc<UnionType>, UnionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ty = UnionType::new(type_name, members)?;

        if let Some(existing) = self.types.get(type_name) {
            return match self.options.redefinition {
                RedefinitionPolicy::Reject => Err(DefinitionError::AlreadyDefined {
                    type_name: type_name.to_string(),
                }
                .into()),
                RedefinitionPolicy::ReuseIdentical if existing.members() == ty.members() => {
                    debug!(union = type_name, "reusing identical union definition");
                    Ok(Arc::clone(existing))
                }
                RedefinitionPolicy::ReuseIdentical => Err(DefinitionError::ConflictingRedefinition {
                    type_name: type_name.to_string(),
                    existing: existing.members().join(", "),
                }
                .into()),
            };
        }

        debug!(
            union = type_name,
            members = ty.member_count(),
            "defined union type"
        );
        self.types.insert(type_name.to_string(), Arc::clone(&ty));
        Ok(ty)
    }

    /// Find the union type registered under `type_name`.
    pub fn get(&self, type_name: &str) -> Option<&Arc<UnionType>> {
        self.types.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Construct an empty instance of a registered type.
    ///
    /// `args` must be empty; see [`UnionType::instantiate`].
    pub fn instantiate(&self, type_name: &str, args: &[Value]) -> Result<UnionInstance, UnionError> {
        let ty = self.get(type_name).ok_or_else(|| UnionError::UnknownType {
            type_name: type_name.to_string(),
        })?;
        ty.instantiate(args)
    }

    /// Registered type names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

static GLOBAL_REGISTRY: Lazy<Mutex<UnionRegistry>> = Lazy::new(|| Mutex::new(UnionRegistry::new()));

// The registry map is only touched by single insertions, so a panic in
// another thread cannot leave it half-updated.
fn global() -> MutexGuard<'static, UnionRegistry> {
    GLOBAL_REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Define a union type in the process-wide registry.
///
/// A name can be defined once per process; a second definition fails with
/// [`DefinitionError::AlreadyDefined`].
///
/// # Example
///
/// ```
/// let ty = union_struct_core::define("Measurement", ["meters", "feet"]).unwrap();
/// assert_eq!(ty.name(), "Measurement");
/// assert!(union_struct_core::lookup("Measurement").is_some());
/// assert!(union_struct_core::define("Measurement", ["meters"]).is_err());
/// ```
pub fn define<I, S>(type_name: &str, members: I) -> Result<Arc<UnionType>, UnionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    global().define(type_name, members)
}

/// Find a union type in the process-wide registry.
pub fn lookup(type_name: &str) -> Option<Arc<UnionType>> {
    global().get(type_name).cloned()
}
