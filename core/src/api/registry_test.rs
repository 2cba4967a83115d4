use std::sync::Arc;

use pretty_assertions::assert_eq;

use crate::{
    api::{
        DefinitionError, RedefinitionPolicy, RegistryOptions, UnionError, UnionRegistry, define,
        lookup,
    },
    values::Value,
};

#[test]
fn test_define_and_lookup() {
    let mut registry = UnionRegistry::new();
    assert!(registry.is_empty());

    let ty = registry.define("Human", ["name", "age", "height"]).unwrap();

    assert!(registry.contains("Human"));
    assert_eq!(registry.len(), 1);
    assert!(Arc::ptr_eq(registry.get("Human").unwrap(), &ty));
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Human"]);
    assert!(registry.get("Robot").is_none());
}

#[test]
fn test_redefinition_rejected_by_default() {
    let mut registry = UnionRegistry::new();
    assert_eq!(registry.options().redefinition, RedefinitionPolicy::Reject);

    registry.define("Human", ["name", "age"]).unwrap();
    let err = registry.define("Human", ["name", "age"]).unwrap_err();

    assert_eq!(
        err,
        UnionError::InvalidDefinition(DefinitionError::AlreadyDefined {
            type_name: "Human".to_string()
        })
    );
    // The original definition is untouched
    assert_eq!(registry.get("Human").unwrap().members(), ["name", "age"]);
}

#[test]
fn test_reuse_identical_returns_existing() {
    let mut registry = UnionRegistry::with_options(RegistryOptions {
        redefinition: RedefinitionPolicy::ReuseIdentical,
    });

    let first = registry.define("Human", ["name", "age"]).unwrap();
    let second = registry.define("Human", ["name", "age"]).unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let err = registry.define("Human", ["name"]).unwrap_err();
    assert_eq!(
        err,
        UnionError::InvalidDefinition(DefinitionError::ConflictingRedefinition {
            type_name: "Human".to_string(),
            existing: "name, age".to_string(),
        })
    );
}

#[test]
fn test_invalid_definition_reported_before_collision() {
    let mut registry = UnionRegistry::new();
    registry.define("Human", ["name"]).unwrap();

    assert_eq!(
        registry.define("Human", ["a", "a"]).unwrap_err(),
        UnionError::InvalidDefinition(DefinitionError::DuplicateMember {
            type_name: "Human".to_string(),
            member: "a".to_string(),
        })
    );
    assert!(matches!(
        registry.define("Void", Vec::<String>::new()),
        Err(UnionError::InvalidDefinition(DefinitionError::NoMembers { .. }))
    ));
    assert!(!registry.contains("Void"));
}

#[test]
fn test_instantiate_by_name() {
    let mut registry = UnionRegistry::new();
    registry.define("Human", ["name", "age"]).unwrap();

    let mut human = registry.instantiate("Human", &[]).unwrap();
    human.assign("name", "Daniel").unwrap();
    assert_eq!(human.active_member(), Some("name"));

    assert!(matches!(
        registry.instantiate("Human", &[Value::from("Matz")]),
        Err(UnionError::UnexpectedArguments { given: 1, .. })
    ));
    assert_eq!(
        registry.instantiate("Robot", &[]).unwrap_err(),
        UnionError::UnknownType {
            type_name: "Robot".to_string()
        }
    );
}

#[test]
fn test_global_registry() {
    // Names are unique to this test: the global registry is process-wide.
    let ty = define("RegistryTestPayload", ["text", "binary"]).unwrap();
    assert!(Arc::ptr_eq(&lookup("RegistryTestPayload").unwrap(), &ty));

    assert!(matches!(
        define("RegistryTestPayload", ["text", "binary"]),
        Err(UnionError::InvalidDefinition(DefinitionError::AlreadyDefined { .. }))
    ));
    assert!(lookup("RegistryTestMissing").is_none());
}
