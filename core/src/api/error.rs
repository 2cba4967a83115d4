//! Public error types for union definitions and instances.
//!
//! Every error here is a caller error: nothing is retried, and an operation
//! that fails has not modified any slot.

use miette::Diagnostic;
use thiserror::Error;

/// Error returned by union definition, construction and member access.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum UnionError {
    /// The union type could not be defined.
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidDefinition(#[from] DefinitionError),

    /// The name does not match any declared member.
    ///
    /// `member` carries the offending name verbatim.
    #[error("no member '{member}' in union {type_name}")]
    #[diagnostic(
        code(union_struct::unknown_member),
        help("members are looked up by exact, case-sensitive name")
    )]
    UnknownMember { type_name: String, member: String },

    /// A union was constructed with initializer arguments.
    #[error("{type_name} takes no initializer arguments ({given} given)")]
    #[diagnostic(
        code(union_struct::unexpected_arguments),
        help("create an empty instance, then set exactly one member")
    )]
    UnexpectedArguments { type_name: String, given: usize },

    /// No union type is registered under this name.
    #[error("no union type named '{type_name}'")]
    #[diagnostic(code(union_struct::unknown_type))]
    UnknownType { type_name: String },
}

/// Reasons a union type definition is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DefinitionError {
    #[error("invalid union type name '{type_name}'")]
    #[diagnostic(
        code(union_struct::invalid_type_name),
        help("type names start with a letter or '_' and contain only letters, digits and '_'")
    )]
    InvalidTypeName { type_name: String },

    #[error("union {type_name} must declare at least one member")]
    #[diagnostic(code(union_struct::no_members))]
    NoMembers { type_name: String },

    #[error("union {type_name} declares an empty member name")]
    #[diagnostic(code(union_struct::empty_member_name))]
    EmptyMemberName { type_name: String },

    #[error("union {type_name} declares member '{member}' more than once")]
    #[diagnostic(code(union_struct::duplicate_member))]
    DuplicateMember { type_name: String, member: String },

    #[error("union {type_name} is already defined")]
    #[diagnostic(
        code(union_struct::already_defined),
        help("look the existing type up instead, or pick another name")
    )]
    AlreadyDefined { type_name: String },

    #[error("union {type_name} is already defined with members [{existing}]")]
    #[diagnostic(code(union_struct::conflicting_redefinition))]
    ConflictingRedefinition { type_name: String, existing: String },
}
