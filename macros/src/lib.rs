//! Procedural macros for union-struct
//!
//! This crate provides the `union_struct!` macro, which turns a member list
//! into a named Rust type with one getter and one setter per member.

extern crate proc_macro;

use proc_macro::TokenStream;

mod union_struct;

/// Define a union type with named accessors.
///
/// At most one member of a union holds a value at a time: setting any
/// member clears all the others.
///
/// # Example
///
/// ```ignore
/// union_struct! {
///     /// A way to identify a person.
///     pub union Human { name, age, height }
/// }
///
/// let mut human = Human::new();
/// human.set_name(Value::from("Daniel"))?;
/// human.set_age(Value::from(38))?;
/// assert_eq!(human.name(), None);
/// assert_eq!(human.active_member(), Some("age"));
/// ```
///
/// This generates:
/// - Struct `Human` wrapping a `UnionInstance`, with `Clone`, `PartialEq`,
///   `Debug`, `Display` and `Default`
/// - `Human::TYPE_NAME`, `Human::MEMBERS` and `Human::union_type()`, the
///   definition shared by all instances
/// - `Human::new()` (no arguments) and `Human::instantiate(&[Value])`
/// - For each member `m`: getter `m()` and setter `set_m(value)`; the setter
///   goes through the keyed `set`, so it clears every other member
/// - Keyed `set`, `assign` and `clear`, and `Deref` to the `UnionInstance`
///   for `get`, `active_member`, `active_value` and the rest
///
/// Members that are Rust keywords are written as raw identifiers
/// (`r#type`); the member name is then `type` and the setter `set_type`.
///
/// # Errors
///
/// Compilation fails for an empty member list, a duplicate member, or a
/// member whose getter would shadow a method the type already has, such as
/// `active_member` reached through `Deref`:
///
/// ```compile_fail
/// use union_struct_macros::union_struct;
///
/// union_struct! {
///     union Signal { active, idle }
/// }
/// ```
///
/// Generated code refers to `::union_struct_core`, which must be a
/// dependency of the calling crate.
#[proc_macro]
pub fn union_struct(input: TokenStream) -> TokenStream {
    union_struct::union_struct_impl(input)
}
