use std::{fmt, sync::Arc};

use hashbrown::HashMap;

use crate::{
    api::{DefinitionError, UnionError},
    values::{UnionInstance, Value},
};

/// The definition of a union type: its name and its ordered members.
///
/// A definition is immutable once created and is shared, read-only, by
/// every instance made from it. Member order is declaration order; it fixes
/// the order in which other slots are cleared on a write and the order in
/// which [`UnionInstance::active_member`] scans.
#[derive(Clone, PartialEq, Eq)]
pub struct UnionType {
    name: String,
    members: Box<[String]>,
    // Member name -> slot position in `members`.
    slots: HashMap<String, usize>,
}

impl UnionType {
    /// Validate and build a new union type.
    ///
    /// The type name must be an identifier. Members must be non-empty,
    /// distinct and at least one.
    ///
    /// # Example
    ///
    /// ```
    /// use union_struct_core::{DefinitionError, UnionType};
    ///
    /// let ty = UnionType::new("Human", ["name", "age", "height"]).unwrap();
    /// assert_eq!(ty.members(), ["name", "age", "height"]);
    ///
    /// assert_eq!(
    ///     UnionType::new("Human", ["name", "name"]).unwrap_err(),
    ///     DefinitionError::DuplicateMember {
    ///         type_name: "Human".to_string(),
    ///         member: "name".to_string(),
    ///     }
    /// );
    /// ```
    pub fn new<I, S>(name: &str, members: I) -> Result<Arc<Self>, DefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !is_identifier(name) {
            return Err(DefinitionError::InvalidTypeName {
                type_name: name.to_string(),
            });
        }

        let mut names = Vec::new();
        let mut slots = HashMap::new();
        for member in members {
            let member = member.as_ref();
            if member.is_empty() {
                return Err(DefinitionError::EmptyMemberName {
                    type_name: name.to_string(),
                });
            }
            if slots.insert(member.to_string(), names.len()).is_some() {
                return Err(DefinitionError::DuplicateMember {
                    type_name: name.to_string(),
                    member: member.to_string(),
                });
            }
            names.push(member.to_string());
        }

        if names.is_empty() {
            return Err(DefinitionError::NoMembers {
                type_name: name.to_string(),
            });
        }

        Ok(Arc::new(Self {
            name: name.to_string(),
            members: names.into_boxed_slice(),
            slots,
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared members, in declaration order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn contains(&self, member: impl AsRef<str>) -> bool {
        self.slots.contains_key(member.as_ref())
    }

    /// Position of `member` in the slot array.
    pub(crate) fn slot_of(&self, member: &str) -> Result<usize, UnionError> {
        self.slots
            .get(member)
            .copied()
            .ok_or_else(|| UnionError::UnknownMember {
                type_name: self.name.clone(),
                member: member.to_string(),
            })
    }

    /// Construct a new instance with every member empty.
    pub fn new_instance(self: &Arc<Self>) -> UnionInstance {
        UnionInstance::empty(Arc::clone(self))
    }

    /// Construct a new instance from initializer arguments.
    ///
    /// Construction takes no initializers: with several members there is no
    /// principled choice of which one to set. Any argument is rejected with
    /// [`UnionError::UnexpectedArguments`]; an empty slice behaves like
    /// [`new_instance`](Self::new_instance).
    pub fn instantiate(self: &Arc<Self>, args: &[Value]) -> Result<UnionInstance, UnionError> {
        if !args.is_empty() {
            return Err(UnionError::UnexpectedArguments {
                type_name: self.name.clone(),
                given: args.len(),
            });
        }
        Ok(self.new_instance())
    }
}

impl fmt::Debug for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionType")
            .field("name", &self.name)
            .field("members", &self.members)
            .finish()
    }
}

impl fmt::Display for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "union {} {{ {} }}", self.name, self.members.join(", "))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
