use std::{fmt, sync::Arc};

use tracing::trace;

use super::Value;
use crate::{api::UnionError, types::UnionType};

/// An instance of a [`UnionType`]: one slot per declared member, at most
/// one of them set.
///
/// Instances are created empty by [`UnionType::new_instance`]. The keyed
/// setter [`set`](Self::set) is the only write path; every other setter
/// (including the per-member setters generated by `union_struct!`) goes
/// through it.
///
/// Members are named by anything that reads as a string, so `"age"`,
/// `String::from("age")` and `Symbol::from("age")` are interchangeable.
#[derive(Clone, PartialEq)]
pub struct UnionInstance {
    ty: Arc<UnionType>,
    // Invariant: at most one `Some` between public calls.
    slots: Box<[Option<Value>]>,
}

impl UnionInstance {
    pub(crate) fn empty(ty: Arc<UnionType>) -> Self {
        let slots = (0..ty.member_count()).map(|_| None).collect();
        Self { ty, slots }
    }

    /// The definition this instance was created from.
    pub fn union_type(&self) -> &Arc<UnionType> {
        &self.ty
    }

    /// Declared members, in declaration order.
    pub fn members(&self) -> &[String] {
        self.ty.members()
    }

    /// Current value of `member`, or `None` if the slot is empty.
    pub fn get(&self, member: impl AsRef<str>) -> Result<Option<&Value>, UnionError> {
        let slot = self.ty.slot_of(member.as_ref())?;
        Ok(self.slots[slot].as_ref())
    }

    /// Write `value` into `member` and clear every other member.
    ///
    /// The target slot is written first, then the remaining slots are
    /// cleared one by one in declaration order. Passing `None` empties
    /// `member` (and therefore the whole instance). Returns the value now
    /// stored in `member`.
    ///
    /// Fails with [`UnionError::UnknownMember`] before touching any slot if
    /// `member` is not declared.
    ///
    /// # Example
    ///
    /// ```
    /// use union_struct_core::{UnionType, Value};
    ///
    /// let ty = UnionType::new("Human", ["name", "age"]).unwrap();
    /// let mut human = ty.new_instance();
    ///
    /// let stored = human.set("name", Value::from("Daniel")).unwrap().cloned();
    /// assert_eq!(stored, Some(Value::from("Daniel")));
    ///
    /// human.set("age", Value::from(38)).unwrap();
    /// assert_eq!(human.get("name").unwrap(), None);
    /// ```
    pub fn set(
        &mut self,
        member: impl AsRef<str>,
        value: impl Into<Option<Value>>,
    ) -> Result<Option<&Value>, UnionError> {
        let member = member.as_ref();
        let target = self.ty.slot_of(member)?;
        Ok(self.write_exclusive(target, value.into()))
    }

    /// Set `member` to a value. Shorthand for `set(member, Some(value))`.
    pub fn assign(
        &mut self,
        member: impl AsRef<str>,
        value: impl Into<Value>,
    ) -> Result<Option<&Value>, UnionError> {
        self.set(member, Some(value.into()))
    }

    /// Empty `member`. Shorthand for `set(member, None)`.
    pub fn clear(&mut self, member: impl AsRef<str>) -> Result<(), UnionError> {
        self.set(member, None).map(|_| ())
    }

    fn write_exclusive(&mut self, target: usize, value: Option<Value>) -> Option<&Value> {
        let members = self.ty.members();

        trace!(
            union = self.ty.name(),
            member = members[target].as_str(),
            set = value.is_some(),
            "slot written"
        );
        self.slots[target] = value;

        for (slot, member) in members.iter().enumerate() {
            if slot != target {
                trace!(union = self.ty.name(), member = member.as_str(), "slot cleared");
                self.slots[slot] = None;
            }
        }

        self.slots[target].as_ref()
    }

    /// Name of the member currently set, if any.
    ///
    /// Scans in declaration order and reports the first non-empty slot.
    pub fn active_member(&self) -> Option<&str> {
        self.active().map(|(member, _)| member)
    }

    /// Value of the member currently set, if any.
    ///
    /// Always agrees with [`active_member`](Self::active_member): when a
    /// member is active this is `get(active_member)`.
    pub fn active_value(&self) -> Option<&Value> {
        self.active().map(|(_, value)| value)
    }

    /// The active member and its value.
    pub fn active(&self) -> Option<(&str, &Value)> {
        self.ty
            .members()
            .iter()
            .zip(self.slots.iter())
            .find_map(|(member, slot)| slot.as_ref().map(|value| (member.as_str(), value)))
    }

    /// Whether no member is set.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Members paired with their current values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.ty
            .members()
            .iter()
            .zip(self.slots.iter())
            .map(|(member, slot)| (member.as_str(), slot.as_ref()))
    }

    /// Consume the instance, returning the active member and its value.
    pub fn into_active(self) -> Option<(String, Value)> {
        let Self { ty, slots } = self;
        ty.members()
            .iter()
            .zip(slots.into_vec())
            .find_map(|(member, slot)| slot.map(|value| (member.clone(), value)))
    }
}

impl fmt::Debug for UnionInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct(self.ty.name());
        for (member, value) in self.iter() {
            debug.field(member, &value);
        }
        debug.finish()
    }
}

impl fmt::Display for UnionInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.active() {
            Some((member, value)) => write!(f, "{}.{}({})", self.ty.name(), member, value),
            None => write!(f, "{}.<empty>", self.ty.name()),
        }
    }
}
