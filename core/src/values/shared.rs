use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{UnionInstance, Value};
use crate::api::UnionError;

/// A union instance that can be shared across threads.
///
/// A plain [`UnionInstance`] writes its target slot and then clears the
/// others as separate steps. `SharedUnion` holds the instance behind a
/// mutex and runs every operation under one lock acquisition, so no reader
/// can observe two members set, or a write half-applied.
///
/// Cloning a `SharedUnion` shares the same instance.
///
/// ```
/// use union_struct_core::{SharedUnion, UnionType, Value};
///
/// let ty = UnionType::new("Signal", ["level", "edge"]).unwrap();
/// let shared = SharedUnion::new(ty.new_instance());
///
/// let writer = shared.clone();
/// std::thread::spawn(move || writer.assign("edge", true).unwrap())
///     .join()
///     .unwrap();
///
/// assert_eq!(shared.active(), Some(("edge".to_string(), Value::Bool(true))));
/// ```
#[derive(Debug, Clone)]
pub struct SharedUnion {
    inner: Arc<Mutex<UnionInstance>>,
}

impl SharedUnion {
    pub fn new(instance: UnionInstance) -> Self {
        Self {
            inner: Arc::new(Mutex::new(instance)),
        }
    }

    // Every operation leaves the slots consistent before it can panic, so a
    // poisoned lock still guards a valid instance.
    fn lock(&self) -> MutexGuard<'_, UnionInstance> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`UnionInstance::set`]. Returns a copy of the stored value.
    pub fn set(
        &self,
        member: impl AsRef<str>,
        value: impl Into<Option<Value>>,
    ) -> Result<Option<Value>, UnionError> {
        Ok(self.lock().set(member, value)?.cloned())
    }

    /// See [`UnionInstance::assign`].
    pub fn assign(
        &self,
        member: impl AsRef<str>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, UnionError> {
        Ok(self.lock().assign(member, value)?.cloned())
    }

    pub fn clear(&self, member: impl AsRef<str>) -> Result<(), UnionError> {
        self.lock().clear(member)
    }

    pub fn get(&self, member: impl AsRef<str>) -> Result<Option<Value>, UnionError> {
        Ok(self.lock().get(member)?.cloned())
    }

    pub fn active_member(&self) -> Option<String> {
        self.lock().active_member().map(str::to_string)
    }

    pub fn active_value(&self) -> Option<Value> {
        self.lock().active_value().cloned()
    }

    /// The active member and its value, read under a single lock.
    pub fn active(&self) -> Option<(String, Value)> {
        self.lock()
            .active()
            .map(|(member, value)| (member.to_string(), value.clone()))
    }

    /// A copy of the instance as it is now.
    pub fn snapshot(&self) -> UnionInstance {
        self.lock().clone()
    }
}
