use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::UnionType;
use crate::{api::UnionError, values::UnionInstance};

/// A union definition declared in a `static`, built on first use.
///
/// This is the backing store for types generated by `union_struct!`: every
/// instance of a generated type shares the one definition held here.
///
/// The declaration is validated when the definition is first built, by the
/// same rules as [`UnionType::new`]. An invalid declaration is never cached,
/// so every call reports the same error.
///
/// ```
/// use union_struct_core::StaticUnion;
///
/// static SHAPE: StaticUnion = StaticUnion::new("Shape", &["circle", "square"]);
///
/// let mut shape = SHAPE.new_instance().unwrap();
/// shape.assign("circle", 1.5).unwrap();
/// assert_eq!(shape.active_member(), Some("circle"));
/// assert!(std::sync::Arc::ptr_eq(SHAPE.union_type().unwrap(), shape.union_type()));
///
/// static EMPTY: StaticUnion = StaticUnion::new("Empty", &[]);
/// assert!(EMPTY.union_type().is_err());
/// ```
pub struct StaticUnion {
    name: &'static str,
    members: &'static [&'static str],
    ty: OnceCell<Arc<UnionType>>,
}

impl StaticUnion {
    pub const fn new(name: &'static str, members: &'static [&'static str]) -> Self {
        Self {
            name,
            members,
            ty: OnceCell::new(),
        }
    }

    /// The definition, built and validated on the first call.
    pub fn union_type(&self) -> Result<&Arc<UnionType>, UnionError> {
        self.ty.get_or_try_init(|| {
            UnionType::new(self.name, self.members).map_err(UnionError::from)
        })
    }

    pub fn new_instance(&self) -> Result<UnionInstance, UnionError> {
        Ok(self.union_type()?.new_instance())
    }
}
