pub mod instance;
pub mod shared;
pub mod symbol;
pub mod value;

pub use instance::UnionInstance;
pub use shared::SharedUnion;
pub use symbol::Symbol;
pub use value::Value;

#[cfg(test)]
mod value_test;
