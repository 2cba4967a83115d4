pub mod static_union;
mod union_type;


pub use static_union::StaticUnion;
pub use union_type::UnionType;
