//! Interactive form (AcroForm) fields as views over field dictionaries.

pub mod flags;

mod field_type;
pub use field_type::*;

mod field;
pub use field::*;

mod field_mut;
pub use field_mut::*;

mod acroform;
pub use acroform::*;

/// Upper bound on the number of dictionaries visited when walking up a `/Parent` chain.
///
/// Well-formed forms are only a handful of levels deep, so hitting this means a cyclic chain.
pub const MAX_TREE_DEPTH: usize = 64;
