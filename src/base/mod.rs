pub mod types {
    /// Object number: type alias for `u64`.
    pub type ObjNum = u64;
    /// Object generation: type alias for `u16`.
    ///
    /// NB that PDF 1.5 technically allows generation numbers larger `u16::MAX` via xref streams,
    /// no real-world case where that would be used is likely.
    pub type ObjGen = u16;
}

mod name;
pub use name::*;

mod number;
pub use number::*;

mod dict;
pub use dict::*;

mod object;
pub use object::*;

mod string;
pub use string::{decode_text_string, encode_text_string};

mod context;
pub use context::*;

mod error;
pub use error::*;
