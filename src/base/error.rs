use std::fmt::{Display, Formatter};

use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A `/Parent` chain went deeper than [`MAX_TREE_DEPTH`](crate::form::MAX_TREE_DEPTH) while
    /// resolving `key`. Most likely the chain is cyclic.
    MalformedTree { key: Name, depth: usize },
    /// The reference does not point to a registered object.
    Dangling(ObjRef),
    /// The reference points to something other than a dictionary.
    NotADict(ObjRef),
    /// An entry exists but has a type that does not allow the requested edit.
    WrongType { key: Name, expected: &'static str },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MalformedTree { key, depth } =>
                write!(f, "malformed field tree: no end of /Parent chain within {depth} levels while resolving {key}"),
            Error::Dangling(objref) => write!(f, "no object registered at {objref}"),
            Error::NotADict(objref) => write!(f, "object {objref} is not a dictionary"),
            Error::WrongType { key, expected } => write!(f, "entry {key} is not {expected}"),
        }
    }
}

impl std::error::Error for Error {}
