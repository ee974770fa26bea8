use std::fmt::{Display, Formatter};

use super::name::Name;
use super::dict::Dict;
use super::number::Number;
use super::string::format_string;
use super::types::*;

/// The base type of all PDF objects.
#[derive(Debug, PartialEq, Clone)]
pub enum Object {
    /// Bool (`true` or `false`)
    Bool(bool),
    /// Numbers (integer or real)
    Number(Number),
    /// Strings.
    ///
    /// No distinction is made whether this was literal or hex-encoded in the source.
    String(Vec<u8>),
    /// Name (like `/FT`)
    Name(Name),
    /// Array (`[1 2 3]`)
    Array(Vec<Object>),
    /// Dictionary (`<< /FT /Btn >>`)
    Dict(Dict),
    /// Stream (`<< ... >> stream ... endstream`)
    Stream(Stream),
    /// Indirect object reference (`3 0 R`)
    Ref(ObjRef),
    /// Null object (`null`). Also used as a fall-back where the specification says.
    Null
}

impl Object {
    /// A utility method to create [`Object::String`] from a byte slice.
    pub fn new_string(s: &[u8]) -> Object {
        Object::String(s.to_owned())
    }

    /// A utility method to create [`Object::Name`] from a byte slice. Don't pass the initial 
    /// `'/'` unless the name is actually supposed to start with `#2F`.
    pub fn new_name(s: &[u8]) -> Object {
        Object::Name(Name::from(s))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            &Object::Bool(val) => Some(val),
            _ => None
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Object::Number(val) => Some(val),
            _ => None
        }
    }

    pub fn as_string(&self) -> Option<&Vec<u8>> {
        match self {
            Object::String(val) => Some(val),
            _ => None
        }
    }

    pub fn as_name(&self) -> Option<&Name> {
        match self {
            Object::Name(val) => Some(val),
            _ => None
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Object>> {
        match self {
            Object::Array(val) => Some(val),
            _ => None
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Object>> {
        match self {
            Object::Array(val) => Some(val),
            _ => None
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Object::Dict(val) => Some(val),
            _ => None
        }
    }

    pub fn as_dict_mut(&mut self) -> Option<&mut Dict> {
        match self {
            Object::Dict(val) => Some(val),
            _ => None
        }
    }

    pub fn as_stream(&self) -> Option<&Stream> {
        match self {
            Object::Stream(val) => Some(val),
            _ => None
        }
    }

    pub fn as_objref(&self) -> Option<&ObjRef> {
        match self {
            Object::Ref(val) => Some(val),
            _ => None
        }
    }

    pub fn into_dict(self) -> Option<Dict> {
        match self {
            Object::Dict(val) => Some(val),
            _ => None
        }
    }

    /// For `Object::Number(Number::Int(number))`, extracts the `number` and casts it into the 
    /// required type. Returns `None` both for other types of objects and for value too large for the 
    /// type `T`.
    pub fn num_value<T: TryFrom<i64>>(&self) -> Option<T> {
        match self {
            &Object::Number(Number::Int(num)) => num.try_into().ok(),
            _ => None
        }
    }
}

impl From<bool> for Object {
    fn from(val: bool) -> Object {
        Object::Bool(val)
    }
}

impl From<Number> for Object {
    fn from(num: Number) -> Object {
        Object::Number(num)
    }
}

impl From<i64> for Object {
    fn from(num: i64) -> Object {
        Object::Number(Number::Int(num))
    }
}

impl From<Name> for Object {
    fn from(name: Name) -> Object {
        Object::Name(name)
    }
}

impl From<Vec<Object>> for Object {
    fn from(arr: Vec<Object>) -> Object {
        Object::Array(arr)
    }
}

impl From<Dict> for Object {
    fn from(dict: Dict) -> Object {
        Object::Dict(dict)
    }
}

impl From<ObjRef> for Object {
    fn from(objref: ObjRef) -> Object {
        Object::Ref(objref)
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Object::Bool(true) => f.write_str("true"),
            Object::Bool(false) => f.write_str("false"),
            Object::Number(Number::Int(x)) => write!(f, "{x}"),
            Object::Number(Number::Real(x)) => write!(f, "{x}"),
            Object::String(s) => format_string(f, s),
            Object::Name(name) => write!(f, "{}", name),
            Object::Array(arr) => {
                f.write_str("[ ")?;
                for obj in arr {
                    write!(f, "{obj} ")?;
                }
                f.write_str("]")
            },
            Object::Dict(dict) => write!(f, "{}", dict),
            Object::Stream(stm) => write!(f, "{} [stream]", stm.dict),
            Object::Ref(ObjRef{num, gen}) => write!(f, "{num} {gen} R"),
            Object::Null => f.write_str("null")
        }
    }
}

/// An indirect object reference.
///
/// Ordered by object number first, then generation.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct ObjRef {
    pub num: ObjNum,
    pub gen: ObjGen
}

impl ObjRef {
    pub fn new(num: ObjNum, gen: ObjGen) -> ObjRef {
        ObjRef { num, gen }
    }
}

impl Display for ObjRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.num, self.gen)
    }
}

/// A PDF stream object: the stream dictionary and the raw, still encoded, payload.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Stream {
    pub dict: Dict,
    pub data: Vec<u8>
}
