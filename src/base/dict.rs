use std::fmt::{Display, Formatter};

use super::name::Name;
use super::object::Object;
use super::context::Context;

/// Dictionary objects (like `<< /FT /Btn >>`).
///
/// Entries keep the order in which they were first inserted. Overwriting an existing key keeps
/// its position. A key appears at most once.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Dict(Vec<(Name, Object)>);

impl Dict {
    pub fn new() -> Dict {
        Dict::default()
    }

    /// Looks up for a value for a given [`Name`] key. If not present, returns a static reference 
    /// to [`Object::Null`].
    pub fn lookup(&self, key: &[u8]) -> &Object {
        self.get(key).unwrap_or(&Object::Null)
    }

    /// The raw value stored under `key`, without resolving references.
    pub fn get(&self, key: &[u8]) -> Option<&Object> {
        self.0.iter()
            .find(|(name, _obj)| name == &key)
            .map(|(_name, obj)| obj)
    }

    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut Object> {
        self.0.iter_mut()
            .find(|(name, _obj)| name == &key)
            .map(|(_name, obj)| obj)
    }

    /// Looks up `key` and follows one level of indirection through `ctx`.
    ///
    /// Returns `None` if the key is missing, if its value is `null`, or if it is a reference
    /// not resolving to anything: a `null` entry is equivalent to an absent one.
    pub fn get_resolved<'a>(&'a self, key: &[u8], ctx: &'a Context) -> Option<&'a Object> {
        match ctx.deref(self.get(key)?) {
            Object::Null => None,
            obj => Some(obj)
        }
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Inserts or overwrites an entry, returning the previous value if there was one.
    pub fn set(&mut self, key: impl Into<Name>, value: Object) -> Option<Object> {
        let key = key.into();
        match self.get_mut(key.as_slice()) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    /// Removes an entry, returning its value if there was one.
    pub fn delete(&mut self, key: &[u8]) -> Option<Object> {
        let pos = self.0.iter().position(|(name, _obj)| name == &key)?;
        Some(self.0.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Name> {
        self.0.iter().map(|(name, _obj)| name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Name, Object)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<(Name, Object)> {
        self.0
    }
}

/// Repeated keys collapse into one entry at the position of the first, holding the last value.
impl From<Vec<(Name, Object)>> for Dict {
    fn from(vec: Vec<(Name, Object)>) -> Dict {
        vec.into_iter().collect()
    }
}

impl FromIterator<(Name, Object)> for Dict {
    fn from_iter<I: IntoIterator<Item = (Name, Object)>>(iter: I) -> Dict {
        let mut dict = Dict::new();
        for (key, val) in iter {
            dict.set(key, val);
        }
        dict
    }
}

impl IntoIterator for Dict {
    type Item = (Name, Object);
    type IntoIter = <Vec<(Name, Object)> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = &'a (Name, Object);
    type IntoIter = std::slice::Iter<'a, (Name, Object)>;

    fn into_iter(self: &'a Dict) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Dict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("<< ")?;
        for (key, val) in &self.0 {
            write!(f, "{key} {val} ")?;
        }
        f.write_str(">>")
    }
}
