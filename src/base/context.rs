use std::collections::BTreeMap;

use super::*;
use super::types::*;

/// The registry of indirect objects.
///
/// Owns every registered [`Object`] and hands out [`ObjRef`]s for them. Anything else in the
/// graph refers to registered objects only by reference value.
#[derive(Debug, Default)]
pub struct Context {
    objects: BTreeMap<ObjRef, Object>,
    /// The largest object number handed out or assigned so far.
    largest_num: ObjNum,
}

impl Context {
    pub fn new() -> Context {
        Context::default()
    }

    /// Reserves a fresh reference with the next unused object number and generation 0.
    pub fn next_ref(&mut self) -> ObjRef {
        self.largest_num += 1;
        ObjRef { num: self.largest_num, gen: 0 }
    }

    /// Stores `obj` under a freshly assigned reference.
    pub fn register(&mut self, obj: Object) -> ObjRef {
        let objref = self.next_ref();
        log::trace!("Registering {objref}");
        self.objects.insert(objref, obj);
        objref
    }

    /// Stores `obj` under a caller-chosen reference, returning what was there before.
    pub fn assign(&mut self, objref: ObjRef, obj: Object) -> Option<Object> {
        self.largest_num = self.largest_num.max(objref.num);
        self.objects.insert(objref, obj)
    }

    /// Overwrites the object stored at `objref` without changing its identity.
    ///
    /// Replacing an unregistered reference stores the object there, like [`Self::assign()`].
    pub fn replace(&mut self, objref: ObjRef, obj: Object) -> Option<Object> {
        let prev = self.assign(objref, obj);
        match prev {
            Some(_) => log::trace!("Replaced {objref}"),
            None => log::debug!("Replace of unregistered {objref}, assigned instead")
        }
        prev
    }

    /// The object stored at `objref`, or [`Object::Null`] if there is none.
    pub fn lookup(&self, objref: &ObjRef) -> &Object {
        self.objects.get(objref).unwrap_or_else(|| {
            log::debug!("Dangling reference {objref}");
            &Object::Null
        })
    }

    pub fn lookup_mut(&mut self, objref: &ObjRef) -> Option<&mut Object> {
        self.objects.get_mut(objref)
    }

    /// The dictionary stored at `objref`, if that is what is stored there.
    pub fn lookup_dict(&self, objref: &ObjRef) -> Option<&Dict> {
        self.lookup(objref).as_dict()
    }

    /// Follows one level of indirection: for [`Object::Ref`], the object it points to (possibly
    /// [`Object::Null`]), otherwise `obj` itself. References are not chased any further.
    pub fn deref<'a>(&'a self, obj: &'a Object) -> &'a Object {
        match obj {
            Object::Ref(objref) => self.lookup(objref),
            _ => obj
        }
    }

    pub fn delete(&mut self, objref: &ObjRef) -> Option<Object> {
        self.objects.remove(objref)
    }

    pub fn contains(&self, objref: &ObjRef) -> bool {
        self.objects.contains_key(objref)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn largest_object_number(&self) -> ObjNum {
        self.largest_num
    }

    /// All registered objects in reference order.
    pub fn objects(&self) -> impl Iterator<Item = (&ObjRef, &Object)> {
        self.objects.iter()
    }

    /// Temporarily takes the object at `objref` out of the registry, so that it can be edited
    /// while the rest of the registry stays readable. The object is put back afterwards.
    pub(crate) fn with_taken<T>(&mut self, objref: ObjRef, f: impl FnOnce(&mut Object, &Context) -> T) -> Option<T> {
        let mut obj = self.objects.remove(&objref)?;
        let ret = f(&mut obj, self);
        self.objects.insert(objref, obj);
        Some(ret)
    }
}
