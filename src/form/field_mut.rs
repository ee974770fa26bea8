use crate::base::*;
use super::{flags, AcroField, FieldKind};

/// A form field view that allows editing the field dictionary.
///
/// All setters write into the field's own dictionary, never into an ancestor. Setting an
/// inheritable attribute this way therefore overrides whatever the field inherited before.
///
/// For dictionaries stored in a [`Context`], use [`Context::with_field_mut()`].
pub struct AcroFieldMut<'a> {
    dict: &'a mut Dict,
    ctx: Option<&'a Context>,
    kind: FieldKind,
}

impl<'a> AcroFieldMut<'a> {
    /// Creates a view over `dict`, classifying it. `ctx` is used for resolving references in
    /// `dict` and its ancestors; it must not be the registry `dict` is stored in.
    pub fn new(dict: &'a mut Dict, ctx: Option<&'a Context>) -> AcroFieldMut<'a> {
        let kind = FieldKind::of(dict, ctx);
        AcroFieldMut { dict, ctx, kind }
    }

    /// A read-only view of the same field, keeping the classification of this one.
    pub fn as_field(&self) -> AcroField<'_> {
        AcroField::with_kind(self.dict, self.ctx, self.kind)
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn dict(&self) -> &Dict {
        self.dict
    }

    pub fn get_flags(&self) -> u32 {
        self.as_field().get_flags()
    }

    /// Writes `/Ff` into this field's dictionary.
    pub fn set_flags(&mut self, flags: u32) {
        self.dict.set(b"Ff", Object::Number(Number::from(flags)));
    }

    pub fn set_flag(&mut self, bit: u32) {
        self.update_flag(bit, |flags, mask| flags | mask)
    }

    pub fn unset_flag(&mut self, bit: u32) {
        self.update_flag(bit, |flags, mask| flags & !mask)
    }

    pub fn toggle_flag(&mut self, bit: u32) {
        self.update_flag(bit, |flags, mask| flags ^ mask)
    }

    /// Bits beyond the 32-bit field leave `/Ff` untouched.
    fn update_flag(&mut self, bit: u32, op: impl FnOnce(u32, u32) -> u32) {
        if let Some(mask) = flags::mask(bit) {
            let flags = self.get_flags();
            self.set_flags(op(flags, mask));
        }
    }

    fn set_flag_to(&mut self, bit: u32, on: bool) {
        if on {
            self.set_flag(bit)
        } else {
            self.unset_flag(bit)
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.as_field().is_read_only()
    }

    pub fn set_read_only(&mut self, on: bool) {
        self.set_flag_to(flags::READ_ONLY, on)
    }

    pub fn is_required(&self) -> bool {
        self.as_field().is_required()
    }

    pub fn set_is_required(&mut self, on: bool) {
        self.set_flag_to(flags::REQUIRED, on)
    }

    pub fn is_no_export(&self) -> bool {
        self.as_field().is_no_export()
    }

    pub fn set_is_no_export(&mut self, on: bool) {
        self.set_flag_to(flags::NO_EXPORT, on)
    }

    pub fn get_value(&self) -> Option<&Object> {
        self.as_field().get_value()
    }

    /// Writes `/V` into this field's dictionary.
    pub fn set_value(&mut self, value: Object) {
        self.dict.set(b"V", value);
    }

    /// Writes `/DV` into this field's dictionary.
    pub fn set_default_value(&mut self, value: Object) {
        self.dict.set(b"DV", value);
    }

    /// Writes `/DA` into this field's dictionary.
    pub fn set_default_appearance(&mut self, da: &str) {
        self.dict.set(b"DA", Object::new_string(da.as_bytes()));
    }

    /// Sets or, with `None`, removes `/T`.
    pub fn set_partial_name(&mut self, name: Option<&str>) {
        match name {
            Some(name) => {
                self.dict.set(b"T", Object::String(encode_text_string(name)));
            },
            None => {
                self.dict.delete(b"T");
            }
        }
    }

    /// Appends a reference to a child field or widget to `/Kids`, creating the array if needed.
    ///
    /// Fails if `/Kids` exists but is not an inline array. NB that the classification of this
    /// view does not change when `/Kids` is created.
    pub fn add_kid(&mut self, kid: ObjRef) -> Result<(), Error> {
        if !self.dict.contains(b"Kids") {
            self.dict.set(b"Kids", Object::Array(vec![]));
        }
        let kids = self.dict.get_mut(b"Kids")
            .and_then(Object::as_array_mut)
            .ok_or(Error::WrongType { key: Name::from(b"Kids"), expected: "an array" })?;
        kids.push(Object::Ref(kid));
        Ok(())
    }
}

impl Context {
    /// Runs `f` with an editable view of the field dictionary registered at `objref`.
    ///
    /// While `f` runs, the rest of the registry is available for resolving the field's
    /// ancestors, but the field's own entry is not: a `/Parent` chain leading back to it ends
    /// there.
    pub fn with_field_mut<T>(&mut self, objref: ObjRef, f: impl FnOnce(&mut AcroFieldMut<'_>) -> T) -> Result<T, Error> {
        self.with_taken(objref, |obj, ctx| match obj.as_dict_mut() {
            Some(dict) => Ok(f(&mut AcroFieldMut::new(dict, Some(ctx)))),
            None => Err(Error::NotADict(objref))
        }).unwrap_or(Err(Error::Dangling(objref)))
    }
}
