use std::collections::HashSet;

use crate::base::*;
use super::AcroField;

/// The interactive form dictionary (the `/AcroForm` entry of the document catalog).
#[derive(Debug, Clone, Copy)]
pub struct AcroForm<'a> {
    dict: &'a Dict,
    ctx: &'a Context,
}

/// A field found while enumerating a form, with the reference it was found under if it is an
/// indirect object.
pub type FieldEntry<'a> = (Option<ObjRef>, AcroField<'a>);

impl<'a> AcroForm<'a> {
    pub fn new(dict: &'a Dict, ctx: &'a Context) -> AcroForm<'a> {
        AcroForm { dict, ctx }
    }

    pub fn dict(&self) -> &'a Dict {
        self.dict
    }

    /// The root fields, as listed in `/Fields`.
    pub fn fields(&self) -> Vec<FieldEntry<'a>> {
        self.field_entries(self.dict.get_resolved(b"Fields", self.ctx))
    }

    /// Every field of the form, depth first, parents before their kids.
    ///
    /// Only kids of non-terminal fields are visited: those of terminal fields are widgets. A
    /// reference seen a second time is skipped, so cyclic `/Kids` do not loop.
    pub fn all_fields(&self) -> Vec<FieldEntry<'a>> {
        let mut seen = HashSet::new();
        let mut ret = Vec::new();
        let mut stack = self.fields();
        stack.reverse();
        while let Some((objref, field)) = stack.pop() {
            if let Some(objref) = objref {
                if !seen.insert(objref) {
                    log::warn!("Field {objref} reached twice, skipping");
                    continue;
                }
            }
            if !field.is_terminal() {
                let mut kids = self.field_entries(field.get(b"Kids"));
                kids.reverse();
                stack.extend(kids);
            }
            ret.push((objref, field));
        }
        ret
    }

    fn field_entries(&self, arr: Option<&'a Object>) -> Vec<FieldEntry<'a>> {
        let Some(arr) = arr.and_then(Object::as_array) else {
            return vec![];
        };
        arr.iter()
            .filter_map(|obj| {
                let objref = obj.as_objref().copied();
                let dict = self.ctx.deref(obj).as_dict()?;
                Some((objref, AcroField::from_dict(dict, self.ctx)))
            })
            .collect()
    }

    /// The `/NeedAppearances` flag, `false` if absent.
    pub fn need_appearances(&self) -> bool {
        self.dict.get_resolved(b"NeedAppearances", self.ctx)
            .and_then(Object::as_bool)
            .unwrap_or(false)
    }

    /// The form-wide default appearance string, `/DA`.
    pub fn da(&self) -> Option<&'a [u8]> {
        self.dict.get_resolved(b"DA", self.ctx)?
            .as_string()
            .map(Vec::as_slice)
    }

    /// Finds a field by its fully qualified name.
    pub fn field_by_name(&self, name: &str) -> Option<FieldEntry<'a>> {
        self.all_fields()
            .into_iter()
            .find(|(_, field)| field.fully_qualified_name().as_deref() == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string(s: &[u8]) -> Object {
        Object::new_string(s)
    }

    /// person (Ff 2) -> { name (Tx), email (Tx, 2 widgets) }, agree (Btn)
    fn sample(ctx: &mut Context) -> (Dict, ObjRef) {
        let person = ctx.next_ref();
        let name = ctx.register(Object::Dict(Dict::from(vec![
            (Name::from(b"FT"), Object::new_name(b"Tx")),
            (Name::from(b"T"), string(b"name")),
            (Name::from(b"Parent"), Object::Ref(person)),
        ])));
        let w1 = ctx.register(Object::Dict(Dict::from(vec![(Name::from(b"Subtype"), Object::new_name(b"Widget"))])));
        let w2 = ctx.register(Object::Dict(Dict::from(vec![(Name::from(b"Subtype"), Object::new_name(b"Widget"))])));
        let email = ctx.register(Object::Dict(Dict::from(vec![
            (Name::from(b"FT"), Object::new_name(b"Tx")),
            (Name::from(b"T"), string(b"email")),
            (Name::from(b"Parent"), Object::Ref(person)),
            (Name::from(b"Kids"), Object::Array(vec![Object::Ref(w1), Object::Ref(w2)])),
        ])));
        ctx.assign(person, Object::Dict(Dict::from(vec![
            (Name::from(b"T"), string(b"person")),
            (Name::from(b"Ff"), Object::from(2)),
            (Name::from(b"Kids"), Object::Array(vec![Object::Ref(name), Object::Ref(email)])),
        ])));
        let agree = ctx.register(Object::Dict(Dict::from(vec![
            (Name::from(b"FT"), Object::new_name(b"Btn")),
            (Name::from(b"T"), string(b"agree")),
        ])));
        let form = Dict::from(vec![
            (Name::from(b"Fields"), Object::Array(vec![Object::Ref(person), Object::Ref(agree)])),
            (Name::from(b"NeedAppearances"), Object::Bool(true)),
            (Name::from(b"DA"), string(b"/Helv 0 Tf 0 g")),
        ]);
        (form, email)
    }

    #[test]
    fn test_fields() {
        let mut ctx = Context::new();
        let (dict, _) = sample(&mut ctx);
        let form = AcroForm::new(&dict, &ctx);
        let roots = form.fields()
            .into_iter()
            .map(|(_, field)| field.partial_name().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(roots, ["person", "agree"]);
        assert!(form.need_appearances());
        assert_eq!(form.da(), Some(&b"/Helv 0 Tf 0 g"[..]));
    }

    #[test]
    fn test_all_fields() {
        let mut ctx = Context::new();
        let (dict, email) = sample(&mut ctx);
        let form = AcroForm::new(&dict, &ctx);
        let all = form.all_fields();
        let names = all.iter()
            .map(|(_, field)| field.fully_qualified_name().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(names, ["person", "person.name", "person.email", "agree"]);
        let (email_ref, email_field) = all[2];
        assert_eq!(email_ref, Some(email));
        assert!(email_field.is_required());
        assert_eq!(email_field.widgets().len(), 2);
        assert!(!all[0].1.is_terminal());
    }

    #[test]
    fn test_field_by_name() {
        let mut ctx = Context::new();
        let (dict, email) = sample(&mut ctx);
        let form = AcroForm::new(&dict, &ctx);
        assert_eq!(form.field_by_name("person.email").map(|(objref, _)| objref), Some(Some(email)));
        assert!(form.field_by_name("email").is_none());
    }

    #[test]
    fn test_kids_cycle() {
        let mut ctx = Context::new();
        let a = ctx.next_ref();
        let b = ctx.next_ref();
        ctx.assign(a, Object::Dict(Dict::from(vec![
            (Name::from(b"T"), string(b"a")),
            (Name::from(b"Kids"), Object::Array(vec![Object::Ref(b)])),
        ])));
        ctx.assign(b, Object::Dict(Dict::from(vec![
            (Name::from(b"T"), string(b"b")),
            (Name::from(b"Kids"), Object::Array(vec![Object::Ref(a)])),
        ])));
        let dict = Dict::from(vec![(Name::from(b"Fields"), Object::Array(vec![Object::Ref(a)]))]);
        let form = AcroForm::new(&dict, &ctx);
        assert_eq!(form.all_fields().len(), 2);
    }

    #[test]
    fn test_empty() {
        let ctx = Context::new();
        let dict = Dict::new();
        let form = AcroForm::new(&dict, &ctx);
        assert!(form.fields().is_empty());
        assert!(form.all_fields().is_empty());
        assert!(!form.need_appearances());
        assert_eq!(form.da(), None);
    }
}
