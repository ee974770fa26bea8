use std::fmt::{Debug, Formatter};

use crate::base::*;
use super::{flags, FieldType, MAX_TREE_DEPTH};

/// Whether a field dictionary is a leaf of the field tree or a container of other fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Holds a value. Its `/Kids`, if any, are widget annotations.
    Terminal,
    /// Has `/Kids` which are fields themselves.
    NonTerminal,
}

impl FieldKind {
    /// Classifies a field dictionary by its own entries: `/FT` makes it terminal, otherwise
    /// `/Kids` makes it non-terminal. A dictionary with neither is a terminal field.
    ///
    /// Entries count as present the same way [`AcroField::get()`] sees them: references are
    /// resolved through `ctx`, and `null` or unresolvable values are absent.
    pub fn of(dict: &Dict, ctx: Option<&Context>) -> FieldKind {
        let field = FieldDict { dict, ctx };
        if field.get(b"FT").is_none() && field.get(b"Kids").is_some() {
            FieldKind::NonTerminal
        } else {
            FieldKind::Terminal
        }
    }
}

/// A field dictionary together with the registry used to resolve references found in it.
#[derive(Clone, Copy)]
pub struct FieldDict<'a> {
    dict: &'a Dict,
    ctx: Option<&'a Context>,
}

impl<'a> FieldDict<'a> {
    pub fn dict(&self) -> &'a Dict {
        self.dict
    }

    pub fn context(&self) -> Option<&'a Context> {
        self.ctx
    }

    /// Follows one level of indirection. Without a registry, references do not resolve.
    fn resolve(&self, obj: &'a Object) -> Option<&'a Object> {
        let obj = match (obj, self.ctx) {
            (Object::Ref(_), Some(ctx)) => ctx.deref(obj),
            (Object::Ref(objref), None) => {
                log::debug!("Cannot resolve {objref} without a registry");
                &Object::Null
            },
            _ => obj
        };
        (!obj.is_null()).then_some(obj)
    }

    fn get(&self, key: &[u8]) -> Option<&'a Object> {
        self.resolve(self.dict.get(key)?)
    }
}

/// Two views are equal when they look at equal dictionaries.
impl PartialEq for FieldDict<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.dict == other.dict
    }
}

impl Debug for FieldDict<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dict)
    }
}

/// A form field: a read-only view over a field dictionary.
///
/// The variant is decided once, when the view is created (see [`FieldKind::of()`]). Changing
/// `/FT` or `/Kids` of the underlying dictionary afterwards requires creating a new view.
///
/// Attributes `/FT`, `/Ff`, `/V`, `/DV` and `/DA` are inheritable: if missing in the field's own
/// dictionary, they are looked up in its `/Parent`, then the parent's parent, and so on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AcroField<'a> {
    Terminal(FieldDict<'a>),
    NonTerminal(FieldDict<'a>),
}

impl<'a> AcroField<'a> {
    /// Creates a view over `dict`, classifying it. References within `dict` are resolved
    /// through `ctx`.
    pub fn from_dict(dict: &'a Dict, ctx: &'a Context) -> AcroField<'a> {
        AcroField::new(dict, Some(ctx))
    }

    /// Creates a view over the dictionary registered at `objref`. Returns `None` if there is
    /// no dictionary there.
    pub fn from_ref(ctx: &'a Context, objref: &ObjRef) -> Option<AcroField<'a>> {
        Some(AcroField::from_dict(ctx.lookup_dict(objref)?, ctx))
    }

    /// Like [`Self::from_dict()`], but the registry is optional. Without one, entries holding
    /// references are treated as absent.
    pub fn new(dict: &'a Dict, ctx: Option<&'a Context>) -> AcroField<'a> {
        AcroField::with_kind(dict, ctx, FieldKind::of(dict, ctx))
    }

    pub(crate) fn with_kind(dict: &'a Dict, ctx: Option<&'a Context>, kind: FieldKind) -> AcroField<'a> {
        let inner = FieldDict { dict, ctx };
        match kind {
            FieldKind::Terminal => AcroField::Terminal(inner),
            FieldKind::NonTerminal => AcroField::NonTerminal(inner),
        }
    }

    fn inner(&self) -> &FieldDict<'a> {
        match self {
            AcroField::Terminal(inner) | AcroField::NonTerminal(inner) => inner
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            AcroField::Terminal(_) => FieldKind::Terminal,
            AcroField::NonTerminal(_) => FieldKind::NonTerminal,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AcroField::Terminal(_))
    }

    /// The underlying field dictionary.
    pub fn dict(&self) -> &'a Dict {
        self.inner().dict()
    }

    pub fn context(&self) -> Option<&'a Context> {
        self.inner().context()
    }

    /// An entry of this field's own dictionary, with one level of indirection resolved.
    pub fn get(&self, key: &[u8]) -> Option<&'a Object> {
        self.inner().get(key)
    }

    /// Looks up `key` in this field, then up the `/Parent` chain, returning the first value
    /// found, or `None` if the chain ends without one.
    ///
    /// Fails with [`Error::MalformedTree`] if no end of the chain is found within
    /// [`MAX_TREE_DEPTH`] dictionaries.
    pub fn try_inherited(&self, key: &[u8]) -> Result<Option<&'a Object>, Error> {
        let mut field = *self;
        for _ in 0..MAX_TREE_DEPTH {
            if let Some(obj) = field.get(key) {
                return Ok(Some(obj));
            }
            match field.parent() {
                Some(parent) => field = parent,
                None => return Ok(None)
            }
        }
        Err(Error::MalformedTree { key: Name::from(key), depth: MAX_TREE_DEPTH })
    }

    /// Like [`Self::try_inherited()`], but a malformed tree is logged and treated as the
    /// attribute not being found.
    pub fn inherited(&self, key: &[u8]) -> Option<&'a Object> {
        self.try_inherited(key).unwrap_or_else(|err| {
            log::warn!("{err}");
            None
        })
    }

    /// Iterates over this field and its ancestors, nearest first.
    pub fn ascend(&self) -> Ancestors<'a> {
        Ancestors { next: Some(*self), depth: 0 }
    }

    /// The parent field, from the `/Parent` entry (a reference or an inline dictionary).
    ///
    /// A parent has kids, so it is always viewed as [`FieldKind::NonTerminal`], even when it
    /// holds an inheritable `/FT` for them.
    pub fn parent(&self) -> Option<AcroField<'a>> {
        let dict = self.get(b"Parent")?.as_dict()?;
        Some(AcroField::with_kind(dict, self.context(), FieldKind::NonTerminal))
    }

    /// The raw `/Kids` array. Not inherited.
    pub fn kids(&self) -> Option<&'a Vec<Object>> {
        self.get(b"Kids")?.as_array()
    }

    /// For a non-terminal field, its child fields. Terminal fields have none: their `/Kids`
    /// are widgets (see [`Self::widgets()`]).
    pub fn kid_fields(&self) -> impl Iterator<Item = AcroField<'a>> {
        let inner = *self.inner();
        let kids = match self {
            AcroField::NonTerminal(_) => self.kids(),
            AcroField::Terminal(_) => None
        };
        kids.into_iter()
            .flatten()
            .filter_map(move |kid| inner.resolve(kid)?.as_dict())
            .map(move |dict| AcroField::new(dict, inner.context()))
    }

    /// For a terminal field, the dictionaries of its widget annotations. A terminal field
    /// without `/Kids` is merged with its single widget, so then its own dictionary is returned.
    pub fn widgets(&self) -> Vec<&'a Dict> {
        match self {
            AcroField::NonTerminal(_) => vec![],
            AcroField::Terminal(inner) => match self.kids() {
                Some(kids) => kids.iter()
                    .filter_map(|kid| inner.resolve(kid)?.as_dict())
                    .collect(),
                None => vec![inner.dict()]
            }
        }
    }

    /// The field type name, `/FT`. Inheritable.
    pub fn ft(&self) -> Option<&'a Name> {
        self.inherited(b"FT")?.as_name()
    }

    /// The field type, if `/FT` resolves to one of the standard types.
    pub fn field_type(&self) -> Option<FieldType> {
        FieldType::from_name(self.ft()?)
    }

    /// The partial field name, `/T`. Not inherited.
    pub fn t(&self) -> Option<&'a [u8]> {
        self.local_string(b"T")
    }

    /// The alternate field name (tooltip), `/TU`. Not inherited.
    pub fn tu(&self) -> Option<&'a [u8]> {
        self.local_string(b"TU")
    }

    /// The mapping name used when exporting, `/TM`. Not inherited.
    pub fn tm(&self) -> Option<&'a [u8]> {
        self.local_string(b"TM")
    }

    fn local_string(&self, key: &[u8]) -> Option<&'a [u8]> {
        self.get(key)?.as_string().map(Vec::as_slice)
    }

    /// The field flags, `/Ff`. Inheritable.
    pub fn ff(&self) -> Option<&'a Number> {
        self.inherited(b"Ff")?.as_number()
    }

    /// The field value, `/V`. Inheritable.
    pub fn v(&self) -> Option<&'a Object> {
        self.inherited(b"V")
    }

    /// The default value, `/DV`. Inheritable.
    pub fn dv(&self) -> Option<&'a Object> {
        self.inherited(b"DV")
    }

    /// The default appearance string, `/DA`. Inheritable.
    pub fn da(&self) -> Option<&'a [u8]> {
        self.inherited(b"DA")?.as_string().map(Vec::as_slice)
    }

    /// The additional-actions dictionary, `/AA`. Not inherited.
    pub fn aa(&self) -> Option<&'a Dict> {
        self.get(b"AA")?.as_dict()
    }

    pub fn partial_name(&self) -> Option<String> {
        self.t().map(decode_text_string)
    }

    /// The partial names of this field and all its ancestors, outermost first, joined by `.`.
    /// Fields without `/T` are skipped.
    pub fn fully_qualified_name(&self) -> Option<String> {
        let mut names = self.ascend()
            .filter_map(|field| field.partial_name())
            .collect::<Vec<_>>();
        if names.is_empty() {
            return None;
        }
        names.reverse();
        Some(names.join("."))
    }

    /// The resolved `/Ff`, or 0 if no field in the chain has it.
    pub fn get_flags(&self) -> u32 {
        // Ff is a 32-bit field, keep the low bits.
        self.ff().map_or(0, |num| num.as_i64() as u32)
    }

    /// Whether flag `bit` is set. Always `false` for bits beyond the 32-bit field.
    pub fn has_flag(&self, bit: u32) -> bool {
        flags::mask(bit).is_some_and(|mask| self.get_flags() & mask != 0)
    }

    pub fn is_read_only(&self) -> bool {
        self.has_flag(flags::READ_ONLY)
    }

    pub fn is_required(&self) -> bool {
        self.has_flag(flags::REQUIRED)
    }

    pub fn is_no_export(&self) -> bool {
        self.has_flag(flags::NO_EXPORT)
    }

    /// Same as [`Self::v()`].
    pub fn get_value(&self) -> Option<&'a Object> {
        self.v()
    }
}

/// Iterator returned by [`AcroField::ascend()`].
///
/// Stops after [`MAX_TREE_DEPTH`] fields even if the chain continues.
pub struct Ancestors<'a> {
    next: Option<AcroField<'a>>,
    depth: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = AcroField<'a>;

    fn next(&mut self) -> Option<AcroField<'a>> {
        let field = self.next.take()?;
        if self.depth == MAX_TREE_DEPTH {
            log::warn!("/Parent chain longer than {MAX_TREE_DEPTH}, stopping");
            return None;
        }
        self.depth += 1;
        self.next = field.parent();
        Some(field)
    }
}

impl Context {
    /// A field view over the dictionary registered at `objref`.
    pub fn field(&self, objref: &ObjRef) -> Option<AcroField<'_>> {
        AcroField::from_ref(self, objref)
    }
}
