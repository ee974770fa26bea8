use std::fmt::{Display, Formatter};

use crate::base::Name;

/// The type of a form field, as given by its (possibly inherited) `/FT` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// `/Btn`: check boxes, radio buttons and push buttons.
    Button,
    /// `/Tx`
    Text,
    /// `/Ch`: list boxes and combo boxes.
    Choice,
    /// `/Sig`
    Signature,
}

impl FieldType {
    /// Parses the `/FT` value. Returns `None` for names the standard does not define.
    pub fn from_name(name: &Name) -> Option<FieldType> {
        match name.as_slice() {
            b"Btn" => Some(FieldType::Button),
            b"Tx" => Some(FieldType::Text),
            b"Ch" => Some(FieldType::Choice),
            b"Sig" => Some(FieldType::Signature),
            _ => None
        }
    }

    pub fn as_name(&self) -> Name {
        Name::from(match self {
            FieldType::Button => &b"Btn"[..],
            FieldType::Text => b"Tx",
            FieldType::Choice => b"Ch",
            FieldType::Signature => b"Sig",
        })
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FieldType::Button => "Button",
            FieldType::Text => "Text",
            FieldType::Choice => "Choice",
            FieldType::Signature => "Signature",
        })
    }
}
