//! The PDF object graph and the interactive form field hierarchy built on top of it.
//!
//! [`Context`] owns indirect objects and resolves references to them. Form fields are views
//! over field dictionaries: see [`form::AcroField`] for reading, including attributes inherited
//! along the `/Parent` chain, and [`form::AcroFieldMut`] for editing.

pub mod base;
pub mod form;

pub use base::*;
pub use base::types::*;
