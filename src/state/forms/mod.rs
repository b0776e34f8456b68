//! Form domain layer
//!
//! Section screens are lists of focusable items derived from the document.
//! Editing an item yields a `DocumentAction`; the form is rebuilt afterwards.

pub(crate) mod field;
mod form_state;

pub use field::{FieldKind, FormField};
pub use form_state::{Form, FormItem, SectionForm};
