//! Application state modules.

mod contact_form;

pub use contact_form::{ContactForm, SubmitStatus};
