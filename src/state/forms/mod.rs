//! Form domain layer
//!
//! Contact form inputs, the validation rules applied to them and the error
//! slots that surface failures.

mod contact_form;
mod errors;
mod field;
mod validation;

pub use contact_form::{ContactForm, Form, SUBMIT_ROW};
pub use errors::ErrorPresenter;
pub use field::{FieldKey, FieldValue, FormField};
pub use validation::{
    validate_all, validate_email, validate_field, validate_message, validate_name,
    ValidationFailure, ValidationResult,
};
