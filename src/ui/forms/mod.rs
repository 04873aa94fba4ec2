//! Form rendering module
//!
//! - `field_renderer`: label, input and error slot of a single field
//! - `contact_form`: the contact form block of the page

mod contact_form;
mod field_renderer;

pub use contact_form::contact_form_lines;
