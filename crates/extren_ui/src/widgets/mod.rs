//! Small reusable view helpers.

mod form;

pub use form::{field_row, status_bar};
