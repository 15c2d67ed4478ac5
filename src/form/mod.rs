//! Form model: editable fields, the budget slider, contact validation and
//! the payload posted to the mail endpoint.

pub mod budget;
pub mod field;
pub mod submission;
pub mod validate;
