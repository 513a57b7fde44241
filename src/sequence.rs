//! Labelled sequence records: parsing, formatting and format validation.

pub mod parse;
pub mod record;
pub mod validate;
