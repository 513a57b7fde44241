//! Row rendering and canvas composition.

pub mod compose;
pub mod pipeline;
pub mod row;
