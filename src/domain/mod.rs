//! Domain values exposed by the ideas service layer.

pub mod idea;
pub mod query;
