//! DTO modules that bridge services with templates and APIs.

pub mod ideas;
