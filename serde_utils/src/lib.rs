//! Serde helpers for the string-typed conventions of the Beacon Node API.

pub mod query_flag;
pub mod string_or_native;
