//! Domain types, error taxonomy, and the gift text parser.

pub mod error;
pub mod parser;
pub mod types;
