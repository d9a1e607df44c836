pub mod auth;
pub mod events;
pub mod gifts;
pub mod parse;
pub mod recipients;
