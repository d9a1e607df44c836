//! Request-level authentication plumbing.
//!
//! - [`auth`] -- JWT Bearer-token extractor for API handlers.
//! - [`session`] -- session-cookie helpers for the page gate.

pub mod auth;
pub mod session;
