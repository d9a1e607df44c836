//! Response envelope.

use serde::Serialize;

/// Every successful API response wraps its payload as `{ "data": ... }`.
///
/// Handlers return this instead of building the envelope with
/// `serde_json::json!` so the payload type stays visible in signatures.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
