//! Handler for the parser preview endpoint.

use axum::Json;
use serde::Deserialize;

use giftlist_core::parser::{parse, ParsedGift};

use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

/// Request body for `POST /parse`.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

/// POST /api/v1/parse
///
/// Run the heuristic text parser over pasted gift text and return the
/// extracted fields. Pure and total: this endpoint never fails on content.
pub async fn parse_text(
    _auth: AuthUser,
    Json(input): Json<ParseRequest>,
) -> Json<DataResponse<ParsedGift>> {
    Json(DataResponse {
        data: parse(&input.text),
    })
}
