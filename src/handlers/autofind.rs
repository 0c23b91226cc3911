use axum::Json;

use crate::autofind;
use crate::models::*;

use super::ApiError;

/// Extract device records from pasted autofind output. Zero extracted
/// records is a warning, not a failure: the caller keeps whatever it had.
pub async fn extract(Json(req): Json<ExtractRequest>) -> Result<Json<ExtractResponse>, ApiError> {
    if req.text.trim().is_empty() {
        return Err(ApiError::bad_request("text is required"));
    }

    let records = autofind::extract_records(&req.text);
    let count = records.len();
    if count == 0 {
        tracing::warn!("autofind extraction produced no valid records");
        return Ok(Json(ExtractResponse {
            records: String::new(),
            count: 0,
            warning: Some("no valid device records extracted from input".to_string()),
        }));
    }

    tracing::info!("extracted {} device records from autofind output", count);
    Ok(Json(ExtractResponse {
        records: autofind::to_csv(&records),
        count,
        warning: None,
    }))
}
