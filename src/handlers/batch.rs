use axum::Json;

use crate::generator;
use crate::models::*;

use super::ApiError;

/// Batch generation: the VLAN ranges are global parameters and reject the
/// whole run; per-line problems come back as warnings next to the script.
pub async fn generate(
    Json(req): Json<BatchGenerateRequest>,
) -> Result<Json<BatchGenerateResponse>, ApiError> {
    let out = generator::generate_batch(&req.data, req.biz_vlan, req.iptv_vlan)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    for warning in &out.warnings {
        tracing::warn!("batch generation: {}", warning);
    }
    tracing::info!(
        "batch generation produced {} blocks ({} lines skipped)",
        out.count,
        out.warnings.len()
    );

    Ok(Json(BatchGenerateResponse {
        output: out.script,
        count: out.count,
        warnings: out.warnings,
    }))
}
