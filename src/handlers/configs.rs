use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::models::*;
use crate::AppState;

use super::{created, ApiError, MessageResponse};

/// List saved configurations, newest first
pub async fn list_configs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConfigQuery>,
) -> Result<Json<Vec<DeviceConfig>>, ApiError> {
    let configs = state.store.list_configs(&query).await?;
    Ok(Json(configs))
}

/// Get a single saved configuration by ID
pub async fn get_config(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeviceConfig>, ApiError> {
    let config = state
        .store
        .get_config(id)
        .await?
        .ok_or_else(|| ApiError::not_found("config"))?;
    Ok(Json(config))
}

/// Save a generated configuration
pub async fn create_config(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateConfigRequest>,
) -> Result<(axum::http::StatusCode, Json<DeviceConfig>), ApiError> {
    if req.device_type.is_empty() || req.serial.is_empty() {
        return Err(ApiError::bad_request("device_type and serial are required"));
    }
    if req.command_output.is_empty() {
        return Err(ApiError::bad_request("command_output is required"));
    }
    if !VALID_REASONS.contains(&req.reason.as_str()) {
        return Err(ApiError::bad_request(
            "a data-creation reason is required (下发失败, 华为ONU or 加装IPTV)",
        ));
    }

    let config = state.store.create_config(&req).await?;
    Ok(created(config))
}

/// Update a saved configuration
pub async fn update_config(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<CreateConfigRequest>,
) -> Result<Json<DeviceConfig>, ApiError> {
    let config = state.store.update_config(id, &req).await?;
    Ok(Json(config))
}

/// Delete a saved configuration
pub async fn delete_config(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<axum::http::StatusCode, ApiError> {
    state.store.delete_config(id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// Delete several saved configurations at once
pub async fn batch_delete_configs(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BatchDeleteRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = state.store.batch_delete_configs(&req.ids).await?;
    Ok(MessageResponse::new(format!("deleted {} configs", deleted)))
}

/// Export all saved configurations as CSV (operator spreadsheet format)
pub async fn export_configs(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let configs = state.store.list_configs(&ConfigQuery::default()).await?;
    if configs.is_empty() {
        return Err(ApiError::bad_request("no data to export"));
    }

    let mut csv = String::from(
        "设备类型,序列号,框号,槽位,PON口,设备号,业务VLAN,IPTV VLAN,IP地址,语音IP地址,组播VLAN,语音开启,创建时间,原因\n",
    );
    for config in &configs {
        let device_type = if config.device_type == "huawei" {
            "华为OLT"
        } else {
            "中兴OLT"
        };
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
            device_type,
            config.serial,
            config.frame_no,
            config.slot,
            config.pon_port,
            config.device_num,
            config.biz_vlan,
            config.iptv_vlan,
            config.ip_addr.as_deref().unwrap_or(""),
            config.voice_ip_addr.as_deref().unwrap_or(""),
            config.multicast_vlan.as_deref().unwrap_or(""),
            if config.has_voice { "是" } else { "否" },
            config.created_at.format("%Y-%m-%d"),
            config.reason.as_deref().unwrap_or(""),
        ));
    }

    Ok((
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        csv,
    ))
}
