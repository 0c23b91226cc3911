use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The closed set of accepted data-creation reason tags. Generation and
/// persistence are both gated on one of these being selected.
pub const VALID_REASONS: [&str; 3] = ["下发失败", "华为ONU", "加装IPTV"];

/// DeviceConfig is one persisted generation: the input parameters plus the
/// full command output, tagged with the reason it was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub id: i64,
    pub device_type: String,
    pub serial: String,
    pub frame_no: String,
    pub slot: String,
    pub pon_port: String,
    pub device_num: String,
    pub biz_vlan: String,
    pub iptv_vlan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_ip_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multicast_vlan: Option<String>,
    pub has_voice: bool,
    pub command_output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// CreateConfigRequest for saving a generated configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CreateConfigRequest {
    pub device_type: String,
    pub serial: String,
    #[serde(default)]
    pub slot: String,
    #[serde(default)]
    pub pon_port: String,
    #[serde(default)]
    pub device_num: String,
    #[serde(default)]
    pub biz_vlan: String,
    #[serde(default)]
    pub iptv_vlan: String,
    #[serde(default)]
    pub ip_addr: Option<String>,
    #[serde(default)]
    pub voice_ip_addr: Option<String>,
    #[serde(default)]
    pub multicast_vlan: Option<String>,
    #[serde(default)]
    pub has_voice: bool,
    pub command_output: String,
    pub reason: String,
}

/// Filters for listing saved configurations
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigQuery {
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default)]
    pub serial: Option<String>,
}

/// BatchDeleteRequest for removing several saved configurations at once
#[derive(Debug, Clone, Deserialize)]
pub struct BatchDeleteRequest {
    pub ids: Vec<i64>,
}
