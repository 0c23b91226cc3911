use serde::{Deserialize, Serialize};

use crate::generator::{Profile, VlanRange};

/// GenerateRequest is one form submission: the ONT identity fields, the
/// selected profile tab with its parameters, the additive voice flag,
/// and the data-creation reason tag.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub reason: String,
    #[serde(default)]
    pub serial: String,
    #[serde(default)]
    pub slot: String,
    #[serde(default)]
    pub pon_port: String,
    #[serde(default)]
    pub device_num: Option<u32>,
    #[serde(default)]
    pub voice: bool,
    #[serde(flatten)]
    pub profile: Profile,
}

/// GenerateResponse wraps the rendered command script
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub output: String,
}

/// BatchGenerateRequest carries the imported record lines plus the two
/// VLAN pools to allocate from.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchGenerateRequest {
    pub data: String,
    pub biz_vlan: VlanRange,
    pub iptv_vlan: VlanRange,
}

/// BatchGenerateResponse: the concatenated script, how many records made it
/// in, and one warning per skipped input line.
#[derive(Debug, Clone, Serialize)]
pub struct BatchGenerateResponse {
    pub output: String,
    pub count: usize,
    pub warnings: Vec<String>,
}
