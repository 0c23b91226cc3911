use serde::{Deserialize, Serialize};

/// DeviceRecord is one optical network terminal as seen in an OLT
/// autofind dump, plus its allocated device number within the PON port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub serial: String,
    /// Logical identifier (LOID). Empty when the discovered value does not
    /// carry the 0734 operator prefix.
    #[serde(default)]
    pub logical_id: String,
    pub frame: String,
    pub slot: String,
    pub pon_port: String,
    pub device_num: u32,
}

impl DeviceRecord {
    /// Render the record as one import line:
    /// `serial,logicalId,frame,slot,port,deviceNumber`
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.serial, self.logical_id, self.frame, self.slot, self.pon_port, self.device_num
        )
    }
}

/// ExtractRequest carries raw `display ont autofind` output
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

/// ExtractResponse returns the extracted records in batch import format
#[derive(Debug, Clone, Serialize)]
pub struct ExtractResponse {
    pub records: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
