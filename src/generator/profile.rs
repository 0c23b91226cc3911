use serde::Deserialize;

/// One {vendor, sub-mode} combination with the parameters that combination
/// actually uses. The JSON tag matches the form tab identifiers.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "profile", rename_all = "kebab-case")]
pub enum Profile {
    HuaweiDeploy {
        biz_vlan: u16,
        iptv_vlan: u16,
    },
    HuaweiManual {
        biz_vlan: u16,
        iptv_vlan: u16,
    },
    HuaweiOnu {
        ip_addr: String,
        #[serde(default)]
        voice_ip_addr: Option<String>,
        /// Outer VLAN for the 24 per-port service-port lines. The form does
        /// not require it on this tab, so it may be absent.
        #[serde(default)]
        biz_vlan: Option<u16>,
    },
    HuaweiMulticast {
        multicast_vlan: u16,
    },
    ZteC300 {
        biz_vlan: u16,
        iptv_vlan: u16,
    },
    ZteC600Manual {
        biz_vlan: u16,
        iptv_vlan: u16,
    },
    ZteC600Deploy {
        biz_vlan: u16,
        iptv_vlan: u16,
    },
}

impl Profile {
    /// Vendor family tag used on persisted configurations
    pub fn device_type(&self) -> &'static str {
        match self {
            Profile::HuaweiDeploy { .. }
            | Profile::HuaweiManual { .. }
            | Profile::HuaweiOnu { .. }
            | Profile::HuaweiMulticast { .. } => "huawei",
            Profile::ZteC300 { .. }
            | Profile::ZteC600Manual { .. }
            | Profile::ZteC600Deploy { .. } => "zte",
        }
    }

    /// Multicast is the only profile that works without the ONT identity
    /// fields (serial, slot, PON port, device number).
    pub fn requires_ont_fields(&self) -> bool {
        !matches!(self, Profile::HuaweiMulticast { .. })
    }

    /// Which serial-number format check applies before generation
    pub fn serial_gate(&self) -> SerialGate {
        match self {
            Profile::HuaweiDeploy { .. } | Profile::ZteC600Deploy { .. } => SerialGate::Deploy,
            Profile::HuaweiManual { .. }
            | Profile::ZteC300 { .. }
            | Profile::ZteC600Manual { .. } => SerialGate::Manual,
            Profile::HuaweiOnu { .. } | Profile::HuaweiMulticast { .. } => SerialGate::None,
        }
    }
}

/// Serial-number format gate per tab family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialGate {
    /// Deploy tabs: 0734 + 8 digits, optional @swzx suffix
    Deploy,
    /// Manual-auth tabs: policy-dependent, see [`SerialPolicy`]
    Manual,
    /// No format requirement
    None,
}

/// The two deployed validators for manual-auth serials disagree, so the
/// effective policy is configurable (`MANUAL_SERIAL_POLICY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialPolicy {
    /// Exactly 16 characters (interactive form validator)
    Exact16,
    /// Any non-empty alphanumeric string (form-field validator)
    Alphanumeric,
}

impl SerialPolicy {
    pub fn allows(&self, serial: &str) -> bool {
        match self {
            SerialPolicy::Exact16 => serial.chars().count() == 16,
            SerialPolicy::Alphanumeric => {
                !serial.is_empty() && serial.chars().all(|c| c.is_ascii_alphanumeric())
            }
        }
    }
}

/// Deploy-tab account format: 0734 followed by 8 digits, with an optional
/// literal @swzx suffix.
pub fn is_deploy_serial(serial: &str) -> bool {
    let body = serial.strip_suffix("@swzx").unwrap_or(serial);
    let Some(digits) = body.strip_prefix("0734") else {
        return false;
    };
    digits.len() == 8 && digits.chars().all(|c| c.is_ascii_digit())
}
