use std::sync::Arc;

use axum::{extract::State, Json};

use crate::generator::{self, OntIdentity, Profile, SerialGate};
use crate::models::*;
use crate::AppState;

use super::ApiError;

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

fn is_valid_vlan(vlan: u16) -> bool {
    (1..=4094).contains(&vlan)
}

/// Field-level checks for one form submission. Mirrors the interactive
/// form: the reason tag and the ONT identity fields gate everything, then
/// each tab adds its own parameter and serial-format requirements.
fn validate(req: &GenerateRequest, policy: generator::SerialPolicy) -> Result<(), ApiError> {
    if !VALID_REASONS.contains(&req.reason.as_str()) {
        return Err(ApiError::bad_request(
            "a data-creation reason is required (下发失败, 华为ONU or 加装IPTV)",
        ));
    }

    if req.profile.requires_ont_fields() {
        if req.serial.is_empty() {
            return Err(ApiError::bad_request("serial is required"));
        }
        if req.slot.is_empty() {
            return Err(ApiError::bad_request("slot is required"));
        }
        if req.pon_port.is_empty() {
            return Err(ApiError::bad_request("pon_port is required"));
        }
        if req.device_num.is_none() {
            return Err(ApiError::bad_request("device_num is required"));
        }
        if req.device_num.is_some_and(|n| n > generator::MAX_DEVICE_NUM) {
            return Err(ApiError::bad_request("device_num is out of range"));
        }
        if !is_numeric(&req.slot) {
            return Err(ApiError::bad_request("slot must be numeric"));
        }
        if !is_numeric(&req.pon_port) {
            return Err(ApiError::bad_request("pon_port must be numeric"));
        }
    }

    match &req.profile {
        Profile::HuaweiDeploy { biz_vlan, iptv_vlan }
        | Profile::HuaweiManual { biz_vlan, iptv_vlan }
        | Profile::ZteC300 { biz_vlan, iptv_vlan }
        | Profile::ZteC600Manual { biz_vlan, iptv_vlan }
        | Profile::ZteC600Deploy { biz_vlan, iptv_vlan } => {
            if !is_valid_vlan(*biz_vlan) {
                return Err(ApiError::bad_request("biz_vlan must be between 1 and 4094"));
            }
            if !is_valid_vlan(*iptv_vlan) {
                return Err(ApiError::bad_request("iptv_vlan must be between 1 and 4094"));
            }
        }
        Profile::HuaweiMulticast { multicast_vlan } => {
            if !is_valid_vlan(*multicast_vlan) {
                return Err(ApiError::bad_request(
                    "multicast_vlan must be between 1 and 4094",
                ));
            }
        }
        Profile::HuaweiOnu {
            ip_addr,
            voice_ip_addr,
            biz_vlan,
        } => {
            if ip_addr.is_empty() {
                return Err(ApiError::bad_request("ip_addr is required"));
            }
            if generator::huawei::onu_network(ip_addr).is_none() {
                return Err(ApiError::bad_request(
                    "ip_addr must be in 192.168.77.x or 10.155.x.x",
                ));
            }
            if let Some(vlan) = biz_vlan {
                if !is_valid_vlan(*vlan) {
                    return Err(ApiError::bad_request("biz_vlan must be between 1 and 4094"));
                }
            }
            if req.voice {
                let Some(voice_ip) = voice_ip_addr.as_deref().filter(|v| !v.is_empty()) else {
                    return Err(ApiError::bad_request("voice_ip_addr is required"));
                };
                if generator::huawei::voice_gateway(voice_ip).is_none() {
                    return Err(ApiError::bad_request(
                        "voice_ip_addr must be in 10.251.x.x or 10.66.x.x",
                    ));
                }
            }
        }
    }

    match req.profile.serial_gate() {
        SerialGate::Deploy => {
            if !generator::is_deploy_serial(&req.serial) {
                return Err(ApiError::bad_request(
                    "serial must be 0734 followed by 8 digits, optionally @swzx",
                ));
            }
        }
        SerialGate::Manual => {
            if !policy.allows(&req.serial) {
                return Err(ApiError::bad_request("serial does not match the expected format"));
            }
        }
        SerialGate::None => {}
    }

    Ok(())
}

/// Generate the command script for one form-entered device
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    validate(&req, state.config.manual_serial_policy)?;

    let ont = OntIdentity {
        serial: &req.serial,
        slot: &req.slot,
        pon_port: &req.pon_port,
        device_num: req.device_num.unwrap_or_default(),
    };
    let lines = generator::render(&ont, &req.profile, req.voice);
    let output = generator::assemble(&lines);

    tracing::info!(
        device_type = %req.profile.device_type(),
        serial = %req.serial,
        "generated configuration script"
    );
    Ok(Json(GenerateResponse { output }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SerialPolicy;

    fn base_request(profile_json: &str) -> GenerateRequest {
        let json = format!(
            r#"{{"reason":"下发失败","serial":"48575443EC5525AD","slot":"1","pon_port":"14","device_num":80,{}}}"#,
            profile_json
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_reason_gates_generation() {
        let mut req = base_request(r#""profile":"huawei-manual","biz_vlan":100,"iptv_vlan":200"#);
        req.reason = "something else".to_string();
        assert!(validate(&req, SerialPolicy::Exact16).is_err());
        req.reason = "加装IPTV".to_string();
        assert!(validate(&req, SerialPolicy::Exact16).is_ok());
    }

    #[test]
    fn test_deploy_serial_format_enforced() {
        let mut req = base_request(r#""profile":"huawei-deploy","biz_vlan":100,"iptv_vlan":200"#);
        assert!(validate(&req, SerialPolicy::Exact16).is_err());
        req.serial = "073412345678".to_string();
        assert!(validate(&req, SerialPolicy::Exact16).is_ok());
        req.serial = "073412345678@swzx".to_string();
        assert!(validate(&req, SerialPolicy::Exact16).is_ok());
    }

    #[test]
    fn test_manual_serial_policy_is_configurable() {
        let mut req = base_request(r#""profile":"zte-c300","biz_vlan":100,"iptv_vlan":200"#);
        req.serial = "SHORTSN".to_string();
        assert!(validate(&req, SerialPolicy::Exact16).is_err());
        assert!(validate(&req, SerialPolicy::Alphanumeric).is_ok());
    }

    #[test]
    fn test_onu_ip_prefix_checks() {
        let mut req = base_request(r#""profile":"huawei-onu","ip_addr":"172.16.0.5""#);
        assert!(validate(&req, SerialPolicy::Exact16).is_err());

        req = base_request(r#""profile":"huawei-onu","ip_addr":"10.155.42.9""#);
        assert!(validate(&req, SerialPolicy::Exact16).is_ok());

        req.voice = true;
        assert!(validate(&req, SerialPolicy::Exact16).is_err());

        req = base_request(
            r#""profile":"huawei-onu","ip_addr":"10.155.42.9","voice_ip_addr":"10.66.8.2""#,
        );
        req.voice = true;
        assert!(validate(&req, SerialPolicy::Exact16).is_ok());
    }

    #[test]
    fn test_multicast_needs_no_ont_fields() {
        let req: GenerateRequest = serde_json::from_str(
            r#"{"reason":"下发失败","profile":"huawei-multicast","multicast_vlan":2500}"#,
        )
        .unwrap();
        assert!(validate(&req, SerialPolicy::Exact16).is_ok());
    }

    #[test]
    fn test_device_num_upper_bound() {
        let mut req = base_request(r#""profile":"huawei-manual","biz_vlan":100,"iptv_vlan":200"#);
        req.device_num = Some(u32::MAX);
        assert!(validate(&req, SerialPolicy::Exact16).is_err());
        req.device_num = Some(crate::generator::MAX_DEVICE_NUM);
        assert!(validate(&req, SerialPolicy::Exact16).is_ok());
    }

    #[test]
    fn test_vlan_bounds() {
        let req = base_request(r#""profile":"huawei-manual","biz_vlan":4095,"iptv_vlan":200"#);
        assert!(validate(&req, SerialPolicy::Exact16).is_err());
        let req = base_request(r#""profile":"huawei-manual","biz_vlan":4094,"iptv_vlan":1"#);
        assert!(validate(&req, SerialPolicy::Exact16).is_ok());
    }
}
