mod batch;
pub mod huawei;
mod profile;
mod vlan;
pub mod zte;

pub use batch::{generate_batch, BatchOutput};
pub use profile::{is_deploy_serial, Profile, SerialGate, SerialPolicy};
pub use vlan::{VlanAllocator, VlanRange};

/// ONT identity fields shared by every profile except multicast.
#[derive(Debug, Clone, Copy)]
pub struct OntIdentity<'a> {
    pub serial: &'a str,
    pub slot: &'a str,
    pub pon_port: &'a str,
    pub device_num: u32,
}

/// Largest device number the inner-VLAN offsets can carry without
/// overflowing. Input above this bound is rejected before rendering.
pub const MAX_DEVICE_NUM: u32 = u32::MAX - 3500;

/// Inner VLAN carried on the business service, fixed protocol offset.
pub fn inner_biz_vlan(device_num: u32) -> u32 {
    device_num + 1000
}

/// Inner VLAN carried on the IPTV service, fixed protocol offset.
pub fn inner_iptv_vlan(device_num: u32) -> u32 {
    device_num + 3500
}

/// Render the command lines for one ONT under the given profile.
pub fn render(ont: &OntIdentity, profile: &Profile, voice: bool) -> Vec<String> {
    match profile {
        Profile::HuaweiDeploy { biz_vlan, iptv_vlan } => {
            huawei::deploy(ont, *biz_vlan, *iptv_vlan, voice)
        }
        Profile::HuaweiManual { biz_vlan, iptv_vlan } => {
            huawei::manual(ont, *biz_vlan, *iptv_vlan, voice)
        }
        Profile::HuaweiOnu {
            ip_addr,
            voice_ip_addr,
            biz_vlan,
        } => huawei::onu(ont, ip_addr, voice_ip_addr.as_deref(), *biz_vlan, voice),
        Profile::HuaweiMulticast { multicast_vlan } => huawei::multicast(*multicast_vlan),
        Profile::ZteC300 { biz_vlan, iptv_vlan } => zte::c300(ont, *biz_vlan, *iptv_vlan, voice),
        Profile::ZteC600Manual { biz_vlan, iptv_vlan } => {
            zte::c600_manual(ont, *biz_vlan, *iptv_vlan, voice)
        }
        Profile::ZteC600Deploy { biz_vlan, iptv_vlan } => {
            zte::c600_deploy(ont, *biz_vlan, *iptv_vlan, voice)
        }
    }
}

/// Join rendered lines into the final script: newline-separated with a
/// terminating double newline. Lines that themselves end in '\n' produce
/// the blank separator lines the device CLIs expect.
pub fn assemble(lines: &[String]) -> String {
    format!("{}\n\n", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_vlan_offsets() {
        assert_eq!(inner_biz_vlan(5), 1005);
        assert_eq!(inner_iptv_vlan(5), 3505);
        assert_eq!(inner_biz_vlan(80), 1080);
        assert_eq!(inner_iptv_vlan(80), 3580);
    }

    #[test]
    fn test_offsets_appear_in_rendered_output() {
        let ont = OntIdentity {
            serial: "48575443EC5525AD",
            slot: "1",
            pon_port: "14",
            device_num: 5,
        };
        for profile in [
            Profile::HuaweiDeploy { biz_vlan: 100, iptv_vlan: 200 },
            Profile::HuaweiManual { biz_vlan: 100, iptv_vlan: 200 },
            Profile::ZteC300 { biz_vlan: 100, iptv_vlan: 200 },
            Profile::ZteC600Manual { biz_vlan: 100, iptv_vlan: 200 },
            Profile::ZteC600Deploy { biz_vlan: 100, iptv_vlan: 200 },
        ] {
            let script = assemble(&render(&ont, &profile, false));
            assert!(script.contains("1005"), "missing inner biz vlan: {script}");
            assert!(script.contains("3505"), "missing inner iptv vlan: {script}");
        }
    }

    #[test]
    fn test_assemble_terminates_with_double_newline() {
        let script = assemble(&["a".to_string(), "b".to_string()]);
        assert_eq!(script, "a\nb\n\n");
    }

    #[test]
    fn test_render_is_idempotent() {
        let ont = OntIdentity {
            serial: "073412345678",
            slot: "2",
            pon_port: "3",
            device_num: 81,
        };
        let profile = Profile::HuaweiDeploy { biz_vlan: 150, iptv_vlan: 250 };
        let first = assemble(&render(&ont, &profile, true));
        let second = assemble(&render(&ont, &profile, true));
        assert_eq!(first, second);
    }
}
