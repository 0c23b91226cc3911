//! Huawei OLT command templates. Line content is fixed by the upstream
//! provisioning convention; lines carrying an embedded trailing newline
//! render as blank separator lines in the assembled script, and repeated
//! service-port lines are part of the template, not duplication bugs.

use super::{inner_biz_vlan, inner_iptv_vlan, OntIdentity};

/// Auto-provisioned (loid-auth) configuration
pub fn deploy(ont: &OntIdentity, biz_vlan: u16, iptv_vlan: u16, voice: bool) -> Vec<String> {
    let inner_biz = inner_biz_vlan(ont.device_num);
    let inner_iptv = inner_iptv_vlan(ont.device_num);

    let mut lines = vec![
        format!("interface gpon 0/{}", ont.slot),
        format!(
            "ont add {} {} loid-auth {} always-on omci ont-lineprofile-id 2 ont-srvprofile-id 0 desc {}\n",
            ont.pon_port, ont.device_num, ont.serial, ont.serial
        ),
        "quit".to_string(),
        format!(
            "service-port vlan 8 gpon 0/{}/{} ont {} gemport 1 multi-service user-vlan 8 tag-transform translate\n",
            ont.slot, ont.pon_port, ont.device_num
        ),
        format!(
            "service-port vlan {} gpon 0/{}/{} ont {} gemport 0 multi-service user-vlan untagged tag-transform add-double inner-vlan {} inner-priority 0\n",
            biz_vlan, ont.slot, ont.pon_port, ont.device_num, inner_biz
        ),
    ];

    // The IPTV service-port is emitted twice by the template.
    for _ in 0..2 {
        lines.push(format!(
            "service-port vlan {} gpon 0/{}/{} ont {} gemport 2 multi-service user-vlan 30 tag-transform translate-and-add inner-vlan {} inner-priority 0\n",
            iptv_vlan, ont.slot, ont.pon_port, ont.device_num, inner_iptv
        ));
    }

    if voice {
        lines.push(format!(
            "service-port vlan 101 gpon 0/{}/{} ont {} gemport 3 multi-service user-vlan 100 tag-transform translate",
            ont.slot, ont.pon_port, ont.device_num
        ));
    }

    lines
}

/// Manual (sn-auth) configuration
pub fn manual(ont: &OntIdentity, biz_vlan: u16, iptv_vlan: u16, voice: bool) -> Vec<String> {
    let inner_biz = inner_biz_vlan(ont.device_num);
    let inner_iptv = inner_iptv_vlan(ont.device_num);

    let mut lines = vec![
        format!("interface gpon 0/{}", ont.slot),
        format!(
            "ont add {} {} sn-auth {} omci ont-lineprofile-id 1000 ont-srvprofile-id 1000 desc {}\n",
            ont.pon_port, ont.device_num, ont.serial, ont.serial
        ),
        format!(
            "ont port native-vlan {} {} eth 1 vlan 101 priority 0\n",
            ont.pon_port, ont.device_num
        ),
        format!(
            "ont port native-vlan {} {} eth 2 vlan 102 priority 0\n",
            ont.pon_port, ont.device_num
        ),
        "quit".to_string(),
        format!(
            "service-port vlan {} gpon 0/{}/{} ont {} gemport 0 multi-service user-vlan 101 tag-transform translate-and-add inner-vlan {} rx-cttr 6 tx-cttr 6",
            biz_vlan, ont.slot, ont.pon_port, ont.device_num, inner_biz
        ),
    ];

    for _ in 0..2 {
        lines.push(format!(
            "service-port vlan {} gpon 0/{}/{} ont {} gemport 0 multi-service user-vlan 102 tag-transform translate-and-add inner-vlan {} rx-cttr 6 tx-cttr 6",
            iptv_vlan, ont.slot, ont.pon_port, ont.device_num, inner_iptv
        ));
    }

    if voice {
        lines.push(format!(
            "service-port vlan 101 gpon 0/{}/{} ont {} gemport 0 multi-service user-vlan 100 tag-transform translate",
            ont.slot, ont.pon_port, ont.device_num
        ));
    }

    lines
}

/// Derive (gateway, management VLAN) from an ONU management IP.
/// Only the 192.168.77.x and 10.155.x.y prefixes are provisioned.
pub fn onu_network(ip_addr: &str) -> Option<(String, u16)> {
    if ip_addr.starts_with("192.168.77.") {
        Some(("192.168.77.1".to_string(), 77))
    } else if ip_addr.starts_with("10.155.") {
        let third = ip_addr.split('.').nth(2)?;
        Some((format!("10.155.{}.1", third), 99))
    } else {
        None
    }
}

/// Derive the voice gateway from a telephony IP (10.251.x.y or 10.66.x.y)
pub fn voice_gateway(voice_ip: &str) -> Option<String> {
    let third = voice_ip.split('.').nth(2)?;
    if voice_ip.starts_with("10.251.") {
        Some(format!("10.251.{}.1", third))
    } else if voice_ip.starts_with("10.66.") {
        Some(format!("10.66.{}.1", third))
    } else {
        None
    }
}

/// IP-addressed ONU configuration: OLT-side confirm plus 24 per-port
/// service-ports on both the OLT and ONU ends.
pub fn onu(
    ont: &OntIdentity,
    ip_addr: &str,
    voice_ip_addr: Option<&str>,
    biz_vlan: Option<u16>,
    voice: bool,
) -> Vec<String> {
    let (gateway, vlan_clause) = match onu_network(ip_addr) {
        Some((gw, vlan)) => (gw, format!("vlan {}", vlan)),
        None => (String::new(), String::new()),
    };
    let inner_base = inner_biz_vlan(ont.device_num);
    let biz = biz_vlan.map(|v| v.to_string()).unwrap_or_default();

    let mut lines = vec![
        "===== 华为ONU配置（OLT端） =====".to_string(),
        format!("interface gpon 0/{}", ont.slot),
        format!(
            "ont confirm {} sn-auth {} snmp ont-lineprofile-id 2016\n",
            ont.pon_port, ont.serial
        ),
        format!(
            "ont ipconfig {} {} static ip-address {} mask 255.255.255.0 {} priority 0 gateway {}\n",
            ont.pon_port, ont.device_num, ip_addr, vlan_clause, gateway
        ),
        "quit".to_string(),
        format!(
            "service-port {} gpon 0/{}/{} ont {} gemport 0 multi-service user-{} tag-transform translate\n",
            vlan_clause, ont.slot, ont.pon_port, ont.device_num, vlan_clause
        ),
    ];

    if voice {
        lines.push(format!(
            "service-port vlan 101 gpon 0/{}/{} ont {} gemport 0 multi-service user-vlan 101 tag-transform translate\n",
            ont.slot, ont.pon_port, ont.device_num
        ));
    }

    for i in 0..24u32 {
        let gemport = i + 1;
        let user_vlan = 2001 + i;
        let inner_vlan = inner_base + i;
        lines.push(format!(
            "service-port vlan {} gpon 0/{}/{} ont {} gemport {} multi-service user-vlan {} tag-transform translate-and-add inner-vlan {} rx-cttr 6 tx-cttr 6",
            biz, ont.slot, ont.pon_port, ont.device_num, gemport, user_vlan, inner_vlan
        ));
    }

    lines.extend([
        "\n===== 华为ONU配置（ONU端） =====".to_string(),
        "vlan 2001 to 2024 mux".to_string(),
        "y\n".to_string(),
        "port vlan 2001 to 2024 0/0 1".to_string(),
        "y\n".to_string(),
    ]);

    for i in 0..24u32 {
        let gemport = i + 1;
        let user_vlan = 2001 + i;
        lines.push(format!(
            "service-port vlan {} eth 0/1/{} multi-service user-vlan untagged rx-cttr 6 tx-cttr 6",
            user_vlan, gemport
        ));
    }

    lines.push("save".to_string());

    if voice {
        let gateway1 = voice_ip_addr.and_then(voice_gateway);
        if let (Some(voice_ip), Some(gateway1)) = (voice_ip_addr, gateway1) {
            lines.extend([
                "\n===== 语音配置 =====\n".to_string(),
                "vlan 101 smart\n".to_string(),
                "port vlan 101 0/0 1\n".to_string(),
                "interface vlanif 101\n".to_string(),
                format!("ip address {} 255.255.255.0\n", voice_ip),
                "quit\n".to_string(),
                format!("ip route-static 10.249.0.0 255.255.0.0 {}\n", gateway1),
                format!("ip route-static 10.251.0.0 255.255.0.0 {}\n", gateway1),
                "voip\n".to_string(),
                format!("ip address media {} {}\n", voice_ip, gateway1),
                format!("ip address signaling {}\n", voice_ip),
                "quit\n".to_string(),
                "interface h248 0\n".to_string(),
                "y\n".to_string(),
                "digitmap-timer long 10\n".to_string(),
                format!("if-h248 attribute mgip {} mgport 2944 transfer udp\n", voice_ip),
                "if-h248 attribute primary-mgc-ip1 10.249.0.184 primary-mgc-port 2944\n".to_string(),
                "if-h248 attribute secondary-mgc-ip1 10.249.1.184 secondary-mgc-port 2944\n".to_string(),
                format!("if-h248 attribute mg-media-ip1 {}\n", voice_ip),
                "mg-ringmode add 0 10 26\n".to_string(),
                "mg-software parameter 13 1\n".to_string(),
                "reset coldstart\n".to_string(),
                "y\n".to_string(),
                "quit\n".to_string(),
                "esl user\n".to_string(),
                "mgpstnuser batadd 0/2/1 0/2/24 0 terminalid 1\n".to_string(),
                "quit\n".to_string(),
                "save\n".to_string(),
            ]);
        } else if ip_addr.starts_with("192.168.77.") {
            // Degraded fallback: no usable voice gateway, emit the single
            // service-port line only.
            lines.push(format!(
                "service-port vlan 101 gpon 0/{}/{} ont {} gemport 0 multi-service user-vlan 100 tag-transform translate",
                ont.slot, ont.pon_port, ont.device_num
            ));
        }
    }

    lines
}

/// IGMP multicast configuration; the only per-run field is the operator's
/// multicast service-port VLAN.
pub fn multicast(multicast_vlan: u16) -> Vec<String> {
    vec![
        "btv".to_string(),
        format!("igmp user add service-port {}\n", multicast_vlan),
        "multicast-vlan 55\n".to_string(),
        format!("igmp multicast-vlan member service-port {}", multicast_vlan),
        "quit".to_string(),
        "quit".to_string(),
        "quit".to_string(),
        "y".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ont() -> OntIdentity<'static> {
        OntIdentity {
            serial: "48575443EC5525AD",
            slot: "1",
            pon_port: "14",
            device_num: 80,
        }
    }

    #[test]
    fn test_deploy_template_lines() {
        let lines = deploy(&ont(), 100, 200, false);
        assert_eq!(lines[0], "interface gpon 0/1");
        assert_eq!(
            lines[1],
            "ont add 14 80 loid-auth 48575443EC5525AD always-on omci ont-lineprofile-id 2 ont-srvprofile-id 0 desc 48575443EC5525AD\n"
        );
        assert_eq!(lines[2], "quit");
        assert!(lines[4].contains("vlan 100") && lines[4].contains("inner-vlan 1080"));
        // Duplicated IPTV service-port is kept.
        assert_eq!(lines[5], lines[6]);
        assert!(lines[5].contains("vlan 200") && lines[5].contains("inner-vlan 3580"));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_deploy_voice_appends_gemport_3() {
        let lines = deploy(&ont(), 100, 200, true);
        assert_eq!(
            lines.last().map(String::as_str),
            Some("service-port vlan 101 gpon 0/1/14 ont 80 gemport 3 multi-service user-vlan 100 tag-transform translate")
        );
    }

    #[test]
    fn test_manual_template_uses_cttr_and_native_vlans() {
        let lines = manual(&ont(), 100, 200, false);
        assert!(lines[1].contains("sn-auth 48575443EC5525AD"));
        assert!(lines[2].contains("eth 1 vlan 101"));
        assert!(lines[3].contains("eth 2 vlan 102"));
        assert!(lines[5].contains("rx-cttr 6 tx-cttr 6"));
        assert_eq!(lines[6], lines[7]);
    }

    #[test]
    fn test_onu_network_derivation() {
        assert_eq!(
            onu_network("192.168.77.20"),
            Some(("192.168.77.1".to_string(), 77))
        );
        assert_eq!(
            onu_network("10.155.42.9"),
            Some(("10.155.42.1".to_string(), 99))
        );
        assert_eq!(onu_network("10.10.10.10"), None);
    }

    #[test]
    fn test_voice_gateway_derivation() {
        assert_eq!(voice_gateway("10.251.3.7"), Some("10.251.3.1".to_string()));
        assert_eq!(voice_gateway("10.66.8.2"), Some("10.66.8.1".to_string()));
        assert_eq!(voice_gateway("10.10.1.1"), None);
    }

    #[test]
    fn test_onu_emits_24_port_blocks_on_both_ends() {
        let lines = onu(&ont(), "10.155.42.9", None, Some(300), false);
        let olt_ports = lines
            .iter()
            .filter(|l| l.starts_with("service-port vlan 300 gpon"))
            .count();
        assert_eq!(olt_ports, 24);
        let onu_ports = lines
            .iter()
            .filter(|l| l.starts_with("service-port vlan 2") && l.contains("eth 0/1/"))
            .count();
        assert_eq!(onu_ports, 24);
        // First loop line: gemport 1, user-vlan 2001, inner 1080.
        assert!(lines
            .iter()
            .any(|l| l.contains("gemport 1 multi-service user-vlan 2001") && l.contains("inner-vlan 1080")));
        // Last loop line: gemport 24, user-vlan 2024, inner 1103.
        assert!(lines
            .iter()
            .any(|l| l.contains("gemport 24 multi-service user-vlan 2024") && l.contains("inner-vlan 1103")));
        assert!(lines.iter().any(|l| l.contains("gateway 10.155.42.1")));
    }

    #[test]
    fn test_onu_voice_full_telephony_block() {
        let lines = onu(&ont(), "10.155.42.9", Some("10.251.3.7"), Some(300), true);
        assert!(lines.iter().any(|l| l.contains("interface h248 0")));
        assert!(lines
            .iter()
            .any(|l| l.contains("ip address media 10.251.3.7 10.251.3.1")));
        assert!(lines.iter().any(|l| l.contains("mgpstnuser batadd")));
    }

    #[test]
    fn test_onu_voice_degraded_fallback() {
        // Voice enabled, base IP in 192.168.77.x, voice IP unusable: only the
        // single service-port line is emitted, no telephony block.
        let lines = onu(&ont(), "192.168.77.20", Some("172.16.0.1"), None, true);
        assert!(!lines.iter().any(|l| l.contains("h248")));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("service-port vlan 101 gpon 0/1/14 ont 80 gemport 0 multi-service user-vlan 100 tag-transform translate")
        );
    }

    #[test]
    fn test_multicast_template() {
        let lines = multicast(2500);
        assert_eq!(lines[0], "btv");
        assert_eq!(lines[1], "igmp user add service-port 2500\n");
        assert_eq!(lines[3], "igmp multicast-vlan member service-port 2500");
        assert_eq!(lines.len(), 8);
    }
}
