//! ZTE OLT command templates. C300 addresses the ONU directly; C600 adds a
//! vport interface layer, and its deploy variant authenticates by LOID with
//! the TL1-created tcont/gemport names.

use super::{inner_biz_vlan, inner_iptv_vlan, OntIdentity};

const VOICE_SERVICE_PORT: &str = "service-port 6 vport 1 user-vlan 100 vlan 101";

/// C300 manual (sn-auth) configuration
pub fn c300(ont: &OntIdentity, biz_vlan: u16, iptv_vlan: u16, voice: bool) -> Vec<String> {
    let inner_biz = inner_biz_vlan(ont.device_num);
    let inner_iptv = inner_iptv_vlan(ont.device_num);

    let mut lines = vec![
        format!("interface gpon-olt_1/{}/{}", ont.slot, ont.pon_port),
        format!("onu {} type FTTH_G_HGU sn {}", ont.device_num, ont.serial),
        "exit".to_string(),
        format!(
            "interface gpon-onu_1/{}/{}:{}",
            ont.slot, ont.pon_port, ont.device_num
        ),
        "tcont 2 profile default1".to_string(),
        "gemport 1 name ge tcont 2".to_string(),
        format!(
            "service-port 1 vport 1 user-vlan 101 vlan {} svlan {}",
            inner_biz, biz_vlan
        ),
        format!(
            "service-port 2 vport 1 user-vlan 30 vlan {} svlan {}",
            inner_iptv, iptv_vlan
        ),
    ];

    if voice {
        lines.push(VOICE_SERVICE_PORT.to_string());
    }

    lines.extend([
        "exit".to_string(),
        format!(
            "pon-onu-mng gpon-onu_1/{}/{}:{}",
            ont.slot, ont.pon_port, ont.device_num
        ),
        "service 1 gemport 1".to_string(),
        "vlan port eth_0/1 mode tag vlan 101".to_string(),
        "vlan port eth_0/2 mode tag vlan 30".to_string(),
        "exit".to_string(),
    ]);

    lines
}

/// C600 manual (sn-auth) configuration — service-ports live on the vport
pub fn c600_manual(ont: &OntIdentity, biz_vlan: u16, iptv_vlan: u16, voice: bool) -> Vec<String> {
    let inner_biz = inner_biz_vlan(ont.device_num);
    let inner_iptv = inner_iptv_vlan(ont.device_num);

    let mut lines = vec![
        format!("interface gpon_olt-1/{}/{}", ont.slot, ont.pon_port),
        format!("onu {} type FTTH_G_HGU sn {}", ont.device_num, ont.serial),
        "exit".to_string(),
        format!(
            "interface gpon_onu-1/{}/{}:{}",
            ont.slot, ont.pon_port, ont.device_num
        ),
        "tcont 1 profile default1".to_string(),
        "gemport 1 name ge tcont 1".to_string(),
        "exit".to_string(),
        format!(
            "interface vport-1/{}/{}.{}:1",
            ont.slot, ont.pon_port, ont.device_num
        ),
        format!(
            "service-port 1 user-vlan 101 vlan {} svlan {}",
            inner_biz, biz_vlan
        ),
        format!(
            "service-port 2 user-vlan 30 vlan {} svlan {}",
            inner_iptv, iptv_vlan
        ),
    ];

    if voice {
        lines.push(VOICE_SERVICE_PORT.to_string());
    }

    lines.extend([
        "exit".to_string(),
        format!(
            "pon-onu-mng gpon_onu-1/{}/{}:{}",
            ont.slot, ont.pon_port, ont.device_num
        ),
        "service 1 gemport 1".to_string(),
        "vlan port eth_0/1 mode tag vlan 101".to_string(),
        "vlan port eth_0/2 mode tag vlan 30".to_string(),
        "exit".to_string(),
    ]);

    lines
}

/// C600 deploy (loid-auth) configuration — adds the unconditional VLAN 8
/// service-port and the TL1 description lines
pub fn c600_deploy(ont: &OntIdentity, biz_vlan: u16, iptv_vlan: u16, voice: bool) -> Vec<String> {
    let inner_biz = inner_biz_vlan(ont.device_num);
    let inner_iptv = inner_iptv_vlan(ont.device_num);

    let mut lines = vec![
        format!("interface gpon_olt-1/{}/{}", ont.slot, ont.pon_port),
        format!("onu {} type FTTH_G_HGU loid {}", ont.device_num, ont.serial),
        "exit".to_string(),
        format!(
            "interface gpon_onu-1/{}/{}:{}",
            ont.slot, ont.pon_port, ont.device_num
        ),
        "tcont 1 name Tl1DefaultCreate profile default1".to_string(),
        "sn-bind disable".to_string(),
        "gemport 1 name Tl1DefaultCreate tcont 1".to_string(),
        "exit".to_string(),
        format!(
            "interface vport-1/{}/{}.{}:1",
            ont.slot, ont.pon_port, ont.device_num
        ),
        format!(
            "service-port 1 user-vlan untagged vlan {} svlan {}",
            inner_biz, biz_vlan
        ),
        "service-port 1 description Tl1OpVlanUntag".to_string(),
        "service-port 2 user-vlan 8 vlan 8".to_string(),
        "service-port 2 description Tl1OpVlan8".to_string(),
        format!(
            "service-port 3 user-vlan 30 vlan {} svlan {}",
            inner_iptv, iptv_vlan
        ),
        "service-port 3 description Tl1OpVlan30".to_string(),
    ];

    if voice {
        lines.push(VOICE_SERVICE_PORT.to_string());
    }

    lines.extend([
        "exit".to_string(),
        format!(
            "pon-onu-mng gpon_onu-1/{}/{}:{}",
            ont.slot, ont.pon_port, ont.device_num
        ),
        "mvlan 55".to_string(),
        "service Tl1DefaultCreate gemport 1".to_string(),
        "exit".to_string(),
    ]);

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ont() -> OntIdentity<'static> {
        OntIdentity {
            serial: "ZTEGC8316F2A4B01",
            slot: "2",
            pon_port: "5",
            device_num: 12,
        }
    }

    #[test]
    fn test_c300_template() {
        let lines = c300(&ont(), 100, 200, false);
        assert_eq!(lines[0], "interface gpon-olt_1/2/5");
        assert_eq!(lines[1], "onu 12 type FTTH_G_HGU sn ZTEGC8316F2A4B01");
        assert_eq!(lines[3], "interface gpon-onu_1/2/5:12");
        assert_eq!(lines[6], "service-port 1 vport 1 user-vlan 101 vlan 1012 svlan 100");
        assert_eq!(lines[7], "service-port 2 vport 1 user-vlan 30 vlan 3512 svlan 200");
        assert!(lines.contains(&"pon-onu-mng gpon-onu_1/2/5:12".to_string()));
        assert!(!lines.contains(&VOICE_SERVICE_PORT.to_string()));
    }

    #[test]
    fn test_c600_manual_uses_vport_layer() {
        let lines = c600_manual(&ont(), 100, 200, true);
        assert_eq!(lines[0], "interface gpon_olt-1/2/5");
        assert!(lines.contains(&"interface vport-1/2/5.12:1".to_string()));
        assert!(lines.contains(&"service-port 1 user-vlan 101 vlan 1012 svlan 100".to_string()));
        assert!(lines.contains(&VOICE_SERVICE_PORT.to_string()));
        assert!(lines.contains(&"pon-onu-mng gpon_onu-1/2/5:12".to_string()));
    }

    #[test]
    fn test_c600_deploy_loid_and_fixed_vlan8() {
        let lines = c600_deploy(&ont(), 100, 200, false);
        assert_eq!(lines[1], "onu 12 type FTTH_G_HGU loid ZTEGC8316F2A4B01");
        assert!(lines.contains(&"sn-bind disable".to_string()));
        // VLAN 8 service-port is unconditional on this variant.
        assert!(lines.contains(&"service-port 2 user-vlan 8 vlan 8".to_string()));
        assert!(lines.contains(&"service-port 1 description Tl1OpVlanUntag".to_string()));
        assert!(lines.contains(&"service-port 3 user-vlan 30 vlan 3512 svlan 200".to_string()));
        assert!(lines.contains(&"mvlan 55".to_string()));
    }
}
