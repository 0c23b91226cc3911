//! Batch generation: consumes the comma-separated record lines produced by
//! the autofind extractor (or hand-written in the same shape), rolls the
//! VLAN allocation forward across the sequence, and renders one Huawei
//! block per record. Records carrying a LOID get the loid-auth deploy
//! template; the rest fall back to sn-auth manual provisioning.

use std::fmt::Write;

use anyhow::{bail, Result};

use super::{inner_biz_vlan, inner_iptv_vlan, VlanAllocator, VlanRange, MAX_DEVICE_NUM};

/// Result of one batch run
#[derive(Debug)]
pub struct BatchOutput {
    pub script: String,
    pub count: usize,
    pub warnings: Vec<String>,
}

/// Generate the batch script. The VLAN ranges are global parameters: an
/// invalid range rejects the whole batch before any output is produced.
/// Per-line structural problems skip only the offending record, leaving a
/// warning with its 1-based line number, and do not advance the allocator.
pub fn generate_batch(data: &str, biz: VlanRange, iptv: VlanRange) -> Result<BatchOutput> {
    if data.trim().is_empty() {
        bail!("no record data supplied");
    }
    if !biz.is_valid() {
        bail!("business VLAN range is invalid");
    }
    if !iptv.is_valid() {
        bail!("IPTV VLAN range is invalid");
    }

    let mut allocator = VlanAllocator::new(biz, iptv);
    let mut script = String::new();
    let mut warnings = Vec::new();
    let mut count = 0usize;

    for (index, line) in data.trim().lines().enumerate() {
        let line_no = index + 1;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 6 {
            warnings.push(format!(
                "line {}: expected 6 comma-separated fields, record skipped",
                line_no
            ));
            continue;
        }

        let serial = fields[0];
        let loid = fields[1];
        let frame = if fields[2].is_empty() { "0" } else { fields[2] };
        let slot = fields[3];
        let pon_port = fields[4];
        let device_field = fields[5];

        if serial.is_empty() || slot.is_empty() || pon_port.is_empty() || device_field.is_empty() {
            warnings.push(format!("line {}: incomplete record, skipped", line_no));
            continue;
        }
        let device_num: u32 = match device_field.trim().parse::<u32>() {
            Ok(n) if n <= MAX_DEVICE_NUM => n,
            Ok(_) => {
                warnings.push(format!(
                    "line {}: device number {} is out of range, record skipped",
                    line_no, device_field
                ));
                continue;
            }
            Err(_) => {
                warnings.push(format!(
                    "line {}: device number {:?} is not numeric, record skipped",
                    line_no, device_field
                ));
                continue;
            }
        };

        let (biz_vlan, iptv_vlan) = allocator.assign(frame, slot, pon_port);

        let _ = write!(script, "# 设备 {} 配置 ({})\n", line_no, serial);
        if !loid.is_empty() {
            deploy_block(&mut script, loid, slot, pon_port, device_num, biz_vlan, iptv_vlan);
        } else {
            manual_block(&mut script, serial, slot, pon_port, device_num, biz_vlan, iptv_vlan);
        }
        script.push_str("\n\n");
        count += 1;
    }

    Ok(BatchOutput {
        script,
        count,
        warnings,
    })
}

/// Loid-auth deploy block (record carries an operator LOID)
fn deploy_block(
    out: &mut String,
    loid: &str,
    slot: &str,
    pon_port: &str,
    device_num: u32,
    biz_vlan: u16,
    iptv_vlan: u16,
) {
    let inner_biz = inner_biz_vlan(device_num);
    let inner_iptv = inner_iptv_vlan(device_num);

    let _ = write!(out, "interface gpon 0/{}\n", slot);
    let _ = write!(
        out,
        "ont add {} {} loid-auth {} always-on omci ont-lineprofile-id 2 ont-srvprofile-id 0 desc {}\n",
        pon_port, device_num, loid, loid
    );
    out.push('\n');
    out.push_str("quit\n");
    let _ = write!(
        out,
        "service-port vlan 8 gpon 0/{}/{} ont {} gemport 1 multi-service user-vlan 8 tag-transform translate\n",
        slot, pon_port, device_num
    );
    out.push('\n');
    let _ = write!(
        out,
        "service-port vlan {} gpon 0/{}/{} ont {} gemport 0 multi-service user-vlan untagged tag-transform add-double inner-vlan {} inner-priority 0\n",
        biz_vlan, slot, pon_port, device_num, inner_biz
    );
    out.push('\n');
    let _ = write!(
        out,
        "service-port vlan {} gpon 0/{}/{} ont {} gemport 2 multi-service user-vlan 30 tag-transform translate-and-add inner-vlan {} inner-priority 0\n",
        iptv_vlan, slot, pon_port, device_num, inner_iptv
    );
}

/// Sn-auth manual block (record has no LOID)
fn manual_block(
    out: &mut String,
    serial: &str,
    slot: &str,
    pon_port: &str,
    device_num: u32,
    biz_vlan: u16,
    iptv_vlan: u16,
) {
    let inner_biz = inner_biz_vlan(device_num);
    let inner_iptv = inner_iptv_vlan(device_num);

    let _ = write!(out, "interface gpon 0/{}\n", slot);
    let _ = write!(
        out,
        "ont add {} {} sn-auth {} omci ont-lineprofile-id 1000 ont-srvprofile-id 1000 desc {}\n",
        pon_port, device_num, serial, serial
    );
    out.push('\n');
    let _ = write!(
        out,
        "ont port native-vlan {} {} eth 1 vlan 101 priority 0\n",
        pon_port, device_num
    );
    out.push('\n');
    let _ = write!(
        out,
        "ont port native-vlan {} {} eth 2 vlan 102 priority 0\n",
        pon_port, device_num
    );
    out.push('\n');
    out.push_str("quit\n");
    let _ = write!(
        out,
        "service-port vlan {} gpon 0/{}/{} ont {} gemport 0 multi-service user-vlan 101 tag-transform translate-and-add inner-vlan {} rx-cttr 6 tx-cttr 6\n",
        biz_vlan, slot, pon_port, device_num, inner_biz
    );
    let _ = write!(
        out,
        "service-port vlan {} gpon 0/{}/{} ont {} multi-service user-vlan 102 tag-transform translate-and-add inner-vlan {} rx-cttr 6 tx-cttr 6\n",
        iptv_vlan, slot, pon_port, device_num, inner_iptv
    );
}
