//! Extraction of device records from `display ont autofind` output.
//!
//! The dump is a sequence of per-ONT blocks separated by a fixed-width
//! dash rule. Blocks missing the serial or the frame/slot/port line are
//! skipped silently; only the aggregate zero-records condition is surfaced
//! to the caller.

use regex_lite::Regex;

use crate::models::DeviceRecord;

/// Horizontal rule between autofind record blocks (76 dashes)
const BLOCK_SEPARATOR: &str =
    "----------------------------------------------------------------------------";

/// Device numbering starts here on every new PON port
const FIRST_DEVICE_NUM: u32 = 80;

/// Logical identifiers are only meaningful with this operator prefix
const LOID_PREFIX: &str = "0734";

fn patterns() -> Option<(Regex, Regex, Regex)> {
    Some((
        Regex::new(r"ONT SN\s+:\s+([A-Z0-9]+)\s*\(").ok()?,
        Regex::new(r"逻辑标识\s+:\s+([A-Za-z0-9]+)").ok()?,
        Regex::new(r"框/槽/端口\s+:\s+(\d+)/(\d+)/(\d+)").ok()?,
    ))
}

/// Extract the ordered device records from raw autofind text, assigning
/// each a device number: 80 for the first record on a (frame, slot, port)
/// triple, incrementing while consecutive records share the triple, and
/// resetting to 80 when it changes.
pub fn extract_records(text: &str) -> Vec<DeviceRecord> {
    let Some((sn_re, loid_re, port_re)) = patterns() else {
        return Vec::new();
    };

    let mut records = Vec::new();
    let mut last_triple: Option<(String, String, String)> = None;
    let mut device_num = FIRST_DEVICE_NUM;

    for block in text.split(BLOCK_SEPARATOR) {
        if block.trim().is_empty() {
            continue;
        }

        let Some(serial) = sn_re.captures(block).map(|c| c[1].to_string()) else {
            continue;
        };

        let logical_id = loid_re
            .captures(block)
            .map(|c| c[1].trim().to_string())
            .filter(|v| v.starts_with(LOID_PREFIX))
            .unwrap_or_default();

        let Some(caps) = port_re.captures(block) else {
            continue;
        };
        let frame = caps[1].to_string();
        let slot = caps[2].to_string();
        let pon_port = caps[3].to_string();

        let triple = (frame.clone(), slot.clone(), pon_port.clone());
        if last_triple.as_ref() == Some(&triple) {
            device_num += 1;
        } else {
            device_num = FIRST_DEVICE_NUM;
        }
        last_triple = Some(triple);

        records.push(DeviceRecord {
            serial,
            logical_id,
            frame,
            slot,
            pon_port,
            device_num,
        });
    }

    records
}

/// Render records as newline-separated import lines
pub fn to_csv(records: &[DeviceRecord]) -> String {
    records
        .iter()
        .map(DeviceRecord::to_csv_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(serial: &str, loid: Option<&str>, triple: (&str, &str, &str)) -> String {
        let mut b = format!(
            "   ONT autofind\n   ONT SN          : {}(HWTC-specific)\n",
            serial
        );
        if let Some(loid) = loid {
            b.push_str(&format!("   逻辑标识        : {}\n", loid));
        }
        b.push_str(&format!(
            "   框/槽/端口      : {}/{}/{}\n",
            triple.0, triple.1, triple.2
        ));
        b
    }

    fn join(blocks: &[String]) -> String {
        blocks.join(&format!("\n{}\n", BLOCK_SEPARATOR))
    }

    #[test]
    fn test_device_number_reset_rule() {
        let text = join(&[
            block("SN1AAAA11111111A", None, ("0", "1", "1")),
            block("SN2AAAA11111111B", None, ("0", "1", "1")),
            block("SN3AAAA11111111C", None, ("0", "1", "2")),
        ]);
        let records = extract_records(&text);
        let nums: Vec<u32> = records.iter().map(|r| r.device_num).collect();
        assert_eq!(nums, vec![80, 81, 80]);
    }

    #[test]
    fn test_logical_id_prefix_gating() {
        let text = join(&[
            block("SN1AAAA11111111A", Some("073499998888"), ("0", "1", "1")),
            block("SN2AAAA11111111B", Some("09991234"), ("0", "1", "1")),
        ]);
        let records = extract_records(&text);
        assert_eq!(records[0].logical_id, "073499998888");
        assert_eq!(records[1].logical_id, "");
    }

    #[test]
    fn test_blocks_missing_required_lines_are_dropped() {
        let with_port_only = "   框/槽/端口      : 0/1/1\n".to_string();
        let with_sn_only = "   ONT SN          : AAAABBBBCCCCDDDD(\n".to_string();
        let text = join(&[
            with_port_only,
            block("SN1AAAA11111111A", None, ("0", "2", "3")),
            with_sn_only,
        ]);
        let records = extract_records(&text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].serial, "SN1AAAA11111111A");
        // Dropped blocks never advance the numbering state.
        assert_eq!(records[0].device_num, 80);
    }

    #[test]
    fn test_csv_line_shape() {
        let text = join(&[block("SN1AAAA11111111A", Some("073400629575"), ("0", "1", "14"))]);
        let csv = to_csv(&extract_records(&text));
        assert_eq!(csv, "SN1AAAA11111111A,073400629575,0,1,14,80");
    }

    #[test]
    fn test_empty_logical_id_leaves_consecutive_commas() {
        let text = join(&[block("SN1AAAA11111111A", None, ("0", "1", "14"))]);
        let csv = to_csv(&extract_records(&text));
        assert_eq!(csv, "SN1AAAA11111111A,,0,1,14,80");
    }

    #[test]
    fn test_extractor_output_feeds_batch_generator() {
        let text = join(&[
            block("SN1AAAA11111111A", Some("073400629575"), ("0", "1", "1")),
            block("SN2AAAA11111111B", None, ("0", "1", "2")),
        ]);
        let csv = to_csv(&extract_records(&text));
        let out = crate::generator::generate_batch(
            &csv,
            crate::generator::VlanRange { start: 100, end: 199 },
            crate::generator::VlanRange { start: 200, end: 299 },
        )
        .unwrap();
        assert_eq!(out.count, 2);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_no_records_from_unrelated_text() {
        assert!(extract_records("nothing to see here").is_empty());
        assert!(extract_records("").is_empty());
    }
}
