use sqlx::{sqlite::SqliteRow, Row};

use crate::models::*;

/// Filter empty strings to None — used when DB stores '' instead of NULL
pub fn none_if_empty(opt: Option<String>) -> Option<String> {
    opt.filter(|s| !s.is_empty())
}

/// Map a SQLite row to a DeviceConfig struct
pub fn map_config_row(row: &SqliteRow) -> DeviceConfig {
    DeviceConfig {
        id: row.get("id"),
        device_type: row.get("device_type"),
        serial: row.get("serial"),
        frame_no: row.get("frame_no"),
        slot: row.get("slot"),
        pon_port: row.get("pon_port"),
        device_num: row.get("device_num"),
        biz_vlan: row.get("biz_vlan"),
        iptv_vlan: row.get("iptv_vlan"),
        ip_addr: none_if_empty(row.get("ip_addr")),
        voice_ip_addr: none_if_empty(row.get("voice_ip_addr")),
        multicast_vlan: none_if_empty(row.get("multicast_vlan")),
        has_voice: row.get("has_voice"),
        command_output: row.get("command_output"),
        reason: none_if_empty(row.get("reason")),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
