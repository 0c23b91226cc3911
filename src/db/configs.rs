use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::models::*;

use super::row_helpers::map_config_row;

const SELECT_CONFIG: &str = r#"
    SELECT id, device_type, serial, frame_no, slot, pon_port, device_num,
           biz_vlan, iptv_vlan, ip_addr, voice_ip_addr, multicast_vlan,
           has_voice, command_output, reason, created_at, updated_at
    FROM device_configs
"#;

/// Saved-configuration database operations
pub struct ConfigRepo;

impl ConfigRepo {
    pub async fn list(pool: &Pool<Sqlite>, query: &ConfigQuery) -> Result<Vec<DeviceConfig>> {
        let mut sql = format!("{} WHERE 1=1", SELECT_CONFIG);
        if query.device_type.is_some() {
            sql.push_str(" AND device_type = ?");
        }
        if query.serial.is_some() {
            sql.push_str(" AND serial = ?");
        }
        sql.push_str(" ORDER BY created_at DESC");

        let mut q = sqlx::query(&sql);
        if let Some(device_type) = &query.device_type {
            q = q.bind(device_type);
        }
        if let Some(serial) = &query.serial {
            q = q.bind(serial);
        }

        let rows = q.fetch_all(pool).await?;
        Ok(rows.iter().map(map_config_row).collect())
    }

    pub async fn get(pool: &Pool<Sqlite>, id: i64) -> Result<Option<DeviceConfig>> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_CONFIG))
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.as_ref().map(map_config_row))
    }

    pub async fn create(pool: &Pool<Sqlite>, req: &CreateConfigRequest) -> Result<DeviceConfig> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO device_configs (device_type, serial, frame_no, slot, pon_port, device_num,
                                        biz_vlan, iptv_vlan, ip_addr, voice_ip_addr, multicast_vlan,
                                        has_voice, command_output, reason, created_at, updated_at)
            VALUES (?, ?, '0', ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&req.device_type)
        .bind(&req.serial)
        .bind(&req.slot)
        .bind(&req.pon_port)
        .bind(&req.device_num)
        .bind(&req.biz_vlan)
        .bind(&req.iptv_vlan)
        .bind(req.ip_addr.clone().unwrap_or_default())
        .bind(req.voice_ip_addr.clone().unwrap_or_default())
        .bind(req.multicast_vlan.clone().unwrap_or_default())
        .bind(req.has_voice)
        .bind(&req.command_output)
        .bind(&req.reason)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        let new_id = result.last_insert_rowid();
        Self::get(pool, new_id)
            .await?
            .context("Config not found after creation")
    }

    pub async fn update(
        pool: &Pool<Sqlite>,
        id: i64,
        req: &CreateConfigRequest,
    ) -> Result<DeviceConfig> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            UPDATE device_configs
            SET device_type = ?, serial = ?, slot = ?, pon_port = ?, device_num = ?,
                biz_vlan = ?, iptv_vlan = ?, ip_addr = ?, voice_ip_addr = ?,
                multicast_vlan = ?, has_voice = ?, command_output = ?, reason = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&req.device_type)
        .bind(&req.serial)
        .bind(&req.slot)
        .bind(&req.pon_port)
        .bind(&req.device_num)
        .bind(&req.biz_vlan)
        .bind(&req.iptv_vlan)
        .bind(req.ip_addr.clone().unwrap_or_default())
        .bind(req.voice_ip_addr.clone().unwrap_or_default())
        .bind(req.multicast_vlan.clone().unwrap_or_default())
        .bind(req.has_voice)
        .bind(&req.command_output)
        .bind(&req.reason)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(super::NotFoundError::new("Config", &id.to_string()).into());
        }

        Self::get(pool, id)
            .await?
            .context("Config not found after update")
    }

    pub async fn delete(pool: &Pool<Sqlite>, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM device_configs WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(super::NotFoundError::new("Config", &id.to_string()).into());
        }
        Ok(())
    }

    pub async fn batch_delete(pool: &Pool<Sqlite>, ids: &[i64]) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("DELETE FROM device_configs WHERE id IN ({})", placeholders);
        let mut q = sqlx::query(&sql);
        for id in ids {
            q = q.bind(id);
        }
        let result = q.execute(pool).await?;
        Ok(result.rows_affected())
    }
}
