use std::env;

use crate::generator::SerialPolicy;

/// Config holds all application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub db_max_connections: u32,
    pub listen_addr: String,
    pub frontend_dir: String,
    /// Serial-number policy for the manual-auth tabs. Field deployments run
    /// two validators that disagree (exactly 16 characters vs. any
    /// alphanumeric string), so the policy is selectable per installation.
    pub manual_serial_policy: SerialPolicy,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn load() -> Self {
        Self {
            db_path: get_env("DB_PATH", "/data/olt-provision.db"),
            db_max_connections: get_env("DB_MAX_CONNECTIONS", "5")
                .parse()
                .unwrap_or(5),
            listen_addr: get_env("LISTEN_ADDR", "0.0.0.0:8080"),
            frontend_dir: get_env("FRONTEND_DIR", "/app/frontend"),
            manual_serial_policy: match get_env("MANUAL_SERIAL_POLICY", "exact16").as_str() {
                "alphanumeric" => SerialPolicy::Alphanumeric,
                _ => SerialPolicy::Exact16,
            },
        }
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
