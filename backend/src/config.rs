use anyhow::anyhow;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::{env, net::SocketAddr, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub buns_file: PathBuf,
    pub static_dir: PathBuf,
    /// Zone linked from the landing page when scripting is disabled.
    pub default_time_zone: Tz,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr_value = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_addr: SocketAddr = bind_addr_value
            .parse()
            .map_err(|_| anyhow!("Invalid BIND_ADDR value: {}", bind_addr_value))?;

        let buns_file = lookup("BUNS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("buns.json"));

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));

        let time_zone_name =
            lookup("DEFAULT_TIME_ZONE").unwrap_or_else(|| "Australia/Sydney".to_string());
        let default_time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid DEFAULT_TIME_ZONE value: {}", time_zone_name))?;

        Ok(Config {
            bind_addr,
            buns_file,
            static_dir,
            default_time_zone,
        })
    }
}
