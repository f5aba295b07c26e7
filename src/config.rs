use std::env;

pub const DEFAULT_MOUNT_PATH: &str = "/movedrop-api";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Shared secret expected in `X-API-KEY`. `None` rejects every protected call.
    pub movedrop_api_key: Option<String>,
    pub mount_path: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let movedrop_api_key = env::var("MOVEDROP_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        let mount_path = env::var("MOVEDROP_MOUNT_PATH")
            .map(|path| normalize_mount_path(&path))
            .unwrap_or_else(|_| DEFAULT_MOUNT_PATH.to_string());
        Ok(Self {
            port,
            database_url,
            host,
            movedrop_api_key,
            mount_path,
        })
    }
}

/// Leading slash, no trailing slash; an empty value mounts at the root.
pub fn normalize_mount_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}
