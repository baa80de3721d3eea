use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origin: String,
    pub request_timeout_secs: u64,
    pub media: MediaConfig,
}

/// Settings for the external image host. Uploads are rejected when
/// `upload_url` is unset.
#[derive(Debug, Clone, Default)]
pub struct MediaConfig {
    pub upload_url: Option<String>,
    pub upload_preset: Option<String>,
    pub api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|n| n.parse::<u32>().ok())
            .unwrap_or(10);
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);
        let cors_allowed_origin = env::var("CORS_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);
        let media = MediaConfig {
            upload_url: non_empty_var("MEDIA_UPLOAD_URL"),
            upload_preset: non_empty_var("MEDIA_UPLOAD_PRESET"),
            api_key: non_empty_var("MEDIA_API_KEY"),
        };
        Ok(Self {
            port,
            database_url,
            database_max_connections,
            host,
            cors_allowed_origin,
            request_timeout_secs,
            media,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
