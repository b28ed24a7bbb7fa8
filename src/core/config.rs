use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub geocoder: GeocoderConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub database_name: String,
    pub server_selection_timeout: Duration,
}

/// Reverse geocoding provider settings (Nominatim compatible)
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// `.env` is expected to be loaded already, before logging starts.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            geocoder: GeocoderConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 5000;
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| Self::DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "REQUEST_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_DATABASE_NAME: &'static str = "location_tracker";
    const DEFAULT_SERVER_SELECTION_TIMEOUT_MS: u64 = 5000;

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("MONGODB_CONNECTION_STRING")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "MONGODB_CONNECTION_STRING must be set".to_string())?;

        let database_name = env::var("MONGODB_DATABASE")
            .unwrap_or_else(|_| Self::DEFAULT_DATABASE_NAME.to_string());

        let server_selection_timeout_ms = env::var("MONGODB_SERVER_SELECTION_TIMEOUT_MS")
            .unwrap_or_else(|_| Self::DEFAULT_SERVER_SELECTION_TIMEOUT_MS.to_string())
            .parse::<u64>()
            .map_err(|_| {
                "MONGODB_SERVER_SELECTION_TIMEOUT_MS must be a valid number".to_string()
            })?;

        Ok(Self {
            url,
            database_name,
            server_selection_timeout: Duration::from_millis(server_selection_timeout_ms),
        })
    }
}

impl GeocoderConfig {
    const DEFAULT_BASE_URL: &'static str = "https://nominatim.openstreetmap.org";
    /// Nominatim usage policy requires an identifying user agent
    pub const USER_AGENT: &'static str = "LocationTrackerApp/1.0";

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("NOMINATIM_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            base_url,
            user_agent: Self::USER_AGENT.to_string(),
        })
    }
}
