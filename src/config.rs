use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub base_url: String,
    pub mail_api_url: Option<String>, // Both mail vars required to enable outbound email
    pub mail_api_token: Option<String>,
    pub email_from: String,
    pub email_to: String,
    pub geoip_db_path: Option<String>,
    pub geoip_api_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .trim_end_matches('/')
                .to_string(),
            mail_api_url: std::env::var("MAIL_API_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|url| {
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("MAIL_API_URL must start with http:// or https://");
                    }
                    Ok(url.trim_end_matches('/').to_string())
                })
                .transpose()?,
            mail_api_token: std::env::var("MAIL_API_TOKEN")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            email_from: std::env::var("EMAIL_FROM")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "Hello Turf <no-reply@helloturf.com>".to_string()),
            email_to: std::env::var("EMAIL_TO")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "quotes@helloturf.com".to_string()),
            geoip_db_path: std::env::var("GEOIP_DB_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            geoip_api_url: std::env::var("GEOIP_API_URL")
                .unwrap_or_else(|_| "http://ip-api.com/json".to_string())
                .trim_end_matches('/')
                .to_string(),
        };

        if config.base_url.is_empty()
            || (!config.base_url.starts_with("http://") && !config.base_url.starts_with("https://"))
        {
            anyhow::bail!("BASE_URL must start with http:// or https://");
        }

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Base URL: {}", config.base_url);
        tracing::debug!("Server Port: {}", config.port);
        if let Some(ref url) = config.mail_api_url {
            tracing::info!("Mail API configured: {}", url);
        } else {
            tracing::warn!("MAIL_API_URL not set - outbound email disabled");
        }
        if config.mail_api_url.is_some() && config.mail_api_token.is_none() {
            tracing::warn!("MAIL_API_TOKEN not set - outbound email disabled");
        }
        if let Some(ref path) = config.geoip_db_path {
            tracing::debug!("GeoIP database path: {}", path);
        }
        tracing::debug!("GeoIP fallback API: {}", config.geoip_api_url);
        tracing::debug!("Quote notifications to: {}", config.email_to);

        Ok(config)
    }
}
