use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Accept a URL only if its hostname resolves via DNS.
    Dns,
    /// Accept every parseable URL without consulting DNS.
    Off,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub mode: ValidationMode,
    /// Upper bound on a single hostname lookup, in milliseconds.
    #[serde(default = "ValidationConfig::default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,
}

impl ValidationConfig {
    const fn default_lookup_timeout_ms() -> u64 {
        5000
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()?;

        let mode = match std::env::var("URL_VALIDATION")
            .unwrap_or_else(|_| "dns".to_string())
            .to_lowercase()
            .as_str()
        {
            "dns" => ValidationMode::Dns,
            "off" | "none" => ValidationMode::Off,
            other => {
                tracing::warn!(
                    "Unknown URL_VALIDATION '{other}', falling back to 'dns'. Supported values: dns, off"
                );
                ValidationMode::Dns
            }
        };

        let lookup_timeout_ms = std::env::var("DNS_LOOKUP_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(ValidationConfig::default_lookup_timeout_ms);

        Ok(Config {
            server: ServerConfig { host, port },
            validation: ValidationConfig {
                mode,
                lookup_timeout_ms,
            },
        })
    }
}
