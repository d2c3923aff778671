use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub bedrock: BedrockConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// The single origin granted cross-origin access, credentials included.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedrockConfig {
    #[serde(default = "default_region")]
    pub region: String,
    /// Overrides endpoint resolution, e.g. for a local Bedrock-compatible stub.
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl Config {
    pub fn validate(&self) -> crate::Result<()> {
        let origin = self.cors.allowed_origin.trim();
        if origin.is_empty() {
            return Err(crate::Error::config("cors.allowed_origin must not be empty"));
        }
        if origin == "*" {
            return Err(crate::Error::config(
                "cors.allowed_origin must name a single origin when credentials are allowed",
            ));
        }
        HeaderValue::from_str(origin).map_err(|e| {
            crate::Error::config(format!("Invalid cors.allowed_origin '{}': {}", origin, e))
        })?;

        if self.bedrock.region.trim().is_empty() {
            return Err(crate::Error::config("bedrock.region must not be empty"));
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
        }
    }
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint_url: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_allowed_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}
