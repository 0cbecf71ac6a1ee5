use std::env;
use anyhow::{Context, Result, bail};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub swagger_ui_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let swagger_ui_enabled = match env::var("SWAGGER_UI_ENABLED") {
            Ok(value) => parse_flag(&value)
                .context("SWAGGER_UI_ENABLED must be one of: true, false, 1, 0, yes, no")?,
            Err(_) => true,
        };

        Ok(Config {
            service_port,
            service_host,
            swagger_ui_enabled,
        })
    }

    /// Address the listener binds to, as `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.bind_addr());
        tracing::info!("  Swagger UI: {}",
            if self.swagger_ui_enabled { "enabled" } else { "disabled" });
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("invalid boolean '{}'", other),
    }
}
