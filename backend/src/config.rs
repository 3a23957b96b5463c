//! Host configuration read from the environment.
//!
//! | variable             | default     |
//! |----------------------|-------------|
//! | `FORMS_HOST`         | `127.0.0.1` |
//! | `FORMS_PORT`         | `8080`      |
//! | `FORMS_OPEN_BROWSER` | `true`      |
//!
//! Unparseable values fall back to the default and are reported with a warning.

use log::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the default browser on the served URL after startup.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("FORMS_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup("FORMS_PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(e) => warn!("FORMS_PORT '{}' is invalid ({}), using {}", port, e, DEFAULT_PORT),
            }
        }

        if let Some(flag) = lookup("FORMS_OPEN_BROWSER") {
            match parse_flag(&flag) {
                Some(open) => config.open_browser = open,
                None => warn!("FORMS_OPEN_BROWSER '{}' is not a boolean, keeping true", flag),
            }
        }

        config
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
