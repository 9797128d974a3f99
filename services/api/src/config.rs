use std::net::SocketAddr;
use tracing::Level;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_COMPLETION_BASE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai";

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    /// `None` when unset or blank; delegated commands then get a configuration reply.
    pub gemini_api_key: Option<String>,
    pub chat_model: String,
    pub completion_base_url: String,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let bind_address = match std::env::var("BIND_ADDRESS") {
            Ok(addr) => addr
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?,
            Err(_) => {
                let port = match std::env::var("PORT") {
                    Ok(port) => port
                        .parse::<u16>()
                        .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), e.to_string()))?,
                    Err(_) => DEFAULT_PORT,
                };
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let chat_model =
            std::env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());

        let completion_base_url = std::env::var("COMPLETION_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_COMPLETION_BASE_URL.to_string());
        if completion_base_url.trim().is_empty() {
            return Err(ConfigError::MissingVar(
                "COMPLETION_BASE_URL is set but empty".to_string(),
            ));
        }

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            bind_address,
            gemini_api_key,
            chat_model,
            completion_base_url,
            log_level,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tracing::Level;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("BIND_ADDRESS");
            env::remove_var("PORT");
            env::remove_var("GEMINI_API_KEY");
            env::remove_var("CHAT_MODEL");
            env::remove_var("COMPLETION_BASE_URL");
            env::remove_var("RUST_LOG");
        }
    }

    #[test]
    fn test_config_error_display() {
        let missing_var = ConfigError::MissingVar("TEST_VAR".to_string());
        assert_eq!(
            format!("{}", missing_var),
            "Missing environment variable: TEST_VAR"
        );

        let invalid_value =
            ConfigError::InvalidValue("TEST_VAR".to_string(), "bad_value".to_string());
        assert_eq!(
            format!("{}", invalid_value),
            "Invalid value for environment variable TEST_VAR: bad_value"
        );
    }

    #[test]
    #[serial]
    fn test_config_defaults_without_api_key() {
        clear_env_vars();

        let config = Config::from_env().expect("Config should load without an API key");

        assert_eq!(config.bind_address.to_string(), "0.0.0.0:3000");
        assert_eq!(config.gemini_api_key, None);
        assert!(!config.has_api_key());
        assert_eq!(config.chat_model, DEFAULT_CHAT_MODEL);
        assert_eq!(config.completion_base_url, DEFAULT_COMPLETION_BASE_URL);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    #[serial]
    fn test_config_blank_api_key_is_unset() {
        clear_env_vars();
        unsafe {
            env::set_var("GEMINI_API_KEY", "   ");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.gemini_api_key, None);
    }

    #[test]
    #[serial]
    fn test_config_from_env_custom_values() {
        clear_env_vars();
        unsafe {
            env::set_var("BIND_ADDRESS", "127.0.0.1:8080");
            env::set_var("GEMINI_API_KEY", "test-gemini-key");
            env::set_var("CHAT_MODEL", "gemini-2.5-flash");
            env::set_var("COMPLETION_BASE_URL", "http://localhost:9999/v1");
            env::set_var("RUST_LOG", "debug");
        }

        let config = Config::from_env().expect("Config should load successfully");

        assert_eq!(config.bind_address.to_string(), "127.0.0.1:8080");
        assert_eq!(config.gemini_api_key, Some("test-gemini-key".to_string()));
        assert!(config.has_api_key());
        assert_eq!(config.chat_model, "gemini-2.5-flash");
        assert_eq!(config.completion_base_url, "http://localhost:9999/v1");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    #[serial]
    fn test_config_port_fallback() {
        clear_env_vars();
        unsafe {
            env::set_var("PORT", "5001");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address.to_string(), "0.0.0.0:5001");
    }

    #[test]
    #[serial]
    fn test_config_bind_address_wins_over_port() {
        clear_env_vars();
        unsafe {
            env::set_var("PORT", "5001");
            env::set_var("BIND_ADDRESS", "127.0.0.1:4000");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address.to_string(), "127.0.0.1:4000");
    }

    #[test]
    #[serial]
    fn test_config_invalid_bind_address() {
        clear_env_vars();
        unsafe {
            env::set_var("BIND_ADDRESS", "not-a-valid-address");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue(var, _) => assert_eq!(var, "BIND_ADDRESS"),
            _ => panic!("Expected InvalidValue for BIND_ADDRESS"),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_port() {
        clear_env_vars();
        unsafe {
            env::set_var("PORT", "seventy");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue(var, _) => assert_eq!(var, "PORT"),
            _ => panic!("Expected InvalidValue for PORT"),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        clear_env_vars();
        unsafe {
            env::set_var("RUST_LOG", "not-a-level");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue(var, _) => assert_eq!(var, "RUST_LOG"),
            _ => panic!("Expected InvalidValue for RUST_LOG"),
        }
    }

    #[test]
    #[serial]
    fn test_config_empty_base_url() {
        clear_env_vars();
        unsafe {
            env::set_var("COMPLETION_BASE_URL", "");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::MissingVar(msg) => assert!(msg.contains("COMPLETION_BASE_URL")),
            _ => panic!("Expected MissingVar for COMPLETION_BASE_URL"),
        }
    }
}
