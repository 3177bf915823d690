//! Application configuration module
//! Handles environment variable loading, configuration validation, and application settings

use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub gateway: GatewayClientConfig,
    pub functions: FunctionsConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connection_timeout: u64, // seconds
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log format options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Plain,
}

/// Razorpay HTTP client settings. Credentials are not here: they are read
/// from the configuration record on every invocation.
#[derive(Debug, Clone)]
pub struct GatewayClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Key of the configuration record in `payment_provider_configs`.
    pub config_key: String,
}

/// Settings shared by the deployed entry points.
#[derive(Debug, Clone)]
pub struct FunctionsConfig {
    pub region: String,
    /// Header carrying the caller uid verified by the hosting layer.
    pub auth_user_header: String,
    pub supported_currencies: Vec<String>,
    pub create_order_timeout_secs: u64,
    pub health_check_timeout_secs: u64,
    pub connection_test_timeout_secs: u64,
    pub setup_diagnostic_timeout_secs: u64,
}

impl Default for GatewayClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.razorpay.com".to_string(),
            timeout_secs: 30,
            config_key: "razorpay".to_string(),
        }
    }
}

impl Default for FunctionsConfig {
    fn default() -> Self {
        Self {
            region: "asia-south1".to_string(),
            auth_user_header: "x-verified-user-id".to_string(),
            supported_currencies: vec!["INR".to_string()],
            create_order_timeout_secs: 60,
            health_check_timeout_secs: 30,
            connection_test_timeout_secs: 60,
            setup_diagnostic_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        let _ = dotenv::dotenv().ok();

        Ok(AppConfig {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
            gateway: GatewayClientConfig::from_env()?,
            functions: FunctionsConfig::from_env()?,
        })
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        self.gateway.validate()?;
        self.functions.validate()?;

        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &str, default: &str) -> Result<T, ConfigError> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| ConfigError::InvalidValue(name.to_string()))
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(ServerConfig {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("SERVER_PORT", "8000")?,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue(
                "SERVER_PORT cannot be 0".to_string(),
            ));
        }

        if self.host.is_empty() {
            return Err(ConfigError::InvalidValue(
                "SERVER_HOST cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(DatabaseConfig {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingVariable("DATABASE_URL".to_string()))?,
            max_connections: parse_var("DB_MAX_CONNECTIONS", "10")?,
            min_connections: parse_var("DB_MIN_CONNECTIONS", "1")?,
            connection_timeout: parse_var("DB_CONNECTION_TIMEOUT", "30")?,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::InvalidValue("DATABASE_URL".to_string()));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::InvalidValue(
                "DB_MIN_CONNECTIONS must be <= DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(())
    }
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "json".to_string())
                .as_str()
            {
                "plain" => LogFormat::Plain,
                _ => LogFormat::Json,
            },
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];
        if !valid_levels.contains(&self.level.to_uppercase().as_str()) {
            return Err(ConfigError::InvalidValue("LOG_LEVEL".to_string()));
        }

        Ok(())
    }
}

impl GatewayClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(GatewayClientConfig {
            base_url: env::var("RAZORPAY_BASE_URL")
                .unwrap_or_else(|_| "https://api.razorpay.com".to_string()),
            timeout_secs: parse_var("RAZORPAY_TIMEOUT_SECS", "30")?,
            config_key: env::var("RAZORPAY_CONFIG_KEY").unwrap_or_else(|_| "razorpay".to_string()),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue(
                "RAZORPAY_BASE_URL must be a valid URL".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue("RAZORPAY_TIMEOUT_SECS".to_string()));
        }

        if self.config_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue("RAZORPAY_CONFIG_KEY".to_string()));
        }

        Ok(())
    }
}

impl FunctionsConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(FunctionsConfig {
            region: env::var("FUNCTION_REGION").unwrap_or_else(|_| "asia-south1".to_string()),
            auth_user_header: env::var("AUTH_USER_HEADER")
                .unwrap_or_else(|_| "x-verified-user-id".to_string())
                .to_lowercase(),
            supported_currencies: env::var("SUPPORTED_CURRENCIES")
                .unwrap_or_else(|_| "INR".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            create_order_timeout_secs: parse_var("CREATE_ORDER_TIMEOUT_SECS", "60")?,
            health_check_timeout_secs: parse_var("HEALTH_CHECK_TIMEOUT_SECS", "30")?,
            connection_test_timeout_secs: parse_var("CONNECTION_TEST_TIMEOUT_SECS", "60")?,
            setup_diagnostic_timeout_secs: parse_var("SETUP_DIAGNOSTIC_TIMEOUT_SECS", "30")?,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.supported_currencies.is_empty() {
            return Err(ConfigError::InvalidValue(
                "SUPPORTED_CURRENCIES cannot be empty".to_string(),
            ));
        }

        if self.auth_user_header.trim().is_empty() {
            return Err(ConfigError::InvalidValue("AUTH_USER_HEADER".to_string()));
        }

        let timeouts = [
            ("CREATE_ORDER_TIMEOUT_SECS", self.create_order_timeout_secs),
            ("HEALTH_CHECK_TIMEOUT_SECS", self.health_check_timeout_secs),
            ("CONNECTION_TEST_TIMEOUT_SECS", self.connection_test_timeout_secs),
            ("SETUP_DIAGNOSTIC_TIMEOUT_SECS", self.setup_diagnostic_timeout_secs),
        ];
        if let Some((name, _)) = timeouts.iter().find(|(_, secs)| *secs == 0) {
            return Err(ConfigError::InvalidValue(name.to_string()));
        }

        Ok(())
    }

    pub fn is_supported_currency(&self, currency: &str) -> bool {
        self.supported_currencies.iter().any(|c| c == currency)
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVariable(String),

    #[error("Invalid value for configuration: {0}")]
    InvalidValue(String),
}
