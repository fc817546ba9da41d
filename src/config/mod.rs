use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub spark: SparkConfig,
    pub experiment: ExperimentConfig,
    pub logging: LoggingConfig,
}

/// Spark chat-completion API configuration
#[derive(Debug, Clone)]
pub struct SparkConfig {
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
    pub model: String,
    pub timeout_ms: u64,
}

/// Experiment loop configuration
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    pub samples_per_probe: u32,
    pub call_delay_ms: u64,
    pub output_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let spark = SparkConfig {
            api_key: env::var("SPARK_API_KEY").map_err(|_| AppError::Config {
                message: "SPARK_API_KEY is required".to_string(),
            })?,
            api_secret: env::var("SPARK_API_SECRET").map_err(|_| AppError::Config {
                message: "SPARK_API_SECRET is required".to_string(),
            })?,
            base_url: env::var("SPARK_BASE_URL")
                .unwrap_or_else(|_| "https://spark-api-open.xf-yun.com/v2".to_string()),
            model: env::var("SPARK_MODEL").unwrap_or_else(|_| "x1".to_string()),
            timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30000),
        };

        let experiment = ExperimentConfig {
            samples_per_probe: env::var("SAMPLES_PER_PROBE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3),
            call_delay_ms: env::var("API_CALL_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1000),
            output_dir: PathBuf::from(env::var("OUTPUT_DIR").unwrap_or_else(|_| ".".to_string())),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(Config {
            spark,
            experiment,
            logging,
        })
    }
}

impl SparkConfig {
    /// The bearer credential sent to the endpoint, combining both secrets.
    pub fn bearer_token(&self) -> String {
        format!("{}:{}", self.api_key, self.api_secret)
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            samples_per_probe: 3,
            call_delay_ms: 1000,
            output_dir: PathBuf::from("."),
        }
    }
}
