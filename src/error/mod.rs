use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Spark error: {0}")]
    Spark(#[from] SparkError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}

/// Spark chat-completion API errors
#[derive(Debug, Error)]
pub enum SparkError {
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Analysis and persistence errors
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Result file not found: {path}")]
    MissingInput { path: PathBuf },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Chart rendering failed: {message}")]
    Chart { message: String },
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for Spark API operations
pub type SparkResult<T> = Result<T, SparkError>;

/// Result type alias for analysis and persistence operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Config {
            message: "missing key".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error: missing key");
    }

    #[test]
    fn test_spark_error_display() {
        let err = SparkError::Api {
            status: 401,
            message: "unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 401 - unauthorized");

        let err = SparkError::InvalidResponse {
            message: "malformed JSON".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid response: malformed JSON");

        let err = SparkError::Timeout { timeout_ms: 5000 };
        assert_eq!(err.to_string(), "Request timeout after 5000ms");
    }

    #[test]
    fn test_analysis_error_display() {
        let err = AnalysisError::MissingInput {
            path: PathBuf::from("results.csv"),
        };
        assert_eq!(err.to_string(), "Result file not found: results.csv");

        let err = AnalysisError::Chart {
            message: "backend failed".to_string(),
        };
        assert_eq!(err.to_string(), "Chart rendering failed: backend failed");
    }

    #[test]
    fn test_spark_error_conversion_to_app_error() {
        let spark_err = SparkError::Timeout { timeout_ms: 1000 };
        let app_err: AppError = spark_err.into();
        assert!(matches!(app_err, AppError::Spark(_)));
    }

    #[test]
    fn test_analysis_error_conversion_to_app_error() {
        let analysis_err = AnalysisError::MissingInput {
            path: PathBuf::from("missing.csv"),
        };
        let app_err: AppError = analysis_err.into();
        assert!(matches!(app_err, AppError::Analysis(_)));
        assert!(app_err.to_string().contains("missing.csv"));
    }
}
