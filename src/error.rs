use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DotconfError {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(#[from] confique::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_path() {
        let err = DotconfError::ConfigNotFound("/etc/app/app.conf".into());
        assert!(err.to_string().contains("/etc/app/app.conf"));
    }

    #[test]
    fn invalid_value_formats() {
        let err = DotconfError::InvalidValue {
            key: "servers".into(),
            reason: "arrays are not supported".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("servers"));
        assert!(msg.contains("arrays"));
    }

    #[test]
    fn json_error_converts() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DotconfError = source.into();
        assert!(err.to_string().starts_with("Invalid JSON"));
    }
}
