//! Error handling for the morph engine
//!
//! Setup can fail (bad payload, bad configuration, broken shape invariants).
//! Those failures are reported once, at initialization, as an
//! `EngineInitError`. The per-frame path never returns errors.

/// Errors raised while building the engine
#[derive(Debug, thiserror::Error)]
pub enum EngineInitError {
    #[error("Payload could not be encoded ({payload_len} bytes): {reason}")]
    Encoding { payload_len: usize, reason: String },

    #[error("Shape size mismatch: shape A has {shape_a} points, shape B has {shape_b}")]
    ShapeMismatch { shape_a: usize, shape_b: usize },

    #[error("Correspondence is not a bijection: {reason}")]
    NotBijective { reason: String },

    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error for {path}: {error}")]
    ConfigIo { path: String, error: String },

    #[error("Config parse error in {context}: {error}")]
    ConfigParse { context: String, error: String },
}

/// Type alias for setup results
pub type EngineResult<T> = Result<T, EngineInitError>;

impl EngineInitError {
    pub(crate) fn invalid_config(
        field: &str,
        value: impl std::fmt::Display,
        reason: &str,
    ) -> Self {
        EngineInitError::InvalidConfig {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<toml::de::Error> for EngineInitError {
    fn from(error: toml::de::Error) -> Self {
        EngineInitError::ConfigParse {
            context: "toml".to_string(),
            error: error.to_string(),
        }
    }
}

/// Extension trait for attaching a file path to IO failures
pub trait ErrorContext<T> {
    fn with_path(self, path: &std::path::Path) -> EngineResult<T>;
}

impl<T> ErrorContext<T> for Result<T, std::io::Error> {
    fn with_path(self, path: &std::path::Path) -> EngineResult<T> {
        self.map_err(|e| EngineInitError::ConfigIo {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }
}
