use thiserror::Error;

/// Errors from the strict configuration loaders.
///
/// The render path itself has no error type: it degrades to a placeholder
/// comment rather than failing a page render.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
