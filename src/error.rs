use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse history page: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Export error: {0}")]
    Export(#[from] crate::export::ExportError),
}
