use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("config parse error in {0}: {1}")]
    ConfigParse(PathBuf, toml::de::Error),

    #[error("config validation error: {0}")]
    ConfigValidation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Request could not be sent or the response never arrived.
    #[error("network error: {0}")]
    Network(String),

    /// A response arrived but its status indicates failure. The body is
    /// not inspected.
    #[error("server responded with status {0}")]
    HttpStatus(u16),

    /// The response body could not be parsed into the expected shape.
    #[error("failed to decode task list: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
