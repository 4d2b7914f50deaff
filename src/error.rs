use thiserror::Error;

#[derive(Error, Debug)]
pub enum SocialError {
    #[error("Post {0} Not Exists")]
    PostNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SocialError>;
