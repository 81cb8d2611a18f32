#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error("User-Agent is not a valid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;
