use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeatgrepError>;

#[derive(Debug, Error)]
pub enum FeatgrepError {
    #[error("failed to read catalog file")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog file: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("catalog entry #{position} has an empty name")]
    EmptyFeatureName { position: usize },

    #[error("query must be at least {min} characters long")]
    QueryTooShort { min: usize },
}
