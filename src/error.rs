use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {message}")]
    Api { message: String },

    #[error("Authentication failed: {message}")]
    Auth { message: String },

    #[error("Input error: {0}")]
    Input(String),

    #[error("no valid addresses among {total} record(s); check the input data or API credentials")]
    AllInvalid { total: usize },
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
