use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

impl CatalogError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CatalogError::Config { .. }
                | CatalogError::ConfigValidation { .. }
                | CatalogError::InvalidConfigValue { .. }
                | CatalogError::MissingConfig { .. }
        )
    }

    /// Process exit code for the binary: 1 for bad configuration, 2 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            1
        } else {
            2
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::Transport(_) => "Check network connectivity and the catalog base URL",
            CatalogError::Url(_) => "Use an absolute http(s) base URL such as https://host/rest/",
            CatalogError::Io(_) => "Check that the configuration file exists and is readable",
            CatalogError::Serialization(_) | CatalogError::Csv(_) => {
                "The catalog returned data in an unexpected shape"
            }
            _ => "Review the command line flags or the TOML configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
