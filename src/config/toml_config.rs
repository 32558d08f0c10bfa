use crate::config::{
    DEFAULT_BASE_URL, DEFAULT_MOON_QUERY_PATH, DEFAULT_PLANETS_QUERY, DEFAULT_TIMEOUT_SECONDS,
};
use crate::core::report::ReportFormat;
use crate::core::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_catalog_settings, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: CatalogSection,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSection {
    pub base_url: Option<String>,
    pub planets_query: Option<String>,
    pub moon_query_path: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<ReportFormat>,
}

impl TomlConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> Option<ReportFormat> {
        self.output.as_ref().and_then(|output| output.format)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_required_field("catalog.base_url", &self.catalog.base_url)?;
        validate_catalog_settings(self)
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        self.catalog
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
    }

    fn planets_query(&self) -> &str {
        self.catalog
            .planets_query
            .as_deref()
            .unwrap_or(DEFAULT_PLANETS_QUERY)
    }

    fn moon_query_path(&self) -> &str {
        self.catalog
            .moon_query_path
            .as_deref()
            .unwrap_or(DEFAULT_MOON_QUERY_PATH)
    }

    fn timeout_seconds(&self) -> u64 {
        self.catalog
            .timeout_seconds
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
