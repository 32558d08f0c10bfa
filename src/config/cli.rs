use crate::config::toml_config::{CatalogSection, OutputSection, TomlConfig};
use crate::config::{
    DEFAULT_BASE_URL, DEFAULT_MOON_QUERY_PATH, DEFAULT_PLANETS_QUERY, DEFAULT_TIMEOUT_SECONDS,
};
use crate::core::report::ReportFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_catalog_settings, Validate};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Flags left unset fall back to the `--config` file, then to the built-in defaults.
#[derive(Debug, Clone, Parser)]
#[command(name = "planet-catalog")]
#[command(about = "Lists planets with the average surface gravity of their moons")]
pub struct CliConfig {
    #[arg(long, help = "Catalog base URL [default: public solar-system API]")]
    pub base_url: Option<String>,

    #[arg(long, help = "Path and query of the planet-list endpoint")]
    pub planets_query: Option<String>,

    #[arg(long, help = "Path prefix of the moon-detail endpoint")]
    pub moon_query_path: Option<String>,

    #[arg(long, help = "Per-request timeout in seconds [default: 30]")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, short, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, help = "Report format [default: table]")]
    pub format: Option<ReportFormat>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Lays the flags that were given over a file configuration.
    pub fn merged_with(&self, file: TomlConfig) -> TomlConfig {
        let output_format = self.format.or_else(|| file.output_format());

        TomlConfig {
            catalog: CatalogSection {
                base_url: self.base_url.clone().or(file.catalog.base_url),
                planets_query: self.planets_query.clone().or(file.catalog.planets_query),
                moon_query_path: self
                    .moon_query_path
                    .clone()
                    .or(file.catalog.moon_query_path),
                timeout_seconds: self.timeout_seconds.or(file.catalog.timeout_seconds),
            },
            output: Some(OutputSection {
                format: output_format,
            }),
        }
    }

    pub fn report_format(&self) -> ReportFormat {
        self.format.unwrap_or_default()
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn planets_query(&self) -> &str {
        self.planets_query.as_deref().unwrap_or(DEFAULT_PLANETS_QUERY)
    }

    fn moon_query_path(&self) -> &str {
        self.moon_query_path
            .as_deref()
            .unwrap_or(DEFAULT_MOON_QUERY_PATH)
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_catalog_settings(self)
    }
}
