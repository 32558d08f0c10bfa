pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::http::ReqwestTransport;
pub use crate::core::planet_service::{CatalogEndpoints, PlanetService};
pub use crate::core::report::{render, ReportFormat};
pub use crate::domain::model::{Moon, Planet};
pub use crate::domain::ports::PlanetCatalog;
pub use crate::utils::error::{CatalogError, Result};
