#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, LogFormat};
pub use toml_config::TomlConfig;

/// Public solar-system catalog the defaults point at.
pub const DEFAULT_BASE_URL: &str = "https://api.le-systeme-solaire.net/rest/";
pub const DEFAULT_PLANETS_QUERY: &str =
    "bodies?data=id,semimajorAxis,moons,moon,rel&filter[]=isPlanet,eq,true";
pub const DEFAULT_MOON_QUERY_PATH: &str = "bodies/";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
