//! Transfer records matching the catalog API payloads.
//!
//! These only carry parsed data into entity construction and are dropped
//! once the `Planet`/`Moon` values exist.

use serde::Deserialize;

/// Envelope returned by the planet-list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanetEnvelope {
    pub bodies: Option<Vec<PlanetDto>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetDto {
    #[serde(default)]
    pub id: String,
    #[serde(alias = "semimajorAxis", default)]
    pub semi_major_axis: f64,
    pub moons: Option<Vec<MoonReference>>,
}

/// Cross-reference from a planet to one of its moons.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonReference {
    pub url_id: Option<String>,
    pub moon: Option<String>,
    pub rel: Option<String>,
}

impl MoonReference {
    /// Identifier for the moon-detail endpoint. Falls back to the last path
    /// segment of `rel` when `urlId` is absent or would escape the catalog base URL.
    pub fn lookup_id(&self) -> Option<&str> {
        if let Some(url_id) = self.url_id.as_deref().filter(|id| is_relative_segment(id)) {
            return Some(url_id);
        }

        self.rel
            .as_deref()
            .and_then(|rel| rel.trim_end_matches('/').rsplit('/').next())
            .filter(|segment| is_relative_segment(segment))
    }
}

/// Joined onto the moon path, the id must stay below the base URL.
fn is_relative_segment(id: &str) -> bool {
    !id.trim().is_empty() && !id.contains(':') && !id.starts_with('/')
}

/// Missing fields default, so a sparse record still yields a moon.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoonDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub gravity: f64,
}
