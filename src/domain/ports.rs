use crate::domain::model::Planet;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Status line and body of a completed GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait CatalogTransport: Send + Sync {
    /// Issues a GET for `path_and_query`, resolved against the catalog base URL.
    /// Non-success statuses are returned as responses; only faults are errors.
    fn get(
        &self,
        path_and_query: &str,
    ) -> impl std::future::Future<Output = Result<TransportResponse>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn planets_query(&self) -> &str;
    fn moon_query_path(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

#[async_trait]
pub trait PlanetCatalog: Send + Sync {
    /// Best-effort retrieval; failures shrink the result instead of surfacing.
    async fn get_all_planets(&self) -> Vec<Planet>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let response = |status| TransportResponse {
            status,
            body: String::new(),
        };

        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(404).is_success());
        assert!(!response(500).is_success());
    }
}
