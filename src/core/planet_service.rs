use crate::domain::dto::{MoonDto, MoonReference, PlanetEnvelope};
use crate::domain::model::Planet;
use crate::domain::ports::{CatalogTransport, ConfigProvider, PlanetCatalog};
use crate::utils::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::utils::error::Result;

/// Relative locations of the two catalog endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEndpoints {
    pub planets_query: String,
    pub moon_query_path: String,
}

impl CatalogEndpoints {
    pub fn new(planets_query: impl Into<String>, moon_query_path: impl Into<String>) -> Self {
        Self {
            planets_query: planets_query.into(),
            moon_query_path: moon_query_path.into(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.planets_query(), config.moon_query_path())
    }

    pub fn moon_query(&self, lookup_id: &str) -> String {
        format!("{}{}", self.moon_query_path, lookup_id)
    }
}

/// Outcome of resolving a single moon reference.
#[derive(Debug, Clone, PartialEq)]
pub enum MoonFetch {
    Resolved(MoonDto),
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Completion {
    Done,
    Aborted,
}

/// Two-stage retrieval: the planet list first, then one detail request per
/// moon reference, all issued one after another.
pub struct PlanetService<T: CatalogTransport, D: DiagnosticSink = TracingSink> {
    transport: T,
    endpoints: CatalogEndpoints,
    sink: D,
}

impl<T: CatalogTransport> PlanetService<T, TracingSink> {
    pub fn new(transport: T, endpoints: CatalogEndpoints) -> Self {
        Self::with_sink(transport, endpoints, TracingSink)
    }
}

impl<T: CatalogTransport, D: DiagnosticSink> PlanetService<T, D> {
    pub fn with_sink(transport: T, endpoints: CatalogEndpoints, sink: D) -> Self {
        Self {
            transport,
            endpoints,
            sink,
        }
    }

    /// Fills `planets` in received order. An early `Aborted` leaves it empty;
    /// an `Err` leaves whatever was completed before the fault.
    async fn collect_planets(&self, planets: &mut Vec<Planet>) -> Result<Completion> {
        let response = self.transport.get(&self.endpoints.planets_query).await?;

        if !response.is_success() {
            self.sink.emit(&Diagnostic::PlanetListRequestFailed {
                status: response.status,
            });
            return Ok(Completion::Aborted);
        }

        let envelope: Option<PlanetEnvelope> = serde_json::from_str(&response.body)?;
        let Some(bodies) = envelope.and_then(|envelope| envelope.bodies) else {
            self.sink.emit(&Diagnostic::PlanetListUnusable);
            return Ok(Completion::Aborted);
        };

        tracing::debug!("Planet list contains {} bodies", bodies.len());

        for record in bodies {
            let moons = match &record.moons {
                Some(references) => Some(self.resolve_moons(&record.id, references).await?),
                None => None,
            };
            planets.push(Planet::new(record, moons));
        }

        Ok(Completion::Done)
    }

    async fn resolve_moons(
        &self,
        planet_id: &str,
        references: &[MoonReference],
    ) -> Result<Vec<MoonDto>> {
        tracing::debug!(
            "Resolving {} moon references for {}",
            references.len(),
            planet_id
        );

        let mut resolved = Vec::with_capacity(references.len());
        for reference in references {
            match self.fetch_moon(planet_id, reference).await? {
                MoonFetch::Resolved(moon) => resolved.push(moon),
                MoonFetch::Skipped => continue,
            }
        }

        Ok(resolved)
    }

    async fn fetch_moon(&self, planet_id: &str, reference: &MoonReference) -> Result<MoonFetch> {
        let Some(lookup_id) = reference.lookup_id() else {
            self.sink.emit(&Diagnostic::MoonReferenceUnresolvable {
                planet_id: planet_id.to_string(),
            });
            return Ok(MoonFetch::Skipped);
        };

        let response = self
            .transport
            .get(&self.endpoints.moon_query(lookup_id))
            .await?;

        if !response.is_success() {
            self.sink.emit(&Diagnostic::MoonRequestFailed {
                planet_id: planet_id.to_string(),
                lookup_id: lookup_id.to_string(),
                status: response.status,
            });
            return Ok(MoonFetch::Skipped);
        }

        let moon: MoonDto = serde_json::from_str(&response.body)?;
        Ok(MoonFetch::Resolved(moon))
    }
}

#[async_trait::async_trait]
impl<T: CatalogTransport, D: DiagnosticSink> PlanetCatalog for PlanetService<T, D> {
    async fn get_all_planets(&self) -> Vec<Planet> {
        self.sink.emit(&Diagnostic::LoadingStarted);

        let mut planets = Vec::new();
        match self.collect_planets(&mut planets).await {
            Ok(Completion::Done) => self.sink.emit(&Diagnostic::LoadingFinished {
                planets: planets.len(),
            }),
            Ok(Completion::Aborted) => {}
            Err(e) => self.sink.emit(&Diagnostic::UnexpectedFault {
                message: e.to_string(),
            }),
        }

        planets
    }
}
