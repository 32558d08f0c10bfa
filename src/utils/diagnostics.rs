//! Diagnostics emitted while the catalog is being retrieved.
//!
//! The retrieval service never returns an error to its caller, so every
//! failure it absorbs is reported here instead. The sink is handed to the
//! service rather than looked up globally, which lets tests record exactly
//! what a run reported.

use std::fmt;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    LoadingStarted,
    PlanetListRequestFailed {
        status: u16,
    },
    PlanetListUnusable,
    MoonRequestFailed {
        planet_id: String,
        lookup_id: String,
        status: u16,
    },
    MoonReferenceUnresolvable {
        planet_id: String,
    },
    UnexpectedFault {
        message: String,
    },
    LoadingFinished {
        planets: usize,
    },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::LoadingStarted | Diagnostic::LoadingFinished { .. } => Severity::Info,
            Diagnostic::PlanetListRequestFailed { .. }
            | Diagnostic::MoonReferenceUnresolvable { .. } => Severity::Warn,
            Diagnostic::PlanetListUnusable
            | Diagnostic::MoonRequestFailed { .. }
            | Diagnostic::UnexpectedFault { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::LoadingStarted => write!(f, "Loading planet data..."),
            Diagnostic::PlanetListRequestFailed { status } => {
                write!(f, "Failed to fetch planet data. Status code: {}", status)
            }
            Diagnostic::PlanetListUnusable => write!(f, "Failed to deserialize planet data"),
            Diagnostic::MoonRequestFailed {
                planet_id,
                lookup_id,
                status,
            } => write!(
                f,
                "Failed to fetch moon '{}' for {}. Status code: {}",
                lookup_id, planet_id, status
            ),
            Diagnostic::MoonReferenceUnresolvable { planet_id } => {
                write!(f, "Moon reference of {} carries no lookup id", planet_id)
            }
            Diagnostic::UnexpectedFault { message } => {
                write!(f, "An unexpected error occurred: {}", message)
            }
            Diagnostic::LoadingFinished { planets } => {
                write!(f, "Planet data loaded ({} planets)", planets)
            }
        }
    }
}

pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to the process-wide `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic.severity() {
            Severity::Info => tracing::info!("{}", diagnostic),
            Severity::Warn => tracing::warn!("⚠️ {}", diagnostic),
            Severity::Error => tracing::error!("❌ {}", diagnostic),
        }
    }
}

/// Keeps every diagnostic in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<Diagnostic>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn count_at(&self, severity: Severity) -> usize {
        self.events()
            .iter()
            .filter(|event| event.severity() == severity)
            .count()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        if let Ok(mut events) = self.events.lock() {
            events.push(diagnostic.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_clones_share_buffer() {
        let sink = RecordingSink::new();
        let handle = sink.clone();

        sink.emit(&Diagnostic::LoadingStarted);
        sink.emit(&Diagnostic::PlanetListRequestFailed { status: 503 });

        assert_eq!(
            handle.events(),
            vec![
                Diagnostic::LoadingStarted,
                Diagnostic::PlanetListRequestFailed { status: 503 },
            ]
        );
        assert_eq!(handle.count_at(Severity::Warn), 1);
        assert_eq!(handle.count_at(Severity::Error), 0);
    }

    #[test]
    fn test_moon_failure_message_names_planet_and_status() {
        let diagnostic = Diagnostic::MoonRequestFailed {
            planet_id: "mars".to_string(),
            lookup_id: "phobos".to_string(),
            status: 404,
        };

        assert_eq!(diagnostic.severity(), Severity::Error);
        let message = diagnostic.to_string();
        assert!(message.contains("mars"));
        assert!(message.contains("404"));
    }
}
