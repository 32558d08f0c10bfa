//! Console rendering of a retrieved planet collection.

use crate::domain::model::Planet;
use crate::utils::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for ReportFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            other => Err(CatalogError::InvalidConfigValue {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: table, csv, json".to_string(),
            }),
        }
    }
}

/// One report row per planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetSummary {
    pub number: usize,
    pub id: String,
    pub semi_major_axis: f64,
    pub moon_count: usize,
    pub average_moon_gravity: f64,
}

pub fn summarize(planets: &[Planet]) -> Vec<PlanetSummary> {
    planets
        .iter()
        .enumerate()
        .map(|(index, planet)| PlanetSummary {
            number: index + 1,
            id: planet.id().to_string(),
            semi_major_axis: planet.semi_major_axis(),
            moon_count: planet.moons().len(),
            average_moon_gravity: planet.average_moon_gravity(),
        })
        .collect()
}

pub fn render(planets: &[Planet], format: ReportFormat) -> Result<String> {
    let rows = summarize(planets);
    match format {
        ReportFormat::Table => Ok(render_table(&rows)),
        ReportFormat::Csv => render_csv(&rows),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(&rows)?),
    }
}

fn render_table(rows: &[PlanetSummary]) -> String {
    if rows.is_empty() {
        return "No planets were retrieved.\n".to_string();
    }

    let id_width = rows
        .iter()
        .map(|row| row.id.chars().count())
        .max()
        .unwrap_or(0)
        .max("Planet".len());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(
        "{:>3} | {:<id_width$} | {:>18} | {:>5} | {:>14}",
        "#", "Planet", "Semi-major axis", "Moons", "Avg. gravity"
    ));
    lines.push("-".repeat(3 + id_width + 18 + 5 + 14 + 12));
    lines.extend(rows.iter().map(|row| {
        format!(
            "{:>3} | {:<id_width$} | {:>18.1} | {:>5} | {:>14.4}",
            row.number, row.id, row.semi_major_axis, row.moon_count, row.average_moon_gravity
        )
    }));

    let mut table = lines.join("\n");
    table.push('\n');
    table
}

fn render_csv(rows: &[PlanetSummary]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer.write_record([
            "number",
            "id",
            "semi_major_axis",
            "moon_count",
            "average_moon_gravity",
        ])?;
    }
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CatalogError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| CatalogError::Config {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}
