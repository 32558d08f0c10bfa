use httpmock::prelude::*;
use planet_catalog::core::ConfigProvider;
use planet_catalog::utils::validation::Validate;
use planet_catalog::{
    render, CatalogEndpoints, PlanetCatalog, PlanetService, ReportFormat, ReqwestTransport,
    TomlConfig,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(base_url: &str, format: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    let content = format!(
        r#"
[catalog]
base_url = "{}"
planets_query = "bodies?data=id,semimajorAxis,moons,moon,rel"
moon_query_path = "bodies/"
timeout_seconds = 5

[output]
format = "{}"
"#,
        base_url, format
    );
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_end_to_end_csv_report() {
    let server = MockServer::start();

    let planets_mock = server.mock(|when, then| {
        when.method(GET).path("/rest/bodies");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "bodies": [
                    {
                        "id": "terre",
                        "semimajorAxis": 149598023.0,
                        "moons": [{"moon": "La Lune", "rel": server.url("/rest/bodies/lune")}]
                    },
                    {"id": "venus", "semimajorAxis": 108208475.0, "moons": null}
                ]
            }));
    });
    let moon_mock = server.mock(|when, then| {
        when.method(GET).path("/rest/bodies/lune");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": "lune", "englishName": "Moon", "gravity": 1.62}));
    });

    let config_file = write_config(&server.url("/rest"), "csv");
    let config = TomlConfig::from_file(config_file.path()).unwrap();
    config.validate().unwrap();

    let transport = ReqwestTransport::from_config(&config).unwrap();
    let service = PlanetService::new(transport, CatalogEndpoints::from_config(&config));
    let planets = service.get_all_planets().await;

    planets_mock.assert();
    moon_mock.assert();

    let output = render(&planets, config.output_format().unwrap_or_default()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "number,id,semi_major_axis,moon_count,average_moon_gravity",
            "1,terre,149598023.0,1,1.62",
            "2,venus,108208475.0,0,0.0",
        ]
    );
}

#[tokio::test]
async fn test_end_to_end_with_catalog_down() {
    let server = MockServer::start();

    let planets_mock = server.mock(|when, then| {
        when.method(GET).path("/rest/bodies");
        then.status(503);
    });

    let config_file = write_config(&server.url("/rest/"), "table");
    let config = TomlConfig::from_file(config_file.path()).unwrap();
    assert_eq!(config.timeout_seconds(), 5);

    let transport = ReqwestTransport::from_config(&config).unwrap();
    let service = PlanetService::new(transport, CatalogEndpoints::from_config(&config));
    let planets = service.get_all_planets().await;

    planets_mock.assert();
    assert!(planets.is_empty());
    assert_eq!(
        render(&planets, ReportFormat::Table).unwrap(),
        "No planets were retrieved.\n"
    );
}
