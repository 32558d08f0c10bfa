use anyhow::Context;
use clap::Parser;
use planet_catalog::config::LogFormat;
use planet_catalog::core::ConfigProvider;
use planet_catalog::utils::{logger, validation::Validate};
use planet_catalog::{
    render, CatalogEndpoints, CliConfig, PlanetCatalog, PlanetService, ReportFormat,
    ReqwestTransport, TomlConfig,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting planet-catalog");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(cli).await {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);
        let exit_code = match e.downcast_ref::<planet_catalog::CatalogError>() {
            Some(catalog_error) => {
                eprintln!("💡 {}", catalog_error.recovery_suggestion());
                catalog_error.exit_code()
            }
            None => 2,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: CliConfig) -> anyhow::Result<()> {
    match &cli.config {
        Some(path) => {
            let file = TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            let config = cli.merged_with(file);
            config.validate()?;
            let format = config.output_format().unwrap_or_default();
            report(&config, format).await
        }
        None => {
            cli.validate()?;
            report(&cli, cli.report_format()).await
        }
    }
}

async fn report<C: ConfigProvider>(config: &C, format: ReportFormat) -> anyhow::Result<()> {
    tracing::debug!("Catalog base URL: {}", config.base_url());

    let transport = ReqwestTransport::from_config(config)?;
    let service = PlanetService::new(transport, CatalogEndpoints::from_config(config));

    let planets = service.get_all_planets().await;
    let output = render(&planets, format).context("Failed to render planet report")?;

    print!("{}", output);
    Ok(())
}
