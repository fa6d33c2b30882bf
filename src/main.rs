use anyhow::Context;
use clap::Parser;
use small_nn::utils::error::ErrorSeverity;
use small_nn::utils::logger;
use small_nn::{CliConfig, LocalModelStore, NetError, NetworkEngine};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting small-nn CLI");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };
    let data = match cli.data_value() {
        Ok(data) => data,
        Err(e) => exit_with(e),
    };

    let network = match config.model.kind.build(config.model.name.as_deref()) {
        Ok(network) => network,
        Err(e) => exit_with(e),
    };
    tracing::info!("{}: {}", network.kind().as_str(), network);

    let store = LocalModelStore::from_settings(&config);
    let engine = if cli.save {
        NetworkEngine::with_store(network, &store)
    } else {
        NetworkEngine::new(network)
    };

    let report = match engine.run(cli.input_value(), data.as_ref()) {
        Ok(report) => report,
        Err(e) => exit_with(e),
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{} -> {}", report.model_name, report.output)
        .context("failed to write run report")?;
    if let Some(path) = &report.saved_to {
        writeln!(stdout, "📁 Model saved to: {}", path.display())
            .context("failed to write run report")?;
    }

    if !report.passed {
        eprintln!("❌ Output {} did not pass", report.output);
        std::process::exit(2);
    }

    Ok(())
}

fn exit_with(e: NetError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    eprintln!("❌ {}", e.user_friendly_message());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 3,
        ErrorSeverity::High | ErrorSeverity::Critical => 1,
    };
    std::process::exit(exit_code);
}
