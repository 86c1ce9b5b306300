use anyhow::Context;
use clap::Parser;
use truck_fleet::utils::logger;
use truck_fleet::{CliConfig, FleetEngine, OutputFormat, FAILURE_EXIT_CODE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting truck-fleet");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.load_fleet_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(FAILURE_EXIT_CODE);
        }
    };

    let fleet = config.build_fleet();
    let engine = FleetEngine::new(config.dispatch_options());

    let fleet = if cli.strict {
        let report = engine.process_fleet_collect(fleet).await;
        if !report.is_success() {
            for failure in &report.failures {
                eprintln!("❌ Truck {}: {}", failure.truck_id, failure.error);
            }
            print_statuses(&report.fleet, cli.format)?;
            std::process::exit(report.exit_code());
        }
        report.fleet
    } else {
        engine
            .run(fleet, config.mode())
            .await
            .context("error processing fleet")?
    };

    print_statuses(&fleet, cli.format)?;
    println!("All trucks processed successfully!");

    Ok(())
}

fn print_statuses(fleet: &truck_fleet::Fleet, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for status in fleet.statuses() {
                tracing::info!("📦 {}", status);
            }
        }
        OutputFormat::Json => {
            let json = fleet
                .to_json()
                .context("failed to serialize truck statuses")?;
            println!("{}", json);
        }
    }
    Ok(())
}
