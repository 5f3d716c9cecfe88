//! API Monitor Entry Point

use api_monitor::cli::Cli;
use api_monitor::health::HealthProber;
use api_monitor::runner::MonitorRunner;
use api_monitor::shell::Shell;
use api_monitor::{logging, MonitorError};
use clap::Parser;
use std::io::Write;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli).await {
        error!(error = %e, "api-monitor terminated");
        println!("{}", e);
        let _ = std::io::stdout().flush();
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), MonitorError> {
    let config = cli.to_config();
    let prober = HealthProber::new(&config)?;
    let runner = MonitorRunner::new(prober, config.source_dir.clone());

    if let Some(environment) = cli.env {
        let mut stdout = std::io::stdout().lock();
        runner.run_pass(environment, &mut stdout).await?;
        return Ok(());
    }

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut shell = Shell::new(runner, stdin, stdout);
    shell.run().await
}
