use events_theme::config::env_loader::load_config;
use events_theme::theme::build;
use events_theme::tracing::setup_tracing;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let loki = setup_tracing().await;

    let exit_code = run().await;

    if let Some((controller, handle)) = loki {
        controller.shutdown().await;
        let _ = handle.await;
    }

    exit_code
}

async fn run() -> ExitCode {
    let options = match load_config() {
        Ok(options) => options,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let report = match build(options).await {
        Ok(report) => report,
        Err(err) => {
            error!("Build failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    report
        .pages
        .iter()
        .for_each(|page| info!("Created page {} ({})", page.path, page.component));

    match serde_json::to_string_pretty(&report) {
        Ok(manifest) => {
            println!("{}", manifest);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Failed to serialize the build report: {}", err);
            ExitCode::FAILURE
        }
    }
}
