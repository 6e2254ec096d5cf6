use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vnpay_smoke::{config::Config, runner::SmokeRunner};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;

    if config.accept_invalid_certs {
        tracing::warn!("TLS certificate validation is disabled");
    }

    let runner = SmokeRunner::from_config(&config).context("Failed to build HTTP client")?;

    let stdout = std::io::stdout();
    let summary = runner
        .run(&mut stdout.lock())
        .await
        .context("Failed to write report")?;

    tracing::info!(
        passed = summary.passed(),
        failed = summary.failed(),
        errored = summary.errored(),
        "Smoke run finished"
    );

    // Check outcomes never change the exit status
    Ok(())
}
