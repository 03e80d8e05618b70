//! Smoke check for the Documents tab of the library mini-app.
//!
//! Run with: cargo run -p smoke-harness --bin docs-tab-check

use std::process::ExitCode;

use anyhow::Result;
use smoke_harness::{checker, BrowserSession, CheckConfig, TabCheckReport};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt::init();

    let config = CheckConfig::default();
    let session = BrowserSession::launch(&config).await?;

    println!("Navigating to mini-app...");

    // Close the session on the fault path too; Chrome must not outlive
    // the run.
    let report = match run(&session, &config).await {
        Ok(report) => report,
        Err(e) => {
            let _ = session.close().await;
            return Err(e);
        }
    };

    session.close().await?;
    println!("Done.");

    Ok(ExitCode::from(report.exit_code()))
}

// The transcript streams to stdout from inside the check, so a fault in
// any step, formatting included, takes the session-closing error path.
async fn run(session: &BrowserSession, config: &CheckConfig) -> Result<TabCheckReport> {
    let page = session.open_page(config).await?;
    let mut stdout = std::io::stdout();
    checker::run_check(&page, config, &mut stdout).await
}
