//! Headless-browser smoke check for the library mini-app
//!
//! Drives headless Chrome against the Telegram mini-app and verifies that
//! the "Документы" (Documents) tab is visible and, when clicked by a
//! non-admin user, shows the access-restricted message. Results are a
//! PASS/FAIL/INFO transcript on stdout plus two viewport screenshots in the
//! working directory.
//!
//! # Example
//!
//! ```no_run
//! use smoke_harness::{checker, BrowserSession, CheckConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = CheckConfig::default();
//! let session = BrowserSession::launch(&config).await?;
//! let page = session.open_page(&config).await?;
//! let report = checker::run_check(&page, &config, &mut std::io::stdout()).await?;
//! session.close().await?;
//! println!("exit code: {}", report.exit_code());
//! # Ok(())
//! # }
//! ```

pub mod checker;
pub mod config;
pub mod report;
pub mod session;

// Re-export main types for convenience
pub use config::CheckConfig;
pub use report::{AccessCheck, ConsoleReporter, TabCheckReport, TabOutcome};
pub use session::BrowserSession;
