//! Shared browser helpers for the integration tests.
//!
//! Chrome is required; set SKIP_BROWSER_TESTS=1 to skip these tests on
//! machines without it.

use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::browser::BrowserConfig;
use smoke_harness::{BrowserSession, CheckConfig};

/// Check if browser tests should be skipped.
pub fn should_skip() -> bool {
    std::env::var("SKIP_BROWSER_TESTS").is_ok()
}

/// Macro to skip a test when Chrome isn't available.
#[macro_export]
macro_rules! skip_if_no_chrome {
    () => {
        if browser::should_skip() {
            eprintln!("Skipping test: SKIP_BROWSER_TESTS is set");
            return;
        }
    };
}

/// Find Chrome for Testing installed by Puppeteer.
pub fn find_chrome_for_testing() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    let puppeteer_cache = std::path::Path::new(&home).join(".cache/puppeteer/chrome");

    if let Ok(entries) = std::fs::read_dir(&puppeteer_cache) {
        let mut versions: Vec<_> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .collect();
        versions.sort_by_key(|v| std::cmp::Reverse(v.path()));

        for version_dir in versions {
            let candidates = [
                "chrome-mac-arm64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing",
                "chrome-mac-x64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing",
                "chrome-linux64/chrome",
            ];
            for candidate in candidates {
                let chrome = version_dir.path().join(candidate);
                if chrome.exists() {
                    return Some(chrome);
                }
            }
        }
    }
    None
}

/// Launch a session for the configured viewport, or skip when Chrome isn't
/// installed. Uses a private user data directory so parallel test binaries
/// don't collide.
pub async fn require_session(config: &CheckConfig) -> Option<BrowserSession> {
    use std::sync::atomic::{AtomicU64, Ordering};
    static SESSION_ID: AtomicU64 = AtomicU64::new(0);

    let mut builder = BrowserConfig::builder()
        .window_size(config.viewport_width, config.viewport_height);

    if let Some(chrome_path) = find_chrome_for_testing() {
        eprintln!("Using Chrome for Testing: {}", chrome_path.display());
        builder = builder.chrome_executable(chrome_path);
    }

    let session_id = SESSION_ID.fetch_add(1, Ordering::SeqCst);
    let user_data_dir = std::env::temp_dir().join(format!(
        "smoke-harness-test-{}-{}",
        std::process::id(),
        session_id
    ));
    builder = builder.user_data_dir(user_data_dir);

    let browser_config = builder
        .build()
        .unwrap_or_else(|e| panic!("Failed to build browser config: {e}"));

    match BrowserSession::launch_with(browser_config).await {
        Ok(session) => {
            // Give the browser a moment to fully initialize
            tokio::time::sleep(Duration::from_millis(500)).await;
            Some(session)
        }
        Err(e) => {
            if format!("{e:#}").contains("Could not auto detect") {
                eprintln!("Skipping: Chrome not installed ({e:#})");
                None
            } else {
                panic!("Unexpected browser error: {e:#}");
            }
        }
    }
}
