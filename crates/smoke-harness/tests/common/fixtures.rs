//! Fixture pages served over file:// URLs.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use smoke_harness::CheckConfig;

/// Unique scratch directory for one test.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("smoke-harness-{}-{}", std::process::id(), name));
    fs::create_dir_all(&dir).expect("Should create scratch dir");
    dir
}

/// Write a fixture page into `dir` and return its file:// URL.
pub fn fixture_url(dir: &Path, html: &str) -> String {
    let file = dir.join("index.html");
    fs::write(&file, html).expect("Should write fixture page");
    format!("file://{}", file.display())
}

/// Production config retargeted at a fixture page, with short delays and
/// screenshots kept inside the scratch directory.
pub fn test_config(dir: &Path, html: &str) -> CheckConfig {
    CheckConfig {
        url: fixture_url(dir, html),
        settle_delay: Duration::from_millis(200),
        click_delay: Duration::from_millis(200),
        tabs_screenshot: dir.join("tabs.png"),
        docs_screenshot: dir.join("docs.png"),
        ..CheckConfig::default()
    }
}
