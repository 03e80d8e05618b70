//! Fixed parameters of the smoke check.
//!
//! The check has no configuration surface: no flags, no environment
//! variables, no config file. Every parameter is a literal, carried by
//! [`CheckConfig::default`]. Tests build their own `CheckConfig` pointing
//! at fixture pages.

use std::path::PathBuf;
use std::time::Duration;

/// Parameters for a single tab-check run.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// URL of the mini-app entry point.
    pub url: String,
    /// Emulated viewport width in CSS pixels.
    pub viewport_width: u32,
    /// Emulated viewport height in CSS pixels.
    pub viewport_height: u32,
    /// Visible text identifying the Documents tab button. A button matches
    /// when its inner text contains this label.
    pub tab_label: String,
    /// Substrings whose presence in the post-click body text means the
    /// access-restricted message is shown. Any single match suffices.
    pub access_markers: Vec<String>,
    /// Extra settle delay after the navigation readiness signal.
    pub settle_delay: Duration,
    /// Render delay after clicking the tab.
    pub click_delay: Duration,
    /// Path of the pre-click viewport screenshot.
    pub tabs_screenshot: PathBuf,
    /// Path of the post-click viewport screenshot.
    pub docs_screenshot: PathBuf,
    /// Leading characters of body text shown when the outcome is ambiguous.
    pub preview_chars: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            url: "https://avrora-library-production.up.railway.app/telegram-app".to_string(),
            viewport_width: 390,
            viewport_height: 844,
            tab_label: "Документы".to_string(),
            access_markers: vec!["Требуется".to_string(), "администратора".to_string()],
            settle_delay: Duration::from_millis(2000),
            click_delay: Duration::from_millis(1000),
            tabs_screenshot: PathBuf::from("miniapp-tabs.png"),
            docs_screenshot: PathBuf::from("miniapp-docs-tab.png"),
            preview_chars: 300,
        }
    }
}
