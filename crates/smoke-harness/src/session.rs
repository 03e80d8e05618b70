//! Browser session lifecycle.
//!
//! Launches headless Chrome through chromiumoxide, keeps the CDP event
//! handler drained on a background task, and tears both down at the end of
//! the run. The caller must reach [`BrowserSession::close`] on every exit
//! path, including fatal check faults, so the Chrome process never outlives
//! the run.

use anyhow::{Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::CheckConfig;

/// A headless browser exclusively owned by one check run.
pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch headless Chrome sized for the configured viewport.
    pub async fn launch(config: &CheckConfig) -> Result<Self> {
        let browser_config = BrowserConfig::builder()
            .window_size(config.viewport_width, config.viewport_height)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build browser config: {e}"))?;
        Self::launch_with(browser_config).await
    }

    /// Launch with a custom browser configuration. Tests use this to point
    /// at a Chrome-for-Testing binary and a private user data directory.
    pub async fn launch_with(browser_config: BrowserConfig) -> Result<Self> {
        info!("Launching headless browser");
        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .context("Failed to launch browser")?;

        // Drain CDP events for the lifetime of the session.
        let handle = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser handler error: {e}");
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            handler: handle,
        })
    }

    /// Open a page and pin the viewport through a CDP device-metrics
    /// override. The window size alone is not authoritative in headless
    /// mode, and the mini-app lays itself out for a mobile screen.
    pub async fn open_page(&self, config: &CheckConfig) -> Result<Page> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .context("Failed to open page")?;

        let metrics = SetDeviceMetricsOverrideParams::builder()
            .width(i64::from(config.viewport_width))
            .height(i64::from(config.viewport_height))
            .device_scale_factor(1.0)
            .mobile(true)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build device metrics: {e}"))?;
        page.execute(metrics)
            .await
            .context("Failed to apply viewport emulation")?;

        Ok(page)
    }

    /// Close the browser and stop the event handler task.
    pub async fn close(mut self) -> Result<()> {
        info!("Closing browser");
        self.browser
            .close()
            .await
            .context("Failed to close browser")?;
        self.handler.abort();
        Ok(())
    }
}
