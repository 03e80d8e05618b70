//! The tab-check sequence.
//!
//! A strictly linear flow with one branch: navigate, settle, screenshot,
//! look for the Documents tab button by visible text, then either click it
//! and classify the resulting body text, or enumerate every button label
//! for diagnosis. Fatal faults (navigation, screenshot, click, body read)
//! propagate to the caller; only per-button text reads are tolerated.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::{Element, Page};
use tracing::{debug, info};

use crate::config::CheckConfig;
use crate::report::{AccessCheck, ConsoleReporter, TabCheckReport, TabOutcome};

/// Run the full check against an already-open page.
///
/// Transcript lines are written to `out` as each step completes, so a
/// fatal fault mid-sequence still leaves the lines already earned.
pub async fn run_check(
    page: &Page,
    config: &CheckConfig,
    out: &mut dyn Write,
) -> Result<TabCheckReport> {
    info!(url = %config.url, "Navigating to mini-app");
    page.goto(config.url.as_str())
        .await
        .context("Navigation failed")?;
    page.wait_for_navigation()
        .await
        .context("Wait for page load failed")?;
    // Heuristic settle delay for client-side rendering, not a sync point.
    tokio::time::sleep(config.settle_delay).await;

    capture_viewport(page, &config.tabs_screenshot).await?;

    let tab_button = find_tab_button(page, config).await?;

    let outcome = match tab_button {
        Some(button) => {
            info!(label = %config.tab_label, "Tab button found, clicking");
            // Verdict goes out before the click; the steps below can fail.
            ConsoleReporter::write_tab_visible(out)?;

            button.click().await.context("Click on tab button failed")?;
            tokio::time::sleep(config.click_delay).await;

            capture_viewport(page, &config.docs_screenshot).await?;

            let body = body_text(page).await?;
            let access = classify_access(&body, config);
            ConsoleReporter::write_access(out, &access)?;
            TabOutcome::Found { access }
        }
        None => {
            info!(label = %config.tab_label, "Tab button not found, listing buttons");
            let labels = button_labels(page).await;
            ConsoleReporter::write_not_found(out, &labels)?;
            TabOutcome::NotFound { labels }
        }
    };

    Ok(TabCheckReport { outcome })
}

/// Find the first button whose inner text contains the tab label.
///
/// A button whose text cannot be read does not match; the fault is logged
/// and the remaining candidates are still considered.
async fn find_tab_button(page: &Page, config: &CheckConfig) -> Result<Option<Element>> {
    let buttons = page
        .find_elements("button")
        .await
        .context("Button query failed")?;

    for button in buttons {
        match button.inner_text().await {
            Ok(Some(text)) if text.contains(&config.tab_label) => return Ok(Some(button)),
            Ok(_) => {}
            Err(e) => debug!("Skipping button with unreadable text: {e}"),
        }
    }
    Ok(None)
}

/// Collect the trimmed, non-empty label of every button on the page.
async fn button_labels(page: &Page) -> Vec<String> {
    let buttons = match page.find_elements("button").await {
        Ok(buttons) => buttons,
        Err(e) => {
            debug!("Button enumeration failed: {e}");
            return Vec::new();
        }
    };

    let mut reads = Vec::with_capacity(buttons.len());
    for button in &buttons {
        reads.push(button.inner_text().await);
    }
    collect_labels(reads)
}

/// Keep the trimmed, non-empty labels among raw text reads.
///
/// A text-read fault on one candidate does not invalidate enumeration of
/// the others; it is logged at debug level and the entry is skipped.
fn collect_labels<E: std::fmt::Display>(reads: Vec<Result<Option<String>, E>>) -> Vec<String> {
    let mut labels = Vec::new();
    for read in reads {
        match read {
            Ok(Some(text)) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    labels.push(trimmed.to_string());
                }
            }
            Ok(None) => {}
            Err(e) => debug!("Skipping button with unreadable text: {e}"),
        }
    }
    labels
}

/// Classify the post-click body text. Either access marker alone means the
/// restricted view is shown; otherwise the leading slice of the text is
/// surfaced without a verdict.
pub fn classify_access(body: &str, config: &CheckConfig) -> AccessCheck {
    if config
        .access_markers
        .iter()
        .any(|marker| body.contains(marker.as_str()))
    {
        AccessCheck::Restricted
    } else {
        AccessCheck::Ambiguous {
            preview: body.chars().take(config.preview_chars).collect(),
        }
    }
}

/// PNG screenshot of the current viewport (not the full scrollable page),
/// overwriting any existing file at `path`.
async fn capture_viewport(page: &Page, path: &Path) -> Result<()> {
    let params = ScreenshotParams::builder()
        .format(CaptureScreenshotFormat::Png)
        .full_page(false)
        .build();
    page.save_screenshot(params, path)
        .await
        .with_context(|| format!("Failed to write screenshot {}", path.display()))?;
    debug!(path = %path.display(), "Screenshot written");
    Ok(())
}

/// Visible text of the document body, empty when the body has none.
async fn body_text(page: &Page) -> Result<String> {
    let body = page
        .find_element("body")
        .await
        .context("Body element not found")?;
    let text = body
        .inner_text()
        .await
        .context("Failed to read body text")?;
    Ok(text.unwrap_or_default())
}
