//! Opens external links in the user's default browser.
//!
//! The portfolio's social links open outside the app shell. Only https
//! URLs are accepted; everything else is refused before any process is
//! spawned.

use folio_common::PlatformError;
use tracing::info;

/// Open an https URL in the system default browser.
///
/// - macOS: `open <url>`
/// - Linux: `xdg-open <url>`
/// - Windows: `cmd /C start <url>`
pub fn open_external(url: &str) -> Result<(), PlatformError> {
    if !is_openable(url) {
        return Err(PlatformError::BrowserError(format!(
            "refusing to open non-https URL: {url}"
        )));
    }

    launch(url)?;
    info!(url, "opened external link in system browser");
    Ok(())
}

/// Whether a URL may be handed to the system browser.
pub fn is_openable(url: &str) -> bool {
    url.starts_with("https://")
}

#[cfg(target_os = "macos")]
fn launch(url: &str) -> Result<(), PlatformError> {
    run_opener(std::process::Command::new("open").arg(url))
}

#[cfg(target_os = "windows")]
fn launch(url: &str) -> Result<(), PlatformError> {
    run_opener(
        std::process::Command::new("cmd")
            .arg("/C")
            .arg("start")
            .arg("")
            .arg(url),
    )
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn launch(url: &str) -> Result<(), PlatformError> {
    run_opener(std::process::Command::new("xdg-open").arg(url))
}

fn run_opener(command: &mut std::process::Command) -> Result<(), PlatformError> {
    let status = command
        .status()
        .map_err(|e| PlatformError::BrowserError(format!("failed to spawn opener: {e}")))?;

    if !status.success() {
        return Err(PlatformError::BrowserError(format!(
            "opener exited with {status}"
        )));
    }
    Ok(())
}
