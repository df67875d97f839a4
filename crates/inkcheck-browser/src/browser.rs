//! Browser lifecycle management using Chrome DevTools Protocol

use headless_chrome::{Browser, LaunchOptions, Tab};
use inkcheck_core::{BrowserSettings, CheckError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Configuration for browser launch
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode (default: true)
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Bound on the document-readiness poll, in seconds
    pub load_timeout_secs: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            load_timeout_secs: 30,
        }
    }
}

impl From<&BrowserSettings> for BrowserConfig {
    fn from(settings: &BrowserSettings) -> Self {
        Self {
            headless: settings.headless,
            window_width: settings.window_width,
            window_height: settings.window_height,
            ..Default::default()
        }
    }
}

/// Active browser session with Chrome DevTools Protocol
///
/// One session is one browser instance plus one page, owned exclusively
/// by a single verification run. Dropping the session releases the
/// browser.
pub struct BrowserSession {
    /// Underlying browser instance (kept alive for tab lifetime)
    #[allow(dead_code)]
    browser: Browser,
    /// The run's single page
    tab: Arc<Tab>,
    /// Configuration
    config: BrowserConfig,
}

impl BrowserSession {
    /// Launch a new browser instance with default configuration
    pub async fn launch() -> Result<Self> {
        Self::launch_with_config(BrowserConfig::default()).await
    }

    /// Launch browser with custom configuration
    pub async fn launch_with_config(config: BrowserConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, size: {}x{})",
            config.headless, config.window_width, config.window_height
        );

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .build()
            .map_err(|e| CheckError::Browser(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| CheckError::Browser(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| CheckError::Browser(format!("Failed to create tab: {}", e)))?;

        info!("Browser launched successfully");

        Ok(Self {
            browser,
            tab,
            config,
        })
    }

    /// Execute JavaScript in the page context
    ///
    /// # Returns
    /// JSON result from JavaScript execution
    pub(crate) fn evaluate_script(&self, script: &str) -> Result<serde_json::Value> {
        debug!("Evaluating JavaScript: {}", script);

        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| CheckError::Browser(format!("JavaScript evaluation failed: {}", e)))?;

        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    /// Get reference to the active tab
    pub(crate) fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    pub(crate) fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Close the browser session
    pub async fn close(self) -> Result<()> {
        info!("Closing browser session");
        // Browser is dropped and cleaned up automatically
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        debug!("BrowserSession dropped, browser will be cleaned up");
    }
}
