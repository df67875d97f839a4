//! Browser driver abstraction
//!
//! The runner never talks to a browser directly; it goes through this
//! trait. The production implementation (inkcheck-browser) drives
//! Chromium over CDP; tests substitute a scripted driver.

use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

/// A controllable browser page
///
/// One driver instance corresponds to one session: a single browser
/// page owned by a single run. Implementations are responsible for
/// releasing the underlying browser when dropped.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Navigate to a URL and wait for the navigation to complete
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Scroll an element into the viewport
    async fn scroll_into_view(&self, selector: &str) -> Result<()>;

    /// Type a literal value into an input field
    async fn fill(&self, selector: &str, text: &str) -> Result<()>;

    /// Click a control
    async fn click(&self, selector: &str) -> Result<()>;

    /// Wait for an element to become visible, bounded by `timeout`
    async fn wait_visible(&self, selector: &str, timeout: Duration) -> Result<()>;

    /// Wait for the document to reach a minimally-loaded state
    /// (structural parse complete)
    async fn wait_loaded(&self) -> Result<()>;

    /// Number of elements currently matching a selector
    async fn count(&self, selector: &str) -> Result<u32>;

    /// Capture the current viewport as PNG bytes
    async fn screenshot(&self) -> Result<Vec<u8>>;
}
