//! Driver implementation over Chrome DevTools Protocol
//!
//! Element lookups happen at time of use (`Tab::find_element`), so a
//! missing selector surfaces as ElementNotFound immediately instead of
//! burning a wait. Visibility and readiness checks poll the page via
//! JavaScript evaluation.

use async_trait::async_trait;
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use inkcheck_core::{CheckError, Driver, Result};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::browser::BrowserSession;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Expression that computes whether a selector's first match is
/// actually rendered and visible
fn visibility_expr(selector: &str) -> String {
    format!(
        r#"(() => {{
            const el = document.querySelector('{}');
            if (!el) {{ return false; }}
            const rect = el.getBoundingClientRect();
            const style = window.getComputedStyle(el);
            return rect.width > 0 && rect.height > 0
                && style.display !== 'none'
                && style.visibility !== 'hidden';
        }})()"#,
        selector
    )
}

impl BrowserSession {
    /// Fail with Interaction if the first match for `selector` has the
    /// `disabled` property set
    fn ensure_enabled(&self, selector: &str) -> Result<()> {
        let script = format!(
            "document.querySelector('{}')?.disabled === true",
            selector
        );
        if self.evaluate_script(&script)? == serde_json::Value::Bool(true) {
            return Err(CheckError::Interaction {
                selector: selector.to_string(),
                reason: "element is disabled".to_string(),
            });
        }
        Ok(())
    }

    fn is_visible(&self, selector: &str) -> Result<bool> {
        Ok(self.evaluate_script(&visibility_expr(selector))? == serde_json::Value::Bool(true))
    }
}

#[async_trait]
impl Driver for BrowserSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);

        self.tab()
            .navigate_to(url)
            .map_err(|e| CheckError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        self.tab()
            .wait_until_navigated()
            .map_err(|e| CheckError::Navigation {
                url: url.to_string(),
                reason: format!("navigation did not complete: {}", e),
            })?;

        info!("Successfully navigated to {}", url);
        Ok(())
    }

    async fn scroll_into_view(&self, selector: &str) -> Result<()> {
        debug!("Scrolling {} into view", selector);

        self.tab()
            .find_element(selector)
            .map_err(|_e| CheckError::ElementNotFound {
                selector: selector.to_string(),
            })?;

        let script = format!(
            "document.querySelector('{}').scrollIntoView({{ block: 'center' }})",
            selector
        );
        self.evaluate_script(&script)?;
        Ok(())
    }

    async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        debug!("Filling {} with '{}'", selector, text);

        let element =
            self.tab()
                .find_element(selector)
                .map_err(|_e| CheckError::ElementNotFound {
                    selector: selector.to_string(),
                })?;

        self.ensure_enabled(selector)?;

        element
            .click()
            .and_then(|el| el.type_into(text))
            .map_err(|e| CheckError::Interaction {
                selector: selector.to_string(),
                reason: format!("field not fillable: {}", e),
            })?;

        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        debug!("Clicking {}", selector);

        let element =
            self.tab()
                .find_element(selector)
                .map_err(|_e| CheckError::ElementNotFound {
                    selector: selector.to_string(),
                })?;

        if !self.is_visible(selector)? {
            return Err(CheckError::Interaction {
                selector: selector.to_string(),
                reason: "element is hidden".to_string(),
            });
        }
        self.ensure_enabled(selector)?;

        element.click().map_err(|e| CheckError::Interaction {
            selector: selector.to_string(),
            reason: format!("click failed: {}", e),
        })?;

        Ok(())
    }

    async fn wait_visible(&self, selector: &str, timeout: Duration) -> Result<()> {
        debug!("Waiting for {} to become visible (timeout: {:?})", selector, timeout);

        let deadline = Instant::now() + timeout;
        loop {
            if self.is_visible(selector)? {
                info!("Element visible: {}", selector);
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(CheckError::AssertionTimeout {
                    selector: selector.to_string(),
                    timeout_secs: timeout.as_secs(),
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn wait_loaded(&self) -> Result<()> {
        debug!("Waiting for document readiness");

        let deadline = Instant::now() + Duration::from_secs(self.config().load_timeout_secs);
        loop {
            let state = self.evaluate_script("document.readyState")?;
            match state.as_str() {
                Some("interactive") | Some("complete") => return Ok(()),
                _ => {}
            }
            if Instant::now() >= deadline {
                return Err(CheckError::Browser(
                    "document never finished structural parse".to_string(),
                ));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn count(&self, selector: &str) -> Result<u32> {
        let script = format!("document.querySelectorAll('{}').length", selector);
        let result = self.evaluate_script(&script)?;
        Ok(result.as_u64().unwrap_or(0) as u32)
    }

    async fn screenshot(&self) -> Result<Vec<u8>> {
        debug!("Capturing viewport screenshot");

        let data = self
            .tab()
            .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| CheckError::Screenshot(format!("CDP capture failed: {}", e)))?;

        Ok(data)
    }
}
