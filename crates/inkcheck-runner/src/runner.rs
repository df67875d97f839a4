//! Sequential step execution with scoped session teardown

use chrono::Utc;
use inkcheck_core::{Artifact, ArtifactStore, CheckConfig, CheckError, Driver, Result, Step};
use inkcheck_browser::{BrowserConfig, BrowserSession};
use std::time::Duration;
use tracing::info;

use crate::report::RunReport;
use crate::scenario::Scenario;

/// Executes verification scenarios end-to-end
///
/// Owns the run's single browser session: acquired at run start,
/// released on every exit path. Steps execute strictly in order; the
/// first failure aborts the remaining steps and propagates after
/// teardown, wrapped with the index of the failing step.
pub struct VerificationRunner {
    config: CheckConfig,
}

impl VerificationRunner {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Run a scenario against a freshly launched browser
    pub async fn run(&self, scenario: &Scenario) -> Result<RunReport> {
        info!("Starting verification run: {}", scenario.name());

        let session =
            BrowserSession::launch_with_config(BrowserConfig::from(&self.config.browser)).await?;

        // Capture the outcome before teardown so the session is
        // released on the failure path too.
        let result = self.run_with_driver(&session, scenario).await;
        session.close().await?;

        match &result {
            Ok(report) => info!(
                "Run completed: {} artifacts in {}ms",
                report.artifacts.len(),
                report.duration_ms()
            ),
            Err(e) => info!("Run failed: {}", e),
        }

        result
    }

    /// Run a scenario against an already-acquired driver
    ///
    /// Exposed separately so the sequencing logic can be exercised
    /// without a real browser.
    pub async fn run_with_driver(
        &self,
        driver: &dyn Driver,
        scenario: &Scenario,
    ) -> Result<RunReport> {
        let store = ArtifactStore::new(self.config.output_dir.clone());
        let started_at = Utc::now();
        let mut artifacts = Vec::new();

        for (index, step) in scenario.steps().iter().enumerate() {
            let step_number = index + 1;
            info!("Step {}: {}", step_number, step.describe());

            self.execute_step(driver, &store, step, &mut artifacts)
                .await
                .map_err(|e| e.at_step(step_number, step.describe()))?;
        }

        Ok(RunReport {
            scenario: scenario.name().to_string(),
            started_at,
            finished_at: Utc::now(),
            artifacts,
        })
    }

    async fn execute_step(
        &self,
        driver: &dyn Driver,
        store: &ArtifactStore,
        step: &Step,
        artifacts: &mut Vec<Artifact>,
    ) -> Result<()> {
        match step {
            Step::Navigate { url } => driver.navigate(url).await,
            Step::ScrollIntoView { selector } => driver.scroll_into_view(selector).await,
            Step::Fill { selector, text } => driver.fill(selector, text).await,
            Step::Click { selector } => driver.click(selector).await,
            Step::WaitVisible {
                selector,
                timeout_secs,
            } => {
                driver
                    .wait_visible(selector, Duration::from_secs(*timeout_secs))
                    .await
            }
            Step::WaitLoaded => driver.wait_loaded().await,
            Step::AssertCount { selector, expected } => {
                let actual = driver.count(selector).await?;
                if actual != *expected {
                    return Err(CheckError::AssertFailed {
                        selector: selector.clone(),
                        expected: *expected,
                        actual,
                    });
                }
                Ok(())
            }
            Step::Screenshot { name } => {
                let data = driver.screenshot().await?;
                let artifact = store.store(name, &data).await?;
                artifacts.push(artifact);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{booking_flow, navigation_flow};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// Scripted driver: records every action, flips the success
    /// message visible when the submit control is clicked.
    struct MockDriver {
        log: Mutex<Vec<String>>,
        missing: Vec<String>,
        unreachable: Vec<String>,
        counts: HashMap<String, u32>,
        success_visible: AtomicBool,
        submit_selector: String,
    }

    impl MockDriver {
        fn new() -> Self {
            Self {
                log: Mutex::new(Vec::new()),
                missing: Vec::new(),
                unreachable: Vec::new(),
                counts: HashMap::new(),
                success_visible: AtomicBool::new(false),
                submit_selector: ".btn-booking".to_string(),
            }
        }

        fn record(&self, action: &str) {
            self.log.lock().unwrap().push(action.to_string());
        }

        fn actions(&self) -> Vec<String> {
            self.log.lock().unwrap().clone()
        }

        fn check_exists(&self, selector: &str) -> Result<()> {
            if self.missing.iter().any(|m| m == selector) {
                return Err(CheckError::ElementNotFound {
                    selector: selector.to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl Driver for MockDriver {
        async fn navigate(&self, url: &str) -> Result<()> {
            if self.unreachable.iter().any(|u| url.contains(u.as_str())) {
                return Err(CheckError::Navigation {
                    url: url.to_string(),
                    reason: "net::ERR_FILE_NOT_FOUND".to_string(),
                });
            }
            self.record(&format!("navigate {}", url));
            Ok(())
        }

        async fn scroll_into_view(&self, selector: &str) -> Result<()> {
            self.check_exists(selector)?;
            self.record(&format!("scroll {}", selector));
            Ok(())
        }

        async fn fill(&self, selector: &str, text: &str) -> Result<()> {
            self.check_exists(selector)?;
            self.record(&format!("fill {} = {}", selector, text));
            Ok(())
        }

        async fn click(&self, selector: &str) -> Result<()> {
            self.check_exists(selector)?;
            if selector == self.submit_selector {
                self.success_visible.store(true, Ordering::SeqCst);
            }
            self.record(&format!("click {}", selector));
            Ok(())
        }

        async fn wait_visible(&self, selector: &str, timeout: Duration) -> Result<()> {
            if self.success_visible.load(Ordering::SeqCst) {
                self.record(&format!("visible {}", selector));
                Ok(())
            } else {
                Err(CheckError::AssertionTimeout {
                    selector: selector.to_string(),
                    timeout_secs: timeout.as_secs(),
                })
            }
        }

        async fn wait_loaded(&self) -> Result<()> {
            self.record("loaded");
            Ok(())
        }

        async fn count(&self, selector: &str) -> Result<u32> {
            Ok(*self.counts.get(selector).unwrap_or(&0))
        }

        async fn screenshot(&self) -> Result<Vec<u8>> {
            self.record("screenshot");
            Ok(b"\x89PNG\r\n\x1a\n mock".to_vec())
        }
    }

    fn test_config() -> (tempfile::TempDir, CheckConfig) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        let config = CheckConfig {
            site_root: dir.path().to_path_buf(),
            output_dir: dir.path().join("verification"),
            ..Default::default()
        };
        (dir, config)
    }

    #[tokio::test]
    async fn test_successful_run_produces_three_artifacts() {
        let (_dir, config) = test_config();
        let scenario = booking_flow(&config).unwrap();
        let runner = VerificationRunner::new(config.clone());
        let driver = MockDriver::new();

        let report = runner.run_with_driver(&driver, &scenario).await.unwrap();

        assert_eq!(report.artifacts.len(), 3);
        for (artifact, expected) in report
            .artifacts
            .iter()
            .zip(["01_main_page", "02_booking_success", "03_portfolio_page"])
        {
            assert_eq!(artifact.name, expected);
            assert_eq!(
                artifact.path,
                config.output_dir.join(format!("{}.png", expected))
            );
            assert!(artifact.path.exists());
            assert!(artifact.size_bytes > 0);
        }
    }

    #[tokio::test]
    async fn test_click_precedes_visibility_wait() {
        let (_dir, config) = test_config();
        let scenario = booking_flow(&config).unwrap();
        let runner = VerificationRunner::new(config);
        let driver = MockDriver::new();

        runner.run_with_driver(&driver, &scenario).await.unwrap();

        let actions = driver.actions();
        let click = actions
            .iter()
            .position(|a| a.starts_with("click"))
            .unwrap();
        let visible = actions
            .iter()
            .position(|a| a.starts_with("visible"))
            .unwrap();
        assert!(click < visible);
    }

    #[tokio::test]
    async fn test_success_message_not_visible_without_click() {
        let (_dir, config) = test_config();
        let runner = VerificationRunner::new(config);
        let driver = MockDriver::new();

        // The wait alone, with no click before it, must time out
        let scenario = Scenario::new(
            "wait_only",
            vec![Step::WaitVisible {
                selector: ".booking-success-message".to_string(),
                timeout_secs: 10,
            }],
        );

        let err = runner
            .run_with_driver(&driver, &scenario)
            .await
            .unwrap_err();
        match err {
            CheckError::Step { index, source, .. } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, CheckError::AssertionTimeout { .. }));
            }
            other => panic!("expected step-wrapped timeout, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_booking_section_fails_before_any_fill() {
        let (_dir, config) = test_config();
        let scenario = booking_flow(&config).unwrap();
        let runner = VerificationRunner::new(config);
        let mut driver = MockDriver::new();
        driver.missing.push("#book".to_string());

        let err = runner
            .run_with_driver(&driver, &scenario)
            .await
            .unwrap_err();

        match err {
            CheckError::Step {
                index,
                description,
                source,
            } => {
                assert_eq!(index, 3);
                assert_eq!(description, "scroll to #book");
                assert!(matches!(
                    *source,
                    CheckError::ElementNotFound { ref selector } if selector == "#book"
                ));
            }
            other => panic!("expected step-wrapped not-found, got {}", other),
        }

        // Fail-fast ordering: no field was touched
        assert!(driver.actions().iter().all(|a| !a.starts_with("fill")));
    }

    #[tokio::test]
    async fn test_missing_second_target_keeps_first_artifacts() {
        let (_dir, config) = test_config();
        let scenario = booking_flow(&config).unwrap();
        let runner = VerificationRunner::new(config.clone());
        let mut driver = MockDriver::new();
        driver.unreachable.push("pagan.html".to_string());

        let err = runner
            .run_with_driver(&driver, &scenario)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckError::Step { index: 10, .. }));

        // Partial side effects persist: the first two screenshots are
        // already on disk, the third never happened
        assert!(config.output_dir.join("01_main_page.png").exists());
        assert!(config.output_dir.join("02_booking_success.png").exists());
        assert!(!config.output_dir.join("03_portfolio_page.png").exists());
    }

    #[tokio::test]
    async fn test_navigation_flow_passes_with_expected_counts() {
        let (_dir, config) = test_config();
        let scenario = navigation_flow(&config).unwrap();
        let runner = VerificationRunner::new(config);
        let mut driver = MockDriver::new();
        driver.counts.insert(".artist-card".to_string(), 5);
        driver.counts.insert(".view-portfolio-btn".to_string(), 5);
        driver.counts.insert("#book form".to_string(), 1);
        driver.counts.insert("#artist option".to_string(), 5);

        let report = runner.run_with_driver(&driver, &scenario).await.unwrap();
        assert_eq!(report.scenario, "navigation_flow");
        assert!(report.artifacts.is_empty());
    }

    #[tokio::test]
    async fn test_navigation_flow_reports_count_mismatch() {
        let (_dir, config) = test_config();
        let scenario = navigation_flow(&config).unwrap();
        let runner = VerificationRunner::new(config);
        let mut driver = MockDriver::new();
        driver.counts.insert(".artist-card".to_string(), 4);

        let err = runner
            .run_with_driver(&driver, &scenario)
            .await
            .unwrap_err();
        match err {
            CheckError::Step { source, .. } => match *source {
                CheckError::AssertFailed {
                    expected, actual, ..
                } => {
                    assert_eq!(expected, 5);
                    assert_eq!(actual, 4);
                }
                other => panic!("expected count mismatch, got {}", other),
            },
            other => panic!("expected step-wrapped failure, got {}", other),
        }
    }
}
