//! Configuration management for inkcheck
//!
//! This module provides configuration structures for a verification run,
//! including document locations, the selector contract the site must
//! honor, literal form values, and browser settings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::Result;

/// Verification run configuration
///
/// Loaded from `inkcheck.toml` next to the site, or defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Directory containing the static site (holds the entry document)
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,

    /// Entry document, relative to `site_root`
    #[serde(default = "default_entry_page")]
    pub entry_page: String,

    /// Second document to verify, relative to `site_root`
    #[serde(default = "default_portfolio_page")]
    pub portfolio_page: String,

    /// Directory screenshot artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Bound on the success-message visibility wait, in seconds
    #[serde(default = "default_visibility_timeout")]
    pub visibility_timeout_secs: u64,

    /// How many artists the landing page presents
    #[serde(default = "default_expected_artists")]
    pub expected_artists: u32,

    /// Selector contract consumed from the site
    #[serde(default)]
    pub selectors: Selectors,

    /// Literal values typed into the booking form
    #[serde(default)]
    pub form: FormValues,

    /// Browser launch settings
    #[serde(default)]
    pub browser: BrowserSettings,
}

/// Stable identifiers the site guarantees not to rename without
/// updating this contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selectors {
    /// Anchor element identifying the booking section
    #[serde(default = "default_booking_section")]
    pub booking_section: String,

    /// Name input field
    #[serde(default = "default_name_field")]
    pub name: String,

    /// Email input field
    #[serde(default = "default_email_field")]
    pub email: String,

    /// Free-text message field
    #[serde(default = "default_message_field")]
    pub message: String,

    /// Submit control for the booking form
    #[serde(default = "default_submit")]
    pub submit: String,

    /// Element made visible on successful submission
    #[serde(default = "default_success_message")]
    pub success_message: String,

    /// One card per artist on the landing page
    #[serde(default = "default_artist_card")]
    pub artist_card: String,

    /// Per-card portfolio navigation button
    #[serde(default = "default_portfolio_button")]
    pub portfolio_button: String,

    /// The booking form element itself
    #[serde(default = "default_booking_form")]
    pub booking_form: String,

    /// Options of the artist select in the booking form
    #[serde(default = "default_artist_option")]
    pub artist_option: String,
}

/// Deterministic literals filled into the booking form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormValues {
    #[serde(default = "default_form_name")]
    pub name: String,

    #[serde(default = "default_form_email")]
    pub email: String,

    #[serde(default = "default_form_message")]
    pub message: String,
}

/// Browser launch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserSettings {
    /// Run in headless mode (default: true)
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Browser window width
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Browser window height
    #[serde(default = "default_window_height")]
    pub window_height: u32,
}

// Default value providers
fn default_site_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_entry_page() -> String {
    "index.html".to_string()
}

fn default_portfolio_page() -> String {
    "portfolio/pagan.html".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("verification")
}

fn default_visibility_timeout() -> u64 {
    10
}

fn default_expected_artists() -> u32 {
    5
}

fn default_booking_section() -> String {
    "#book".to_string()
}

fn default_name_field() -> String {
    "#name".to_string()
}

fn default_email_field() -> String {
    "#email".to_string()
}

fn default_message_field() -> String {
    "#message".to_string()
}

fn default_submit() -> String {
    ".btn-booking".to_string()
}

fn default_success_message() -> String {
    ".booking-success-message".to_string()
}

fn default_artist_card() -> String {
    ".artist-card".to_string()
}

fn default_portfolio_button() -> String {
    ".view-portfolio-btn".to_string()
}

fn default_booking_form() -> String {
    "#book form".to_string()
}

fn default_artist_option() -> String {
    "#artist option".to_string()
}

fn default_form_name() -> String {
    "Test User".to_string()
}

fn default_form_email() -> String {
    "test@example.com".to_string()
}

fn default_form_message() -> String {
    "This is a test message.".to_string()
}

fn default_headless() -> bool {
    true
}

fn default_window_width() -> u32 {
    1920
}

fn default_window_height() -> u32 {
    1080
}

impl CheckConfig {
    /// Load configuration from `inkcheck.toml` or use defaults
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let config_path = dir.join("inkcheck.toml");

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content).map_err(|e| {
                crate::CheckError::Config(format!("Failed to parse config file: {}", e))
            })?)
        } else {
            Ok(Self::default())
        }
    }

    /// Write default configuration to `inkcheck.toml`
    pub fn write_default(dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;

        let config_path = dir.join("inkcheck.toml");
        let config = Self::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| crate::CheckError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// File URL for the entry document
    ///
    /// Canonicalizes the path, so a missing entry document fails here
    /// with a Navigation error before any browser is launched.
    pub fn entry_url(&self) -> Result<String> {
        let path = self.site_root.join(&self.entry_page);
        let canonical = path
            .canonicalize()
            .map_err(|e| crate::CheckError::Navigation {
                url: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(file_url(&canonical))
    }

    /// File URL for the portfolio document
    ///
    /// Resolved without touching the filesystem: whether the document
    /// exists is discovered by the navigation itself, mid-run.
    pub fn portfolio_url(&self) -> String {
        file_url(&self.site_root.join(&self.portfolio_page))
    }
}

/// Render a local path as a file:// URL
fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            site_root: default_site_root(),
            entry_page: default_entry_page(),
            portfolio_page: default_portfolio_page(),
            output_dir: default_output_dir(),
            visibility_timeout_secs: default_visibility_timeout(),
            expected_artists: default_expected_artists(),
            selectors: Selectors::default(),
            form: FormValues::default(),
            browser: BrowserSettings::default(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            booking_section: default_booking_section(),
            name: default_name_field(),
            email: default_email_field(),
            message: default_message_field(),
            submit: default_submit(),
            success_message: default_success_message(),
            artist_card: default_artist_card(),
            portfolio_button: default_portfolio_button(),
            booking_form: default_booking_form(),
            artist_option: default_artist_option(),
        }
    }
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            name: default_form_name(),
            email: default_form_email(),
            message: default_form_message(),
        }
    }
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: default_headless(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CheckConfig::default();
        assert_eq!(config.entry_page, "index.html");
        assert_eq!(config.portfolio_page, "portfolio/pagan.html");
        assert_eq!(config.visibility_timeout_secs, 10);
        assert_eq!(config.selectors.booking_section, "#book");
        assert_eq!(config.selectors.submit, ".btn-booking");
        assert_eq!(config.selectors.success_message, ".booking-success-message");
        assert_eq!(config.form.name, "Test User");
        assert!(config.browser.headless);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: CheckConfig = toml::from_str(
            r##"
            site_root = "site"
            visibility_timeout_secs = 5

            [selectors]
            success_message = "#confirmed"
            "##,
        )
        .unwrap();

        assert_eq!(config.site_root, PathBuf::from("site"));
        assert_eq!(config.visibility_timeout_secs, 5);
        assert_eq!(config.selectors.success_message, "#confirmed");
        // Unspecified fields keep contract defaults
        assert_eq!(config.selectors.name, "#name");
        assert_eq!(config.form.email, "test@example.com");
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = CheckConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.entry_page, "index.html");
    }

    #[test]
    fn test_write_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        CheckConfig::write_default(dir.path()).unwrap();

        let loaded = CheckConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(loaded.selectors.booking_section, "#book");
        assert_eq!(loaded.output_dir, PathBuf::from("verification"));
    }

    #[test]
    fn test_entry_url_fails_for_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let config = CheckConfig {
            site_root: dir.path().to_path_buf(),
            ..Default::default()
        };

        let err = config.entry_url().unwrap_err();
        assert!(matches!(err, crate::CheckError::Navigation { .. }));
    }

    #[test]
    fn test_entry_url_resolves_existing_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

        let config = CheckConfig {
            site_root: dir.path().to_path_buf(),
            ..Default::default()
        };

        let url = config.entry_url().unwrap();
        assert!(url.starts_with("file://"));
        assert!(url.ends_with("index.html"));
    }

    #[test]
    fn test_portfolio_url_does_not_touch_filesystem() {
        let config = CheckConfig {
            site_root: PathBuf::from("/nonexistent"),
            ..Default::default()
        };
        assert_eq!(
            config.portfolio_url(),
            "file:///nonexistent/portfolio/pagan.html"
        );
    }
}
