//! Browser automation for inkcheck site verification
//!
//! This crate provides the production [`inkcheck_core::Driver`]
//! implementation using the Chrome DevTools Protocol (CDP).
//!
//! # Features
//!
//! - **Session management**: launch and control Chrome/Chromium, one
//!   page per verification run, released on drop
//! - **Interaction**: scroll, fill, click with at-time-of-use element
//!   lookup
//! - **Synchronization**: bounded visibility wait and document
//!   readiness polling
//! - **Screenshot capture**: viewport PNG capture for artifact storage
//!
//! # Requirements
//!
//! - Chrome or Chromium installed; headless operation needs no further
//!   setup

pub mod browser;
mod driver;

pub use browser::{BrowserConfig, BrowserSession};
