//! # inkcheck-core
//!
//! Core types for the inkcheck site verification tool.
//!
//! inkcheck walks a static website the way a visitor would: load the
//! landing page, fill in the booking form, submit it, and confirm the
//! success message appears. Screenshots captured along the way are the
//! verification evidence.
//!
//! ## Core paradigm
//!
//! - A verification run IS an ordered list of [`step::Step`]s
//! - Evidence IS screenshot artifacts at fixed paths
//! - The browser IS a collaborator behind the [`driver::Driver`] trait
//! - Failure IS fail-fast: first broken step aborts the rest

pub mod artifact;
pub mod config;
pub mod driver;
mod error;
pub mod step;

pub use artifact::{Artifact, ArtifactStore};
pub use config::{BrowserSettings, CheckConfig, FormValues, Selectors};
pub use driver::Driver;
pub use error::{CheckError, Result};
pub use step::Step;
