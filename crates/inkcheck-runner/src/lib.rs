//! Verification runner for inkcheck
//!
//! Executes a fixed, ordered sequence of browser steps against the
//! static site and produces screenshot artifacts as evidence. The
//! sequence is fail-fast: the first broken step aborts the rest, the
//! browser session is still torn down, and the error names the failing
//! step.

pub mod report;
pub mod runner;
pub mod scenario;

pub use report::RunReport;
pub use runner::VerificationRunner;
pub use scenario::{booking_flow, navigation_flow, Scenario};
