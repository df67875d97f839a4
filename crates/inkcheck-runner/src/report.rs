//! Run outcome reporting

use chrono::{DateTime, Utc};
use inkcheck_core::Artifact;
use serde::{Deserialize, Serialize};

/// Outcome of a completed verification run
///
/// Returned in memory only; the screenshot artifacts are the sole
/// on-disk output of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Scenario that was executed
    pub scenario: String,
    /// When the session was acquired
    pub started_at: DateTime<Utc>,
    /// When the final step completed
    pub finished_at: DateTime<Utc>,
    /// Artifacts captured, in step order
    pub artifacts: Vec<Artifact>,
}

impl RunReport {
    /// Wall-clock duration of the run in milliseconds
    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_duration() {
        let started_at = Utc::now();
        let report = RunReport {
            scenario: "booking_flow".to_string(),
            started_at,
            finished_at: started_at + Duration::milliseconds(1500),
            artifacts: vec![],
        };
        assert_eq!(report.duration_ms(), 1500);
    }
}
