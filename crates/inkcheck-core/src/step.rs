//! The step model: ordered actions of a verification sequence
//!
//! A run is a list of steps executed strictly in declared order. Steps
//! are immutable once defined; there are no retries and no reordering.

use serde::{Deserialize, Serialize};

/// One ordered action in a verification sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Step {
    /// Full navigation to a document
    Navigate { url: String },

    /// Bring an element into view
    ScrollIntoView { selector: String },

    /// Type a literal value into an input field
    Fill { selector: String, text: String },

    /// Click a control
    Click { selector: String },

    /// Wait, bounded, for an element to become visible
    ///
    /// The only timed wait in a sequence: it synchronizes with
    /// client-side JS triggered by a prior step.
    WaitVisible { selector: String, timeout_secs: u64 },

    /// Wait for the document to finish its structural parse
    /// (sub-resources are not implied)
    WaitLoaded,

    /// Assert an exact number of elements match a selector
    AssertCount { selector: String, expected: u32 },

    /// Capture a viewport screenshot under the given artifact name
    Screenshot { name: String },
}

impl Step {
    /// Short human-readable description, used in logs and step-failure
    /// errors
    pub fn describe(&self) -> String {
        match self {
            Step::Navigate { url } => format!("navigate to {}", url),
            Step::ScrollIntoView { selector } => format!("scroll to {}", selector),
            Step::Fill { selector, .. } => format!("fill {}", selector),
            Step::Click { selector } => format!("click {}", selector),
            Step::WaitVisible { selector, .. } => format!("wait for {} visible", selector),
            Step::WaitLoaded => "wait for document loaded".to_string(),
            Step::AssertCount { selector, expected } => {
                format!("assert {} matches {} elements", selector, expected)
            }
            Step::Screenshot { name } => format!("screenshot {}", name),
        }
    }
}
