//! Built-in verification scenarios
//!
//! A scenario is a named, immutable, ordered list of steps. Ordering is
//! the only invariant: steps run strictly in declared order, with no
//! retries and no parallelism.

use inkcheck_core::{CheckConfig, Result, Step};

/// A named, ordered verification sequence
#[derive(Debug, Clone)]
pub struct Scenario {
    name: String,
    steps: Vec<Step>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// The booking walkthrough: baseline screenshot, fill and submit the
/// booking form, assert the success message appears, then verify an
/// unrelated portfolio page loads
///
/// Fails with a Navigation error here, before any browser exists, if
/// the entry document is missing. The portfolio document is resolved
/// lazily so its absence surfaces mid-run instead.
pub fn booking_flow(config: &CheckConfig) -> Result<Scenario> {
    let selectors = &config.selectors;
    let form = &config.form;

    let steps = vec![
        Step::Navigate {
            url: config.entry_url()?,
        },
        Step::Screenshot {
            name: "01_main_page".to_string(),
        },
        Step::ScrollIntoView {
            selector: selectors.booking_section.clone(),
        },
        Step::Fill {
            selector: selectors.name.clone(),
            text: form.name.clone(),
        },
        Step::Fill {
            selector: selectors.email.clone(),
            text: form.email.clone(),
        },
        Step::Fill {
            selector: selectors.message.clone(),
            text: form.message.clone(),
        },
        Step::Click {
            selector: selectors.submit.clone(),
        },
        Step::WaitVisible {
            selector: selectors.success_message.clone(),
            timeout_secs: config.visibility_timeout_secs,
        },
        Step::Screenshot {
            name: "02_booking_success".to_string(),
        },
        Step::Navigate {
            url: config.portfolio_url(),
        },
        Step::WaitLoaded,
        Step::Screenshot {
            name: "03_portfolio_page".to_string(),
        },
    ];

    Ok(Scenario::new("booking_flow", steps))
}

/// Structural checks of the landing page: every artist gets a card and
/// a portfolio button, and the booking form offers every artist
pub fn navigation_flow(config: &CheckConfig) -> Result<Scenario> {
    let selectors = &config.selectors;
    let artists = config.expected_artists;

    let steps = vec![
        Step::Navigate {
            url: config.entry_url()?,
        },
        Step::WaitLoaded,
        Step::AssertCount {
            selector: selectors.artist_card.clone(),
            expected: artists,
        },
        Step::AssertCount {
            selector: selectors.portfolio_button.clone(),
            expected: artists,
        },
        Step::AssertCount {
            selector: selectors.booking_form.clone(),
            expected: 1,
        },
        Step::AssertCount {
            selector: selectors.artist_option.clone(),
            expected: artists,
        },
    ];

    Ok(Scenario::new("navigation_flow", steps))
}
