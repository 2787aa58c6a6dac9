//! Blocking page loading
//!
//! One GET per document via ureq; no retries or backoff. The body is read
//! as UTF-8 and handed straight to the dom module.

use std::time::Duration;

use crate::dom::{self, Node};
use crate::error::ScrapeError;

const USER_AGENT: &str = "Course Profile API";
const TIMEOUT_SECS: u64 = 30;

/// Agent configured for course profile pages
pub fn agent() -> ureq::Agent {
    ureq::Agent::new_with_config(
        ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(TIMEOUT_SECS)))
            .user_agent(USER_AGENT)
            .build(),
    )
}

/// Fetch one page and parse it into an owned tree
pub fn fetch_document(agent: &ureq::Agent, url: &str) -> Result<Node, ScrapeError> {
    let response = agent.get(url).call()?;
    let html = response.into_body().read_to_string()?;
    Ok(dom::parse_document(&html))
}
