//! Patient-search state for the search view.
//!
//! DESIGN
//! ======
//! Provided at the app root rather than owned by the page so a query and its
//! results survive navigating away and back through the nav bar.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::PatientSummary;

pub const NO_MATCHES_MESSAGE: &str = "No patients found.";

/// State of the last-name search form and its most recent result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Current contents of the last-name input.
    pub query: String,
    /// Rows from the most recent completed search.
    pub results: Vec<PatientSummary>,
    /// A request is in flight.
    pub loading: bool,
    /// Status line shown under the form.
    pub message: Option<String>,
    /// Query the current `results` belong to.
    pub searched_for: Option<String>,
}

impl SearchState {
    /// Mark a search for `last_name` as started. Rows from the previous
    /// query are dropped so they never show under the new one.
    pub fn begin(&mut self, last_name: &str) {
        self.loading = true;
        self.results.clear();
        self.message = Some("Searching...".to_owned());
        self.searched_for = Some(last_name.to_owned());
    }

    /// Apply the outcome of a search request.
    pub fn finish(&mut self, outcome: Result<Vec<PatientSummary>, String>) {
        self.loading = false;
        match outcome {
            Ok(rows) if rows.is_empty() => {
                self.results.clear();
                self.message = Some(NO_MATCHES_MESSAGE.to_owned());
            }
            Ok(rows) => {
                self.message = None;
                self.results = rows;
            }
            Err(e) => {
                self.results.clear();
                self.message = Some(format!("Search failed: {e}"));
            }
        }
    }

    /// Caption over the result table, naming the query the rows belong to.
    #[must_use]
    pub fn results_caption(&self) -> Option<String> {
        if self.loading || self.results.is_empty() {
            return None;
        }
        self.searched_for.as_ref().map(|name| format!("Results for \"{name}\""))
    }

    /// Show a validation message without touching prior results.
    pub fn reject(&mut self, message: &str) {
        self.message = Some(message.to_owned());
    }
}
