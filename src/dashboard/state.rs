//! Displayed results and their atomic replacement.

use crate::batch::{BatchOrchestrator, ResultSet};
use crate::upstream::types::{QueryError, QueryResult};

/// Holds the result set currently on display.
///
/// A submission replaces the displayed set only after the whole batch
/// succeeded. A failed submission records its error and leaves the
/// displayed set as it was.
#[derive(Debug)]
pub struct Dashboard {
    orchestrator: BatchOrchestrator,
    results: ResultSet,
    last_error: Option<String>,
}

impl Dashboard {
    pub fn new(orchestrator: BatchOrchestrator) -> Self {
        Self {
            orchestrator,
            results: ResultSet::new(),
            last_error: None,
        }
    }

    /// Whether a block of input can be submitted at all.
    pub fn can_submit(raw: &str) -> bool {
        !raw.trim().is_empty()
    }

    /// Query every address in `raw` and, on success, display the new set.
    pub async fn submit(&mut self, raw: &str) -> QueryResult<&ResultSet> {
        if !Self::can_submit(raw) {
            return Err(QueryError::NoAddresses);
        }

        self.last_error = None;
        match self.orchestrator.run(raw).await {
            Ok(results) => {
                self.results = results;
                Ok(&self.results)
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// The currently displayed results.
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Message of the most recent failed submission, cleared by the next one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
