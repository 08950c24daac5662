//! Summary of a dispatch run

use colored::Colorize;
use plog_application::{BroadcastError, BroadcastOutcome};
use std::collections::BTreeMap;

/// Per-logger counts collected over a series of broadcasts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub events: usize,
    pub written: BTreeMap<String, usize>,
    pub filtered: BTreeMap<String, usize>,
    /// Error messages by logger, in the order they occurred
    pub failures: BTreeMap<String, Vec<String>>,
}

impl DispatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the result of broadcasting one event
    pub fn record(&mut self, result: &Result<BroadcastOutcome, BroadcastError>) {
        self.events += 1;
        match result {
            Ok(outcome) => self.record_outcome(outcome),
            Err(error) => {
                self.record_outcome(&error.outcome);
                for (name, cause) in &error.failures {
                    self.failures
                        .entry(name.clone())
                        .or_default()
                        .push(cause.to_string());
                }
            }
        }
    }

    fn record_outcome(&mut self, outcome: &BroadcastOutcome) {
        for name in &outcome.written {
            *self.written.entry(name.clone()).or_default() += 1;
        }
        for name in &outcome.filtered {
            *self.filtered.entry(name.clone()).or_default() += 1;
        }
    }

    pub fn failure_count(&self) -> usize {
        self.failures.values().map(Vec::len).sum()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Render the summary for the terminal
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} event(s)\n",
            "Dispatched:".cyan().bold(),
            self.events
        ));

        for (name, count) in &self.written {
            output.push_str(&format!("  {} {} ({})\n", "✓".green(), name, count));
        }
        for (name, count) in &self.filtered {
            output.push_str(&format!(
                "  {} {} ({} filtered)\n",
                "-".dimmed(),
                name,
                count
            ));
        }
        for (name, errors) in &self.failures {
            output.push_str(&format!(
                "  {} {} ({} failed)\n",
                "✗".red(),
                name.red().bold(),
                errors.len()
            ));
            if let Some(last) = errors.last() {
                output.push_str(&format!("      {}\n", last.dimmed()));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plog_application::{LoggerError, SinkError};

    fn outcome(written: &[&str], filtered: &[&str]) -> BroadcastOutcome {
        BroadcastOutcome {
            written: written.iter().map(|s| s.to_string()).collect(),
            filtered: filtered.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_counts_outcomes() {
        let mut summary = DispatchSummary::new();

        summary.record(&Ok(outcome(&["a", "b"], &[])));
        summary.record(&Ok(outcome(&["a"], &["b"])));

        assert_eq!(summary.events, 2);
        assert_eq!(summary.written["a"], 2);
        assert_eq!(summary.written["b"], 1);
        assert_eq!(summary.filtered["b"], 1);
        assert!(!summary.has_failures());
    }

    #[test]
    fn test_counts_failures() {
        let mut summary = DispatchSummary::new();

        summary.record(&Err(BroadcastError {
            outcome: outcome(&["console"], &[]),
            failures: vec![("file".to_string(), LoggerError::Sink(SinkError::Closed))],
        }));

        assert!(summary.has_failures());
        assert_eq!(summary.failure_count(), 1);
        assert_eq!(summary.written["console"], 1);
        assert_eq!(summary.failures["file"], vec!["Failed to write event: Sink closed"]);
    }

    #[test]
    fn test_render_lists_loggers() {
        colored::control::set_override(false);
        let mut summary = DispatchSummary::new();
        summary.record(&Ok(outcome(&["console"], &["audit"])));

        let text = summary.render();

        assert!(text.contains("Dispatched: 1 event(s)"));
        assert!(text.contains("console (1)"));
        assert!(text.contains("audit (1 filtered)"));
    }
}
