//! Workflow context
//!
//! This module defines the state produced by one workflow run.

use crate::export::ExportOutcome;
use crate::session::Session;

/// Context for the workflow
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// The session the run worked on
    pub session: Session,
    /// Statistics about the run
    pub stats: WorkflowStats,
    /// What the export did, `None` when only listing
    pub outcome: Option<ExportOutcome>,
}

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of files accepted by ingestion
    pub files_listed: usize,
    /// Number of files removed before exporting
    pub files_excluded: usize,
    /// Number of rows written to the export
    pub rows_exported: usize,
}

impl WorkflowContext {
    pub fn new(session: Session) -> Self {
        WorkflowContext {
            session,
            stats: WorkflowStats::default(),
            outcome: None,
        }
    }

    /// Records the export result and its row count
    pub fn record_outcome(&mut self, outcome: ExportOutcome) {
        if let ExportOutcome::Saved { rows, .. } = &outcome {
            self.stats.rows_exported = *rows;
        }
        self.outcome = Some(outcome);
    }
}
