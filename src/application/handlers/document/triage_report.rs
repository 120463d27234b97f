//! TriageReportHandler - Query handler for the workspace triage report.
//!
//! Read-only aggregation: folder counts, capacity warnings, and suggested
//! next moves for every open document.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::document::DocumentName;
use crate::domain::foundation::{DocDate, DocumentStatus};
use crate::domain::lifecycle::{CapacityMonitor, CapacityWarning, LifecyclePolicy, TriageAdvisor};
use crate::ports::{Clock, DocumentStore};

use super::DocumentError;

/// Per-status document counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub inbox: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub misc: usize,
}

/// Suggested next moves for one open document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageSuggestion {
    pub name: DocumentName,
    pub status: DocumentStatus,
    pub candidates: Vec<DocumentStatus>,
}

/// Snapshot report over the whole workspace.
#[derive(Debug, Clone, Serialize)]
pub struct TriageReport {
    pub generated_on: DocDate,
    pub counts: StatusCounts,
    pub warnings: Vec<CapacityWarning>,
    pub suggestions: Vec<TriageSuggestion>,
}

/// Handler producing the triage report.
pub struct TriageReportHandler {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
    monitor: CapacityMonitor,
    advisor: TriageAdvisor,
}

impl TriageReportHandler {
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>, policy: LifecyclePolicy) -> Self {
        Self {
            store,
            clock,
            monitor: CapacityMonitor::new(policy),
            advisor: TriageAdvisor::new(),
        }
    }

    pub async fn handle(&self) -> Result<TriageReport, DocumentError> {
        // 1. Snapshot all four folders concurrently
        let (inbox, in_progress, completed, misc) = futures::try_join!(
            self.store.list(DocumentStatus::Inbox),
            self.store.list(DocumentStatus::InProgress),
            self.store.list(DocumentStatus::Completed),
            self.store.list(DocumentStatus::Misc),
        )?;

        let counts = StatusCounts {
            inbox: inbox.len(),
            in_progress: in_progress.len(),
            completed: completed.len(),
            misc: misc.len(),
        };

        // 2. Run the capacity monitor over the combined snapshot,
        //    folders concatenated in lifecycle order
        let today = self.clock.today();
        let mut snapshot = inbox;
        snapshot.extend(in_progress);
        snapshot.extend(completed);
        snapshot.extend(misc);
        let warnings = self.monitor.check_capacity(&snapshot, today);

        // 3. Attach advisor candidates for every open document
        let suggestions: Vec<TriageSuggestion> = snapshot
            .iter()
            .filter(|doc| doc.status().is_mutable())
            .map(|doc| TriageSuggestion {
                name: doc.name().clone(),
                status: doc.status(),
                candidates: self.advisor.suggest(doc),
            })
            .collect();

        info!(
            inbox = counts.inbox,
            active = counts.in_progress,
            warnings = warnings.len(),
            "Generated triage report"
        );

        Ok(TriageReport {
            generated_on: today,
            counts,
            warnings,
            suggestions,
        })
    }
}
