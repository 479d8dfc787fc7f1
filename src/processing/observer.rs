use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Events emitted while a query runs through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingEvent {
    RunStarted { rows: usize },
    SearchApplied { term: String, matched: usize },
    FiltersApplied { active: usize, matched: usize },
    SortSkipped { key: String },
    PageClamped { requested: usize, effective: usize },
    RunFinished {
        elapsed: Duration,
        stats: ProcessingStats,
    },
}

/// Observer hook for processing events.
pub trait ProcessingObserver: Send + Sync {
    fn on_event(&self, event: &ProcessingEvent);
}

/// A simple stderr logger for processing events.
#[derive(Debug, Default)]
pub struct StdErrProcessingObserver;

impl ProcessingObserver for StdErrProcessingObserver {
    fn on_event(&self, event: &ProcessingEvent) {
        match event {
            ProcessingEvent::RunFinished { elapsed, stats } => {
                eprintln!("[table][done] {stats} elapsed={elapsed:?}")
            }
            other => eprintln!("[table] {other:?}"),
        }
    }
}

/// Fans events out to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ProcessingObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ProcessingObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ProcessingObserver for CompositeObserver {
    fn on_event(&self, event: &ProcessingEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}

/// Summary of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub rows_scanned: usize,
    pub matched: usize,
    pub visible: usize,
    pub page: usize,
    pub total_pages: usize,
}

impl fmt::Display for ProcessingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows_scanned={}, matched={}, visible={}, page={}/{}",
            self.rows_scanned, self.matched, self.visible, self.page, self.total_pages
        )
    }
}
