use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::error::Result;
use crate::filter::project;
use crate::source::TaskSource;
use crate::task::{Filter, Task};

/// Shown when a failure carries no description of its own.
const FALLBACK_ERROR: &str = "unknown error occurred";

/// The settled result of one fetch, as delivered by a detached worker.
pub type FetchOutcome = Result<Vec<Task>>;

/// The fetch slot, assigned atomically. Loading, the raw collection, and the
/// error message are all projections of this one value, so a settled state
/// can never be simultaneously loading, and success and failure are mutually
/// exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Pending,
    Success(Vec<Task>),
    Failure(String),
}

/// Receives the identifier of a selected record. Fire-and-forget: the view
/// has no further responsibility once the id is forwarded.
pub trait SelectionSink {
    fn on_select(&self, id: u64);
}

/// One component instance: owns the fetch slot and the filter mode, and
/// derives the filtered view from them. State is owned exclusively by this
/// instance; multiple instances each own an independent copy.
pub struct TaskView {
    state: FetchState,
    filter: Filter,
    filtered: Vec<Task>,
    sink: Option<Box<dyn SelectionSink>>,
}

impl TaskView {
    /// A freshly mounted view: empty collection, loading, default filter.
    pub fn new() -> Self {
        Self {
            state: FetchState::Pending,
            filter: Filter::default(),
            filtered: Vec::new(),
            sink: None,
        }
    }

    pub fn with_sink(sink: Box<dyn SelectionSink>) -> Self {
        Self {
            sink: Some(sink),
            ..Self::new()
        }
    }

    /// Perform the single fetch against `source` and settle. Invoked once
    /// per view lifetime; never retried.
    pub fn retrieve(&mut self, source: &dyn TaskSource) {
        self.state = FetchState::Pending;
        let outcome = source.fetch_tasks();
        self.settle(outcome);
    }

    /// Record a settled outcome. Also the entry point for outcomes delivered
    /// by [`spawn_retrieve`]. The filtered view is re-derived before this
    /// returns, so a fresh result is visible immediately.
    pub fn settle(&mut self, outcome: FetchOutcome) {
        self.state = match outcome {
            Ok(tasks) => {
                debug!(count = tasks.len(), "fetch settled");
                FetchState::Success(tasks)
            }
            Err(e) => {
                let message = failure_message(e.to_string());
                warn!(error = %message, "fetch failed");
                FetchState::Failure(message)
            }
        };
        self.filtered = project(self.tasks(), self.filter);
    }

    /// Inbound filter change from the presentation layer. The filtered view
    /// is recomputed before this returns.
    pub fn set_filter(&mut self, mode: Filter) {
        self.filter = mode;
        self.filtered = project(self.tasks(), mode);
    }

    /// Forward a clicked record's identifier to the detail-view owner.
    pub fn select(&self, id: u64) {
        if let Some(sink) = &self.sink {
            sink.on_select(id);
        }
    }

    /// The raw collection in arrival order; empty until a fetch succeeds.
    pub fn tasks(&self) -> &[Task] {
        match &self.state {
            FetchState::Success(tasks) => tasks,
            _ => &[],
        }
    }

    pub fn filtered(&self) -> &[Task] {
        &self.filtered
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }
}

impl Default for TaskView {
    fn default() -> Self {
        Self::new()
    }
}

fn failure_message(message: String) -> String {
    if message.trim().is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        message
    }
}

/// Run the fetch on a blocking worker and deliver the settled outcome
/// through the returned receiver. If the owning view is torn down
/// mid-flight, dropping the receiver discards the late result instead of
/// writing to state that no longer exists.
pub fn spawn_retrieve<S>(source: S) -> oneshot::Receiver<FetchOutcome>
where
    S: TaskSource + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::task::spawn_blocking(move || {
        let outcome = source.fetch_tasks();
        // Send fails iff the receiver is gone; the result is inapplicable then.
        let _ = tx.send(outcome);
    });
    rx
}
