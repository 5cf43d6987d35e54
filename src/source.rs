use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::task::Task;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";

/// Where task records come from. The view layer only ever sees this trait,
/// so tests substitute a fake without performing real network I/O.
pub trait TaskSource {
    /// Perform the single read and return the records in arrival order.
    fn fetch_tasks(&self) -> Result<Vec<Task>>;
}

// ---------------------------------------------------------------------------
// HTTP transport abstraction (for testability)
// ---------------------------------------------------------------------------

pub trait HttpClient {
    /// GET the URL and return the raw response body.
    fn get(&self, url: &str) -> Result<String>;
}

struct DefaultHttpClient;

impl HttpClient for DefaultHttpClient {
    fn get(&self, url: &str) -> Result<String> {
        match ureq::get(url).call() {
            Ok(response) => response
                .into_string()
                .map_err(|e| Error::Network(format!("failed to read response body: {e}"))),
            // A status-level failure is surfaced without inspecting the body.
            Err(ureq::Error::Status(code, _)) => Err(Error::HttpStatus(code)),
            Err(ureq::Error::Transport(t)) => Err(Error::Network(t.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// HttpTaskSource
// ---------------------------------------------------------------------------

/// Wire shape of one record. Extra fields the endpoint sends (e.g. a user
/// id) are ignored.
#[derive(Debug, Deserialize)]
struct WireTask {
    id: u64,
    title: String,
    completed: bool,
}

pub struct HttpTaskSource {
    endpoint: String,
    client: Box<dyn HttpClient + Send>,
}

impl HttpTaskSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Box::new(DefaultHttpClient),
        }
    }

    #[cfg(test)]
    fn with_client(endpoint: &str, client: Box<dyn HttpClient + Send>) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client,
        }
    }

    fn parse_body(body: &str) -> Result<Vec<Task>> {
        let wire: Vec<WireTask> =
            serde_json::from_str(body).map_err(|e| Error::Decode(e.to_string()))?;

        Ok(wire
            .into_iter()
            .map(|w| Task {
                id: w.id,
                title: w.title,
                completed: w.completed,
            })
            .collect())
    }
}

impl TaskSource for HttpTaskSource {
    fn fetch_tasks(&self) -> Result<Vec<Task>> {
        let body = self.client.get(&self.endpoint)?;
        let tasks = Self::parse_body(&body)?;
        debug!(count = tasks.len(), "fetched tasks");
        Ok(tasks)
    }
}
