//! HTTP client driving a shared `NameList`

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use reqwest::Client;

use super::accumulator::{NameList, PendingLoad};
use crate::error::{NameForgeError, Result};
use crate::types::{Category, ErrorResponse, Filters, GenerationRequest, GenerationResponse};

/// What became of one load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Reply applied; total names now stored
    Applied(usize),
    /// The search was replaced while the request was in flight
    Discarded,
    /// Load-more trigger dropped without a request
    Ignored,
}

/// Talks to a running name-forge server on behalf of one user session.
///
/// The list lock is never held across a request.
#[derive(Clone)]
pub struct GeneratorClient {
    client: Client,
    endpoint: String,
    timeout_secs: u64,
    list: Arc<Mutex<NameList>>,
}

impl GeneratorClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| NameForgeError::network(e.to_string(), None, None))?;

        Ok(Self {
            client,
            endpoint: format!("{}/generate-names", base_url.trim_end_matches('/')),
            timeout_secs,
            list: Arc::new(Mutex::new(NameList::new())),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Shared handle to the accumulated list
    pub fn list(&self) -> Arc<Mutex<NameList>> {
        Arc::clone(&self.list)
    }

    /// Post one request and decode the envelope
    pub async fn fetch(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NameForgeError::timeout("generate names", self.timeout_secs)
                } else {
                    NameForgeError::network(e.to_string(), None, Some(self.endpoint.clone()))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("Server returned {}", status));
            return Err(NameForgeError::network(
                message,
                Some(status.as_u16()),
                Some(self.endpoint.clone()),
            ));
        }

        Ok(response.json::<GenerationResponse>().await?)
    }

    /// Start a new search
    pub async fn submit(&self, category: Category, filters: Filters) -> Result<LoadOutcome> {
        let pending = self.list.lock().submit(category, filters);
        tracing::debug!(category = %category, search = pending.search, "Submitting first batch");
        self.settle(pending).await
    }

    /// Fetch the next batch; `Ignored` when a load is in flight or the list
    /// is exhausted
    pub async fn load_more(&self) -> Result<LoadOutcome> {
        let next = self.list.lock().begin_load_more();
        let Some(pending) = next else {
            tracing::debug!("Load more ignored");
            return Ok(LoadOutcome::Ignored);
        };
        self.settle(pending).await
    }

    /// Run a pending load and hand its result back to the list
    async fn settle(&self, pending: PendingLoad) -> Result<LoadOutcome> {
        let batch_number = pending.request.batch_number;

        match self.fetch(&pending.request).await {
            Ok(response) => {
                let mut list = self.list.lock();
                if list.complete(pending.search, response) {
                    Ok(LoadOutcome::Applied(list.total()))
                } else {
                    tracing::debug!(search = pending.search, batch_number, "Stale reply discarded");
                    Ok(LoadOutcome::Discarded)
                }
            }
            Err(e) => {
                if self.list.lock().fail(pending.search) {
                    tracing::warn!(batch_number, error = %e, "Loading names failed");
                    Err(e)
                } else {
                    tracing::debug!(
                        search = pending.search,
                        batch_number,
                        error = %e,
                        "Failure of a replaced search discarded"
                    );
                    Ok(LoadOutcome::Discarded)
                }
            }
        }
    }

    pub fn start_over(&self) {
        self.list.lock().start_over();
    }
}
