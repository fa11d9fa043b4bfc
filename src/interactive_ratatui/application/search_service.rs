use crate::interactive_ratatui::domain::models::{SearchRequest, SearchResponse};
use crate::search::{SearchBackend, SearchError};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::{debug, warn};

/// Runs searches off the UI thread.
///
/// Every request gets its own worker so a slow response never holds up a
/// newer one; the UI decides which response is current by its id.
pub struct SearchService {
    backend: Arc<dyn SearchBackend>,
    responses: Sender<SearchResponse>,
}

impl SearchService {
    pub fn new(backend: Arc<dyn SearchBackend>) -> (Self, Receiver<SearchResponse>) {
        let (responses, receiver) = mpsc::channel();
        (Self { backend, responses }, receiver)
    }

    pub fn dispatch(&self, request: SearchRequest) {
        let backend = Arc::clone(&self.backend);
        let responses = self.responses.clone();
        let id = request.id;

        debug!(id, query = %request.params.query, "dispatching search");
        let spawned = thread::Builder::new()
            .name(format!("search-{id}"))
            .spawn(move || {
                let outcome = backend.search(&request.params);
                // The UI may already be gone
                let _ = responses.send(SearchResponse { id, outcome });
            });

        if let Err(e) = spawned {
            warn!(id, "failed to spawn search worker: {e}");
            let _ = self.responses.send(SearchResponse {
                id,
                outcome: Err(SearchError::network(e.to_string())),
            });
        }
    }
}
