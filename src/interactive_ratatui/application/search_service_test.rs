#[cfg(test)]
mod tests {
    use super::super::search_service::*;
    use crate::interactive_ratatui::domain::models::{SearchRequest, SearchResponse};
    use crate::query::{SearchParams, Selection, StatusFilter};
    use crate::schemas::{SearchOutcome, TrademarkHit};
    use crate::search::{SearchBackend, SearchError};
    use std::sync::mpsc::Receiver;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Echoes the query back as a single hit, or fails for "fail"
    struct EchoBackend {
        calls: Mutex<Vec<String>>,
    }

    impl SearchBackend for EchoBackend {
        fn search(&self, params: &SearchParams) -> Result<SearchOutcome, SearchError> {
            self.calls.lock().unwrap().push(params.query.clone());
            if params.query == "fail" {
                return Err(SearchError::Status(500));
            }
            Ok(SearchOutcome {
                hits: vec![TrademarkHit {
                    mark_identification: params.query.clone(),
                    ..Default::default()
                }],
                ..Default::default()
            })
        }
    }

    fn create_service() -> (SearchService, Receiver<SearchResponse>, Arc<EchoBackend>) {
        let backend = Arc::new(EchoBackend {
            calls: Mutex::new(Vec::new()),
        });
        let (service, receiver) = SearchService::new(backend.clone());
        (service, receiver, backend)
    }

    fn create_request(id: u64, query: &str) -> SearchRequest {
        SearchRequest {
            id,
            params: SearchParams::new(query, StatusFilter::All, Selection::new()),
        }
    }

    #[test]
    fn test_dispatch_delivers_tagged_responses() {
        let (service, receiver, backend) = create_service();

        service.dispatch(create_request(1, "a"));
        service.dispatch(create_request(2, "fail"));

        let mut responses: Vec<_> = (0..2)
            .map(|_| receiver.recv_timeout(Duration::from_secs(5)).unwrap())
            .collect();
        responses.sort_by_key(|r| r.id);

        assert_eq!(responses[0].id, 1);
        assert!(responses[0].outcome.is_ok());
        assert_eq!(responses[1].id, 2);
        assert_eq!(responses[1].outcome, Err(SearchError::Status(500)));
        assert_eq!(
            responses[0].outcome.as_ref().unwrap().hits[0].mark_identification,
            "a"
        );
        assert_eq!(backend.calls.lock().unwrap().len(), 2);
    }
}
