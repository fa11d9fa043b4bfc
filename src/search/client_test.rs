#[cfg(test)]
mod tests {
    use super::super::client::*;
    use super::super::config::*;
    use super::super::error::*;
    use crate::query::{FacetCategory, SearchParams, Selection, StatusFilter};
    use serde_json::{Value, json};
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Request as seen by the server
    struct Captured {
        request_line: String,
        headers: Vec<String>,
        body: String,
    }

    impl Captured {
        fn header(&self, name: &str) -> Option<&str> {
            self.headers.iter().find_map(|line| {
                let (key, value) = line.split_once(':')?;
                key.trim()
                    .eq_ignore_ascii_case(name)
                    .then(|| value.trim())
            })
        }
    }

    /// Serve exactly one HTTP response on a local port
    fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/api/v3/us", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            let mut headers = Vec::new();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end().to_string();
                if line.is_empty() {
                    break;
                }
                headers.push(line);
            }

            let length = headers
                .iter()
                .find_map(|line| {
                    let (key, value) = line.split_once(':')?;
                    key.trim()
                        .eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().unwrap())
                })
                .unwrap_or(0);
            let mut body_bytes = vec![0; length];
            reader.read_exact(&mut body_bytes).unwrap();

            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            // The client may hang up once it has seen the status
            let mut stream = stream;
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();

            Captured {
                request_line: request_line.trim_end().to_string(),
                headers,
                body: String::from_utf8(body_bytes).unwrap(),
            }
        });

        (endpoint, handle)
    }

    fn client_for(endpoint: &str) -> SearchClient {
        let config = SearchConfig::new(endpoint, DEFAULT_ORIGIN, Some(5)).unwrap();
        SearchClient::without_proxy(config).unwrap()
    }

    fn params(query: &str, status: StatusFilter) -> SearchParams {
        SearchParams::new(query, status, Selection::new())
    }

    #[test]
    fn test_posts_json_body_and_maps_payload() {
        let payload = json!({
            "body": {
                "hits": { "hits": [
                    { "_id": "97000001", "_source": {
                        "mark_identification": "MICKEY MOUSE",
                        "status_type": "registered"
                    }}
                ]},
                "aggregations": {
                    "current_owners": { "buckets": [ { "key": "Disney", "doc_count": 4 } ] }
                }
            }
        });
        let (endpoint, server) = serve_once("HTTP/1.1 200 OK", payload.to_string());

        let mut selection = Selection::new();
        selection.toggle(FacetCategory::Owners, "Disney");
        let request = SearchParams::new("mickey", StatusFilter::Registered, selection);
        let outcome = client_for(&endpoint).search(&request).unwrap();

        assert_eq!(outcome.hits.len(), 1);
        assert_eq!(outcome.hits[0].id, "97000001");
        assert_eq!(outcome.hits[0].mark_identification, "MICKEY MOUSE");
        assert_eq!(outcome.aggregations.buckets(FacetCategory::Owners)[0].doc_count, 4);

        let captured = server.join().unwrap();
        assert_eq!(captured.request_line, "POST /api/v3/us HTTP/1.1");
        assert_eq!(captured.header("content-type"), Some("application/json"));

        let body: Value = serde_json::from_str(&captured.body).unwrap();
        assert_eq!(body["input_query"], "mickey");
        assert_eq!(body["status"], json!(["registered"]));
        assert_eq!(body["owners"], json!(["Disney"]));
        assert_eq!(body["law_firms"], json!([]));
        assert_eq!(body["page"], 1);
        assert_eq!(body["rows"], 10);
    }

    #[test]
    fn test_all_status_posts_empty_list() {
        let payload = json!({ "body": {} });
        let (endpoint, server) = serve_once("HTTP/1.1 200 OK", payload.to_string());

        let outcome = client_for(&endpoint)
            .search(&params("nike", StatusFilter::All))
            .unwrap();
        assert!(outcome.hits.is_empty());

        let body: Value = serde_json::from_str(&server.join().unwrap().body).unwrap();
        assert_eq!(body["status"], json!([]));
    }

    #[test]
    fn test_server_error_maps_to_status() {
        let (endpoint, server) = serve_once(
            "HTTP/1.1 500 Internal Server Error",
            json!({ "error": "boom" }).to_string(),
        );

        let err = client_for(&endpoint)
            .search(&params("nike", StatusFilter::All))
            .unwrap_err();
        server.join().unwrap();

        assert_eq!(err, SearchError::Status(500));
        assert_eq!(
            err.user_message(),
            "Failed to fetch data: HTTP error! status: 500"
        );
    }

    #[test]
    fn test_non_json_body_maps_to_decode() {
        let (endpoint, server) = serve_once("HTTP/1.1 200 OK", "<html>oops</html>".to_string());

        let err = client_for(&endpoint)
            .search(&params("nike", StatusFilter::All))
            .unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, SearchError::Decode(_)));
    }

    #[test]
    fn test_payload_without_body_maps_to_decode() {
        let (endpoint, server) =
            serve_once("HTTP/1.1 200 OK", json!({ "message": "nope" }).to_string());

        let err = client_for(&endpoint)
            .search(&params("nike", StatusFilter::All))
            .unwrap_err();
        server.join().unwrap();

        assert_eq!(err, SearchError::Decode("response has no body".to_string()));
    }

    #[test]
    fn test_unreachable_endpoint_maps_to_network() {
        // Bind then drop to get a port nothing listens on
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let endpoint = format!("http://127.0.0.1:{port}/api");

        let err = client_for(&endpoint)
            .search(&params("nike", StatusFilter::All))
            .unwrap_err();

        assert!(matches!(err, SearchError::Network(_)));
    }
}
