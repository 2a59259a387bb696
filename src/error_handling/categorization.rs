//! Error categorization.
//!
//! Maps `reqwest` failures onto the lookup error taxonomy.

use super::types::{ErrorKind, LookupError};

/// Categorizes a `reqwest::Error` into an `ErrorKind`.
///
/// Status errors are HTTP errors. Anything that failed while sending the
/// request or reading the response body is a network error, including a body
/// cut off mid-stream (reported by reqwest as a decode error). Builder and
/// redirect failures fall through to `Other`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorKind {
    if error.status().is_some() || error.is_status() {
        ErrorKind::HttpError
    } else if error.is_timeout()
        || error.is_connect()
        || error.is_request()
        || error.is_body()
        || error.is_decode()
    {
        ErrorKind::NetworkError
    } else {
        ErrorKind::Other
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        match categorize_reqwest_error(&error) {
            ErrorKind::HttpError => LookupError::Http {
                status: error.status().map(|s| s.as_u16()).unwrap_or_default(),
                body: error.to_string(),
            },
            ErrorKind::NetworkError => LookupError::Network(error),
            ErrorKind::Other => LookupError::Other(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind an ephemeral port, then release it so the connection is refused
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind port");
            listener.local_addr().expect("local addr").port()
        };
        let err = reqwest::Client::new()
            .get(format!("http://127.0.0.1:{port}/"))
            .send()
            .await
            .expect_err("nothing should be listening");
        assert_eq!(categorize_reqwest_error(&err), ErrorKind::NetworkError);
        assert_eq!(LookupError::from(err).kind(), ErrorKind::NetworkError);
    }

    #[test]
    fn test_builder_error_is_other() {
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .expect_err("invalid URL should fail to build");
        assert_eq!(categorize_reqwest_error(&err), ErrorKind::Other);
    }
}
