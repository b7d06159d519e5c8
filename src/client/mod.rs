//! Profile API client.
//!
//! The plugin never performs I/O itself: Zellij executes web requests on the
//! plugin's behalf and delivers the outcome later as a `WebRequestResult`
//! event. Fetching a batch is therefore split into two halves:
//!
//! ```text
//! ProfileClient::fetch_request(count) ──► Action::FetchProfiles ──► host web_request
//!                                                                       │
//! ProfileClient::parse_response(status, body) ◄── Event::ProfilesFetched ◄┘
//! ```
//!
//! # Modules
//!
//! - `wire`: serde types mirroring the provider's JSON document

mod wire;

use crate::domain::error::{DirectoryError, Result};
use crate::domain::ProfileRecord;
use std::collections::BTreeMap;
use url::Url;
use wire::ProfileResponse;

/// Context key attached to every profile request.
///
/// The host echoes the context back with the result, which lets the plugin
/// shim recognise its own responses.
pub const REQUEST_CONTEXT_KEY: &str = "rolodex_request";

/// Context value identifying a profile batch request.
pub const PROFILE_BATCH_REQUEST: &str = "profile_batch";

/// A fully described GET request for the host to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Absolute URL including the `results` and `nat` query parameters.
    pub url: String,
    /// Opaque context echoed back by the host with the result.
    pub context: BTreeMap<String, String>,
}

impl FetchRequest {
    /// Returns `true` if a host result carrying `context` answers a profile request.
    #[must_use]
    pub fn is_profile_response(context: &BTreeMap<String, String>) -> bool {
        context
            .get(REQUEST_CONTEXT_KEY)
            .is_some_and(|value| value == PROFILE_BATCH_REQUEST)
    }
}

/// Builds profile batch requests and parses their responses.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    base_url: Url,
    nationality: String,
}

impl ProfileClient {
    /// Creates a client for the API at `api_url`, restricted to `nationality`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Config`] if `api_url` is not an absolute URL.
    pub fn new(api_url: &str, nationality: &str) -> Result<Self> {
        let base_url = Url::parse(api_url)
            .map_err(|e| DirectoryError::Config(format!("invalid api_url '{api_url}': {e}")))?;

        Ok(Self {
            base_url,
            nationality: nationality.to_string(),
        })
    }

    /// Describes the single GET that fetches `count` profiles.
    ///
    /// Query parameters already present on the configured URL are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolodex::client::ProfileClient;
    ///
    /// let client = ProfileClient::new("https://randomuser.me/api/", "us")?;
    /// let request = client.fetch_request(12);
    /// assert_eq!(request.url, "https://randomuser.me/api/?results=12&nat=us");
    /// # Ok::<(), rolodex::DirectoryError>(())
    /// ```
    #[must_use]
    pub fn fetch_request(&self, count: usize) -> FetchRequest {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("results", &count.to_string())
            .append_pair("nat", &self.nationality);

        let mut context = BTreeMap::new();
        context.insert(
            REQUEST_CONTEXT_KEY.to_string(),
            PROFILE_BATCH_REQUEST.to_string(),
        );
        context.insert("count".to_string(), count.to_string());

        tracing::debug!(url = %url, count = count, "built profile batch request");

        FetchRequest {
            url: url.to_string(),
            context,
        }
    }

    /// Parses the host's answer to a [`FetchRequest`].
    ///
    /// # Errors
    ///
    /// - [`DirectoryError::Network`] if `status` is not in `200..300`. The host
    ///   reports transport failures this way, with the failure text as body.
    /// - [`DirectoryError::Parse`] if the body is not the expected JSON
    ///   document, or a record has an empty first or last name.
    pub fn parse_response(status: u16, body: &[u8]) -> Result<Vec<ProfileRecord>> {
        let _span = tracing::debug_span!("parse_response", status = status, body_len = body.len())
            .entered();

        if !(200..300).contains(&status) {
            let detail = String::from_utf8_lossy(body);
            let detail = detail.trim();
            tracing::debug!(status = status, detail = %detail, "profile request failed");
            return Err(DirectoryError::Network(if detail.is_empty() {
                format!("request failed with status {status}")
            } else {
                format!("request failed with status {status}: {detail}")
            }));
        }

        let response: ProfileResponse =
            serde_json::from_slice(body).map_err(|e| DirectoryError::Parse(e.to_string()))?;

        let records: Vec<ProfileRecord> = response
            .results
            .into_iter()
            .map(ProfileRecord::from)
            .collect();

        if let Some(position) = records
            .iter()
            .position(|r| r.first_name.trim().is_empty() || r.last_name.trim().is_empty())
        {
            return Err(DirectoryError::Parse(format!(
                "profile {position} has an empty name"
            )));
        }

        tracing::debug!(profile_count = records.len(), "profiles parsed");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "results": [
            {
                "gender": "female",
                "name": { "title": "Ms", "first": "Alice", "last": "Smith" },
                "location": {
                    "street": { "number": 7415, "name": "Elgin St" },
                    "city": "Boston",
                    "state": "Massachusetts",
                    "country": "United States",
                    "postcode": 62004
                },
                "email": "alice.smith@example.com",
                "dob": { "date": "1990-05-17T08:12:45.912Z", "age": 34 },
                "phone": "(651) 555-0143",
                "picture": {
                    "large": "https://randomuser.me/api/portraits/women/1.jpg",
                    "medium": "https://randomuser.me/api/portraits/med/women/1.jpg",
                    "thumbnail": "https://randomuser.me/api/portraits/thumb/women/1.jpg"
                },
                "nat": "US"
            },
            {
                "name": { "first": "Bob", "last": "Jones" },
                "location": {
                    "street": { "number": "12B", "name": "Main St" },
                    "city": "Austin",
                    "state": "Texas",
                    "postcode": "73301"
                },
                "email": "bob.jones@example.com",
                "dob": { "date": "1985-11-02T00:00:00.000Z" },
                "phone": "(512) 555-0101",
                "picture": { "large": "https://l/2.jpg", "medium": "https://m/2.jpg" }
            }
        ],
        "info": { "seed": "abc", "results": 2, "page": 1, "version": "1.4" }
    }"#;

    #[test]
    fn test_fetch_request_url_and_context() {
        let client = ProfileClient::new("https://randomuser.me/api/", "us").unwrap();
        let request = client.fetch_request(12);

        assert_eq!(request.url, "https://randomuser.me/api/?results=12&nat=us");
        assert!(FetchRequest::is_profile_response(&request.context));
        assert_eq!(request.context.get("count").map(String::as_str), Some("12"));
    }

    #[test]
    fn test_fetch_request_keeps_existing_query() {
        let client = ProfileClient::new("https://example.com/api?seed=demo", "gb").unwrap();
        let request = client.fetch_request(3);
        assert_eq!(request.url, "https://example.com/api?seed=demo&results=3&nat=gb");
    }

    #[test]
    fn test_invalid_api_url_is_config_error() {
        let err = ProfileClient::new("not a url", "us").unwrap_err();
        assert!(matches!(err, DirectoryError::Config(_)));
    }

    #[test]
    fn test_foreign_context_is_not_profile_response() {
        let mut context = BTreeMap::new();
        context.insert("other".to_string(), "value".to_string());
        assert!(!FetchRequest::is_profile_response(&context));
    }

    #[test]
    fn test_parse_response_preserves_order_and_fields() {
        let records = ProfileClient::parse_response(200, SAMPLE.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        let alice = &records[0];
        assert_eq!(alice.full_name(), "Alice Smith");
        assert_eq!(alice.street_number, "7415");
        assert_eq!(alice.postcode, "62004");
        assert_eq!(alice.thumbnail_url, "https://randomuser.me/api/portraits/med/women/1.jpg");
        assert_eq!(alice.picture_url, "https://randomuser.me/api/portraits/women/1.jpg");
        assert_eq!(alice.birthday(), "05-17-1990");

        let bob = &records[1];
        assert_eq!(bob.full_name(), "Bob Jones");
        assert_eq!(bob.street_number, "12B");
        assert_eq!(bob.location(), "Austin, Texas");
    }

    #[test]
    fn test_parse_response_transport_failure_is_network_error() {
        let err = ProfileClient::parse_response(400, b"connection refused").unwrap_err();
        assert_eq!(
            err,
            DirectoryError::Network("request failed with status 400: connection refused".to_string())
        );
    }

    #[test]
    fn test_parse_response_server_error_without_body() {
        let err = ProfileClient::parse_response(503, b"").unwrap_err();
        assert_eq!(
            err,
            DirectoryError::Network("request failed with status 503".to_string())
        );
    }

    #[test]
    fn test_parse_response_malformed_json() {
        let err = ProfileClient::parse_response(200, b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, DirectoryError::Parse(_)));
    }

    #[test]
    fn test_parse_response_missing_field() {
        let body = br#"{ "results": [ { "name": { "first": "A", "last": "B" } } ] }"#;
        let err = ProfileClient::parse_response(200, body).unwrap_err();
        assert!(matches!(err, DirectoryError::Parse(ref msg) if msg.contains("missing field")));
    }

    #[test]
    fn test_parse_response_missing_results() {
        let err = ProfileClient::parse_response(200, br#"{ "error": "quota" }"#).unwrap_err();
        assert!(matches!(err, DirectoryError::Parse(_)));
    }

    #[test]
    fn test_parse_response_rejects_empty_name() {
        let body = SAMPLE.replace("\"Bob\"", "\"  \"");
        let err = ProfileClient::parse_response(200, body.as_bytes()).unwrap_err();
        assert_eq!(err, DirectoryError::Parse("profile 1 has an empty name".to_string()));
    }

    #[test]
    fn test_parse_response_empty_batch() {
        let records = ProfileClient::parse_response(200, br#"{ "results": [] }"#).unwrap();
        assert!(records.is_empty());
    }
}
