use reqwest::blocking::RequestBuilder;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::session::Session;

/// Error envelope the backend uses for 4xx/5xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Blocking HTTP client for the clinic backend.
///
/// One instance per configured backend; endpoint methods live in the
/// sibling resource modules. Requests carry a bearer token only while
/// built from an authenticated [`Session`].
pub struct ClinicClient {
    base_url: String,
    http: reqwest::blocking::Client,
    timeout_secs: u64,
    bearer_token: Option<String>,
}

impl ClinicClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            timeout_secs,
            bearer_token: None,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url, config.timeout_secs)
    }

    /// Attach the session's credentials to every subsequent request.
    /// An anonymous session leaves requests unauthenticated.
    pub fn with_session(mut self, session: &Session) -> Self {
        self.bearer_token = session.bearer_token().map(str::to_string);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Request plumbing ────────────────────────────────────

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.get(self.url(path)))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.post(self.url(path)))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.put(self.url(path)))
    }

    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.patch(self.url(path)))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.delete(self.url(path)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send, check the status, decode the JSON body.
    pub(crate) fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().map_err(|e| self.map_transport(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response.text().unwrap_or_default()));
        }

        response.json().map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and check the status for endpoints with no response body.
    pub(crate) fn send_no_content(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().map_err(|e| self.map_transport(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response.text().unwrap_or_default()));
        }

        Ok(())
    }

    fn map_transport(&self, error: reqwest::Error) -> ApiError {
        if error.is_connect() {
            ApiError::Connection(self.base_url.clone())
        } else if error.is_timeout() {
            ApiError::Timeout(self.timeout_secs)
        } else {
            ApiError::Transport(error.to_string())
        }
    }
}

fn status_error(status: StatusCode, body: String) -> ApiError {
    let message = parse_error_message(&body);
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::CONFLICT => ApiError::Conflict(message),
        other => ApiError::Http {
            status: other.as_u16(),
            message,
        },
    }
}

/// Pull the human-readable message out of the backend's error envelope,
/// falling back to the raw body.
fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use chrono::NaiveDate;

    #[test]
    fn constructor_trims_trailing_slash() {
        let client = ClinicClient::new("http://localhost:8080/", 30);
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/appointments"), "http://localhost:8080/appointments");
    }

    #[test]
    fn from_config_uses_configured_endpoint() {
        let config = ApiConfig::new("http://clinic.internal:9000", 15);
        let client = ClinicClient::from_config(&config);
        assert_eq!(client.base_url(), "http://clinic.internal:9000");
        assert_eq!(client.timeout_secs, 15);
    }

    #[test]
    fn anonymous_session_leaves_client_unauthenticated() {
        let client = ClinicClient::new("http://localhost:8080", 30)
            .with_session(&Session::anonymous());
        assert!(client.bearer_token.is_none());
    }

    #[test]
    fn authenticated_session_sets_bearer_token() {
        let issued_at = NaiveDate::from_ymd_opt(2026, 3, 5)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let session = Session::anonymous().login("reception@clinic.test", "tok-123", issued_at);
        let client = ClinicClient::new("http://localhost:8080", 30).with_session(&session);
        assert_eq!(client.bearer_token.as_deref(), Some("tok-123"));
    }

    #[test]
    fn error_message_parsed_from_envelope() {
        let body = r#"{"message": "dentist already booked at this time"}"#;
        assert_eq!(parse_error_message(body), "dentist already booked at this time");
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        assert_eq!(parse_error_message("boom"), "boom");
        assert_eq!(parse_error_message("  spaced  "), "spaced");
    }

    #[test]
    fn conflict_status_maps_to_conflict_error() {
        let err = status_error(
            StatusCode::CONFLICT,
            r#"{"message": "slot taken"}"#.to_string(),
        );
        assert!(matches!(err, ApiError::Conflict(m) if m == "slot taken"));
    }

    #[test]
    fn not_found_status_maps_to_not_found() {
        let err = status_error(StatusCode::NOT_FOUND, "no such appointment".to_string());
        assert!(matches!(err, ApiError::NotFound(m) if m == "no such appointment"));
    }

    #[test]
    fn other_statuses_keep_their_code() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, String::new());
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }
}
