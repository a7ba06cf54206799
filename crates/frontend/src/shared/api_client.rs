//! Authenticated JSON client for the ERP API.
//!
//! Every request goes through [`ApiClient::call`]:
//! - URL is the configured base URL followed by the request path
//! - `Content-Type: application/json` is always set
//! - `Authorization: Bearer <token>` is set when the session holds a token
//! - a non-2xx status becomes [`ApiError::Request`] carrying the response text
//!   (or `HTTP <status>` when the body is empty)
//! - a successful body is returned as [`ApiBody::Json`] when the response is
//!   declared `application/json`, otherwise as [`ApiBody::Text`]
//!
//! The client keeps no state of its own; the token is read from the injected
//! [`Session`] on every call. Network I/O goes through a [`Transport`] so the
//! request/response handling can be exercised without a browser.

use crate::shared::config::AppConfig;
use crate::system::auth::storage::Session;
use leptos::prelude::*;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use thiserror::Error;

pub const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response. The message is the response body verbatim, or
    /// `HTTP <status>` when the body was empty.
    #[error("{message}")]
    Request { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16, body: String) -> Self {
        let message = if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };
        ApiError::Request { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message for inline display.
    ///
    /// The backend reports failures as `{"detail": "..."}`; when the body has
    /// that shape only the detail is shown, otherwise the raw message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Request { message, .. } => {
                serde_json::from_str::<serde_json::Value>(message)
                    .ok()
                    .and_then(|v| v.get("detail")?.as_str().map(str::to_string))
                    .unwrap_or_else(|| message.clone())
            }
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Per-call overrides: HTTP method and an already encoded body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// Options carrying `body` encoded as JSON
    pub fn json<B: Serialize + ?Sized>(method: Method, body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
        Ok(Self {
            method,
            body: Some(body),
        })
    }
}

/// Fully resolved request handed to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Header lookup, case-insensitive on the name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// What the transport read back: status, declared content type, body text
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    Json(serde_json::Value),
    Text(String),
}

impl ApiBody {
    /// Decode a JSON body into `T`. A text body is a decode error.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            ApiBody::Json(value) => {
                serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
            }
            ApiBody::Text(text) => Err(ApiError::Decode(format!(
                "expected JSON, got text: {}",
                text.chars().take(120).collect::<String>()
            ))),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ApiBody::Text(t) => Some(t),
            ApiBody::Json(_) => None,
        }
    }
}

/// Map a raw response onto the client contract
pub fn interpret_response(response: RawResponse) -> Result<ApiBody, ApiError> {
    if !response.is_success() {
        return Err(ApiError::from_status(response.status, response.body));
    }

    let is_json = response
        .content_type
        .as_deref()
        .map(|ct| ct.to_ascii_lowercase().contains(CONTENT_TYPE_JSON))
        .unwrap_or(false);

    if is_json {
        serde_json::from_str(&response.body)
            .map(ApiBody::Json)
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Ok(ApiBody::Text(response.body))
    }
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError>;
}

/// Browser `fetch` via gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

#[derive(Clone)]
pub struct ApiClient<T = FetchTransport> {
    base_url: Arc<str>,
    session: Session,
    transport: T,
}

impl ApiClient<FetchTransport> {
    pub fn new(config: &AppConfig, session: Session) -> Self {
        Self::with_transport(&config.api_base_url, session, FetchTransport)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(base_url: &str, session: Session, transport: T) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            session,
            transport,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve URL and headers for a call without sending it
    pub fn prepare(&self, path: &str, options: RequestOptions) -> PreparedRequest {
        let mut headers = vec![("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string())];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        PreparedRequest {
            method: options.method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body: options.body,
        }
    }

    pub async fn call(&self, path: &str, options: RequestOptions) -> Result<ApiBody, ApiError> {
        let request = self.prepare(path, options);
        let method = request.method;
        log::debug!("{} {}", method.as_str(), request.url);

        let result = match self.transport.send(request).await {
            Ok(response) => interpret_response(response),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            log::warn!("{} {} failed: {}", method.as_str(), path, e);
        }
        result
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.call(path, RequestOptions::get()).await?.decode()
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let options = RequestOptions::json(Method::Post, body)?;
        self.call(path, options).await?.decode()
    }

    /// Fetch a collection, substituting an empty list on any failure
    pub async fn list_or_empty<R: DeserializeOwned>(&self, path: &str) -> Vec<R> {
        match self.get::<Vec<R>>(path).await {
            Ok(items) => items,
            Err(e) => {
                log::warn!("{} unavailable, using empty list: {}", path, e);
                Vec::new()
            }
        }
    }
}

/// API client provided by `App`
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not found in context")
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Transport that records requests and replays canned responses
    #[derive(Default)]
    pub struct MockTransport {
        pub sent: RefCell<Vec<PreparedRequest>>,
        responses: RefCell<VecDeque<Result<RawResponse, ApiError>>>,
    }

    impl MockTransport {
        pub fn respond(self, status: u16, content_type: Option<&str>, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(RawResponse {
                status,
                content_type: content_type.map(str::to_string),
                body: body.to_string(),
            }));
            self
        }

        pub fn respond_json(self, body: &str) -> Self {
            self.respond(200, Some("application/json"), body)
        }

        pub fn fail(self, error: ApiError) -> Self {
            self.responses.borrow_mut().push_back(Err(error));
            self
        }

        pub fn last_request(&self) -> Option<PreparedRequest> {
            self.sent.borrow().last().cloned()
        }
    }

    impl Transport for MockTransport {
        async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
            self.sent.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no canned response".into())))
        }
    }

    pub fn client(session: Session, transport: MockTransport) -> ApiClient<MockTransport> {
        ApiClient::with_transport("http://api.test", session, transport)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::system::auth::storage::MemoryTokenStore;
    use futures::executor::block_on;

    #[test]
    fn test_bearer_header_when_token_stored() {
        let api = client(
            Session::new(MemoryTokenStore::with_token("abc123")),
            MockTransport::default(),
        );
        let req = api.prepare("/contacts/", RequestOptions::get());
        assert_eq!(req.url, "http://api.test/contacts/");
        assert_eq!(req.header("authorization"), Some("Bearer abc123"));
        assert_eq!(req.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_no_auth_header_without_token() {
        let api = client(Session::in_memory(), MockTransport::default());
        let req = api.prepare("/contacts/", RequestOptions::get());
        assert_eq!(req.header("Authorization"), None);
        assert_eq!(req.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_token_read_per_call() {
        let session = Session::in_memory();
        let api = client(session.clone(), MockTransport::default());
        assert_eq!(api.prepare("/deals/", RequestOptions::get()).header("Authorization"), None);

        session.set_token("t2");
        assert_eq!(
            api.prepare("/deals/", RequestOptions::get()).header("Authorization"),
            Some("Bearer t2")
        );

        session.clear();
        assert_eq!(api.prepare("/deals/", RequestOptions::get()).header("Authorization"), None);
    }

    #[test]
    fn test_call_sends_header_through_transport() {
        let api = client(
            Session::new(MemoryTokenStore::with_token("abc123")),
            MockTransport::default().respond_json("[]"),
        );
        let body = block_on(api.call("/contacts/", RequestOptions::get())).unwrap();
        assert_eq!(body, ApiBody::Json(serde_json::json!([])));

        let sent = api.transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.header("Authorization"), Some("Bearer abc123"));
    }

    #[test]
    fn test_error_carries_body_text() {
        let api = client(
            Session::in_memory(),
            MockTransport::default().respond(401, Some("text/plain"), "invalid credentials"),
        );
        let err = block_on(api.call("/auth/login", RequestOptions::get())).unwrap_err();
        assert_eq!(err.to_string(), "invalid credentials");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_empty_error_body_uses_status() {
        let api = client(
            Session::in_memory(),
            MockTransport::default().respond(500, None, ""),
        );
        let err = block_on(api.call("/deals/", RequestOptions::get())).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn test_json_vs_text_by_content_type() {
        let json = interpret_response(RawResponse {
            status: 200,
            content_type: Some("application/json; charset=utf-8".into()),
            body: r#"{"a":1}"#.into(),
        })
        .unwrap();
        assert_eq!(json, ApiBody::Json(serde_json::json!({"a": 1})));

        let text = interpret_response(RawResponse {
            status: 200,
            content_type: Some("text/html".into()),
            body: r#"{"a":1}"#.into(),
        })
        .unwrap();
        assert_eq!(text.as_text(), Some(r#"{"a":1}"#));

        let missing = interpret_response(RawResponse {
            status: 204,
            content_type: None,
            body: String::new(),
        })
        .unwrap();
        assert_eq!(missing, ApiBody::Text(String::new()));
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let err = interpret_response(RawResponse {
            status: 200,
            content_type: Some("application/json".into()),
            body: "{not json".into(),
        })
        .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_text_body_cannot_decode_typed() {
        let err = ApiBody::Text("ok".into()).decode::<Vec<i64>>().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_post_encodes_body() {
        let api = client(
            Session::in_memory(),
            MockTransport::default().respond_json(r#"{"id":1}"#),
        );
        let res: serde_json::Value =
            block_on(api.post("/contacts/", &serde_json::json!({"name": "Ada"}))).unwrap();
        assert_eq!(res["id"], 1);

        let sent = api.transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.body.as_deref(), Some(r#"{"name":"Ada"}"#));
    }

    #[test]
    fn test_list_or_empty_swallows_failures() {
        let api = client(
            Session::in_memory(),
            MockTransport::default()
                .respond(503, None, "")
                .fail(ApiError::Network("offline".into()))
                .respond_json("[1,2,3]"),
        );
        assert!(block_on(api.list_or_empty::<i64>("/deals/")).is_empty());
        assert!(block_on(api.list_or_empty::<i64>("/deals/")).is_empty());
        assert_eq!(block_on(api.list_or_empty::<i64>("/deals/")), vec![1, 2, 3]);
    }

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ApiError::from_status(401, r#"{"detail":"invalid credentials"}"#.into());
        assert_eq!(err.to_string(), r#"{"detail":"invalid credentials"}"#);
        assert_eq!(err.user_message(), "invalid credentials");

        let plain = ApiError::from_status(400, "name is required".into());
        assert_eq!(plain.user_message(), "name is required");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let api = ApiClient::with_transport(
            "http://api.test/",
            Session::in_memory(),
            MockTransport::default(),
        );
        assert_eq!(api.base_url(), "http://api.test");
        assert_eq!(
            api.prepare("/sales/", RequestOptions::get()).url,
            "http://api.test/sales/"
        );
    }
}
