/*
[INPUT]:  Method, path, parameters, body, header overrides, auth flag
[OUTPUT]: Per-call request descriptor consumed by the dispatcher
[POS]:    HTTP layer - request description
[UPDATE]: When the dispatcher needs new per-call options
*/

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::http::params::{QueryParams, RequestBody};
use crate::types::HttpMethod;

/// One REST call, built fresh per endpoint invocation
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path relative to the client host, or an absolute URL
    pub path: String,
    pub params: QueryParams,
    pub body: Option<RequestBody>,
    /// Applied after the default headers, replacing any with the same name
    pub headers: HeaderMap,
    pub auth: bool,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: QueryParams::new(),
            body: None,
            headers: HeaderMap::new(),
            auth: false,
        }
    }

    /// Unauthenticated GET
    pub fn public_get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Signed POST
    pub fn signed_post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path).signed()
    }

    pub fn params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn signed(mut self) -> Self {
        self.auth = true;
        self
    }
}
