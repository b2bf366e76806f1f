/*
[INPUT]:  HTTP configuration (host, timeouts, credentials) and per-call request descriptors
[OUTPUT]: Normalized JSON payloads or classified errors
[POS]:    HTTP layer - core client implementation and request dispatcher
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::fmt;
use std::time::Duration;

use chrono::Utc;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::request::ApiRequest;
use crate::http::signature::{RequestSigner, is_absolute_url};
use crate::http::{ApiErrorResponse, HuobiError, Result};
use crate::types::HttpMethod;

/// Base URL of the USDT-margined swap API
pub const DEFAULT_HOST: &str = "https://api.hbdm.com";
/// Base URL of the spot API, used for spot <-> swap transfers
pub const DEFAULT_SPOT_HOST: &str = "https://api.huobi.pro";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    pub spot_host: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("huobi-swap-cross-adapter/", env!("CARGO_PKG_VERSION")).to_string(),
            spot_host: DEFAULT_SPOT_HOST.to_string(),
        }
    }
}

/// API key pair used to sign requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// REST client for the cross-margined USDT swap API
#[derive(Debug, Clone)]
pub struct HuobiSwapCrossClient {
    http_client: Client,
    host: Url,
    spot_host: Url,
    signer: RequestSigner,
    user_agent: HeaderValue,
}

impl HuobiSwapCrossClient {
    /// Create a client against the production host with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_host(DEFAULT_HOST, credentials)
    }

    /// Create a client against `host` with default configuration
    pub fn with_host(host: &str, credentials: Credentials) -> Result<Self> {
        Self::with_config(host, credentials, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(host: &str, credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let host = Url::parse(host)?;
        let spot_host = Url::parse(&config.spot_host)?;
        let signer = RequestSigner::new(&credentials, &host)?;
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|err| HuobiError::Config(format!("invalid user agent: {err}")))?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            host,
            spot_host,
            signer,
            user_agent,
        })
    }

    pub fn host(&self) -> &Url {
        &self.host
    }

    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Absolute URL on the spot host, for endpoints that live outside the swap API
    pub(crate) fn spot_url(&self, path: &str) -> Result<String> {
        Ok(self.spot_host.join(path)?.to_string())
    }

    /// Absolute URLs are used verbatim; paths are joined onto the configured host
    pub fn resolve_url(&self, path_or_url: &str) -> Result<Url> {
        if is_absolute_url(path_or_url) {
            Ok(Url::parse(path_or_url)?)
        } else {
            Ok(self.host.join(path_or_url)?)
        }
    }

    fn default_headers(&self, method: HttpMethod) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match method {
            HttpMethod::Get => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
            }
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Delete => {
                headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
            }
        }
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers
    }

    /// Dispatch one request and normalize the outcome.
    ///
    /// Signed requests get `AccessKeyId`, `SignatureMethod`, `SignatureVersion`,
    /// `Timestamp` and finally `Signature` added to their query parameters.
    /// Returns the decoded payload when its `status` is `"ok"`; a payload with any
    /// other status comes back as [`HuobiError::Api`].
    pub async fn request(&self, request: ApiRequest) -> Result<Value> {
        let ApiRequest {
            method,
            path,
            mut params,
            body,
            headers,
            auth,
        } = request;

        let url = self.resolve_url(&path)?;

        if auth {
            let timestamp = utc_timestamp();
            self.signer
                .sign_params(method, &mut params, &path, &timestamp);
        }

        debug!(method = %method, path = %path, auth, "dispatching request");

        let mut builder = self
            .http_client
            .request(method.into(), url)
            .headers(self.default_headers(method))
            .headers(headers);

        if !params.is_empty() {
            builder = builder.query(&params);
        }
        if method != HttpMethod::Get {
            if let Some(body) = &body {
                builder = builder.json(body);
            }
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(%status, path = %path, "request failed with non-success status");
            return Err(HuobiError::Status { status, body: text });
        }

        let payload: Value = serde_json::from_str(&text)?;
        normalize_payload(payload)
    }
}

/// Split a decoded body into success or exchange error by its `status` field
pub(crate) fn normalize_payload(payload: Value) -> Result<Value> {
    if payload.get("status").and_then(Value::as_str) == Some("ok") {
        debug!("request succeeded");
        return Ok(payload);
    }

    let response = ApiErrorResponse::new(payload);
    warn!(
        err_code = ?response.err_code(),
        err_msg = response.err_msg().unwrap_or_default(),
        "exchange returned error status"
    );
    Err(HuobiError::Api(response))
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS`
pub fn utc_timestamp() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}
