/*
[INPUT]:  HTTP method, request path or absolute URL, query parameters, API credentials
[OUTPUT]: Base64 HMAC-SHA256 signature and signed query parameters
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or parameter names
*/

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::Url;

use crate::http::params::QueryParams;
use crate::http::{Credentials, HuobiError, Result};
use crate::types::HttpMethod;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_METHOD: &str = "HmacSHA256";
pub const SIGNATURE_VERSION: &str = "2";

pub const ACCESS_KEY_ID_PARAM: &str = "AccessKeyId";
pub const SIGNATURE_METHOD_PARAM: &str = "SignatureMethod";
pub const SIGNATURE_VERSION_PARAM: &str = "SignatureVersion";
pub const TIMESTAMP_PARAM: &str = "Timestamp";
pub const SIGNATURE_PARAM: &str = "Signature";

/// Signs requests with the exchange's signature version 2 scheme
#[derive(Clone)]
pub struct RequestSigner {
    access_key: String,
    secret_key: String,
    host: String,
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("host", &self.host)
            .finish()
    }
}

impl RequestSigner {
    /// Create a signer bound to the hostname of `base_url`
    pub fn new(credentials: &Credentials, base_url: &Url) -> Result<Self> {
        let host = base_url
            .host_str()
            .ok_or_else(|| HuobiError::Config(format!("base URL has no host: {base_url}")))?
            .to_lowercase();

        Ok(Self {
            access_key: credentials.access_key.clone(),
            secret_key: credentials.secret_key.clone(),
            host,
        })
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Lowercased hostname used for relative request paths
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Sign `params` for a request to `path_or_url`.
    ///
    /// Payload: `METHOD\nhost\npath\nsorted-urlencoded-params`
    pub fn sign(&self, method: HttpMethod, params: &QueryParams, path_or_url: &str) -> String {
        let (host, path) = self.canonical_target(path_or_url);
        let payload = signing_payload(method, &host, &path, params);

        let mut mac = HmacSha256::new_from_slice(self.secret_key.as_bytes())
            .expect("HMAC can take any size");
        mac.update(payload.as_bytes());
        BASE64.encode(mac.finalize().into_bytes())
    }

    /// Add the credential fields and `timestamp`, then the signature over all of them
    pub fn sign_params(
        &self,
        method: HttpMethod,
        params: &mut QueryParams,
        path_or_url: &str,
        timestamp: &str,
    ) {
        params.remove(SIGNATURE_PARAM);
        params.insert(ACCESS_KEY_ID_PARAM, &self.access_key);
        params.insert(SIGNATURE_METHOD_PARAM, SIGNATURE_METHOD);
        params.insert(SIGNATURE_VERSION_PARAM, SIGNATURE_VERSION);
        params.insert(TIMESTAMP_PARAM, timestamp);

        let signature = self.sign(method, params, path_or_url);
        params.insert(SIGNATURE_PARAM, signature);
    }

    fn canonical_target(&self, path_or_url: &str) -> (String, String) {
        if !is_absolute_url(path_or_url) {
            return (self.host.clone(), path_or_url.to_string());
        }

        let segments: Vec<&str> = path_or_url.split('/').collect();
        let host = Url::parse(path_or_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_lowercase))
            .unwrap_or_else(|| {
                let authority = segments.get(2).copied().unwrap_or_default();
                let hostname = authority.split(':').next().unwrap_or_default();
                hostname.to_lowercase()
            });
        let path = format!("/{}", segments.get(3..).unwrap_or_default().join("/"));

        (host, path)
    }
}

/// Four-line string the signature is computed over
pub fn signing_payload(method: HttpMethod, host: &str, path: &str, params: &QueryParams) -> String {
    [method.as_str(), host, path, &params.encode()].join("\n")
}

pub(crate) fn is_absolute_url(path_or_url: &str) -> bool {
    path_or_url.starts_with("http://") || path_or_url.starts_with("https://")
}
