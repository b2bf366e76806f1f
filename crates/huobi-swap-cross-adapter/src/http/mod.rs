/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and classified API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod params;
pub mod public;
pub mod request;
pub mod signature;
pub mod trade;
pub mod transfer;
pub mod user;

pub use error::{ApiErrorResponse, HuobiError, Result};
pub use params::{QueryParams, RequestBody};
pub use request::ApiRequest;
pub use signature::RequestSigner;

pub use client::{ClientConfig, Credentials, DEFAULT_HOST, DEFAULT_SPOT_HOST, HuobiSwapCrossClient};
