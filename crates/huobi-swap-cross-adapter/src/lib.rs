/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public cross-margined swap adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiErrorResponse,
    ApiRequest,
    ClientConfig,
    Credentials,
    DEFAULT_HOST,
    DEFAULT_SPOT_HOST,
    HuobiError,
    HuobiSwapCrossClient,
    QueryParams,
    RequestBody,
    RequestSigner,
    Result,
};

// Re-export all types
pub use types::*;
