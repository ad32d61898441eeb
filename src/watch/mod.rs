//! WatchInfo function
//!
//! Pure request handling: takes the decoded query parameters of a request and
//! produces the status and body to send back. No I/O happens here; the HTTP
//! layer in `handler` wraps the result into a hyper response.

mod error;
mod info;

pub use error::WatchError;
pub use info::WatchInfo;

use crate::http::QueryParams;

/// Query parameter carrying the requested watch model
pub const MODEL_PARAM: &str = "model";

/// Status and body produced by the WatchInfo function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchResponse {
    pub status: u16,
    pub body: String,
}

impl WatchResponse {
    pub const fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Resolve the watch details for the `model` parameter.
///
/// The key match is exact and case-sensitive. A present key with an empty
/// value counts as present.
pub fn lookup(params: &QueryParams) -> Result<WatchInfo, WatchError> {
    params
        .get(MODEL_PARAM)
        .map(WatchInfo::for_model)
        .ok_or(WatchError::MissingParameter)
}

/// Handle one WatchInfo invocation
pub fn handle(params: &QueryParams) -> WatchResponse {
    match lookup(params) {
        Ok(info) => WatchResponse {
            status: 200,
            body: info.to_string(),
        },
        Err(e) => WatchResponse {
            status: e.status(),
            body: e.to_string(),
        },
    }
}
