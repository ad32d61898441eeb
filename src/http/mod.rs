//! HTTP protocol layer module
//!
//! Query decoding and response builders, decoupled from the WatchInfo
//! function.

pub mod query;
pub mod response;

pub use query::QueryParams;
pub use response::{
    build_404_response, build_405_response, build_health_response, build_options_response,
    build_text_response,
};
