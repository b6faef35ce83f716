//! Errors at the crate boundary.
//!
//! Numbering itself never fails; only decoding input can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagingError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
