//! Shared types for the KarmaTab POS client
//!
//! Entity records, collection names, store query descriptions, error codes
//! and the value-normalisation helpers used by every screen.

pub mod error;
pub mod models;
pub mod query;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use query::{Collection, Filter, FilterOp, OrderBy, QueryRequest};
pub use types::RecordId;
