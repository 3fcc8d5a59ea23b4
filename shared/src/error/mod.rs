//! Unified error system
//!
//! - [`ErrorCode`]: standardized numeric codes
//! - [`AppError`]: code + message + structured details, as shown to the user
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::TableUpdateFailed, "Table 3 was not updated")
//!     .with_detail("table_id", 3);
//! assert_eq!(err.code.code(), 7005);
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
