//! Entity records
//!
//! Each record is a transient copy of a row owned by the remote store. The
//! [`Record`] trait ties a record type to its collection so generic code
//! (gateway reads, list controllers) can be written once.

pub mod customer;
pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod receipt;
pub mod setting;

pub use customer::Customer;
pub use dining_table::{DiningTable, TableStatus, TableStatusUpdate};
pub use menu_item::MenuItem;
pub use order::{Order, OrderStatus};
pub use receipt::Receipt;
pub use setting::{PASSCODE_KEY, Setting};

use crate::query::{Collection, QueryRequest};
use crate::types::RecordId;
use serde::de::DeserializeOwned;

/// A row type stored in a named collection
pub trait Record: DeserializeOwned + Send + Sync + 'static {
    /// Collection the rows live in
    const COLLECTION: Collection;

    /// Store-assigned id
    fn id(&self) -> &RecordId;

    /// Query used when a screen lists this record type
    fn default_query() -> QueryRequest {
        QueryRequest::all(Self::COLLECTION)
    }
}
