//! Screen controllers
//!
//! One [`ListController`] per list screen plus the [`PasscodeGate`]. Each
//! controller receives its [`Gateway`](crate::Gateway) at construction and
//! exclusively owns its items; nothing is shared between screens.

mod list;
mod orders;
pub mod passcode;
pub mod search;
mod tables;

pub use list::{CompletedLoad, ListController, LoadMode, LoadState, LoadTicket, PendingLoad};
pub use orders::{OrderFilter, OrdersController};
pub use passcode::{GateOutcome, PASSCODE_LENGTH, PasscodeGate};
pub use search::{Searchable, matches_query};
pub use tables::TablesController;

use shared::models::{Customer, MenuItem, Receipt};

pub type MenuController = ListController<MenuItem>;
pub type CustomersController = ListController<Customer>;
pub type ReceiptsController = ListController<Receipt>;
