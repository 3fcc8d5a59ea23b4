//! KarmaTab client - data access and screen state for the POS front-end
//!
//! - [`store`]: the remote collection store seam (REST and in-memory)
//! - [`Gateway`]: domain reads/writes with fail-closed defaults
//! - [`controller`]: per-screen list state, table status board, passcode gate

pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod logger;
pub mod store;

pub use config::ClientConfig;
pub use controller::{
    CustomersController, GateOutcome, ListController, LoadMode, LoadState, MenuController,
    OrderFilter, OrdersController, PasscodeGate, ReceiptsController, TablesController,
};
pub use error::{ClientError, ClientResult};
pub use gateway::Gateway;
pub use store::{InMemoryStore, RemoteStore, RestStore};

// Re-export shared types for convenience
pub use shared::error::{AppError, ErrorCode};
pub use shared::models::{
    Customer, DiningTable, MenuItem, Order, OrderStatus, Receipt, TableStatus,
};
pub use shared::{Collection, QueryRequest, RecordId};
