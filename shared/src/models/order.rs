//! Order Model

use crate::query::{Collection, QueryRequest};
use crate::types::RecordId;
use crate::util::{format_money, format_short_date, format_time};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::Record;

/// Payment status of an order, parsed case-insensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    Paid,
    Pending,
    #[default]
    Unknown,
}

impl OrderStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "paid" => Self::Paid,
            "pending" => Self::Pending,
            _ => Self::Unknown,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Unknown => "unknown",
        }
    }

    /// Badge text
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Paid => "PAID",
            Self::Pending => "PENDING",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "OrderRow")]
pub struct Order {
    pub id: RecordId,
    /// Table number or table row id, depending on how the order was created
    pub table_number: Option<RecordId>,
    pub total: Option<Decimal>,
    pub status: OrderStatus,
    pub created_at: Option<String>,
}

/// Order row as stored; older rows carry `table_id` instead of `table_number`
#[derive(Deserialize)]
struct OrderRow {
    id: RecordId,
    #[serde(default)]
    table_number: Option<RecordId>,
    #[serde(default)]
    table_id: Option<RecordId>,
    #[serde(default)]
    total: Option<Decimal>,
    #[serde(default)]
    status: OrderStatus,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: row.id,
            table_number: row.table_number.or(row.table_id),
            total: row.total,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

impl Order {
    pub fn table_label(&self) -> String {
        match &self.table_number {
            Some(table) => format!("Table {}", table),
            None => "No table".to_string(),
        }
    }

    pub fn total_label(&self) -> String {
        format_money(self.total)
    }

    /// "Nov 28, 2025 02:45 PM"
    pub fn placed_at_label(&self) -> String {
        let date = format_short_date(self.created_at.as_deref());
        let time = format_time(self.created_at.as_deref());
        format!("{} {}", date, time).trim().to_string()
    }

    /// Detail text shown when an order is opened
    pub fn summary(&self) -> String {
        format!(
            "Order #{}\nTable: {}\nTotal: {}\nStatus: {}",
            self.id,
            self.table_number
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| crate::util::MISSING.to_string()),
            self.total_label(),
            self.status
        )
    }
}

impl Record for Order {
    const COLLECTION: Collection = Collection::Orders;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn default_query() -> QueryRequest {
        QueryRequest::all(Self::COLLECTION).order_desc("created_at")
    }
}
