//! Customer Model

use crate::query::Collection;
use crate::types::RecordId;
use crate::util::{blank_as_none, format_short_date, null_as_default};
use serde::{Deserialize, Serialize};

use super::Record;

/// Customer entity (loyalty programme member)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CustomerRow")]
pub struct Customer {
    pub id: RecordId,
    pub name: String,
    pub phone: Option<String>,
    pub last_order_date: Option<String>,
    /// Zero when the store has no value
    pub loyalty_points: i64,
}

/// Customer row as stored; `last_order` and `points` are the older column names
#[derive(Deserialize)]
struct CustomerRow {
    id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    phone: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    last_order_date: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    last_order: Option<String>,
    #[serde(default)]
    loyalty_points: Option<i64>,
    #[serde(default)]
    points: Option<i64>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            phone: row.phone,
            last_order_date: row.last_order_date.or(row.last_order),
            loyalty_points: row.loyalty_points.or(row.points).unwrap_or_default(),
        }
    }
}

impl Customer {
    /// "Last order: Nov 28, 2025", empty date when unknown
    pub fn last_order_label(&self) -> String {
        format!(
            "Last order: {}",
            format_short_date(self.last_order_date.as_deref())
        )
    }
}

impl Record for Customer {
    const COLLECTION: Collection = Collection::Customers;

    fn id(&self) -> &RecordId {
        &self.id
    }
}
