//! Receipt Model

use crate::query::{Collection, QueryRequest};
use crate::types::RecordId;
use crate::util::{format_long_date, format_money, format_time};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Record;

/// Receipt entity (read-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ReceiptRow")]
pub struct Receipt {
    pub id: RecordId,
    pub amount: Option<Decimal>,
    pub created_at: Option<String>,
}

#[derive(Deserialize)]
struct ReceiptRow {
    id: RecordId,
    #[serde(default)]
    amount: Option<Decimal>,
    #[serde(default)]
    total: Option<Decimal>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<ReceiptRow> for Receipt {
    fn from(row: ReceiptRow) -> Self {
        Self {
            id: row.id,
            amount: row.amount.or(row.total),
            created_at: row.created_at,
        }
    }
}

impl Receipt {
    pub fn title(&self) -> String {
        format!("Receipt #{}", self.id)
    }

    pub fn amount_label(&self) -> String {
        format_money(self.amount)
    }

    pub fn date_label(&self) -> String {
        format_long_date(self.created_at.as_deref())
    }

    pub fn time_label(&self) -> String {
        format_time(self.created_at.as_deref())
    }
}

impl Record for Receipt {
    const COLLECTION: Collection = Collection::Receipts;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn default_query() -> QueryRequest {
        QueryRequest::all(Self::COLLECTION).order_desc("created_at")
    }
}
