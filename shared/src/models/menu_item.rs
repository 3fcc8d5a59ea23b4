//! Menu Item Model

use crate::query::Collection;
use crate::types::RecordId;
use crate::util::{blank_as_none, format_money, null_as_default};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Record;

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Absent for items priced at the counter
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image_url: Option<String>,
}

impl MenuItem {
    /// Price label, "—" when the store has none
    pub fn price_label(&self) -> String {
        format_money(self.price)
    }
}

impl Record for MenuItem {
    const COLLECTION: Collection = Collection::MenuItems;

    fn id(&self) -> &RecordId {
        &self.id
    }
}
