//! Client-side text search

use shared::models::{Customer, DiningTable, MenuItem, Order, Receipt};
use std::borrow::Cow;

/// A record that can be matched against a search box
pub trait Searchable {
    /// Text fields the query is matched against
    fn search_fields(&self) -> Vec<Cow<'_, str>>;
}

/// Case-insensitive substring match over the record's search fields.
/// The query is used as typed; an empty query matches everything.
pub fn matches_query<T: Searchable + ?Sized>(item: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

impl Searchable for MenuItem {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Borrowed(self.name.as_str())];
        if let Some(category) = &self.category {
            fields.push(Cow::Borrowed(category.as_str()));
        }
        fields
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Borrowed(self.name.as_str())];
        if let Some(phone) = &self.phone {
            fields.push(Cow::Borrowed(phone.as_str()));
        }
        fields
    }
}

impl Searchable for DiningTable {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.name.as_str())]
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Owned(self.id.to_string()),
            Cow::Borrowed(self.status.as_str()),
        ];
        if let Some(table) = &self.table_number {
            fields.push(Cow::Owned(table.to_string()));
        }
        fields
    }
}

impl Searchable for Receipt {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Owned(self.id.to_string())]
    }
}
