//! Store query description
//!
//! A collection name plus the few server-side clauses the screens rely on:
//! equality / case-insensitive pattern filters, one sort column and a row
//! limit. Store implementations translate this into their own dialect.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named collections in the remote store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    MenuItems,
    Tables,
    Orders,
    Customers,
    Receipts,
    Settings,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Self::MenuItems,
        Self::Tables,
        Self::Orders,
        Self::Customers,
        Self::Receipts,
        Self::Settings,
    ];

    /// Collection name as known by the store
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MenuItems => "menu_items",
            Self::Tables => "tables",
            Self::Orders => "orders",
            Self::Customers => "customers",
            Self::Receipts => "receipts",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOp {
    /// Exact equality
    Eq,
    /// Case-insensitive pattern match, `%` as wildcard
    ILike,
}

impl FilterOp {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::ILike => "ilike",
        }
    }
}

/// A single column filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub column: String,
    pub op: FilterOp,
    pub value: String,
}

/// Sort clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub column: String,
    pub ascending: bool,
}

/// Read request against one collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Target collection
    pub collection: Collection,
    /// Filters, all of which must hold
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Sort clause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderBy>,
    /// Maximum number of rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl QueryRequest {
    /// Every row of a collection
    pub fn all(collection: Collection) -> Self {
        Self {
            collection,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Add an equality filter
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            op: FilterOp::Eq,
            value: value.into(),
        });
        self
    }

    /// Add a case-insensitive pattern filter
    pub fn ilike(mut self, column: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            op: FilterOp::ILike,
            value: pattern.into(),
        });
        self
    }

    /// Drop every filter on `column`
    pub fn without_filter(mut self, column: &str) -> Self {
        self.filters.retain(|f| f.column != column);
        self
    }

    /// Sort ascending
    pub fn order_asc(mut self, column: impl Into<String>) -> Self {
        self.order = Some(OrderBy {
            column: column.into(),
            ascending: true,
        });
        self
    }

    /// Sort descending
    pub fn order_desc(mut self, column: impl Into<String>) -> Self {
        self.order = Some(OrderBy {
            column: column.into(),
            ascending: false,
        });
        self
    }

    /// Limit row count
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Case-insensitive `ILIKE` match as evaluated by the store
///
/// `%` (or `*`, which PostgREST rewrites to `%`) matches any run of
/// characters and `_` matches exactly one; everything else is literal.
pub fn ilike_matches(pattern: &str, value: &str) -> bool {
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    let value: Vec<char> = value.to_lowercase().chars().collect();

    // Greedy wildcard match with backtracking to the last run wildcard
    let (mut p, mut v) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;
    while v < value.len() {
        match pattern.get(p) {
            Some('%' | '*') => {
                backtrack = Some((p, v));
                p += 1;
            }
            Some(&c) if c == '_' || c == value[v] => {
                p += 1;
                v += 1;
            }
            _ => match backtrack {
                Some((star, consumed)) => {
                    p = star + 1;
                    v = consumed + 1;
                    backtrack = Some((star, consumed + 1));
                }
                None => return false,
            },
        }
    }
    pattern[p..].iter().all(|c| matches!(c, '%' | '*'))
}
