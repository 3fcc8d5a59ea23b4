//! Dining Table Model

use crate::query::Collection;
use crate::types::RecordId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::Record;

/// Table occupancy status
///
/// Stored casing is not consistent ("free", "Free"), so parsing ignores case.
/// Anything unrecognised, missing or `null` becomes [`TableStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TableStatus {
    Free,
    Occupied,
    Reserved,
    #[default]
    Unknown,
}

impl TableStatus {
    /// Statuses a table can be set to
    pub const ASSIGNABLE: [TableStatus; 3] = [Self::Free, Self::Occupied, Self::Reserved];

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "free" => Self::Free,
            "occupied" => Self::Occupied,
            "reserved" => Self::Reserved,
            _ => Self::Unknown,
        }
    }

    /// Value written to the store
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Occupied => "occupied",
            Self::Reserved => "reserved",
            Self::Unknown => "unknown",
        }
    }

    /// Badge text
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Free => "Available",
            Self::Occupied => "Occupied",
            Self::Reserved => "Reserved",
            Self::Unknown => "Unknown",
        }
    }

    pub const fn is_assignable(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Next status when a table card is tapped: free → occupied → reserved → free
    pub const fn next(&self) -> Self {
        match self {
            Self::Free => Self::Occupied,
            Self::Occupied => Self::Reserved,
            Self::Reserved | Self::Unknown => Self::Free,
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TableStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TableStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

/// Dining table entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: RecordId,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub name: String,
    #[serde(default)]
    pub status: TableStatus,
}

impl Record for DiningTable {
    const COLLECTION: Collection = Collection::Tables;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Patch body for a status change
#[derive(Debug, Clone, Serialize)]
pub struct TableStatusUpdate {
    pub status: TableStatus,
}
