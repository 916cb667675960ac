//! Catalog item records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog record as persisted in the data file.
///
/// Fields other than `id`, `name` and `price` are carried in `extra` and
/// written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub price: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Case-insensitive substring match on the item name
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

/// Fields submitted for a new item.
///
/// Extra fields keyed `id`, `name` or `price` are dropped when the item is
/// stored; the typed fields and the assigned id always win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            fields: Map::new(),
        }
    }

    /// Attach an extra field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub(crate) fn into_item(self, id: u64) -> Item {
        let mut extra = self.fields;
        for reserved in ["id", "name", "price"] {
            extra.remove(reserved);
        }
        Item {
            id,
            name: self.name,
            price: self.price,
            extra,
        }
    }
}
