//! Yarn Inventory
//!
//! Rows of the "My Yarn" table. Removing a row only changes this in-memory
//! table; the yarn document itself is never written.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CatalogueResult;

/// Yarn record (matches the yarn document)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YarnRecord {
    pub name: String,
    #[serde(default)]
    pub preview: String,
    /// CSS color for the swatch cell
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub colour_name: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub quantity: u32,
}

/// Table row view of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YarnRow {
    pub key: String,
    pub record: YarnRecord,
}

impl YarnRow {
    pub fn row_id(&self) -> String {
        format!("{}_row", self.key)
    }

    pub fn preview_alt(&self) -> String {
        format!("Photo of {}", self.record.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YarnInventory {
    yarns: IndexMap<String, YarnRecord>,
}

impl YarnInventory {
    pub fn from_records(yarns: IndexMap<String, YarnRecord>) -> Self {
        Self { yarns }
    }

    pub fn from_json(json: &str) -> CatalogueResult<Self> {
        let yarns: IndexMap<String, YarnRecord> = serde_json::from_str(json)?;
        log::info!("Loaded {} yarns", yarns.len());
        Ok(Self { yarns })
    }

    /// Rows in document order
    pub fn rows(&self) -> Vec<YarnRow> {
        self.yarns
            .iter()
            .map(|(key, record)| YarnRow { key: key.clone(), record: record.clone() })
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&YarnRecord> {
        self.yarns.get(key)
    }

    /// Drop a row; returns false when the key is unknown
    pub fn remove(&mut self, key: &str) -> bool {
        self.yarns.shift_remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.yarns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.yarns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YARN: &str = r##"{
        "ninja-green": {"name": "Green Ninja Cotton Yarn", "preview": "./images/ninja_green.png",
            "color": "#4c803d", "colour_name": "Dark Green", "weight": "4/4", "material": "Cotton", "quantity": 3},
        "finch-blue": {"name": "Blue Jeans", "preview": "./images/finch_blue.png",
            "color": "#508ab3", "colour_name": "Jeans Blue", "weight": "6/4", "material": "Cotton", "quantity": 1},
        "woolen-tundra": {"name": "Tundra Softness", "color": "#7a5a3c", "quantity": 5}
    }"##;

    #[test]
    fn test_rows_in_document_order() {
        let inventory = YarnInventory::from_json(YARN).unwrap();
        let rows = inventory.rows();
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["ninja-green", "finch-blue", "woolen-tundra"]);
        assert_eq!(rows[0].row_id(), "ninja-green_row");
        assert_eq!(rows[1].preview_alt(), "Photo of Blue Jeans");
        assert_eq!(rows[2].record.material, "");
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut inventory = YarnInventory::from_json(YARN).unwrap();
        assert!(inventory.remove("finch-blue"));
        assert!(!inventory.remove("finch-blue"));

        let keys: Vec<String> = inventory.rows().into_iter().map(|r| r.key).collect();
        assert_eq!(keys, vec!["ninja-green", "woolen-tundra"]);
        assert_eq!(inventory.len(), 2);
    }
}
