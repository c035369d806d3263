//! Pattern Models
//!
//! Records as they appear in the static pattern document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Image reference (src + alt text)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// Free-form value in the pattern details table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailValue {
    Text(String),
    List(Vec<String>),
}

impl std::fmt::Display for DetailValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailValue::Text(text) => f.write_str(text),
            DetailValue::List(items) => {
                let filled: Vec<&str> = items
                    .iter()
                    .map(String::as_str)
                    .filter(|item| !item.is_empty())
                    .collect();
                f.write_str(&filled.join(", "))
            }
        }
    }
}

/// Yarn needed to make a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YarnRequirement {
    pub name: String,
    #[serde(default)]
    pub material: String,
    #[serde(rename = "quantity_skeins")]
    pub skeins: u32,
}

/// Sub-phase of a step: instruction lines ("rounds") plus images
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substep {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Top-level phase of a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub substeps: Vec<Substep>,
}

impl Step {
    /// Number of rounds across all substeps
    pub fn round_count(&self) -> usize {
        self.substeps.iter().map(|s| s.instructions.len()).sum()
    }
}

/// Pattern record (one entry of the pattern document)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecord {
    /// Document key; filled in by the store, not read from the record body
    #[serde(default, skip_serializing)]
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default, rename = "category")]
    pub categories: Vec<String>,
    #[serde(rename = "hero-image")]
    pub hero_image: Image,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default, rename = "pattern_details")]
    pub details: IndexMap<String, DetailValue>,
    #[serde(default)]
    pub yarn: Vec<YarnRequirement>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl PatternRecord {
    /// Category listed first, used by search
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }
}
