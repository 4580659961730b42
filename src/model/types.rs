//! Normalized pathway record structs.
//!
//! Records arrive as camelCase JSON. Optional scalars deserialize from
//! missing or `null` to `None`; array fields default to empty, so a missing
//! array and a present-but-empty one are indistinguishable downstream —
//! exactly the "missing for filtering purposes" contract the facet layer
//! relies on. Present falsy scalars (`0`, `""`) survive untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One transition-pathway scenario record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pathway {
    pub id: String,
    pub name: PathwayName,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub pathway_type: Option<String>,
    /// Year the modeled emissions reach net zero.
    #[serde(default)]
    pub model_year_netzero: Option<i32>,
    /// Modeled temperature increase in °C.
    #[serde(default)]
    pub model_temp_increase: Option<f64>,
    #[serde(default)]
    pub geography: Vec<String>,
    #[serde(default)]
    pub sectors: Vec<SectorEntry>,
    #[serde(default)]
    pub metric: Vec<String>,
    #[serde(default)]
    pub publication: Option<Publication>,
}

impl Pathway {
    /// Sector names in record order, for options and predicates.
    pub fn sector_names(&self) -> Vec<&str> {
        self.sectors.iter().map(|s| s.name.as_str()).collect()
    }

    /// Temperature as a facet value (missing stays missing).
    pub fn temp_increase(&self) -> Option<f64> {
        self.model_temp_increase
    }

    /// Net-zero year widened for the shared numeric-range predicate.
    pub fn netzero_year(&self) -> Option<f64> {
        self.model_year_netzero.map(f64::from)
    }
}

/// Full and optional short display names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathwayName {
    pub full: String,
    #[serde(default)]
    pub short: Option<String>,
}

impl PathwayName {
    pub fn new(full: impl Into<String>) -> Self {
        Self {
            full: full.into(),
            short: None,
        }
    }
}

/// A sector the pathway covers, with the technologies it models there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorEntry {
    pub name: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl SectorEntry {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            technologies: Vec::new(),
        }
    }
}

/// Publication metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub publisher: PublisherName,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub published: Option<NaiveDate>,
}

/// Publisher full and optional short names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublisherName {
    pub full: String,
    #[serde(default)]
    pub short: Option<String>,
}
