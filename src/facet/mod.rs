//! The Absent-aware facet model: sentinel, option building, and predicates.

pub mod absent;
pub mod options;
pub mod predicate;

pub use absent::{
    ABSENT_FILTER_TOKEN, FacetValue, coalesce_optional, from_filter_token, is_absent_token,
};
pub use options::{
    LabeledOption, OptionBuildConfig, build_options, build_options_from_values, has_absent,
    with_absent_option,
};
pub use predicate::{
    RangeFilter, matches_numeric_range, matches_optional_facet, matches_optional_facet_all,
    matches_optional_facet_any, matches_single_valued_all,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Combination semantics for multi-valued facet selections.
///
/// Scalar facets ignore the mode entirely (OR semantics by construction).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacetMode {
    /// At least one selected token must match (OR).
    #[default]
    #[serde(rename = "ANY")]
    Any,
    /// Every selected token must match (AND).
    #[serde(rename = "ALL")]
    All,
}

impl FacetMode {
    pub fn is_all(self) -> bool {
        self == FacetMode::All
    }

    /// The other mode; used by the UI mode toggle.
    pub fn toggled(self) -> Self {
        match self {
            FacetMode::Any => FacetMode::All,
            FacetMode::All => FacetMode::Any,
        }
    }
}

impl fmt::Display for FacetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetMode::Any => write!(f, "ANY"),
            FacetMode::All => write!(f, "ALL"),
        }
    }
}

impl FromStr for FacetMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ANY" => Ok(FacetMode::Any),
            "ALL" => Ok(FacetMode::All),
            other => Err(format!("unknown facet mode: {other} (expected any|all)")),
        }
    }
}
