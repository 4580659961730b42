//! Shared sentinel for an intentionally missing optional facet value.
//!
//! `FacetValue::Absent` is what the UI labels "None" and what serialized
//! filter state carries as [`ABSENT_FILTER_TOKEN`]. Keeping the sentinel as
//! an enum variant (rather than `Option::None`) preserves the distinction
//! between "field is missing" and "field holds a falsy value" (`0`, `""`,
//! `false`) all the way through option lists and predicates.

use std::fmt;

/// Stable token for UI/query state (e.g., serialized selections, CLI args).
pub const ABSENT_FILTER_TOKEN: &str = "__ABSENT__";

/// A facet value that is either present or intentionally missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetValue<T> {
    /// The field is missing (`null`/absent in the source record).
    Absent,
    /// A concrete value, including falsy ones.
    Value(T),
}

impl<T> FacetValue<T> {
    /// True only for the sentinel itself.
    pub fn is_absent(&self) -> bool {
        matches!(self, FacetValue::Absent)
    }

    /// Borrow the concrete value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            FacetValue::Absent => None,
            FacetValue::Value(v) => Some(v),
        }
    }
}

impl<T: fmt::Display> FacetValue<T> {
    /// Serialize to a stable filter token.
    ///
    /// - `Absent` -> `"__ABSENT__"`
    /// - concrete values -> their `Display` form
    pub fn to_filter_token(&self) -> String {
        match self {
            FacetValue::Absent => ABSENT_FILTER_TOKEN.to_string(),
            FacetValue::Value(v) => v.to_string(),
        }
    }

    /// Display helper for badges, pills, tables.
    ///
    /// - `Absent` -> `"None"` (customizable via `none_label`)
    /// - concrete values -> their `Display` form
    pub fn to_display(&self, none_label: Option<&str>) -> String {
        match self {
            FacetValue::Absent => none_label.unwrap_or("None").to_string(),
            FacetValue::Value(v) => v.to_string(),
        }
    }
}

impl<T> From<Option<T>> for FacetValue<T> {
    fn from(value: Option<T>) -> Self {
        coalesce_optional(value)
    }
}

/// Coalesce `None` to `Absent` without touching valid falsy values.
///
/// Helpful when normalizing optional record fields before building options.
pub fn coalesce_optional<T>(value: Option<T>) -> FacetValue<T> {
    match value {
        None => FacetValue::Absent,
        Some(v) => FacetValue::Value(v),
    }
}

/// Parse a filter token back to a runtime value.
///
/// `"__ABSENT__"` -> `Absent`; everything else passes through unchanged.
/// A concrete data value equal to the token literal therefore aliases to
/// the sentinel — callers that need such a string as data must escape it
/// before tokenizing.
pub fn from_filter_token(token: &str) -> FacetValue<&str> {
    if token == ABSENT_FILTER_TOKEN {
        FacetValue::Absent
    } else {
        FacetValue::Value(token)
    }
}

/// True when `token` is the serialized sentinel.
pub fn is_absent_token(token: &str) -> bool {
    token == ABSENT_FILTER_TOKEN
}
