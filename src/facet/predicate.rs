//! Pure match predicates for facet selections against record fields.
//!
//! Selections are token slices (the serialized filter state); record fields
//! arrive as `Option`s. Every predicate treats an empty selection as "no
//! filter" and understands the Absent token. Nothing here allocates beyond
//! tokenizing record values, and nothing performs I/O — these run on every
//! keystroke.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::absent::is_absent_token;

fn has_absent_selected<S: AsRef<str>>(selected: &[S]) -> bool {
    selected.iter().any(|t| is_absent_token(t.as_ref()))
}

fn concrete_tokens<S: AsRef<str>>(selected: &[S]) -> impl Iterator<Item = &str> {
    selected
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| !is_absent_token(t))
}

/// Scalar-optional match (OR-only by construction).
///
/// True iff the selection is empty, or the Absent token is selected and the
/// value is missing, or the value's token form is among the selected
/// concrete tokens. A scalar field cannot equal two different selections at
/// once, so there is no ANY/ALL distinction here.
pub fn matches_optional_facet<S, T>(selected: &[S], value: Option<&T>) -> bool
where
    S: AsRef<str>,
    T: fmt::Display,
{
    if selected.is_empty() {
        return true;
    }
    match value {
        None => has_absent_selected(selected),
        Some(v) => {
            let token = v.to_string();
            concrete_tokens(selected).any(|t| t == token)
        }
    }
}

/// Array-valued match under ANY semantics.
///
/// True iff the selection is empty, or the Absent token is selected and the
/// array is missing/empty, or at least one element's token is among the
/// selected concrete tokens. Absent-selection and concrete-selection are
/// independent; either can satisfy the match.
pub fn matches_optional_facet_any<S, T, F>(selected: &[S], values: Option<&[T]>, to_token: F) -> bool
where
    S: AsRef<str>,
    F: Fn(&T) -> String,
{
    if selected.is_empty() {
        return true;
    }
    let missing = values.is_none_or(|vs| vs.is_empty());
    if missing {
        return has_absent_selected(selected);
    }
    let values = values.unwrap_or_default();
    values
        .iter()
        .any(|v| concrete_tokens(selected).any(|t| t == to_token(v)))
}

/// Array-valued match under ALL semantics (subset containment).
///
/// When the Absent token is among the selection, only a missing/empty array
/// with no concrete tokens also selected can match — "has no values" and
/// "has all of these values" are contradictory. Otherwise every selected
/// token must be present in the record's array; extra elements are allowed.
pub fn matches_optional_facet_all<S, T, F>(selected: &[S], values: Option<&[T]>, to_token: F) -> bool
where
    S: AsRef<str>,
    F: Fn(&T) -> String,
{
    if selected.is_empty() {
        return true;
    }
    let missing = values.is_none_or(|vs| vs.is_empty());
    let concrete: Vec<&str> = concrete_tokens(selected).collect();
    if has_absent_selected(selected) {
        return missing && concrete.is_empty();
    }
    if missing {
        return false;
    }
    let values = values.unwrap_or_default();
    let record_tokens: Vec<String> = values.iter().map(to_token).collect();
    concrete
        .iter()
        .all(|t| record_tokens.iter().any(|rt| rt == t))
}

/// Single-valued facet under ALL semantics.
///
/// All selected tokens must hold at once, which a scalar field can only
/// satisfy when exactly one token is selected: `[Absent]` matches a missing
/// value, `[x]` behaves as equality, and any other combination can never
/// match.
pub fn matches_single_valued_all<S, T>(selected: &[S], value: Option<&T>) -> bool
where
    S: AsRef<str>,
    T: fmt::Display,
{
    if selected.is_empty() {
        return true;
    }
    let concrete: Vec<&str> = concrete_tokens(selected).collect();
    if has_absent_selected(selected) {
        return concrete.is_empty() && value.is_none();
    }
    match (value, concrete.as_slice()) {
        (Some(v), [only]) => v.to_string() == *only,
        _ => false,
    }
}

/// A numeric range selection with open-ended bounds and an opt-in bucket for
/// records that carry no value at all.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RangeFilter {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub include_absent: bool,
}

impl RangeFilter {
    /// No bounds, no absent bucket — equivalent to "no filter".
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none() && !self.include_absent
    }

    /// Both bounds numeric with `max < min`. Surfaced to the caller as a
    /// warning; the filter is still applied as given, never auto-swapped.
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if max < min)
    }
}

/// Numeric range match: missing values pass only with `include_absent`;
/// present values must sit within the (independently optional) bounds.
pub fn matches_numeric_range(value: Option<f64>, range: &RangeFilter) -> bool {
    match value {
        None => range.include_absent,
        Some(v) => {
            let gte_min = range.min.is_none_or(|min| v >= min);
            let lte_max = range.max.is_none_or(|max| v <= max);
            gte_min && lte_max
        }
    }
}
