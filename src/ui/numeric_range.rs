//! Numeric range panel state (min/max text fields + "include absent" box).
//!
//! Mirrors the parent-controlled `Option<RangeFilter>` into local text
//! fields. A last-writer flag separates prop-sync from user edits so a sync
//! never re-emits to the parent (which would loop the feedback). Keystrokes
//! emit immediately when the field parses as a number or empties out; partial
//! text ("-", "1e") changes nothing until blur reconciles it.
//!
//! # Interaction Contract
//!
//! | Gesture           | Behavior                                           |
//! |-------------------|----------------------------------------------------|
//! | Type parseable    | Commit bound → emit new value                      |
//! | Type partial      | Keep text, no emit                                 |
//! | Clear field       | Drop bound → emit                                  |
//! | Blur              | Invalid text cleared (emit); valid text kept       |
//! | Toggle absent box | Flip `include_absent` → emit                       |
//! | Parent sync       | Replace local state, NO emit                       |
//!
//! An inverted pair (`max < min`, both numeric) is surfaced via
//! [`NumericRangeEditor::warning`] and still emitted as-is — deciding what
//! an inverted range means is the owner's call, not this panel's.

use crate::facet::RangeFilter;

/// Alert text shown while the range is inverted.
pub const INVERTED_RANGE_WARNING: &str = "End value must be ≥ start value";

/// Which text field a gesture targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeField {
    Min,
    Max,
}

/// A user-driven change reported to the owner; `None` means "filter cleared".
pub type RangeChange = Option<RangeFilter>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Writer {
    Parent,
    User,
}

/// Local state for one numeric range facet panel.
#[derive(Debug, Clone)]
pub struct NumericRangeEditor {
    min_input: String,
    max_input: String,
    min_bound: Option<f64>,
    max_bound: Option<f64>,
    include_absent: bool,
    last_writer: Writer,
}

impl Default for NumericRangeEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl NumericRangeEditor {
    pub fn new() -> Self {
        Self {
            min_input: String::new(),
            max_input: String::new(),
            min_bound: None,
            max_bound: None,
            include_absent: false,
            last_writer: Writer::Parent,
        }
    }

    pub fn input(&self, field: RangeField) -> &str {
        match field {
            RangeField::Min => &self.min_input,
            RangeField::Max => &self.max_input,
        }
    }

    pub fn include_absent(&self) -> bool {
        self.include_absent
    }

    /// The committed value; `None` when everything is back at default.
    pub fn value(&self) -> Option<RangeFilter> {
        let range = RangeFilter {
            min: self.min_bound,
            max: self.max_bound,
            include_absent: self.include_absent,
        };
        if range.is_empty() { None } else { Some(range) }
    }

    /// Mirror down from the parent-controlled value without re-emitting.
    /// A no-change sync leaves local (possibly mid-edit) text alone.
    pub fn sync_from_value(&mut self, value: Option<&RangeFilter>) {
        let incoming = value.copied().unwrap_or_default();
        let current = RangeFilter {
            min: self.min_bound,
            max: self.max_bound,
            include_absent: self.include_absent,
        };
        if incoming == current {
            return;
        }
        self.min_bound = incoming.min;
        self.max_bound = incoming.max;
        self.include_absent = incoming.include_absent;
        self.min_input = incoming.min.map(|v| v.to_string()).unwrap_or_default();
        self.max_input = incoming.max.map(|v| v.to_string()).unwrap_or_default();
        self.last_writer = Writer::Parent;
    }

    fn bound_mut(&mut self, field: RangeField) -> &mut Option<f64> {
        match field {
            RangeField::Min => &mut self.min_bound,
            RangeField::Max => &mut self.max_bound,
        }
    }

    fn input_mut(&mut self, field: RangeField) -> &mut String {
        match field {
            RangeField::Min => &mut self.min_input,
            RangeField::Max => &mut self.max_input,
        }
    }

    fn emit(&mut self) -> Option<RangeChange> {
        self.last_writer = Writer::User;
        Some(self.value())
    }

    /// Replace a field's text (one keystroke's result). Emits for parseable
    /// numbers and for a cleared field; partial text emits nothing.
    pub fn set_input(&mut self, field: RangeField, text: &str) -> Option<RangeChange> {
        *self.input_mut(field) = text.to_string();
        if text.is_empty() {
            *self.bound_mut(field) = None;
            return self.emit();
        }
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => {
                *self.bound_mut(field) = Some(v);
                self.emit()
            }
            _ => None,
        }
    }

    /// Append one typed character to a field.
    pub fn type_char(&mut self, field: RangeField, c: char) -> Option<RangeChange> {
        let mut text = self.input(field).to_string();
        text.push(c);
        self.set_input(field, &text)
    }

    /// Remove the last character of a field.
    pub fn backspace(&mut self, field: RangeField) -> Option<RangeChange> {
        let mut text = self.input(field).to_string();
        text.pop();
        self.set_input(field, &text)
    }

    /// Blur reconciliation: non-numeric leftovers are cleared (and the
    /// clearing emits); valid or empty text is left as-is with no emit.
    pub fn blur(&mut self, field: RangeField) -> Option<RangeChange> {
        let text = self.input(field);
        if text.is_empty() || text.parse::<f64>().is_ok_and(|v| v.is_finite()) {
            return None;
        }
        self.input_mut(field).clear();
        *self.bound_mut(field) = None;
        self.emit()
    }

    /// Flip the "include entries with no value" checkbox.
    pub fn toggle_include_absent(&mut self) -> Option<RangeChange> {
        self.include_absent = !self.include_absent;
        self.emit()
    }

    /// Clear the whole panel (the shell's clear affordance).
    pub fn clear(&mut self) -> Option<RangeChange> {
        self.min_input.clear();
        self.max_input.clear();
        self.min_bound = None;
        self.max_bound = None;
        self.include_absent = false;
        self.emit()
    }

    /// Both bounds numeric with `max < min`.
    pub fn is_inverted(&self) -> bool {
        RangeFilter {
            min: self.min_bound,
            max: self.max_bound,
            include_absent: self.include_absent,
        }
        .is_inverted()
    }

    /// Alert-role warning text while inverted.
    pub fn warning(&self) -> Option<&'static str> {
        if self.is_inverted() {
            Some(INVERTED_RANGE_WARNING)
        } else {
            None
        }
    }

    /// True when the latest state change came from a user gesture rather
    /// than a parent sync.
    pub fn last_writer_was_user(&self) -> bool {
        self.last_writer == Writer::User
    }
}

/// Pill summary for a range facet: "1.2–1.6", "≥ 1.2", "≤ 1.6", or
/// "absent only"; `None` while the facet is inactive.
pub fn range_summary(value: Option<&RangeFilter>) -> Option<String> {
    let range = value?;
    match (range.min, range.max) {
        (None, None) if range.include_absent => Some("absent only".to_string()),
        (None, None) => None,
        (Some(min), Some(max)) => Some(format!("{min}–{max}")),
        (Some(min), None) => Some(format!("≥ {min}")),
        (None, Some(max)) => Some(format!("≤ {max}")),
    }
}
