//! Multi-select facet panel state (checkbox list + ANY/ALL switch).
//!
//! Controlled-component shape: the committed selection lives in the owner's
//! `SearchFilters`; this state machine mirrors it, and every gesture returns
//! the NEXT selection (a fresh vector) for the owner to commit — the mirror
//! is never mutated in place by a gesture.
//!
//! # Interaction Contract
//!
//! | Gesture          | Behavior                                            |
//! |------------------|-----------------------------------------------------|
//! | Toggle option    | Flip membership → return new selection vector       |
//! | Select all       | Return all enabled tokens; disabled when complete   |
//! | Clear            | Return empty selection; disabled when already empty |
//! | Space / Enter on mode switch | Flip ANY↔ALL → return new mode          |
//! | Up / Down        | Move cursor (wraps)                                 |
//!
//! The ANY/ALL switch is absent for scalar-only facets (`show_mode_toggle`
//! off) — OR vs AND is meaningless for a single-valued field.

use crate::facet::{FacetMode, LabeledOption};

/// One row in the panel.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    pub disabled: bool,
}

impl From<LabeledOption> for SelectOption {
    fn from(option: LabeledOption) -> Self {
        Self {
            label: option.label,
            value: option.value,
            disabled: false,
        }
    }
}

/// Panel state for one multi-valued facet.
#[derive(Debug, Clone)]
pub struct MultiSelectState {
    options: Vec<SelectOption>,
    value: Vec<String>,
    mode: FacetMode,
    show_mode_toggle: bool,
    cursor: usize,
}

impl MultiSelectState {
    /// Panics on duplicate option tokens — a malformed option list is a
    /// programmer error, not user data.
    pub fn new(options: Vec<SelectOption>) -> Self {
        for (i, option) in options.iter().enumerate() {
            assert!(
                !options[..i].iter().any(|o| o.value == option.value),
                "duplicate option token: {}",
                option.value
            );
        }
        Self {
            options,
            value: Vec::new(),
            mode: FacetMode::default(),
            show_mode_toggle: false,
            cursor: 0,
        }
    }

    pub fn with_mode_toggle(mut self, show: bool) -> Self {
        self.show_mode_toggle = show;
        self
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn value(&self) -> &[String] {
        &self.value
    }

    pub fn mode(&self) -> FacetMode {
        self.mode
    }

    pub fn shows_mode_toggle(&self) -> bool {
        self.show_mode_toggle
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Parent-controlled sync; not a gesture, nothing is emitted.
    pub fn set_value(&mut self, value: Vec<String>) {
        self.value = value;
    }

    /// Parent-controlled mode sync.
    pub fn set_mode(&mut self, mode: FacetMode) {
        self.mode = mode;
    }

    pub fn is_selected(&self, token: &str) -> bool {
        self.value.iter().any(|v| v == token)
    }

    /// Checkbox toggle: the next selection with `token` membership flipped.
    pub fn toggle(&self, token: &str) -> Vec<String> {
        let mut next = self.value.clone();
        match next.iter().position(|v| v == token) {
            Some(i) => {
                next.remove(i);
            }
            None => next.push(token.to_string()),
        }
        next
    }

    /// Toggle the option under the cursor; `None` on a disabled row.
    pub fn toggle_at_cursor(&self) -> Option<Vec<String>> {
        let option = self.options.get(self.cursor)?;
        if option.disabled {
            return None;
        }
        Some(self.toggle(&option.value))
    }

    fn enabled_tokens(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| !o.disabled)
            .map(|o| o.value.clone())
            .collect()
    }

    /// "Select all" result: every enabled token.
    pub fn select_all(&self) -> Vec<String> {
        self.enabled_tokens()
    }

    /// "Select all" is disabled once every enabled option is selected.
    pub fn select_all_disabled(&self) -> bool {
        let enabled = self.enabled_tokens();
        !self.value.is_empty() && self.value.len() == enabled.len()
    }

    /// "Clear" result: the empty selection.
    pub fn clear(&self) -> Vec<String> {
        Vec::new()
    }

    /// "Clear" is disabled while nothing is selected.
    pub fn clear_disabled(&self) -> bool {
        self.value.is_empty()
    }

    /// Activate the ANY/ALL switch (click, Space, or Enter). Returns the new
    /// mode for the owner to commit; `None` when the facet has no switch.
    pub fn toggle_mode(&self) -> Option<FacetMode> {
        if self.show_mode_toggle {
            Some(self.mode.toggled())
        } else {
            None
        }
    }

    /// Move the cursor, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.options.is_empty() {
            self.cursor = 0;
            return;
        }
        let len = self.options.len() as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    /// Pill summary: `None` while inactive, "N selected" otherwise.
    pub fn selection_summary(&self) -> Option<String> {
        if self.value.is_empty() {
            None
        } else {
            Some(format!("{} selected", self.value.len()))
        }
    }
}
