//! Dropdown facet shell state (trigger pill + popover panel).
//!
//! Side-effect free; the interactive browser and the tests drive it.
//!
//! # Interaction Contract
//!
//! | Trigger              | Behavior                                        |
//! |----------------------|-------------------------------------------------|
//! | Trigger click        | Open panel → recompute panel min width          |
//! | Outside pointer-down | Close panel                                     |
//! | Esc                  | Close panel (consumed only while open)          |
//! | Explicit close       | Close panel (children-as-function `close()` API)|
//! | Selection made       | Close panel only when `close_on_select` is set  |
//! | Resize               | Recompute panel min width from trigger width    |
//!
//! The owner supplies the pill's `active` flag and summary text ("3
//! selected", "1.2–1.6", "≥ 1.2", "absent only"); the shell only manages
//! open/closed state and sizing.

/// Open/closed state and sizing for one facet dropdown.
#[derive(Debug, Clone)]
pub struct DropdownShell {
    open: bool,
    close_on_select: bool,
    trigger_width: u16,
    /// Fixed panel width wins over the trigger-derived minimum.
    fixed_menu_width: Option<u16>,
    menu_min_width: u16,
}

impl Default for DropdownShell {
    fn default() -> Self {
        Self::new()
    }
}

impl DropdownShell {
    pub fn new() -> Self {
        Self {
            open: false,
            close_on_select: false,
            trigger_width: 0,
            fixed_menu_width: None,
            menu_min_width: 0,
        }
    }

    /// Close the panel immediately after a selection (single-choice facets).
    pub fn with_close_on_select(mut self, close_on_select: bool) -> Self {
        self.close_on_select = close_on_select;
        self
    }

    /// Use a fixed panel width instead of sizing from the trigger.
    pub fn with_fixed_menu_width(mut self, width: u16) -> Self {
        self.fixed_menu_width = Some(width);
        self.recompute_menu_width();
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Panel minimum width; ≥ trigger width unless a fixed width is set.
    pub fn menu_min_width(&self) -> u16 {
        self.menu_min_width
    }

    fn recompute_menu_width(&mut self) {
        self.menu_min_width = match self.fixed_menu_width {
            Some(fixed) => fixed,
            None => self.trigger_width,
        };
    }

    /// Trigger click opens the panel and recomputes sizing.
    pub fn trigger_clicked(&mut self) {
        self.open = true;
        self.recompute_menu_width();
    }

    /// Measured trigger width changed (initial measure or window resize).
    pub fn set_trigger_width(&mut self, width: u16) {
        self.trigger_width = width;
        self.recompute_menu_width();
    }

    /// A pointer-down landed outside both trigger and panel.
    pub fn outside_pointer_down(&mut self) {
        self.open = false;
    }

    /// Escape pressed; returns true when the key was consumed (panel was open).
    pub fn escape_pressed(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    /// Explicit close callback (the panel body's `close()` API).
    pub fn close(&mut self) {
        self.open = false;
    }

    /// An option was picked inside the panel.
    pub fn selection_made(&mut self) {
        if self.close_on_select {
            self.open = false;
        }
    }
}
