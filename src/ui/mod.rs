//! Filter UI state machines and the interactive terminal browser.

pub mod app;
pub mod dropdown;
pub mod multi_select;
pub mod numeric_range;

pub use app::{BrowseApp, Flow, run_browser};
pub use dropdown::DropdownShell;
pub use multi_select::{MultiSelectState, SelectOption};
pub use numeric_range::{
    INVERTED_RANGE_WARNING, NumericRangeEditor, RangeChange, RangeField, range_summary,
};
