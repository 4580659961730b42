//! Interactive terminal browser over the filter state machines.
//!
//! The update path is pure (`handle_key` mutates app state and recomputes
//! the filtered subset synchronously); only `render`/`run_browser` touch the
//! terminal. Keyboard map:
//!
//! | Key                | Context       | Action                            |
//! |--------------------|---------------|-----------------------------------|
//! | Left / Right / Tab | pills         | Move facet focus                  |
//! | Enter              | pills         | Open the focused facet panel      |
//! | `/`                | pills         | Edit the search term              |
//! | `C`                | pills         | Clear all filters                 |
//! | `q`                | pills         | Quit                              |
//! | Up / Down          | select panel  | Move option cursor (wraps)        |
//! | Space              | select panel  | Toggle option under cursor        |
//! | `a` / `c`          | select panel  | Select all / clear                |
//! | `m`                | select panel  | Flip ANY/ALL (where shown)        |
//! | Tab                | range panel   | Switch min/max field (blurs)      |
//! | `x`                | range panel   | Toggle "include absent"           |
//! | Esc                | any panel     | Close panel                       |

use anyhow::{Context, Result, bail};
use console::{Key, Term};
use unicode_width::UnicodeWidthStr;

use crate::facet::FacetMode;
use crate::model::Pathway;
use crate::search::{
    FacetOptions, NumericFacetFilter, SearchFilters, filter_pathways, global_facet_options,
};
use crate::ui::dropdown::DropdownShell;
use crate::ui::multi_select::{MultiSelectState, SelectOption};
use crate::ui::numeric_range::{NumericRangeEditor, RangeField, range_summary};

const RESULT_ROWS: usize = 12;

/// Which facet a panel edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FacetKey {
    PathwayType,
    NetzeroYear,
    Temperature,
    Geography,
    Sector,
    Metric,
}

enum PanelState {
    Select(MultiSelectState),
    Range {
        editor: NumericRangeEditor,
        field: RangeField,
    },
}

struct FacetPanel {
    key: FacetKey,
    label: &'static str,
    shell: DropdownShell,
    panel: PanelState,
}

/// Loop control returned by [`BrowseApp::handle_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct BrowseApp {
    pathways: Vec<Pathway>,
    filters: SearchFilters,
    facets: Vec<FacetPanel>,
    focus: usize,
    editing_search: bool,
    search_draft: String,
    results: Vec<Pathway>,
}

impl BrowseApp {
    pub fn new(pathways: Vec<Pathway>) -> Self {
        let options = global_facet_options(&pathways);
        let facets = build_facets(&options);
        let filters = SearchFilters::default();
        let results = filter_pathways(&pathways, &filters);
        Self {
            pathways,
            filters,
            facets,
            focus: 0,
            editing_search: false,
            search_draft: String::new(),
            results,
        }
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn results(&self) -> &[Pathway] {
        &self.results
    }

    fn recompute(&mut self) {
        self.results = filter_pathways(&self.pathways, &self.filters);
    }

    fn commit_selection(&mut self, key: FacetKey, next: Vec<String>) {
        match key {
            FacetKey::PathwayType => self.filters.pathway_type = next,
            FacetKey::Geography => self.filters.geography = next,
            FacetKey::Sector => self.filters.sector = next,
            FacetKey::Metric => self.filters.metric = next,
            FacetKey::NetzeroYear | FacetKey::Temperature => {}
        }
        self.recompute();
        self.sync_panels();
    }

    fn commit_mode(&mut self, key: FacetKey, mode: FacetMode) {
        match key {
            FacetKey::Geography => self.filters.modes.geography = mode,
            FacetKey::Sector => self.filters.modes.sector = mode,
            FacetKey::Metric => self.filters.modes.metric = mode,
            _ => {}
        }
        self.recompute();
        self.sync_panels();
    }

    fn commit_range(&mut self, key: FacetKey, change: Option<crate::facet::RangeFilter>) {
        let value = change.map(NumericFacetFilter::Range);
        match key {
            FacetKey::NetzeroYear => self.filters.model_year_netzero = value,
            FacetKey::Temperature => self.filters.model_temp_increase = value,
            _ => {}
        }
        self.recompute();
        self.sync_panels();
    }

    /// Mirror committed filter state back into every panel (parent sync).
    fn sync_panels(&mut self) {
        let filters = self.filters.clone();
        for facet in &mut self.facets {
            match &mut facet.panel {
                PanelState::Select(select) => {
                    let value = match facet.key {
                        FacetKey::PathwayType => filters.pathway_type.clone(),
                        FacetKey::Geography => filters.geography.clone(),
                        FacetKey::Sector => filters.sector.clone(),
                        FacetKey::Metric => filters.metric.clone(),
                        _ => Vec::new(),
                    };
                    select.set_value(value);
                    let mode = match facet.key {
                        FacetKey::Geography => filters.modes.geography,
                        FacetKey::Sector => filters.modes.sector,
                        FacetKey::Metric => filters.modes.metric,
                        _ => FacetMode::Any,
                    };
                    select.set_mode(mode);
                }
                PanelState::Range { editor, .. } => {
                    let value = match facet.key {
                        FacetKey::NetzeroYear => filters.model_year_netzero.as_ref(),
                        FacetKey::Temperature => filters.model_temp_increase.as_ref(),
                        _ => None,
                    };
                    editor.sync_from_value(value.and_then(NumericFacetFilter::range));
                }
            }
        }
    }

    fn open_panel_index(&self) -> Option<usize> {
        self.facets.iter().position(|f| f.shell.is_open())
    }

    /// Drive one key through the app. Pure state transition, no terminal I/O.
    pub fn handle_key(&mut self, key: Key) -> Flow {
        if self.editing_search {
            return self.handle_search_key(key);
        }
        if let Some(open) = self.open_panel_index() {
            return self.handle_panel_key(open, key);
        }
        self.handle_pills_key(key)
    }

    fn handle_search_key(&mut self, key: Key) -> Flow {
        match key {
            Key::Enter | Key::Escape => {
                self.editing_search = false;
                let draft = self.search_draft.trim().to_string();
                self.filters.search_term = if draft.is_empty() { None } else { Some(draft) };
                self.recompute();
            }
            Key::Backspace => {
                self.search_draft.pop();
                self.filters.search_term = Some(self.search_draft.clone());
                self.recompute();
            }
            Key::Char(c) => {
                self.search_draft.push(c);
                // filter recomputes on every keystroke, no debounce
                self.filters.search_term = Some(self.search_draft.clone());
                self.recompute();
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_pills_key(&mut self, key: Key) -> Flow {
        match key {
            Key::Char('q') => return Flow::Quit,
            Key::Char('/') => {
                self.editing_search = true;
                self.search_draft = self.filters.search_term.clone().unwrap_or_default();
            }
            Key::Char('C') => {
                self.filters.clear();
                self.recompute();
                self.sync_panels();
            }
            Key::ArrowRight | Key::Tab => {
                self.focus = (self.focus + 1) % self.facets.len();
            }
            Key::ArrowLeft | Key::BackTab => {
                self.focus = (self.focus + self.facets.len() - 1) % self.facets.len();
            }
            Key::Enter => {
                let facet = &mut self.facets[self.focus];
                // pill width drives the panel's minimum width
                let width = facet.label.width() as u16 + 8;
                facet.shell.set_trigger_width(width);
                facet.shell.trigger_clicked();
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_panel_key(&mut self, index: usize, key: Key) -> Flow {
        // computed against the borrowed panel, applied after the borrow ends
        enum Effect {
            None,
            Selection(Vec<String>),
            Mode(FacetMode),
            Range(Option<crate::facet::RangeFilter>),
        }

        if matches!(key, Key::Escape) {
            let facet = &mut self.facets[index];
            let facet_key = facet.key;
            // leaving a range panel blurs the active field first
            let change = match &mut facet.panel {
                PanelState::Range { editor, field } => editor.blur(*field),
                PanelState::Select(_) => None,
            };
            facet.shell.escape_pressed();
            if let Some(change) = change {
                self.commit_range(facet_key, change);
            }
            return Flow::Continue;
        }

        // moving facet focus while a panel is open dismisses it, the same
        // way an outside pointer-down does in the web shell
        if matches!(key, Key::ArrowRight | Key::ArrowLeft)
            && matches!(self.facets[index].panel, PanelState::Select(_))
        {
            self.facets[index].shell.outside_pointer_down();
            return self.handle_pills_key(key);
        }

        let facet_key = self.facets[index].key;
        let mut close_after_select = false;
        let effect = match &mut self.facets[index].panel {
            PanelState::Select(select) => match key {
                Key::ArrowDown => {
                    select.move_cursor(1);
                    Effect::None
                }
                Key::ArrowUp => {
                    select.move_cursor(-1);
                    Effect::None
                }
                Key::Char(' ') => match select.toggle_at_cursor() {
                    Some(next) => {
                        close_after_select = true;
                        Effect::Selection(next)
                    }
                    None => Effect::None,
                },
                Key::Char('a') if !select.select_all_disabled() => {
                    Effect::Selection(select.select_all())
                }
                Key::Char('c') if !select.clear_disabled() => Effect::Selection(select.clear()),
                Key::Char('m') | Key::Enter => match select.toggle_mode() {
                    Some(mode) => Effect::Mode(mode),
                    None => Effect::None,
                },
                _ => Effect::None,
            },
            PanelState::Range { editor, field } => match key {
                Key::Tab => {
                    let old = *field;
                    let change = editor.blur(old);
                    *field = match old {
                        RangeField::Min => RangeField::Max,
                        RangeField::Max => RangeField::Min,
                    };
                    match change {
                        Some(change) => Effect::Range(change),
                        None => Effect::None,
                    }
                }
                Key::Backspace => match editor.backspace(*field) {
                    Some(change) => Effect::Range(change),
                    None => Effect::None,
                },
                Key::Char('x') => match editor.toggle_include_absent() {
                    Some(change) => Effect::Range(change),
                    None => Effect::None,
                },
                Key::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                    match editor.type_char(*field, c) {
                        Some(change) => Effect::Range(change),
                        None => Effect::None,
                    }
                }
                _ => Effect::None,
            },
        };

        match effect {
            Effect::None => {}
            Effect::Selection(next) => {
                if close_after_select {
                    self.facets[index].shell.selection_made();
                }
                self.commit_selection(facet_key, next);
            }
            Effect::Mode(mode) => self.commit_mode(facet_key, mode),
            Effect::Range(change) => self.commit_range(facet_key, change),
        }
        Flow::Continue
    }

    fn pill_line(&self) -> String {
        let mut parts = Vec::new();
        for (i, facet) in self.facets.iter().enumerate() {
            let summary = match &facet.panel {
                PanelState::Select(select) => select.selection_summary(),
                PanelState::Range { editor, .. } => range_summary(editor.value().as_ref()),
            };
            let body = match &summary {
                Some(s) => format!("{}: {}", facet.label, s),
                None => format!("{}…", facet.label),
            };
            let marker = if i == self.focus { ">" } else { " " };
            parts.push(format!("{marker}[{body}]"));
        }
        parts.join(" ")
    }

    fn panel_lines(&self) -> Vec<String> {
        let Some(index) = self.open_panel_index() else {
            return Vec::new();
        };
        let facet = &self.facets[index];
        let mut lines = Vec::new();
        let rule_width = facet.shell.menu_min_width().max(24) as usize;
        lines.push("─".repeat(rule_width));
        match &facet.panel {
            PanelState::Select(select) => {
                let mode = if select.shows_mode_toggle() {
                    format!("  mode: {} (m to flip)", select.mode())
                } else {
                    String::new()
                };
                lines.push(format!("{}{}", facet.label, mode));
                for (i, option) in select.options().iter().enumerate() {
                    let cursor = if i == select.cursor() { ">" } else { " " };
                    let mark = if select.is_selected(&option.value) {
                        "[x]"
                    } else {
                        "[ ]"
                    };
                    lines.push(format!("{cursor} {mark} {}", option.label));
                }
            }
            PanelState::Range { editor, field } => {
                let min_marker = if *field == RangeField::Min { ">" } else { " " };
                let max_marker = if *field == RangeField::Max { ">" } else { " " };
                lines.push(facet.label.to_string());
                lines.push(format!(
                    "{min_marker} start: {}",
                    editor.input(RangeField::Min)
                ));
                lines.push(format!("{max_marker} end:   {}", editor.input(RangeField::Max)));
                lines.push(format!(
                    "  [{}] include entries with no value (x)",
                    if editor.include_absent() { "x" } else { " " }
                ));
                if let Some(warning) = editor.warning() {
                    lines.push(format!("  ! {warning}"));
                }
            }
        }
        lines
    }

    fn render(&self, term: &Term) -> Result<()> {
        term.clear_screen()?;
        term.write_line("tps browse — ←/→ focus, Enter open, / search, C clear, q quit")?;
        let search = match &self.filters.search_term {
            Some(term) if self.editing_search => format!("search: {term}_"),
            Some(term) => format!("search: {term}"),
            None if self.editing_search => "search: _".to_string(),
            None => "search: (none)".to_string(),
        };
        term.write_line(&search)?;
        term.write_line(&self.pill_line())?;
        for line in self.panel_lines() {
            term.write_line(&line)?;
        }
        term.write_line("")?;
        term.write_line(&format!(
            "{} of {} pathways",
            self.results.len(),
            self.pathways.len()
        ))?;
        for pathway in self.results.iter().take(RESULT_ROWS) {
            let temp = pathway
                .model_temp_increase
                .map(|t| format!("{t}°C"))
                .unwrap_or_else(|| "–".to_string());
            term.write_line(&format!(
                "  {:<16} {:<40} {}",
                pathway.id,
                truncate(&pathway.name.full, 40),
                temp
            ))?;
        }
        if self.results.len() > RESULT_ROWS {
            term.write_line(&format!("  … {} more", self.results.len() - RESULT_ROWS))?;
        }
        Ok(())
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + 1 >= max {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

fn build_facets(options: &FacetOptions) -> Vec<FacetPanel> {
    let select = |label, key, options: &Vec<crate::facet::LabeledOption>, mode_toggle| FacetPanel {
        key,
        label,
        shell: DropdownShell::new(),
        panel: PanelState::Select(
            MultiSelectState::new(options.iter().cloned().map(SelectOption::from).collect())
                .with_mode_toggle(mode_toggle),
        ),
    };
    let range = |label, key| FacetPanel {
        key,
        label,
        shell: DropdownShell::new(),
        panel: PanelState::Range {
            editor: NumericRangeEditor::new(),
            field: RangeField::Min,
        },
    };
    vec![
        // scalar facet: no ANY/ALL switch
        select(
            "Type",
            FacetKey::PathwayType,
            &options.pathway_type,
            false,
        ),
        range("Net zero by", FacetKey::NetzeroYear),
        range("Temp (°C)", FacetKey::Temperature),
        select("Geography", FacetKey::Geography, &options.geography, true),
        select("Sector", FacetKey::Sector, &options.sector, true),
        select("Metric", FacetKey::Metric, &options.metric, true),
    ]
}

/// Run the interactive browser until the user quits.
pub fn run_browser(pathways: Vec<Pathway>) -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        bail!("browse requires an interactive terminal");
    }
    let mut app = BrowseApp::new(pathways);
    term.hide_cursor().context("hiding cursor")?;
    let outcome = loop {
        if let Err(err) = app.render(&term) {
            break Err(err);
        }
        match term.read_key() {
            Ok(key) => {
                if app.handle_key(key) == Flow::Quit {
                    break Ok(());
                }
            }
            Err(err) => break Err(err.into()),
        }
    };
    term.show_cursor().ok();
    term.clear_screen().ok();
    outcome
}
