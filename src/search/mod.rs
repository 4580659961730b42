//! Filter state and the orchestrator that applies it to a record collection.
//!
//! `SearchFilters` is the JSON-serializable shape the UI mutates on every
//! gesture; [`filter_pathways`] recomputes the visible subset synchronously
//! from `(records, filters)` with no shared state, so results are
//! deterministic and safe to recompute per keystroke.

use serde::{Deserialize, Serialize};
use tracing::debug;

use itertools::Itertools;

use crate::facet::{
    FacetMode, LabeledOption, RangeFilter, build_options, is_absent_token, matches_numeric_range,
    matches_optional_facet, matches_optional_facet_all, matches_optional_facet_any,
    matches_single_valued_all, with_absent_option,
};
use crate::geo;
use crate::model::taxonomy;
use crate::model::{Pathway, SectorEntry};

/// A numeric facet accepts either discrete token selections (dropdown) or an
/// open-ended range (slider); the wire shape disambiguates by JSON type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericFacetFilter {
    Tokens(Vec<String>),
    Range(RangeFilter),
}

impl NumericFacetFilter {
    /// True when the selection has no filtering effect.
    pub fn is_noop(&self) -> bool {
        match self {
            NumericFacetFilter::Tokens(tokens) => tokens.is_empty(),
            NumericFacetFilter::Range(range) => range.is_empty(),
        }
    }

    pub fn range(&self) -> Option<&RangeFilter> {
        match self {
            NumericFacetFilter::Range(range) => Some(range),
            NumericFacetFilter::Tokens(_) => None,
        }
    }
}

/// Per-facet ANY/ALL combination modes. Missing keys default to ANY.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterModes {
    pub pathway_type: FacetMode,
    pub model_year_netzero: FacetMode,
    pub model_temp_increase: FacetMode,
    pub geography: FacetMode,
    pub sector: FacetMode,
    pub metric: FacetMode,
}

/// The full filter state: one optional selection per facet plus free text.
///
/// An empty token list, a no-op numeric selection, and a missing key are all
/// "no filter applied" for that facet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub search_term: Option<String>,
    pub pathway_type: Vec<String>,
    pub geography: Vec<String>,
    pub sector: Vec<String>,
    pub metric: Vec<String>,
    pub model_year_netzero: Option<NumericFacetFilter>,
    pub model_temp_increase: Option<NumericFacetFilter>,
    pub modes: FilterModes,
}

impl SearchFilters {
    /// True when no facet and no search term has any effect.
    pub fn is_empty(&self) -> bool {
        self.search_term
            .as_deref()
            .is_none_or(|t| t.trim().is_empty())
            && self.pathway_type.is_empty()
            && self.geography.is_empty()
            && self.sector.is_empty()
            && self.metric.is_empty()
            && self
                .model_year_netzero
                .as_ref()
                .is_none_or(NumericFacetFilter::is_noop)
            && self
                .model_temp_increase
                .as_ref()
                .is_none_or(NumericFacetFilter::is_noop)
    }

    /// Reset every facet and the search term; modes are kept.
    pub fn clear(&mut self) {
        let modes = self.modes;
        *self = SearchFilters {
            modes,
            ..SearchFilters::default()
        };
    }
}

fn array_facet_matches<T, F>(
    selected: &[String],
    values: Option<&[T]>,
    mode: FacetMode,
    to_token: F,
) -> bool
where
    F: Fn(&T) -> String,
{
    if mode.is_all() {
        matches_optional_facet_all(selected, values, to_token)
    } else {
        matches_optional_facet_any(selected, values, to_token)
    }
}

fn single_valued_facet_matches<T: std::fmt::Display>(
    selected: &[String],
    value: Option<&T>,
    mode: FacetMode,
) -> bool {
    if mode.is_all() {
        matches_single_valued_all(selected, value)
    } else {
        matches_optional_facet(selected, value)
    }
}

fn numeric_facet_matches(
    selection: Option<&NumericFacetFilter>,
    value: Option<f64>,
    mode: FacetMode,
) -> bool {
    match selection {
        None => true,
        Some(NumericFacetFilter::Tokens(tokens)) => {
            // canonical Display form of the record value is the token space
            let token_value = value.map(|v| v.to_string());
            single_valued_facet_matches(tokens, token_value.as_ref(), mode)
        }
        Some(NumericFacetFilter::Range(range)) => {
            if range.is_empty() {
                return true;
            }
            matches_numeric_range(value, range)
        }
    }
}

/// Decide whether a single record passes the full filter state.
pub fn matches_filters(pathway: &Pathway, filters: &SearchFilters) -> bool {
    if !single_valued_facet_matches(
        &filters.pathway_type,
        pathway.pathway_type.as_ref(),
        filters.modes.pathway_type,
    ) {
        return false;
    }

    if !numeric_facet_matches(
        filters.model_year_netzero.as_ref(),
        pathway.netzero_year(),
        filters.modes.model_year_netzero,
    ) {
        return false;
    }
    if !numeric_facet_matches(
        filters.model_temp_increase.as_ref(),
        pathway.temp_increase(),
        filters.modes.model_temp_increase,
    ) {
        return false;
    }

    // Geography compares normalized uppercase forms on both sides; the
    // Absent token must be preserved verbatim, never normalized.
    {
        let selected: Vec<String> = filters
            .geography
            .iter()
            .map(|t| {
                if is_absent_token(t) {
                    t.clone()
                } else {
                    geo::normalize_for_match(t)
                }
            })
            .collect();
        if !array_facet_matches(
            &selected,
            Some(pathway.geography.as_slice()),
            filters.modes.geography,
            |g: &String| geo::normalize_for_match(g),
        ) {
            return false;
        }
    }

    if !array_facet_matches(
        &filters.sector,
        Some(pathway.sectors.as_slice()),
        filters.modes.sector,
        |s: &SectorEntry| s.name.clone(),
    ) {
        return false;
    }

    if !array_facet_matches(
        &filters.metric,
        Some(pathway.metric.as_slice()),
        filters.modes.metric,
        |m: &String| m.clone(),
    ) {
        return false;
    }

    match filters.search_term.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => {
            let needle = term.to_lowercase();
            search_projections(pathway)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        }
        _ => true,
    }
}

/// Apply the full filter state, preserving record order (stable filter).
pub fn filter_pathways(pathways: &[Pathway], filters: &SearchFilters) -> Vec<Pathway> {
    let filtered: Vec<Pathway> = pathways
        .iter()
        .filter(|p| matches_filters(p, filters))
        .cloned()
        .collect();
    debug!(
        total = pathways.len(),
        matched = filtered.len(),
        "applied filters"
    );
    filtered
}

/// The fixed set of searchable projections for one record: every field the
/// free-text check scans, including flattened arrays, geography labels, and
/// sector tooltip copy.
pub fn search_projections(pathway: &Pathway) -> Vec<String> {
    let mut fields: Vec<String> = vec![pathway.name.full.clone()];
    fields.extend(pathway.name.short.clone());
    fields.extend(pathway.description.clone());
    fields.extend(pathway.pathway_type.clone());
    fields.extend(pathway.model_year_netzero.map(|y| y.to_string()));
    fields.extend(pathway.model_temp_increase.map(|t| t.to_string()));
    for g in &pathway.geography {
        fields.push(g.clone());
        fields.push(geo::geography_label(g));
    }
    for sector in &pathway.sectors {
        fields.push(sector.name.clone());
        fields.push(taxonomy::sector_tooltip(&sector.name).to_string());
    }
    fields.extend(pathway.metric.iter().cloned());
    if let Some(publication) = &pathway.publication {
        fields.push(publication.publisher.full.clone());
        fields.extend(publication.publisher.short.clone());
        fields.extend(publication.year.map(|y| y.to_string()));
    }
    fields
}

/// The six per-facet option lists the filter UI renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetOptions {
    pub pathway_type: Vec<LabeledOption>,
    pub model_year_netzero: Vec<LabeledOption>,
    pub model_temp_increase: Vec<LabeledOption>,
    pub geography: Vec<LabeledOption>,
    pub sector: Vec<LabeledOption>,
    pub metric: Vec<LabeledOption>,
}

/// Structured geography options: values stay raw, labels resolve country
/// names, ordering is the detail-page one (Global, regions, countries A→Z).
pub fn make_geography_options(pathways: &[Pathway]) -> Vec<LabeledOption> {
    let uniques: Vec<String> = pathways
        .iter()
        .flat_map(|p| p.geography.iter())
        .map(|g| geo::normalize_geography(g))
        .filter(|v| !v.is_empty())
        .unique()
        .collect();
    geo::sort_geographies_for_details(&uniques)
        .into_iter()
        .map(|v| {
            let label = geo::geography_label(&v);
            LabeledOption::new(label, v)
        })
        .collect()
}

/// Build the dropdown option lists from pathway data in one place, with
/// consistent Absent/missing handling per facet.
pub fn global_facet_options(pathways: &[Pathway]) -> FacetOptions {
    let pathway_type = build_options(pathways.iter().map(|p| p.pathway_type.as_deref()));
    let model_year_netzero = build_options(pathways.iter().map(|p| p.model_year_netzero));
    let model_temp_increase = build_options(pathways.iter().map(|p| p.model_temp_increase));

    let saw_absent_geography = pathways.iter().any(|p| p.geography.is_empty());
    let geography = with_absent_option(make_geography_options(pathways), saw_absent_geography);

    let sector_names = pathways
        .iter()
        .flat_map(|p| p.sectors.iter().map(|s| Some(s.name.as_str())));
    let saw_absent_sectors = pathways.iter().any(|p| p.sectors.is_empty());
    let sector = with_absent_option(build_options(sector_names), saw_absent_sectors);

    let metrics = pathways
        .iter()
        .flat_map(|p| p.metric.iter().map(|m| Some(m.as_str())));
    let saw_absent_metric = pathways.iter().any(|p| p.metric.is_empty());
    let metric = with_absent_option(build_options(metrics), saw_absent_metric);

    FacetOptions {
        pathway_type,
        model_year_netzero,
        model_temp_increase,
        geography,
        sector,
        metric,
    }
}
