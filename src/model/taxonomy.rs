//! Static tooltip copy for pathway types, sectors, and metrics.
//!
//! The tooltip text doubles as a free-text search projection: a pathway whose
//! sector tooltip mentions "hard-to-abate" is findable by that phrase even
//! though the record itself never contains it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fallback for values without curated copy.
pub const UNKNOWN_TOOLTIP: &str = "No tooltip available.";

static PATHWAY_TYPE_TOOLTIPS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "Direct Policy",
            "Outcomes based on legislated policy targets or commitments.",
        ),
        (
            "Exploratory",
            "Examines a range of plausible futures without fixed goals.",
        ),
        (
            "Normative",
            "Starts from a desired end state and works backward to actions.",
        ),
        (
            "Predictive",
            "Projects likely futures based on current trends and assumptions.",
        ),
    ])
});

static SECTOR_TOOLTIPS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Agriculture", "Agricultural activities."),
        ("Automotive", "Automotive manufacturing."),
        ("Aviation", "Logistics of passengers and cargo by airplane."),
        (
            "Buildings",
            "Residential and commercial buildings. Focus on energy use.",
        ),
        ("Cement", "Cement manufacturing."),
        (
            "Chemicals",
            "Production of primary chemicals and/or chemicals for end use, such as plastics, fertilizer, pharmaceuticals.",
        ),
        ("Coal Mining", "Extraction of coal."),
        ("Gas (Upstream)", "Extraction of natural gas."),
        (
            "Industry",
            "Focused on manufacturing activities, especially heavy industries and hard-to-abate industries.",
        ),
        (
            "Land Use",
            "Agriculture, Forestry, Fishery, other forms of land use.",
        ),
        ("Oil (Upstream)", "Extraction of oil."),
        (
            "Other",
            "Other climate relevant sectors that are not covered by any of the available categories.",
        ),
        (
            "Power",
            "Includes power generation based on any energy source. Can also include power storage, transmission, and distribution.",
        ),
        ("Rail", "Logistics of passengers and cargo by train."),
        (
            "Road transport",
            "Logistics of passengers and cargo on the road, by different means, i.e. types of vehicles.",
        ),
        ("Shipping", "Logistics of passengers and cargo by ship."),
        (
            "Steel",
            "Steel making, both primary and secondary. Can include upstream and downstream activities.",
        ),
        ("Transport", "Logistics of passengers and cargo."),
    ])
});

static METRIC_TOOLTIPS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "Emissions Intensity",
            "Amount of greenhouse gases emitted per unit of physical output. Indicates how low-carbon the output production is.",
        ),
        (
            "Capacity",
            "The maximum output a power plant or energy source can produce under ideal conditions, measured in GW.",
        ),
        (
            "Generation",
            "The actual amount of electricity produced over a specific period, typically measured in TWh.",
        ),
        (
            "Technology Mix",
            "The breakdown of energy sources used for electricity generation (e.g., coal, solar, wind, nuclear).",
        ),
        (
            "Absolute Emissions",
            "Total greenhouse gas emissions produced, regardless of output. Measured in metric tons of CO₂ equivalent.",
        ),
    ])
});

pub fn pathway_type_tooltip(pathway_type: &str) -> &'static str {
    PATHWAY_TYPE_TOOLTIPS
        .get(pathway_type)
        .copied()
        .unwrap_or(UNKNOWN_TOOLTIP)
}

pub fn sector_tooltip(sector: &str) -> &'static str {
    SECTOR_TOOLTIPS.get(sector).copied().unwrap_or(UNKNOWN_TOOLTIP)
}

pub fn metric_tooltip(metric: &str) -> &'static str {
    METRIC_TOOLTIPS.get(metric).copied().unwrap_or(UNKNOWN_TOOLTIP)
}
