//! Geography normalization, classification, and display ordering.
//!
//! Record geography entries mix the literal "Global", free-form region names
//! ("Europe", "Asia Pacific"), and ISO-3166 alpha-2 country codes ("CN",
//! "DE"). Filtering compares normalized uppercase forms; display uses the
//! country name when the code is known and passes everything else through.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// How a geography entry is classified for labels and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeographyKind {
    Global,
    Region,
    Country,
}

/// Curated ISO-3166 alpha-2 table covering the codes seen in pathway data.
/// Unknown codes fall back to raw passthrough, same as region strings.
static COUNTRY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("AR", "Argentina"),
        ("AU", "Australia"),
        ("BD", "Bangladesh"),
        ("BR", "Brazil"),
        ("CA", "Canada"),
        ("CH", "Switzerland"),
        ("CL", "Chile"),
        ("CN", "China"),
        ("CO", "Colombia"),
        ("DE", "Germany"),
        ("DK", "Denmark"),
        ("EG", "Egypt"),
        ("ES", "Spain"),
        ("ET", "Ethiopia"),
        ("FR", "France"),
        ("GB", "United Kingdom"),
        ("ID", "Indonesia"),
        ("IN", "India"),
        ("IT", "Italy"),
        ("JP", "Japan"),
        ("KE", "Kenya"),
        ("KR", "South Korea"),
        ("MX", "Mexico"),
        ("NG", "Nigeria"),
        ("NL", "Netherlands"),
        ("NO", "Norway"),
        ("PK", "Pakistan"),
        ("PL", "Poland"),
        ("RU", "Russia"),
        ("SA", "Saudi Arabia"),
        ("SE", "Sweden"),
        ("TR", "Türkiye"),
        ("US", "United States of America"),
        ("VN", "Vietnam"),
        ("ZA", "South Africa"),
    ])
});

/// Strip zero-width/formatting characters and NBSP, then trim.
pub fn normalize_geography(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !matches!(c, '\u{200B}'..='\u{200D}' | '\u{2060}' | '\u{FEFF}' | '\u{00A0}'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Canonical uppercase form used when comparing selections against records.
pub fn normalize_for_match(raw: &str) -> String {
    normalize_geography(raw).to_uppercase()
}

/// The uppercase alpha-2 code, if `raw` is shaped like one.
pub fn to_iso2(raw: &str) -> Option<String> {
    let s = normalize_for_match(raw);
    if s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(s)
    } else {
        None
    }
}

/// Country name for a known alpha-2 code.
pub fn country_name_from_iso2(code: &str) -> Option<&'static str> {
    let cc = to_iso2(code)?;
    COUNTRY_NAMES.get(cc.as_str()).copied()
}

pub fn geography_kind(raw: &str) -> GeographyKind {
    let s = normalize_geography(raw);
    if s.eq_ignore_ascii_case("global") {
        GeographyKind::Global
    } else if country_name_from_iso2(&s).is_some() {
        GeographyKind::Country
    } else {
        GeographyKind::Region
    }
}

/// Display label: "Global" for the global bucket, the country name for known
/// codes, raw passthrough otherwise.
pub fn geography_label(raw: &str) -> String {
    let s = normalize_geography(raw);
    if s.is_empty() {
        return String::new();
    }
    match geography_kind(&s) {
        GeographyKind::Global => "Global".to_string(),
        GeographyKind::Country => country_name_from_iso2(&s)
            .map(str::to_string)
            .unwrap_or(s),
        GeographyKind::Region => s,
    }
}

/// Tooltip: countries as "Full name (ISO2)"; everything else the plain label.
pub fn geography_tooltip(raw: &str) -> String {
    let s = normalize_geography(raw);
    if s.is_empty() {
        return String::new();
    }
    match (to_iso2(&s), country_name_from_iso2(&s)) {
        (Some(iso2), Some(name)) => format!("{name} ({iso2})"),
        _ => geography_label(&s),
    }
}

/// Detail-page ordering: globals first (input order), then regions (input
/// order), then countries A→Z by code. Empty entries are dropped.
pub fn sort_geographies_for_details<S: AsRef<str>>(input: &[S]) -> Vec<String> {
    let mut globals = Vec::new();
    let mut regions = Vec::new();
    let mut countries = Vec::new();

    for raw in input {
        let s = normalize_geography(raw.as_ref());
        if s.is_empty() {
            continue;
        }
        match geography_kind(&s) {
            GeographyKind::Global => globals.push(s),
            GeographyKind::Region => regions.push(s),
            GeographyKind::Country => {
                // unwrap is safe: kind == Country implies an ISO2 shape
                let iso2 = to_iso2(&s).unwrap_or_else(|| s.clone());
                countries.push((iso2, s));
            }
        }
    }
    countries.sort_by(|a, b| a.0.cmp(&b.0));

    globals
        .into_iter()
        .chain(regions)
        .chain(countries.into_iter().map(|(_, raw)| raw))
        .collect()
}
