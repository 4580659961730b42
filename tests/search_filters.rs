//! Integration tests for the filter orchestrator.
//!
//! Covers the full filter-state surface: scalar and array facets, ANY/ALL
//! modes, Absent selections, numeric tokens and ranges, and free-text search
//! projections.

use transition_pathway_search::facet::{ABSENT_FILTER_TOKEN, FacetMode, RangeFilter};
use transition_pathway_search::model::{
    Pathway, PathwayName, Publication, PublisherName, SectorEntry,
};
use transition_pathway_search::search::{
    FilterModes, NumericFacetFilter, SearchFilters, filter_pathways, global_facet_options,
};

fn pathway(id: &str) -> Pathway {
    Pathway {
        id: id.to_string(),
        name: PathwayName::new(format!("Pathway {id}")),
        description: None,
        pathway_type: None,
        model_year_netzero: None,
        model_temp_increase: None,
        geography: Vec::new(),
        sectors: Vec::new(),
        metric: Vec::new(),
        publication: None,
    }
}

/// Three records spanning the interesting shapes: A with everything missing,
/// B fully populated, C with a present-but-empty sector list.
fn sample() -> Vec<Pathway> {
    let mut a = pathway("A");
    a.description = Some("qwerty description".to_string());

    let mut b = pathway("B");
    b.pathway_type = Some("Direct Policy".to_string());
    b.model_year_netzero = Some(2040);
    b.model_temp_increase = Some(2.0);
    b.geography = vec!["Europe".to_string()];
    b.sectors = vec![SectorEntry::named("Power")];
    b.metric = vec!["Capacity".to_string()];
    b.publication = Some(Publication {
        publisher: PublisherName {
            full: "Example Publisher".to_string(),
            short: Some("EP".to_string()),
        },
        year: Some(2020),
        published: None,
    });

    let mut c = pathway("C");
    c.pathway_type = Some("Exploratory".to_string());
    c.model_year_netzero = Some(2030);
    c.model_temp_increase = Some(1.5);
    c.geography = vec!["Asia".to_string()];
    c.sectors = vec![];
    c.metric = vec!["Generation".to_string()];

    vec![a, b, c]
}

fn ids(pathways: &[Pathway]) -> Vec<&str> {
    pathways.iter().map(|p| p.id.as_str()).collect()
}

fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn empty_filters_return_all_pathways() {
    let pathways = sample();
    let out = filter_pathways(&pathways, &SearchFilters::default());
    assert_eq!(ids(&out), ["A", "B", "C"]);
}

#[test]
fn applying_the_same_filter_twice_is_a_no_op() {
    let pathways = sample();
    let filters = SearchFilters {
        geography: tokens(&["Europe", ABSENT_FILTER_TOKEN]),
        search_term: Some("pathway".to_string()),
        ..SearchFilters::default()
    };
    let once = filter_pathways(&pathways, &filters);
    let twice = filter_pathways(&once, &filters);
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn pathway_type_or_over_multiple_selections() {
    let pathways = sample();
    let filters = SearchFilters {
        pathway_type: tokens(&["Direct Policy", "Exploratory"]),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &filters)), ["B", "C"]);

    // empty selection is no filter
    let empty = SearchFilters {
        pathway_type: Vec::new(),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &empty)), ["A", "B", "C"]);
}

#[test]
fn pathway_type_absent_token_matches_missing_value_only() {
    let pathways = sample();
    let filters = SearchFilters {
        pathway_type: tokens(&[ABSENT_FILTER_TOKEN]),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &filters)), ["A"]);
}

#[test]
fn pathway_type_all_with_two_tokens_yields_nothing() {
    let pathways = sample();
    let filters = SearchFilters {
        pathway_type: tokens(&["Direct Policy", "Exploratory"]),
        modes: FilterModes {
            pathway_type: FacetMode::All,
            ..FilterModes::default()
        },
        ..SearchFilters::default()
    };
    assert!(filter_pathways(&pathways, &filters).is_empty());
}

#[test]
fn single_valued_all_with_one_token_behaves_like_equality() {
    let pathways = sample();
    let filters = SearchFilters {
        model_temp_increase: Some(NumericFacetFilter::Tokens(tokens(&["2"]))),
        modes: FilterModes {
            model_temp_increase: FacetMode::All,
            ..FilterModes::default()
        },
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &filters)), ["B"]);

    let absent_only = SearchFilters {
        pathway_type: tokens(&[ABSENT_FILTER_TOKEN]),
        modes: FilterModes {
            pathway_type: FacetMode::All,
            ..FilterModes::default()
        },
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &absent_only)), ["A"]);
}

#[test]
fn netzero_tokens_or_over_numbers_with_absent() {
    let pathways = sample();

    let both = SearchFilters {
        model_year_netzero: Some(NumericFacetFilter::Tokens(tokens(&["2040", "2030"]))),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &both)), ["B", "C"]);

    let with_absent = SearchFilters {
        model_year_netzero: Some(NumericFacetFilter::Tokens(tokens(&[
            "2040",
            ABSENT_FILTER_TOKEN,
        ]))),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &with_absent)), ["A", "B"]);

    let absent_only = SearchFilters {
        model_year_netzero: Some(NumericFacetFilter::Tokens(tokens(&[ABSENT_FILTER_TOKEN]))),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &absent_only)), ["A"]);

    let no_match = SearchFilters {
        model_year_netzero: Some(NumericFacetFilter::Tokens(tokens(&["9999"]))),
        ..SearchFilters::default()
    };
    assert!(filter_pathways(&pathways, &no_match).is_empty());
}

#[test]
fn netzero_all_with_two_years_yields_nothing() {
    let pathways = sample();
    let filters = SearchFilters {
        model_year_netzero: Some(NumericFacetFilter::Tokens(tokens(&["2030", "2040"]))),
        modes: FilterModes {
            model_year_netzero: FacetMode::All,
            ..FilterModes::default()
        },
        ..SearchFilters::default()
    };
    assert!(filter_pathways(&pathways, &filters).is_empty());
}

#[test]
fn geography_any_vs_all() {
    let mut pathways = sample();
    let mut b2 = pathway("B2");
    b2.geography = vec!["Europe".to_string(), "Asia".to_string()];
    pathways.push(b2);

    // ANY (default): Europe OR Asia
    let any = SearchFilters {
        geography: tokens(&["Europe", "Asia"]),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &any)), ["B", "C", "B2"]);

    // ALL: must carry both
    let all = SearchFilters {
        geography: tokens(&["Europe", "Asia"]),
        modes: FilterModes {
            geography: FacetMode::All,
            ..FilterModes::default()
        },
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &all)), ["B2"]);

    // single selection matches under both modes
    for mode in [FacetMode::Any, FacetMode::All] {
        let single = SearchFilters {
            geography: tokens(&["Europe"]),
            modes: FilterModes {
                geography: mode,
                ..FilterModes::default()
            },
            ..SearchFilters::default()
        };
        let out = filter_pathways(&pathways, &single);
        assert!(ids(&out).contains(&"B"), "mode {mode:?}");
        assert!(ids(&out).contains(&"B2"), "mode {mode:?}");
    }
}

#[test]
fn geography_selection_is_normalized_before_matching() {
    let pathways = sample();
    let filters = SearchFilters {
        geography: tokens(&["  europe\u{200B}"]),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &filters)), ["B"]);
}

#[test]
fn sector_none_bucket_end_to_end() {
    // A is missing sectors entirely, B has Power, C is present-but-empty
    let pathways = sample();

    let none = SearchFilters {
        sector: tokens(&[ABSENT_FILTER_TOKEN]),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &none)), ["A", "C"]);

    let power = SearchFilters {
        sector: tokens(&["Power"]),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &power)), ["B"]);
}

#[test]
fn sector_all_mixing_absent_and_concrete_matches_nothing() {
    let pathways = sample();
    let filters = SearchFilters {
        sector: tokens(&["Power", ABSENT_FILTER_TOKEN]),
        modes: FilterModes {
            sector: FacetMode::All,
            ..FilterModes::default()
        },
        ..SearchFilters::default()
    };
    assert!(filter_pathways(&pathways, &filters).is_empty());
}

#[test]
fn temperature_range_with_absent_bucket() {
    let pathways = sample();
    let filters = SearchFilters {
        model_temp_increase: Some(NumericFacetFilter::Range(RangeFilter {
            min: Some(1.8),
            max: None,
            include_absent: true,
        })),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &filters)), ["A", "B"]);

    let bounded = SearchFilters {
        model_temp_increase: Some(NumericFacetFilter::Range(RangeFilter {
            min: Some(1.0),
            max: Some(1.6),
            include_absent: false,
        })),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &bounded)), ["C"]);
}

#[test]
fn inverted_range_is_applied_as_given() {
    let pathways = sample();
    let filters = SearchFilters {
        model_temp_increase: Some(NumericFacetFilter::Range(RangeFilter {
            min: Some(3.0),
            max: Some(1.0),
            include_absent: false,
        })),
        ..SearchFilters::default()
    };
    // no swap: the contradictory bounds match nothing
    assert!(filter_pathways(&pathways, &filters).is_empty());
}

#[test]
fn search_term_matches_name_and_description() {
    let pathways = sample();

    let by_name = SearchFilters {
        search_term: Some("Pathway B".to_string()),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &by_name)), ["B"]);

    let by_description = SearchFilters {
        search_term: Some("qwerty description".to_string()),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &by_description)), ["A"]);
}

#[test]
fn search_term_reaches_publisher_and_tooltip_projections() {
    let pathways = sample();

    let by_publisher = SearchFilters {
        search_term: Some("example publisher".to_string()),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &by_publisher)), ["B"]);

    // "transmission" appears only in the Power sector's tooltip copy
    let by_tooltip = SearchFilters {
        search_term: Some("transmission".to_string()),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &by_tooltip)), ["B"]);
}

#[test]
fn search_term_matches_geography_labels() {
    let mut pathways = sample();
    pathways[1].geography = vec!["CN".to_string()];
    // the record stores the code; searching by the display name still hits
    let filters = SearchFilters {
        search_term: Some("china".to_string()),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &filters)), ["B"]);
}

#[test]
fn blank_and_whitespace_terms_match_everything() {
    let pathways = sample();
    for term in ["", "   "] {
        let filters = SearchFilters {
            search_term: Some(term.to_string()),
            ..SearchFilters::default()
        };
        assert_eq!(filter_pathways(&pathways, &filters).len(), pathways.len());
    }
}

#[test]
fn combined_filters_and_together() {
    let pathways = sample();
    let filters = SearchFilters {
        pathway_type: tokens(&["Direct Policy"]),
        geography: tokens(&["Europe"]),
        sector: tokens(&["Power"]),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filter_pathways(&pathways, &filters)), ["B"]);

    // one non-matching facet vetoes the record
    let veto = SearchFilters {
        geography: tokens(&["Asia"]),
        ..filters
    };
    assert!(filter_pathways(&pathways, &veto).is_empty());
}

#[test]
fn global_options_cover_every_facet_with_none_buckets() {
    let pathways = sample();
    let options = global_facet_options(&pathways);

    let type_values: Vec<&str> = options
        .pathway_type
        .iter()
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(
        type_values,
        ["Direct Policy", "Exploratory", ABSENT_FILTER_TOKEN]
    );

    let year_values: Vec<&str> = options
        .model_year_netzero
        .iter()
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(year_values, ["2030", "2040", ABSENT_FILTER_TOKEN]);

    // sector options dedupe and keep None last
    let sector_labels: Vec<&str> = options.sector.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(sector_labels, ["Power", "None"]);

    // every option set ends with at most one Absent bucket
    for set in [
        &options.pathway_type,
        &options.model_year_netzero,
        &options.model_temp_increase,
        &options.geography,
        &options.sector,
        &options.metric,
    ] {
        let absent_count = set.iter().filter(|o| o.is_absent()).count();
        assert!(absent_count <= 1);
        if absent_count == 1 {
            assert!(set.last().unwrap().is_absent());
        }
    }
}

#[test]
fn filter_state_round_trips_through_json() {
    let filters = SearchFilters {
        search_term: Some("net zero".to_string()),
        sector: tokens(&["Power", ABSENT_FILTER_TOKEN]),
        model_year_netzero: Some(NumericFacetFilter::Tokens(tokens(&["2050"]))),
        model_temp_increase: Some(NumericFacetFilter::Range(RangeFilter {
            min: Some(1.2),
            max: Some(1.6),
            include_absent: false,
        })),
        modes: FilterModes {
            sector: FacetMode::All,
            ..FilterModes::default()
        },
        ..SearchFilters::default()
    };

    let json = serde_json::to_string(&filters).unwrap();
    let back: SearchFilters = serde_json::from_str(&json).unwrap();
    assert_eq!(back, filters);

    // applying the deserialized state gives identical results
    let pathways = sample();
    assert_eq!(
        ids(&filter_pathways(&pathways, &filters)),
        ids(&filter_pathways(&pathways, &back))
    );
}
