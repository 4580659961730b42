//! Builders for filter/facet option lists with an "Absent" bucket.
//!
//! Pairs with [`FacetValue`]/[`ABSENT_FILTER_TOKEN`] from [`super::absent`].
//! Option values are tokens (the serialized form of filter state), so a
//! selectable option and a selection entry are the same string.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::absent::{ABSENT_FILTER_TOKEN, FacetValue, coalesce_optional};

/// One selectable entry in a facet dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledOption {
    pub label: String,
    pub value: String,
}

impl LabeledOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// True when this is the synthetic "None" bucket.
    pub fn is_absent(&self) -> bool {
        self.value == ABSENT_FILTER_TOKEN
    }
}

/// Knobs for [`build_options_from_values`].
pub struct OptionBuildConfig<'a, T> {
    /// Always include a "None" option even if no values are absent.
    pub force_include_absent: bool,
    /// Custom labelling for concrete values (default: `Display`).
    pub make_label: Option<&'a dyn Fn(&T) -> String>,
    /// Override the "None" display label.
    pub none_label: Option<&'a str>,
    /// Sort concrete options by their label. Default: true.
    pub sort: bool,
}

impl<T> Default for OptionBuildConfig<'_, T> {
    fn default() -> Self {
        Self {
            force_include_absent: false,
            make_label: None,
            none_label: None,
            sort: true,
        }
    }
}

/// Build label/value options from raw values while injecting an Absent bucket.
///
/// - Coalesces `None` to Absent; keeps valid falsy values like `""` or `0`.
/// - Dedupes concrete values preserving first-seen order.
/// - Sorts by label (case-insensitive) unless disabled.
/// - Appends at most one `{label: "None", value: "__ABSENT__"}` entry, always
///   last, when any value was absent (or when forced).
pub fn build_options_from_values<T, I>(
    values: I,
    config: &OptionBuildConfig<'_, T>,
) -> Vec<LabeledOption>
where
    T: fmt::Display,
    I: IntoIterator<Item = Option<T>>,
{
    let mut seen = FxHashSet::default();
    let mut options = Vec::new();
    let mut saw_absent = false;

    for value in values {
        match coalesce_optional(value) {
            FacetValue::Absent => saw_absent = true,
            FacetValue::Value(v) => {
                let token = v.to_string();
                if seen.insert(token.clone()) {
                    let label = match config.make_label {
                        Some(make_label) => make_label(&v),
                        None => token.clone(),
                    };
                    options.push(LabeledOption { label, value: token });
                }
            }
        }
    }

    if config.sort {
        options.sort_by(|a, b| {
            a.label
                .to_lowercase()
                .cmp(&b.label.to_lowercase())
                .then_with(|| a.label.cmp(&b.label))
        });
    }

    if saw_absent || config.force_include_absent {
        options.push(LabeledOption {
            label: FacetValue::<String>::Absent.to_display(config.none_label),
            value: ABSENT_FILTER_TOKEN.to_string(),
        });
    }

    options
}

/// Shorthand for [`build_options_from_values`] with default config.
pub fn build_options<T, I>(values: I) -> Vec<LabeledOption>
where
    T: fmt::Display,
    I: IntoIterator<Item = Option<T>>,
{
    build_options_from_values(values, &OptionBuildConfig::default())
}

/// True when any value in the iterator is missing.
pub fn has_absent<T, I>(values: I) -> bool
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().any(|v| v.is_none())
}

/// Append one "None" bucket to an externally-built option list.
///
/// Used for facets whose concrete options come from a structured builder
/// (geography) rather than [`build_options_from_values`]. Never produces a
/// second Absent entry.
pub fn with_absent_option(mut options: Vec<LabeledOption>, saw_absent: bool) -> Vec<LabeledOption> {
    if saw_absent && !options.iter().any(LabeledOption::is_absent) {
        options.push(LabeledOption::new("None", ABSENT_FILTER_TOKEN));
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(options: &[LabeledOption]) -> Vec<&str> {
        options.iter().map(|o| o.label.as_str()).collect()
    }

    fn values(options: &[LabeledOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn dedupes_and_sorts_by_label_by_default() {
        let options = build_options([Some("b"), Some("a"), Some("b")]);
        assert_eq!(labels(&options), ["a", "b"]);
        assert_eq!(values(&options), ["a", "b"]);
    }

    #[test]
    fn preserves_numeric_values_and_zero() {
        let options = build_options([Some(2030), Some(0), Some(2020), Some(0)]);
        assert_eq!(values(&options), ["0", "2020", "2030"]);
    }

    #[test]
    fn includes_absent_bucket_when_values_are_missing() {
        let options = build_options([Some("2°C"), None, Some("1.5°C"), None]);
        let last = options.last().unwrap();
        assert_eq!(last.value, ABSENT_FILTER_TOKEN);
        assert_eq!(last.label, "None");
        // only one Absent entry despite two missing inputs
        assert_eq!(options.iter().filter(|o| o.is_absent()).count(), 1);
    }

    #[test]
    fn no_absent_bucket_without_missing_values() {
        let options = build_options([Some("2°C"), Some("1.5°C")]);
        assert!(!options.iter().any(|o| o.is_absent()));
    }

    #[test]
    fn can_force_include_absent() {
        let config = OptionBuildConfig {
            force_include_absent: true,
            ..OptionBuildConfig::default()
        };
        let options = build_options_from_values([Some("2°C"), Some("1.5°C")], &config);
        assert!(options.last().unwrap().is_absent());
    }

    #[test]
    fn accepts_custom_labeler_and_none_label() {
        let make_label = |y: &i32| format!("{y} target");
        let config = OptionBuildConfig {
            make_label: Some(&make_label),
            none_label: Some("Unspecified"),
            ..OptionBuildConfig::default()
        };
        let options = build_options_from_values([Some(2030), Some(2050), None], &config);
        let labels = labels(&options);
        assert!(labels.contains(&"2030 target"));
        assert!(labels.contains(&"2050 target"));
        assert!(labels.contains(&"Unspecified"));
        // tokens stay raw even under a custom label
        assert!(values(&options).contains(&"2030"));
    }

    #[test]
    fn can_disable_sorting() {
        let config = OptionBuildConfig {
            sort: false,
            ..OptionBuildConfig::default()
        };
        let options = build_options_from_values([Some("b"), Some("a")], &config);
        assert_eq!(labels(&options), ["b", "a"]);
    }

    #[test]
    fn absent_stays_last_even_when_sorted() {
        // "None" would sort between "Industry" and "Power"; it must not.
        let options = build_options([Some("Power"), None, Some("Industry")]);
        assert_eq!(labels(&options), ["Industry", "Power", "None"]);
    }

    #[test]
    fn empty_input_is_empty_output() {
        let options = build_options(Vec::<Option<String>>::new());
        assert!(options.is_empty());

        let config = OptionBuildConfig::<String> {
            force_include_absent: true,
            ..OptionBuildConfig::default()
        };
        let forced = build_options_from_values(Vec::<Option<String>>::new(), &config);
        assert_eq!(values(&forced), [ABSENT_FILTER_TOKEN]);
    }

    #[test]
    fn has_absent_detects_missing_only() {
        assert!(has_absent([Some(1), Some(2), None]));
        assert!(has_absent([Some("a"), None]));
        assert!(!has_absent([Some(0), Some(0)]));
        assert!(!has_absent([Some(""), Some("x")]));
    }

    #[test]
    fn with_absent_option_appends_only_when_absent_exists() {
        let base = vec![LabeledOption::new("A", "A")];
        let with_none = with_absent_option(base.clone(), true);
        assert!(with_none.iter().any(|o| o.is_absent()));

        let unchanged = with_absent_option(base, false);
        assert_eq!(unchanged.len(), 1);

        // idempotent: a second pass never duplicates the bucket
        let twice = with_absent_option(with_none.clone(), true);
        assert_eq!(twice, with_none);
    }
}
