//! Filter-then-aggregate summaries: per-attribute means and a capped preview.

use std::fmt;

use serde::{Deserialize, Serialize};

use dd_core::{Attribute, CharacterRecord, Dataset, RangeMap};

use crate::filter::FilterSpec;

/// Number of records shown in the grid preview.
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// The mean of one attribute over the filtered records.
///
/// `None` means the filtered set was empty. It is kept distinct from any
/// number so that it can never be displayed as a misleading zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Average(Option<f64>);

impl Average {
    /// The "no data" marker.
    pub const NO_DATA: Average = Average(None);

    /// The mean, or `None` if there was no data.
    pub fn value(self) -> Option<f64> {
        self.0
    }

    /// Whether the mean is undefined.
    pub fn is_no_data(self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:.2}"),
            None => f.write_str("no data"),
        }
    }
}

/// Arithmetic mean of a sequence of scores.
pub fn mean<I: IntoIterator<Item = i32>>(values: I) -> Average {
    let (sum, n) = values
        .into_iter()
        .fold((0i64, 0u64), |(sum, n), v| (sum + i64::from(v), n + 1));
    if n == 0 {
        Average::NO_DATA
    } else {
        Average(Some(sum as f64 / n as f64))
    }
}

/// The result of filtering a dataset and aggregating what remains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Size of the dataset before filtering.
    pub total: usize,
    /// Records that passed the filter, in original order.
    pub retained: Dataset,
    /// One mean per attribute, in canonical order.
    pub averages: [Average; 6],
    /// The first records of `retained`, capped at the preview limit.
    pub preview: Vec<CharacterRecord>,
}

impl Summary {
    /// The mean of one attribute.
    pub fn average(&self, attribute: Attribute) -> Average {
        self.averages[attribute.index()]
    }

    /// Attribute and mean pairs in canonical order.
    pub fn averages_by_attribute(&self) -> impl Iterator<Item = (Attribute, Average)> + '_ {
        Attribute::ALL.into_iter().zip(self.averages)
    }

    /// Whether the filter removed every record.
    pub fn is_empty(&self) -> bool {
        self.retained.is_empty()
    }
}

/// Filters a dataset and aggregates the remaining records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summarizer {
    /// Which attributes are checked against their ranges.
    pub filter: FilterSpec,
    /// Maximum number of preview rows.
    pub preview_limit: usize,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self {
            filter: FilterSpec::default(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }
}

impl Summarizer {
    /// Set the preview row limit.
    pub fn with_preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }

    /// Filter `data` by `ranges`, then compute means and the preview.
    pub fn summarize(&self, data: &Dataset, ranges: &RangeMap) -> Summary {
        let retained = self.filter.apply(data, ranges);
        let averages = Attribute::ALL.map(|attr| mean(retained.column(attr)));
        let preview = retained
            .iter()
            .take(self.preview_limit)
            .cloned()
            .collect();

        if retained.is_empty() && !data.is_empty() {
            tracing::warn!(total = data.len(), "filter removed every record");
        } else {
            tracing::debug!(total = data.len(), retained = retained.len(), "summarized dataset");
        }

        Summary {
            total: data.len(),
            retained,
            averages,
            preview,
        }
    }
}

/// Summarize with the default filter and a ten-row preview.
pub fn summarize(data: &Dataset, ranges: &RangeMap) -> Summary {
    Summarizer::default().summarize(data, ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dd_core::AttributeRange;

    fn numbered(n: i32) -> Dataset {
        (0..n)
            .map(|i| CharacterRecord::new(format!("C{i}"), [8 + i % 11; 6]))
            .collect()
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean([10, 12, 14]).value(), Some(12.0));
        assert_eq!(mean([8, 9]).value(), Some(8.5));
        assert!(mean(std::iter::empty()).is_no_data());
    }

    #[test]
    fn average_display() {
        assert_eq!(mean([10, 11, 11]).to_string(), "10.67");
        assert_eq!(Average::NO_DATA.to_string(), "no data");
    }

    #[test]
    fn summary_means_and_counts() {
        let data = Dataset::new(vec![
            CharacterRecord::new("Wizard", [8, 14, 12, 18, 13, 10]),
            CharacterRecord::new("Fighter", [17, 12, 16, 9, 11, 10]),
        ]);
        let summary = summarize(&data, &RangeMap::with_defaults());
        assert_eq!(summary.total, 2);
        assert_eq!(summary.retained.len(), 2);
        assert_eq!(summary.average(Attribute::Strength).value(), Some(12.5));
        assert_eq!(summary.average(Attribute::Intelligence).value(), Some(13.5));
        assert_eq!(summary.average(Attribute::Charisma).value(), Some(10.0));
        assert_eq!(summary.preview.len(), 2);
    }

    #[test]
    fn empty_filter_result_yields_no_data() {
        let data = numbered(30);
        let ranges =
            RangeMap::with_defaults().with(Attribute::Strength, AttributeRange::new(19, 20).unwrap());
        let summary = summarize(&data, &ranges);
        assert!(summary.is_empty());
        assert_eq!(summary.total, 30);
        assert!(summary.averages.iter().all(|a| a.is_no_data()));
        assert!(summary.preview.is_empty());
    }

    #[test]
    fn preview_capped_at_ten_in_order() {
        let summary = summarize(&numbered(25), &RangeMap::with_defaults());
        assert_eq!(summary.retained.len(), 25);
        let names: Vec<_> = summary
            .preview
            .iter()
            .map(|r| r.character_class.as_str())
            .collect();
        assert_eq!(
            names,
            ["C0", "C1", "C2", "C3", "C4", "C5", "C6", "C7", "C8", "C9"]
        );
    }

    #[test]
    fn preview_returns_all_when_fewer() {
        let summary = summarize(&numbered(4), &RangeMap::with_defaults());
        assert_eq!(summary.preview.len(), 4);
    }

    #[test]
    fn custom_preview_limit() {
        let summary = Summarizer::default()
            .with_preview_limit(3)
            .summarize(&numbered(8), &RangeMap::with_defaults());
        assert_eq!(summary.preview.len(), 3);
    }

    #[test]
    fn averages_by_attribute_order() {
        let summary = summarize(&numbered(3), &RangeMap::with_defaults());
        let attrs: Vec<_> = summary.averages_by_attribute().map(|(a, _)| a).collect();
        assert_eq!(attrs, Attribute::ALL);
    }

    #[test]
    fn average_serializes_as_number_or_null() {
        assert_eq!(serde_json::to_string(&mean([9, 11])).unwrap(), "10.0");
        assert_eq!(serde_json::to_string(&Average::NO_DATA).unwrap(), "null");
    }
}
