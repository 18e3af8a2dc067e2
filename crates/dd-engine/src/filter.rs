//! Order-preserving range filter over a dataset.

use dd_core::{Attribute, CharacterRecord, Dataset, RangeMap};

/// Which attributes the filter checks against their ranges.
///
/// Attributes outside the spec are never checked, even when `ranges` holds a
/// bound for them; attributes in the spec without a range are skipped too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    attributes: Vec<Attribute>,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            attributes: Attribute::FILTERABLE.to_vec(),
        }
    }
}

impl FilterSpec {
    /// A filter over an explicit set of attributes.
    pub fn new(attributes: impl IntoIterator<Item = Attribute>) -> Self {
        let mut attributes: Vec<_> = attributes.into_iter().collect();
        attributes.sort();
        attributes.dedup();
        Self { attributes }
    }

    /// A filter that checks all six attributes.
    pub fn all() -> Self {
        Self::new(Attribute::ALL)
    }

    /// The checked attributes in canonical order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Whether `record` satisfies every checked attribute that has a range.
    pub fn matches(&self, record: &CharacterRecord, ranges: &RangeMap) -> bool {
        self.attributes.iter().all(|&attr| {
            ranges
                .get(attr)
                .is_none_or(|range| range.contains(record.score(attr)))
        })
    }

    /// Keep the matching records, preserving their original order.
    pub fn apply(&self, data: &Dataset, ranges: &RangeMap) -> Dataset {
        data.iter()
            .filter(|r| self.matches(r, ranges))
            .cloned()
            .collect()
    }
}

/// Keep the records whose Strength, Dexterity, and Constitution lie within
/// their ranges. Order is preserved and records are not modified.
pub fn retain_in_ranges(data: &Dataset, ranges: &RangeMap) -> Dataset {
    FilterSpec::default().apply(data, ranges)
}
