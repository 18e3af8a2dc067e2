//! Synthetic character generation.
//!
//! Every record samples its class uniformly from the category list and each
//! ability score uniformly from that attribute's inclusive range. The random
//! source is always passed in, so a seeded [`StdRng`](rand::rngs::StdRng)
//! reproduces the same dataset.

use rand::Rng;
use rand::seq::IndexedRandom;

use dd_core::{Attribute, AttributeRange, CharacterRecord, Dataset, RangeMap};

use crate::error::{EngineError, EngineResult};

/// The five canonical character classes.
pub const DEFAULT_CLASSES: [&str; 5] = ["Wizard", "Fighter", "Rogue", "Cleric", "Barbarian"];

/// Generate `count` character records.
///
/// Fails if `categories` is empty or if any of the six attributes has no
/// range in `ranges`. A `count` of zero yields an empty dataset.
pub fn generate<S, R>(
    categories: &[S],
    ranges: &RangeMap,
    count: usize,
    rng: &mut R,
) -> EngineResult<Dataset>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if categories.is_empty() {
        return Err(EngineError::NoCategories);
    }
    let bounds = required_ranges(ranges)?;

    let records = (0..count)
        .map(|_| {
            let class = categories
                .choose(rng)
                .map(|c| c.as_ref().to_string())
                .unwrap_or_default();
            let scores = bounds.map(|r| rng.random_range(r.min()..=r.max()));
            CharacterRecord::new(class, scores)
        })
        .collect();

    Ok(Dataset::new(records))
}

/// Look up all six ranges in canonical order.
fn required_ranges(ranges: &RangeMap) -> EngineResult<[AttributeRange; 6]> {
    let mut out = [AttributeRange::DEFAULT; 6];
    for (slot, attr) in out.iter_mut().zip(Attribute::ALL) {
        *slot = ranges.require(attr)?;
    }
    Ok(out)
}

/// Generator settings: which classes, which ranges, and how many records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Class labels to sample from.
    pub categories: Vec<String>,
    /// Inclusive range for each attribute.
    pub ranges: RangeMap,
    /// Number of records per dataset.
    pub count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CLASSES.iter().map(|c| c.to_string()).collect(),
            ranges: RangeMap::with_defaults(),
            count: Dataset::DEFAULT_SIZE,
        }
    }
}

impl GeneratorConfig {
    /// Replace the class labels.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the range for one attribute.
    pub fn with_range(mut self, attribute: Attribute, range: AttributeRange) -> Self {
        self.ranges.set(attribute, range);
        self
    }

    /// Replace all ranges.
    pub fn with_ranges(mut self, ranges: RangeMap) -> Self {
        self.ranges = ranges;
        self
    }

    /// Set the number of records.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Generate a dataset with these settings.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> EngineResult<Dataset> {
        generate(&self.categories, &self.ranges, self.count, rng)
    }
}
