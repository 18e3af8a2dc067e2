//! Dashboard configuration, loadable from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use dd_core::{Attribute, AttributeRange, Dataset, RangeMap};

use crate::dashboard::{Dashboard, SLIDER_DOMAIN, SliderRanges};
use crate::error::{EngineError, EngineResult};
use crate::generator::{DEFAULT_CLASSES, GeneratorConfig};
use crate::summary::{DEFAULT_PREVIEW_LIMIT, Summarizer};

/// Settings for a dashboard session.
///
/// Every field is optional in the JSON form; missing fields take the
/// defaults below. Unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Class labels to sample from.
    pub categories: Vec<String>,
    /// Records generated per recomputation.
    pub count: usize,
    /// Rows shown in the grid.
    pub preview_limit: usize,
    /// RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Bounds of the three sliders.
    pub slider_domain: AttributeRange,
    /// Range overrides for the attributes, applied over `[8, 18]`.
    /// Slider-controlled attributes only use these as their initial position.
    pub ranges: RangeMap,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CLASSES.iter().map(|c| c.to_string()).collect(),
            count: Dataset::DEFAULT_SIZE,
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            seed: None,
            slider_domain: SLIDER_DOMAIN,
            ranges: RangeMap::new(),
        }
    }
}

impl DashboardConfig {
    /// Load and validate a config file.
    pub fn from_json_file(path: &Path) -> EngineResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(text: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values that serde cannot.
    pub fn validate(&self) -> EngineResult<()> {
        if self.categories.is_empty() {
            return Err(EngineError::NoCategories);
        }
        if let Some(blank) = self.categories.iter().find(|c| c.trim().is_empty()) {
            return Err(EngineError::Config(format!(
                "character class names must not be blank (got {blank:?})"
            )));
        }
        if self.preview_limit == 0 {
            return Err(EngineError::Config(
                "preview_limit must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of records per recomputation.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Replace the class labels.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the range override for one attribute.
    pub fn with_range(mut self, attribute: Attribute, range: AttributeRange) -> Self {
        self.ranges.set(attribute, range);
        self
    }

    /// The complete range map: defaults with overrides applied.
    pub fn base_ranges(&self) -> RangeMap {
        self.ranges
            .iter()
            .fold(RangeMap::with_defaults(), |map, (attr, range)| {
                map.with(attr, range)
            })
    }

    /// Initial slider positions, clamped into the slider domain.
    pub fn initial_sliders(&self) -> SliderRanges {
        let start = |attr: Attribute| {
            let r = self.ranges.get(attr).unwrap_or(self.slider_domain);
            let min = self.slider_domain.clamp(r.min());
            let max = self.slider_domain.clamp(r.max());
            AttributeRange::new(min, max).unwrap_or(self.slider_domain)
        };
        SliderRanges {
            strength: start(Attribute::Strength),
            dexterity: start(Attribute::Dexterity),
            constitution: start(Attribute::Constitution),
        }
    }

    /// Build the dashboard these settings describe.
    pub fn dashboard(&self) -> Dashboard {
        let generator = GeneratorConfig::default()
            .with_categories(self.categories.iter().cloned())
            .with_ranges(self.base_ranges())
            .with_count(self.count);
        let summarizer = Summarizer::default().with_preview_limit(self.preview_limit);
        Dashboard::new(generator, summarizer)
    }
}
