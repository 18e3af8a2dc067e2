//! The dashboard recomputation: slider ranges in, display artifacts out.
//!
//! A host UI calls [`Dashboard::recompute`] whenever a slider moves. Each call
//! generates a fresh dataset with the current ranges, filters it by the same
//! ranges, and summarizes what is left. Nothing is cached between calls.

use rand::Rng;
use serde::{Deserialize, Serialize};

use dd_core::{Attribute, AttributeRange, RangeMap};

use crate::error::EngineResult;
use crate::generator::GeneratorConfig;
use crate::present::Presentation;
use crate::summary::{Summarizer, Summary};

/// Bounds of every slider on the dashboard.
pub const SLIDER_DOMAIN: AttributeRange = AttributeRange::DEFAULT;

/// The three slider-controlled ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderRanges {
    /// Strength slider.
    pub strength: AttributeRange,
    /// Dexterity slider.
    pub dexterity: AttributeRange,
    /// Constitution slider.
    pub constitution: AttributeRange,
}

impl Default for SliderRanges {
    fn default() -> Self {
        Self {
            strength: AttributeRange::DEFAULT,
            dexterity: AttributeRange::DEFAULT,
            constitution: AttributeRange::DEFAULT,
        }
    }
}

impl SliderRanges {
    /// The range for a slider-controlled attribute, `None` for the others.
    pub fn get(&self, attribute: Attribute) -> Option<AttributeRange> {
        match attribute {
            Attribute::Strength => Some(self.strength),
            Attribute::Dexterity => Some(self.dexterity),
            Attribute::Constitution => Some(self.constitution),
            _ => None,
        }
    }

    /// Overlay the slider ranges on `base`.
    pub fn apply_to(&self, base: &RangeMap) -> RangeMap {
        base.clone()
            .with(Attribute::Strength, self.strength)
            .with(Attribute::Dexterity, self.dexterity)
            .with(Attribute::Constitution, self.constitution)
    }
}

/// State of one two-handled range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSlider {
    /// The attribute this slider controls.
    pub attribute: Attribute,
    range: AttributeRange,
    domain: AttributeRange,
}

impl RangeSlider {
    /// A slider spanning its whole domain.
    pub fn new(attribute: Attribute, domain: AttributeRange) -> Self {
        Self {
            attribute,
            range: domain,
            domain,
        }
    }

    /// Current selection.
    pub fn range(&self) -> AttributeRange {
        self.range
    }

    /// Slider bounds.
    pub fn domain(&self) -> AttributeRange {
        self.domain
    }

    /// Set the selection, clamped into the domain.
    pub fn set(&mut self, range: AttributeRange) -> bool {
        let min = self.domain.clamp(range.min());
        let max = self.domain.clamp(range.max());
        self.update(min, max)
    }

    /// Reset the selection to the full domain.
    pub fn reset(&mut self) -> bool {
        self.update(self.domain.min(), self.domain.max())
    }

    /// Move the lower handle up by one, pushing the upper handle if needed.
    pub fn raise_min(&mut self) -> bool {
        let min = self.domain.clamp(self.range.min().saturating_add(1));
        self.update(min, self.range.max().max(min))
    }

    /// Move the lower handle down by one.
    pub fn lower_min(&mut self) -> bool {
        let min = self.domain.clamp(self.range.min().saturating_sub(1));
        self.update(min, self.range.max())
    }

    /// Move the upper handle up by one.
    pub fn raise_max(&mut self) -> bool {
        let max = self.domain.clamp(self.range.max().saturating_add(1));
        self.update(self.range.min(), max)
    }

    /// Move the upper handle down by one, pushing the lower handle if needed.
    pub fn lower_max(&mut self) -> bool {
        let max = self.domain.clamp(self.range.max().saturating_sub(1));
        self.update(self.range.min().min(max), max)
    }

    /// Apply new bounds; returns true if the selection changed.
    fn update(&mut self, min: i32, max: i32) -> bool {
        let next = AttributeRange::new(min, max).unwrap_or(self.range);
        let changed = next != self.range;
        self.range = next;
        changed
    }
}

/// One recomputation's output.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Ranges used for generation and filtering.
    pub ranges: RangeMap,
    /// Filtered data and means.
    pub summary: Summary,
    /// Formatted averages, chart, and grid.
    pub presentation: Presentation,
}

/// Generates, filters, and summarizes character data for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dashboard {
    /// Classes, base ranges, and dataset size.
    pub generator: GeneratorConfig,
    /// Filter spec and preview size.
    pub summarizer: Summarizer,
}

impl Dashboard {
    /// Create a dashboard from its parts.
    pub fn new(generator: GeneratorConfig, summarizer: Summarizer) -> Self {
        Self {
            generator,
            summarizer,
        }
    }

    /// Run one full recomputation with the current slider ranges.
    pub fn recompute<R: Rng + ?Sized>(
        &self,
        sliders: &SliderRanges,
        rng: &mut R,
    ) -> EngineResult<DashboardView> {
        let ranges = sliders.apply_to(&self.generator.ranges);
        let data = crate::generator::generate(
            &self.generator.categories,
            &ranges,
            self.generator.count,
            rng,
        )?;
        let summary = self.summarizer.summarize(&data, &ranges);
        let presentation = Presentation::from_summary(&summary);

        tracing::debug!(
            strength = %sliders.strength,
            dexterity = %sliders.dexterity,
            constitution = %sliders.constitution,
            generated = data.len(),
            retained = summary.retained.len(),
            "recomputed dashboard"
        );

        Ok(DashboardView {
            ranges,
            summary,
            presentation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn range(min: i32, max: i32) -> AttributeRange {
        AttributeRange::new(min, max).unwrap()
    }

    #[test]
    fn slider_starts_at_full_domain() {
        let s = RangeSlider::new(Attribute::Strength, SLIDER_DOMAIN);
        assert_eq!(s.range(), range(8, 18));
    }

    #[test]
    fn slider_handles_clamp_to_domain() {
        let mut s = RangeSlider::new(Attribute::Strength, SLIDER_DOMAIN);
        assert!(!s.lower_min());
        assert!(!s.raise_max());
        assert!(s.raise_min());
        assert_eq!(s.range(), range(9, 18));
        assert!(s.lower_max());
        assert_eq!(s.range(), range(9, 17));
    }

    #[test]
    fn slider_handles_push_each_other() {
        let mut s = RangeSlider::new(Attribute::Dexterity, SLIDER_DOMAIN);
        s.set(range(12, 12));
        assert!(s.raise_min());
        assert_eq!(s.range(), range(13, 13));
        assert!(s.lower_max());
        assert_eq!(s.range(), range(12, 12));
    }

    #[test]
    fn slider_set_clamps_and_resets() {
        let mut s = RangeSlider::new(Attribute::Constitution, SLIDER_DOMAIN);
        assert!(!s.set(range(2, 30)));
        assert_eq!(s.range(), range(8, 18));
        assert!(s.set(range(10, 11)));
        assert!(s.reset());
        assert_eq!(s.range(), range(8, 18));
    }

    #[test]
    fn slider_ranges_overlay() {
        let sliders = SliderRanges {
            strength: range(10, 12),
            ..SliderRanges::default()
        };
        let map = sliders.apply_to(&RangeMap::with_defaults());
        assert_eq!(map.get(Attribute::Strength), Some(range(10, 12)));
        assert_eq!(map.get(Attribute::Wisdom), Some(AttributeRange::DEFAULT));
        assert_eq!(sliders.get(Attribute::Charisma), None);
    }

    #[test]
    fn recompute_produces_full_view() {
        let dashboard = Dashboard::default();
        let mut rng = StdRng::seed_from_u64(42);
        let view = dashboard
            .recompute(&SliderRanges::default(), &mut rng)
            .unwrap();
        assert_eq!(view.summary.total, 100);
        assert_eq!(view.summary.retained.len(), 100);
        assert_eq!(view.presentation.averages.len(), 6);
        assert_eq!(view.presentation.chart.bars.len(), 6);
        assert_eq!(view.presentation.table.len(), 10);
    }

    #[test]
    fn recompute_shape_is_stable() {
        let dashboard = Dashboard::default();
        let sliders = SliderRanges {
            strength: range(12, 15),
            dexterity: range(9, 18),
            constitution: range(8, 10),
        };
        let mut rng = StdRng::seed_from_u64(11);
        let a = dashboard.recompute(&sliders, &mut rng).unwrap();
        let b = dashboard.recompute(&sliders, &mut rng).unwrap();
        assert_eq!(a.summary.total, b.summary.total);
        assert_eq!(a.ranges, b.ranges);
        let keys_a: Vec<_> = a.summary.averages_by_attribute().map(|(k, _)| k).collect();
        let keys_b: Vec<_> = b.summary.averages_by_attribute().map(|(k, _)| k).collect();
        assert_eq!(keys_a, keys_b);
    }

    #[test]
    fn recompute_fails_on_empty_categories() {
        let mut dashboard = Dashboard::default();
        dashboard.generator.categories.clear();
        let mut rng = StdRng::seed_from_u64(1);
        let err = dashboard
            .recompute(&SliderRanges::default(), &mut rng)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }
}
