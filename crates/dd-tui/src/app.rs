//! Dashboard state: slider positions, the RNG, and the latest recomputation.

use rand::SeedableRng;
use rand::rngs::StdRng;

use dd_core::Attribute;
use dd_engine::{Dashboard, DashboardConfig, DashboardView, RangeSlider, SliderRanges};

/// A single step applied to the focused slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderMove {
    /// Move the lower handle down.
    LowerMin,
    /// Move the lower handle up.
    RaiseMin,
    /// Move the upper handle down.
    LowerMax,
    /// Move the upper handle up.
    RaiseMax,
}

/// Main application state for the dashboard.
pub struct DashboardApp {
    /// Generator and summarizer settings.
    pub dashboard: Dashboard,
    /// Strength, Dexterity, and Constitution sliders, in that order.
    pub sliders: [RangeSlider; 3],
    /// Index of the focused slider.
    pub focus: usize,
    /// Output of the most recent recomputation.
    pub view: Option<DashboardView>,
    /// Error from the most recent recomputation, if it failed.
    pub error: Option<String>,
    /// Number of recomputations so far.
    pub recomputations: u64,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Initial slider positions, restored by [`DashboardApp::reset`].
    initial: SliderRanges,
    rng: StdRng,
}

impl DashboardApp {
    /// Create the app and run the first recomputation.
    pub fn new(config: &DashboardConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let initial = config.initial_sliders();
        let sliders = Attribute::FILTERABLE.map(|attr| {
            let mut slider = RangeSlider::new(attr, config.slider_domain);
            if let Some(range) = initial.get(attr) {
                slider.set(range);
            }
            slider
        });

        let mut app = Self {
            dashboard: config.dashboard(),
            sliders,
            focus: 0,
            view: None,
            error: None,
            recomputations: 0,
            show_help: false,
            should_quit: false,
            initial,
            rng,
        };
        app.recompute();
        app
    }

    /// Current slider ranges.
    pub fn slider_ranges(&self) -> SliderRanges {
        let [strength, dexterity, constitution] = self.sliders.map(|s| s.range());
        SliderRanges {
            strength,
            dexterity,
            constitution,
        }
    }

    /// The focused slider.
    pub fn focused(&self) -> &RangeSlider {
        &self.sliders[self.focus]
    }

    /// Generate, filter, and summarize a fresh dataset.
    pub fn recompute(&mut self) {
        let sliders = self.slider_ranges();
        self.recomputations += 1;
        match self.dashboard.recompute(&sliders, &mut self.rng) {
            Ok(view) => {
                self.view = Some(view);
                self.error = None;
            }
            Err(e) => {
                tracing::error!("recomputation failed: {e}");
                self.view = None;
                self.error = Some(e.to_string());
            }
        }
    }

    /// Focus the next slider (wrapping).
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.sliders.len();
    }

    /// Focus the previous slider (wrapping).
    pub fn focus_prev(&mut self) {
        self.focus = if self.focus == 0 {
            self.sliders.len() - 1
        } else {
            self.focus - 1
        };
    }

    /// Move a handle of the focused slider; recompute if the range changed.
    pub fn move_slider(&mut self, step: SliderMove) {
        let slider = &mut self.sliders[self.focus];
        let changed = match step {
            SliderMove::LowerMin => slider.lower_min(),
            SliderMove::RaiseMin => slider.raise_min(),
            SliderMove::LowerMax => slider.lower_max(),
            SliderMove::RaiseMax => slider.raise_max(),
        };
        if changed {
            self.recompute();
        }
    }

    /// Regenerate with unchanged ranges.
    pub fn reroll(&mut self) {
        self.recompute();
    }

    /// Restore the initial slider positions.
    pub fn reset(&mut self) {
        let initial = self.initial;
        let mut changed = false;
        for slider in &mut self.sliders {
            if let Some(range) = initial.get(slider.attribute) {
                changed |= slider.set(range);
            }
        }
        if changed {
            self.recompute();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dd_core::AttributeRange;

    fn app() -> DashboardApp {
        DashboardApp::new(&DashboardConfig::default().with_seed(42))
    }

    #[test]
    fn starts_with_a_view() {
        let app = app();
        assert_eq!(app.recomputations, 1);
        let view = app.view.as_ref().unwrap();
        assert_eq!(view.summary.total, 100);
        assert_eq!(view.presentation.table.len(), 10);
        assert_eq!(app.slider_ranges(), SliderRanges::default());
    }

    #[test]
    fn focus_wraps() {
        let mut app = app();
        assert_eq!(app.focused().attribute, Attribute::Strength);
        app.focus_prev();
        assert_eq!(app.focused().attribute, Attribute::Constitution);
        app.focus_next();
        app.focus_next();
        assert_eq!(app.focused().attribute, Attribute::Dexterity);
    }

    #[test]
    fn moving_a_handle_recomputes() {
        let mut app = app();
        app.move_slider(SliderMove::RaiseMin);
        assert_eq!(app.recomputations, 2);
        assert_eq!(
            app.slider_ranges().strength,
            AttributeRange::new(9, 18).unwrap()
        );
        let view = app.view.as_ref().unwrap();
        assert!(view.summary.retained.column(Attribute::Strength).all(|v| v >= 9));
    }

    #[test]
    fn blocked_move_does_not_recompute() {
        let mut app = app();
        app.move_slider(SliderMove::RaiseMax);
        app.move_slider(SliderMove::LowerMin);
        assert_eq!(app.recomputations, 1);
    }

    #[test]
    fn reroll_and_reset() {
        let mut app = app();
        app.reroll();
        assert_eq!(app.recomputations, 2);
        app.reset();
        assert_eq!(app.recomputations, 2);
        app.focus_next();
        app.move_slider(SliderMove::LowerMax);
        assert_eq!(app.recomputations, 3);
        app.reset();
        assert_eq!(app.recomputations, 4);
        assert_eq!(app.slider_ranges(), SliderRanges::default());
    }

    #[test]
    fn empty_categories_surface_as_error() {
        let mut config = DashboardConfig::default().with_seed(1);
        config.categories.clear();
        let app = DashboardApp::new(&config);
        assert!(app.view.is_none());
        assert_eq!(
            app.error.as_deref(),
            Some("no character classes to choose from")
        );
    }
}
