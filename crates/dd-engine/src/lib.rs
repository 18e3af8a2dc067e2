//! Character stat engine for the Dungeons and Dragons dashboard.
//!
//! Generates synthetic character records, filters them by attribute ranges,
//! aggregates per-attribute means, and renders the results into the
//! artifacts the dashboard displays. Every operation takes its random source
//! explicitly and holds no state between calls.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod generator;
pub mod present;
pub mod summary;

pub use config::DashboardConfig;
pub use dashboard::{Dashboard, DashboardView, RangeSlider, SLIDER_DOMAIN, SliderRanges};
pub use error::{EngineError, EngineResult};
pub use filter::{FilterSpec, retain_in_ranges};
pub use generator::{DEFAULT_CLASSES, GeneratorConfig, generate};
pub use present::{ChartBar, ChartSpec, Presentation, TablePreview, format_average};
pub use summary::{Average, Summarizer, Summary, mean, summarize};
