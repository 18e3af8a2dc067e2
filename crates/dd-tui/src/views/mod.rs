//! Dashboard cards: range sliders, stat summary, chart, and character grid.

pub mod chart;
pub mod grid;
pub mod sidebar;
pub mod summary;
