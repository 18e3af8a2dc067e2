//! Terminal dashboard for the Dungeons and Dragons character stats engine.
//!
//! A ratatui interface with three range sliders in a sidebar and three cards:
//! the six stat averages, a bar chart of those averages, and a grid of the
//! first filtered characters. Every slider change triggers one
//! [`Dashboard::recompute`](dd_engine::Dashboard::recompute).

pub mod app;
pub mod logging;
pub mod shared;
pub mod terminal;
pub mod views;
