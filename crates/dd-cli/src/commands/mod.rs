pub mod generate;
pub mod summary;
pub mod tui;

use std::path::Path;

use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

use dd_core::{Attribute, AttributeRange};
use dd_engine::DashboardConfig;

/// Per-attribute range flags shared by the data commands.
///
/// Values stay as text until [`RangeArgs::parse`] so that a bad range is
/// reported as a command error rather than a usage error.
#[derive(Args, Debug, Default)]
pub struct RangeArgs {
    /// Strength range, e.g. 10..16
    #[arg(long, value_name = "MIN..MAX")]
    pub strength: Option<String>,

    /// Dexterity range
    #[arg(long, value_name = "MIN..MAX")]
    pub dexterity: Option<String>,

    /// Constitution range
    #[arg(long, value_name = "MIN..MAX")]
    pub constitution: Option<String>,

    /// Intelligence range
    #[arg(long, value_name = "MIN..MAX")]
    pub intelligence: Option<String>,

    /// Wisdom range
    #[arg(long, value_name = "MIN..MAX")]
    pub wisdom: Option<String>,

    /// Charisma range
    #[arg(long, value_name = "MIN..MAX")]
    pub charisma: Option<String>,
}

impl RangeArgs {
    /// The raw flag value for `attribute`, if any.
    fn raw(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Strength => self.strength.as_deref(),
            Attribute::Dexterity => self.dexterity.as_deref(),
            Attribute::Constitution => self.constitution.as_deref(),
            Attribute::Intelligence => self.intelligence.as_deref(),
            Attribute::Wisdom => self.wisdom.as_deref(),
            Attribute::Charisma => self.charisma.as_deref(),
        }
    }

    /// Parse the ranges given on the command line, in canonical order.
    pub fn parse(&self) -> Result<Vec<(Attribute, AttributeRange)>, String> {
        Attribute::ALL
            .into_iter()
            .filter_map(|a| self.raw(a).map(|text| (a, text)))
            .map(|(a, text)| {
                text.parse::<AttributeRange>()
                    .map(|range| (a, range))
                    .map_err(|e| format!("--{}: {e}", a.name().to_lowercase()))
            })
            .collect()
    }
}

/// Load a config file, or the defaults when none is given.
fn load_config(path: Option<&Path>) -> Result<DashboardConfig, String> {
    match path {
        Some(path) => DashboardConfig::from_json_file(path)
            .map_err(|e| format!("{}: {e}", path.display())),
        None => Ok(DashboardConfig::default()),
    }
}

/// A seeded RNG, or one seeded from the operating system.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
