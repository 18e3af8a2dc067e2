use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six ability scores of a character.
///
/// The declaration order is the canonical display order used by the summary
/// cards, the chart, and the grid columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Physical power.
    Strength,
    /// Agility and reflexes.
    Dexterity,
    /// Endurance and health.
    Constitution,
    /// Reasoning and memory.
    Intelligence,
    /// Perception and insight.
    Wisdom,
    /// Force of personality.
    Charisma,
}

impl Attribute {
    /// All attributes in canonical order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Constitution,
        Attribute::Intelligence,
        Attribute::Wisdom,
        Attribute::Charisma,
    ];

    /// Attributes that the dashboard sliders control and the filter checks.
    pub const FILTERABLE: [Attribute; 3] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Constitution,
    ];

    /// Display name, e.g. "Strength".
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// Three-letter abbreviation, e.g. "STR".
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Whether the default filter checks this attribute.
    pub fn is_filterable(self) -> bool {
        Self::FILTERABLE.contains(&self)
    }

    /// Index of this attribute in [`Attribute::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order() {
        let names: Vec<_> = Attribute::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            [
                "Strength",
                "Dexterity",
                "Constitution",
                "Intelligence",
                "Wisdom",
                "Charisma"
            ]
        );
        for (i, attr) in Attribute::ALL.iter().enumerate() {
            assert_eq!(attr.index(), i);
        }
    }

    #[test]
    fn filterable_attributes() {
        assert!(Attribute::Strength.is_filterable());
        assert!(Attribute::Dexterity.is_filterable());
        assert!(Attribute::Constitution.is_filterable());
        assert!(!Attribute::Intelligence.is_filterable());
        assert!(!Attribute::Wisdom.is_filterable());
        assert!(!Attribute::Charisma.is_filterable());
    }

    #[test]
    fn display_uses_full_name() {
        assert_eq!(Attribute::Constitution.to_string(), "Constitution");
    }

    #[test]
    fn serde_snake_case() {
        let json = serde_json::to_string(&Attribute::Intelligence).unwrap();
        assert_eq!(json, "\"intelligence\"");
    }
}
