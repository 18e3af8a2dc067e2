use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;

/// One synthetic character: a class label and six ability scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Class label, e.g. "Wizard".
    pub character_class: String,
    /// Strength score.
    pub strength: i32,
    /// Dexterity score.
    pub dexterity: i32,
    /// Constitution score.
    pub constitution: i32,
    /// Intelligence score.
    pub intelligence: i32,
    /// Wisdom score.
    pub wisdom: i32,
    /// Charisma score.
    pub charisma: i32,
}

impl CharacterRecord {
    /// Build a record from a class label and scores in canonical order.
    pub fn new(character_class: impl Into<String>, scores: [i32; 6]) -> Self {
        let [strength, dexterity, constitution, intelligence, wisdom, charisma] = scores;
        Self {
            character_class: character_class.into(),
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    /// The score for one attribute.
    pub fn score(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    /// All six scores in canonical order.
    pub fn scores(&self) -> [i32; 6] {
        Attribute::ALL.map(|a| self.score(a))
    }
}

/// An ordered sequence of generated character records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<CharacterRecord>,
}

impl Dataset {
    /// Number of records generated when the caller does not ask for a size.
    pub const DEFAULT_SIZE: usize = 100;

    /// Wrap an ordered list of records.
    pub fn new(records: Vec<CharacterRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in generation order.
    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    /// Iterate records in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, CharacterRecord> {
        self.records.iter()
    }

    /// Iterate the values of one attribute column.
    pub fn column(&self, attribute: Attribute) -> impl Iterator<Item = i32> + '_ {
        self.records.iter().map(move |r| r.score(attribute))
    }
}

impl From<Vec<CharacterRecord>> for Dataset {
    fn from(records: Vec<CharacterRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<CharacterRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = CharacterRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CharacterRecord;
    type IntoIter = std::slice::Iter<'a, CharacterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
