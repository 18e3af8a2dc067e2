use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::error::{CoreError, CoreResult};

/// An inclusive integer range `[min, max]` with `min <= max`.
///
/// The bounds are private so that every value in circulation has passed the
/// ordering check, including values deserialized from `[min, max]` arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct AttributeRange {
    min: i32,
    max: i32,
}

impl AttributeRange {
    /// The default range for every ability score, `[8, 18]`.
    pub const DEFAULT: AttributeRange = AttributeRange { min: 8, max: 18 };

    /// Create a range, rejecting `min > max`.
    pub fn new(min: i32, max: i32) -> CoreResult<Self> {
        if min > max {
            return Err(CoreError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// A range containing a single value.
    pub fn single(value: i32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Lower bound (inclusive).
    pub fn min(self) -> i32 {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(self) -> i32 {
        self.max
    }

    /// Whether `value` lies within `[min, max]`.
    pub fn contains(self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Whether the range holds exactly one value.
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    /// Number of integers in the range.
    pub fn width(self) -> u64 {
        (i64::from(self.max) - i64::from(self.min)) as u64 + 1
    }

    /// Clamp `value` into the range.
    pub fn clamp(self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

impl Default for AttributeRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<(i32, i32)> for AttributeRange {
    type Error = CoreError;

    fn try_from((min, max): (i32, i32)) -> CoreResult<Self> {
        Self::new(min, max)
    }
}

impl From<AttributeRange> for (i32, i32) {
    fn from(range: AttributeRange) -> Self {
        (range.min, range.max)
    }
}

impl fmt::Display for AttributeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

impl FromStr for AttributeRange {
    type Err = CoreError;

    /// Parse `MIN..MAX`, `MIN..=MAX`, `MIN-MAX` or `MIN,MAX` (both inclusive).
    fn from_str(s: &str) -> CoreResult<Self> {
        let s = s.trim();
        let parse_err = || CoreError::ParseRange(s.to_string());

        let (lo, hi) = ["..=", "..", ","]
            .iter()
            .find_map(|sep| s.split_once(sep))
            .or_else(|| {
                // Skip a leading sign so "-3-5" splits at the second dash.
                let idx = s.char_indices().skip(1).find(|&(_, c)| c == '-')?.0;
                Some((&s[..idx], &s[idx + 1..]))
            })
            .ok_or_else(parse_err)?;

        let min = lo.trim().parse::<i32>().map_err(|_| parse_err())?;
        let max = hi.trim().parse::<i32>().map_err(|_| parse_err())?;
        Self::new(min, max)
    }
}

/// Per-attribute ranges used for generation and filtering.
///
/// A map may be partial: the generator requires all six attributes, the
/// filter only checks the attributes that are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeMap {
    ranges: BTreeMap<Attribute, AttributeRange>,
}

impl RangeMap {
    /// Create an empty range map.
    pub fn new() -> Self {
        Self::default()
    }

    /// A map with every attribute set to [`AttributeRange::DEFAULT`].
    pub fn with_defaults() -> Self {
        Self::uniform(AttributeRange::DEFAULT)
    }

    /// A map with every attribute set to `range`.
    pub fn uniform(range: AttributeRange) -> Self {
        Self {
            ranges: Attribute::ALL.iter().map(|a| (*a, range)).collect(),
        }
    }

    /// Set the range for an attribute, replacing any previous one.
    pub fn set(&mut self, attribute: Attribute, range: AttributeRange) {
        self.ranges.insert(attribute, range);
    }

    /// Builder form of [`RangeMap::set`].
    pub fn with(mut self, attribute: Attribute, range: AttributeRange) -> Self {
        self.set(attribute, range);
        self
    }

    /// Remove the range for an attribute.
    pub fn remove(&mut self, attribute: Attribute) -> Option<AttributeRange> {
        self.ranges.remove(&attribute)
    }

    /// The range for an attribute, if configured.
    pub fn get(&self, attribute: Attribute) -> Option<AttributeRange> {
        self.ranges.get(&attribute).copied()
    }

    /// The range for an attribute, or [`CoreError::MissingRange`].
    pub fn require(&self, attribute: Attribute) -> CoreResult<AttributeRange> {
        self.get(attribute).ok_or(CoreError::MissingRange(attribute))
    }

    /// Whether an attribute has a range configured.
    pub fn contains(&self, attribute: Attribute) -> bool {
        self.ranges.contains_key(&attribute)
    }

    /// Iterate configured ranges in canonical attribute order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, AttributeRange)> + '_ {
        self.ranges.iter().map(|(a, r)| (*a, *r))
    }

    /// Number of configured attributes.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns true if no attribute has a range.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl FromIterator<(Attribute, AttributeRange)> for RangeMap {
    fn from_iter<I: IntoIterator<Item = (Attribute, AttributeRange)>>(iter: I) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}
