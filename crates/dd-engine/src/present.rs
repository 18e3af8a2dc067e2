//! Display artifacts built from a [`Summary`]: the six average cards, the bar
//! chart specification, and the grid preview.

use serde::Serialize;

use dd_core::{Attribute, CharacterRecord};

use crate::summary::{Average, Summary};

/// Chart title.
pub const CHART_TITLE: &str = "Average Character Stats";
/// Chart x-axis label.
pub const CHART_X_LABEL: &str = "Stat";
/// Chart y-axis label.
pub const CHART_Y_LABEL: &str = "Average Value";

/// Grid column headers.
pub const TABLE_COLUMNS: [&str; 7] = [
    "Character",
    "Strength",
    "Dexterity",
    "Constitution",
    "Intelligence",
    "Wisdom",
    "Charisma",
];

/// Format one average as `"Avg <Attribute>: <value>"`, with two decimals or
/// `no data` for an empty filtered set.
pub fn format_average(attribute: Attribute, average: Average) -> String {
    format!("Avg {}: {average}", attribute.name())
}

/// One bar in the average-stats chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    /// Attribute name shown under the bar.
    pub label: String,
    /// Bar height, absent when there is no data.
    pub value: Option<f64>,
}

/// A bar chart of the six attribute means.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Chart title.
    pub title: String,
    /// Label of the category axis.
    pub x_label: String,
    /// Label of the value axis.
    pub y_label: String,
    /// Bars in canonical attribute order.
    pub bars: Vec<ChartBar>,
}

impl ChartSpec {
    /// Build the chart from a summary.
    pub fn from_summary(summary: &Summary) -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            x_label: CHART_X_LABEL.to_string(),
            y_label: CHART_Y_LABEL.to_string(),
            bars: summary
                .averages_by_attribute()
                .map(|(attr, avg)| ChartBar {
                    label: attr.name().to_string(),
                    value: avg.value(),
                })
                .collect(),
        }
    }

    /// The tallest bar, or `None` if every bar lacks data.
    pub fn max_value(&self) -> Option<f64> {
        self.bars
            .iter()
            .filter_map(|b| b.value)
            .max_by(f64::total_cmp)
    }
}

/// The first rows of the filtered data as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablePreview {
    /// Column headers.
    pub columns: Vec<String>,
    /// One entry per record: class label followed by the six scores.
    pub rows: Vec<Vec<String>>,
}

impl TablePreview {
    /// Build the grid from preview records.
    pub fn from_records(records: &[CharacterRecord]) -> Self {
        Self {
            columns: TABLE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: records.iter().map(table_row).collect(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn table_row(record: &CharacterRecord) -> Vec<String> {
    std::iter::once(record.character_class.clone())
        .chain(record.scores().iter().map(|s| s.to_string()))
        .collect()
}

/// Everything the dashboard renders for one recomputation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    /// The six formatted average lines, in canonical order.
    pub averages: Vec<String>,
    /// The average-stats bar chart.
    pub chart: ChartSpec,
    /// The capped grid preview.
    pub table: TablePreview,
}

impl Presentation {
    /// Render a summary into display artifacts.
    pub fn from_summary(summary: &Summary) -> Self {
        Self {
            averages: summary
                .averages_by_attribute()
                .map(|(attr, avg)| format_average(attr, avg))
                .collect(),
            chart: ChartSpec::from_summary(summary),
            table: TablePreview::from_records(&summary.preview),
        }
    }
}
