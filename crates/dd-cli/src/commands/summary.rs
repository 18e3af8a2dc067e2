use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use dd_core::Attribute;
use dd_engine::{ChartSpec, DashboardView, SliderRanges};

use super::RangeArgs;

/// Width of the longest ASCII bar.
const BAR_WIDTH: f64 = 30.0;

pub fn run(
    ranges: &RangeArgs,
    count: Option<usize>,
    seed: Option<u64>,
    config: Option<&Path>,
    json: bool,
) -> Result<(), String> {
    let mut config = super::load_config(config)?;
    if let Some(count) = count {
        config = config.with_count(count);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    // Slider attributes go to the sliders; the rest override the base ranges.
    let mut sliders = config.initial_sliders();
    for (attr, range) in ranges.parse()? {
        match attr {
            Attribute::Strength => sliders.strength = range,
            Attribute::Dexterity => sliders.dexterity = range,
            Attribute::Constitution => sliders.constitution = range,
            other => config = config.with_range(other, range),
        }
    }

    let mut rng = super::make_rng(config.seed);
    let view = config
        .dashboard()
        .recompute(&sliders, &mut rng)
        .map_err(|e| e.to_string())?;

    if json {
        println!("{}", to_json(&view, config.seed)?);
    } else {
        print_dashboard(&view, &sliders, config.seed);
    }

    Ok(())
}

fn to_json(view: &DashboardView, seed: Option<u64>) -> Result<String, String> {
    let means: serde_json::Map<String, serde_json::Value> = view
        .summary
        .averages_by_attribute()
        .map(|(attr, avg)| (attr.name().to_string(), serde_json::json!(avg)))
        .collect();

    let doc = serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "seed": seed,
        "ranges": view.ranges,
        "total": view.summary.total,
        "retained": view.summary.retained.len(),
        "means": means,
        "averages": view.presentation.averages,
        "chart": view.presentation.chart,
        "table": view.presentation.table,
    });

    serde_json::to_string_pretty(&doc).map_err(|e| format!("JSON serialization error: {e}"))
}

fn print_dashboard(view: &DashboardView, sliders: &SliderRanges, seed: Option<u64>) {
    let seed_label = seed.map_or_else(|| "random".to_string(), |s| s.to_string());
    println!(
        "  {} {}",
        "Dungeons and Dragons Dashboard".bold(),
        format!("({} characters, seed={seed_label})", view.summary.total).dimmed()
    );
    println!(
        "  Filters: Strength {}  Dexterity {}  Constitution {}",
        sliders.strength, sliders.dexterity, sliders.constitution
    );
    println!();

    // Summary card
    println!("  {}", "Character Stats Summary".bold().underline());
    for line in &view.presentation.averages {
        if view.summary.is_empty() {
            println!("  {}", line.red());
        } else {
            println!("  {line}");
        }
    }
    println!();

    // Chart card
    let chart = &view.presentation.chart;
    println!(
        "  {} {}",
        "Character Distribution".bold().underline(),
        format!("- {}", chart.title).dimmed()
    );
    for line in chart_lines(chart) {
        println!("  {line}");
    }
    println!(
        "  {}",
        format!("x: {}  y: {}", chart.x_label, chart.y_label).dimmed()
    );
    println!();

    // Grid card
    println!("  {}", "Character Grid".bold().underline());
    if view.presentation.table.is_empty() {
        println!("  No characters match the current filters.");
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(view.presentation.table.columns.clone());
        for row in &view.presentation.table.rows {
            table.add_row(row.clone());
        }
        println!("{table}");
    }
    println!();
    println!(
        "  {} of {} characters match",
        view.summary.retained.len(),
        view.summary.total
    );
}

/// One ASCII bar per attribute, scaled to the tallest bar.
fn chart_lines(chart: &ChartSpec) -> Vec<String> {
    let max = chart.max_value().unwrap_or(0.0);
    let label_width = chart.bars.iter().map(|b| b.label.len()).max().unwrap_or(0);
    chart
        .bars
        .iter()
        .map(|bar| match bar.value {
            Some(value) if max > 0.0 => {
                let len = ((value / max) * BAR_WIDTH).round() as usize;
                format!(
                    "{:<label_width$} {} {value:.2}",
                    bar.label,
                    "\u{2588}".repeat(len).cyan()
                )
            }
            Some(value) => format!("{:<label_width$} {value:.2}", bar.label),
            None => format!("{:<label_width$} {}", bar.label, "no data".red()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dd_engine::ChartBar;

    fn chart(values: &[Option<f64>]) -> ChartSpec {
        ChartSpec {
            title: "Average Character Stats".into(),
            x_label: "Stat".into(),
            y_label: "Average Value".into(),
            bars: values
                .iter()
                .zip(Attribute::ALL)
                .map(|(v, a)| ChartBar {
                    label: a.name().to_string(),
                    value: *v,
                })
                .collect(),
        }
    }

    #[test]
    fn chart_lines_scale_to_max() {
        colored::control::set_override(false);
        let lines = chart_lines(&chart(&[Some(10.0), Some(5.0)]));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("Strength  {} 10.00", "\u{2588}".repeat(30)));
        assert_eq!(lines[1], format!("Dexterity {} 5.00", "\u{2588}".repeat(15)));
    }

    #[test]
    fn chart_lines_without_data() {
        colored::control::set_override(false);
        let lines = chart_lines(&chart(&[None, None]));
        assert_eq!(lines[0], "Strength  no data");
    }
}
