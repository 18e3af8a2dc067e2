use dd_core::RangeMap;
use dd_engine::GeneratorConfig;

use super::RangeArgs;

pub fn run(
    ranges: &RangeArgs,
    classes: &[String],
    count: usize,
    seed: Option<u64>,
) -> Result<(), String> {
    let mut config = GeneratorConfig::default().with_count(count);
    if !classes.is_empty() {
        config = config.with_categories(
            classes
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        );
    }
    let overrides = ranges
        .parse()?
        .into_iter()
        .fold(RangeMap::with_defaults(), |map, (attr, range)| {
            map.with(attr, range)
        });
    config = config.with_ranges(overrides);

    let mut rng = super::make_rng(seed);
    let data = config.generate(&mut rng).map_err(|e| e.to_string())?;
    tracing::info!(records = data.len(), "generated dataset");

    let json = serde_json::to_string_pretty(&data)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{json}");

    Ok(())
}
