use chrono::{DateTime, Local};
use weather_core::{DisplayUnit, WeatherResult};

/// One-line human summary, e.g. `London: 21.0°C Sunny [clear]`.
pub fn render_line(result: &WeatherResult, unit: DisplayUnit) -> String {
    format!(
        "{}: {} {} [{}]",
        result.location_name,
        result.formatted_temperature(unit),
        result.condition_text,
        result.icon(),
    )
}

/// Human output: summary line plus the fetch time and the other unit.
pub fn render_human(
    result: &WeatherResult,
    unit: DisplayUnit,
    fetched_at: DateTime<Local>,
) -> String {
    let other = unit.toggle();
    format!(
        "{}\n  ({}; fetched {})",
        render_line(result, unit),
        result.formatted_temperature(other),
        fetched_at.format("%Y-%m-%d %H:%M"),
    )
}

pub fn render_json(result: &WeatherResult, unit: DisplayUnit) -> anyhow::Result<String> {
    let value = serde_json::json!({
        "location": result.location_name,
        "temperature": result.temperature(unit),
        "unit": unit.to_string(),
        "formatted": result.formatted_temperature(unit),
        "condition_code": result.condition_code,
        "condition": result.condition_text,
        "icon": result.icon(),
        "raw": result,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
