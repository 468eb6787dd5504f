use std::fmt;

use crate::model::WeatherResult;

/// Temperature unit the caller wants to show. Lives only as long as the
/// caller keeps it; it is never written to the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl DisplayUnit {
    pub fn toggle(self) -> Self {
        match self {
            DisplayUnit::Celsius => DisplayUnit::Fahrenheit,
            DisplayUnit::Fahrenheit => DisplayUnit::Celsius,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            DisplayUnit::Celsius => 'C',
            DisplayUnit::Fahrenheit => 'F',
        }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayUnit::Celsius => f.write_str("celsius"),
            DisplayUnit::Fahrenheit => f.write_str("fahrenheit"),
        }
    }
}

/// Pick the temperature reported for `unit`. No arithmetic happens here.
pub fn display_temperature(result: &WeatherResult, unit: DisplayUnit) -> f64 {
    match unit {
        DisplayUnit::Celsius => result.temperature_celsius,
        DisplayUnit::Fahrenheit => result.temperature_fahrenheit,
    }
}

pub fn format_temperature(value: f64, unit: DisplayUnit) -> String {
    format!("{value:.1}°{}", unit.symbol())
}
