use serde::{Deserialize, Serialize};

use crate::{
    icon::{IconId, resolve},
    units::{DisplayUnit, display_temperature, format_temperature},
};

/// Current conditions for one location, as reported by WeatherAPI.com.
///
/// Both temperatures come straight from the payload; nothing is converted
/// locally. A new value replaces the previous one on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub location_name: String,
    pub temperature_celsius: f64,
    pub temperature_fahrenheit: f64,
    pub condition_code: i32,
    pub condition_text: String,
}

impl WeatherResult {
    pub fn temperature(&self, unit: DisplayUnit) -> f64 {
        display_temperature(self, unit)
    }

    /// Temperature in `unit`, rendered like `21.0°C`.
    pub fn formatted_temperature(&self, unit: DisplayUnit) -> String {
        format_temperature(self.temperature(unit), unit)
    }

    pub fn icon(&self) -> IconId {
        resolve(self.condition_code)
    }
}
