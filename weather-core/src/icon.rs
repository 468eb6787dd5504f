use std::{fmt, ops::RangeInclusive};

use serde::Serialize;

/// Presentational icon for a condition, independent of how it gets drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    Clear,
    PartlyCloudy,
    Cloudy,
    FogSmoke,
    ThunderstormRain,
    Snow,
}

impl IconId {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconId::Clear => "clear",
            IconId::PartlyCloudy => "partly-cloudy",
            IconId::Cloudy => "cloudy",
            IconId::FogSmoke => "fog-smoke",
            IconId::ThunderstormRain => "thunderstorm-rain",
            IconId::Snow => "snow",
        }
    }

    pub const fn all() -> &'static [IconId] {
        &[
            IconId::Clear,
            IconId::PartlyCloudy,
            IconId::Cloudy,
            IconId::FogSmoke,
            IconId::ThunderstormRain,
            IconId::Snow,
        ]
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon used for any code not covered by [`ICON_RULES`].
pub const FALLBACK_ICON: IconId = IconId::ThunderstormRain;

/// Condition-code rules, evaluated top to bottom; the first match wins.
///
/// The rain range 1150..=1276 comes before the snow entries, so 1168, 1171
/// and 1210..=1276 resolve to rain even though they are also listed as snow.
const ICON_RULES: &[(RangeInclusive<i32>, IconId)] = &[
    (1000..=1000, IconId::Clear),
    (1003..=1003, IconId::PartlyCloudy),
    (1006..=1006, IconId::Cloudy),
    (1030..=1030, IconId::Cloudy),
    (1009..=1009, IconId::FogSmoke),
    (1135..=1135, IconId::FogSmoke),
    (1063..=1063, IconId::ThunderstormRain),
    (1087..=1087, IconId::ThunderstormRain),
    (1150..=1276, IconId::ThunderstormRain),
    (1066..=1066, IconId::Snow),
    (1072..=1072, IconId::Snow),
    (1147..=1147, IconId::Snow),
    (1168..=1168, IconId::Snow),
    (1171..=1171, IconId::Snow),
    (1210..=1282, IconId::Snow),
];

/// Map a WeatherAPI.com condition code to an icon. Total over `i32`.
pub fn resolve(code: i32) -> IconId {
    ICON_RULES
        .iter()
        .find(|(range, _)| range.contains(&code))
        .map(|(_, icon)| *icon)
        .unwrap_or(FALLBACK_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_codes() {
        assert_eq!(resolve(1000), IconId::Clear);
        assert_eq!(resolve(1003), IconId::PartlyCloudy);
        assert_eq!(resolve(1006), IconId::Cloudy);
        assert_eq!(resolve(1030), IconId::Cloudy);
        assert_eq!(resolve(1009), IconId::FogSmoke);
        assert_eq!(resolve(1135), IconId::FogSmoke);
        assert_eq!(resolve(1063), IconId::ThunderstormRain);
        assert_eq!(resolve(1087), IconId::ThunderstormRain);
    }

    #[test]
    fn rain_range_shadows_overlapping_snow_codes() {
        for code in [1150, 1168, 1171, 1195, 1210, 1225, 1276] {
            assert_eq!(resolve(code), IconId::ThunderstormRain, "code {code}");
        }
    }

    #[test]
    fn snow_codes_outside_rain_range() {
        for code in [1066, 1072, 1147, 1277, 1279, 1282] {
            assert_eq!(resolve(code), IconId::Snow, "code {code}");
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_rain() {
        for code in [9999, 0, -1, 1001, 1283, i32::MIN, i32::MAX] {
            assert_eq!(resolve(code), IconId::ThunderstormRain, "code {code}");
        }
    }

    #[test]
    fn icon_names_are_stable() {
        let names: Vec<_> = IconId::all().iter().map(IconId::as_str).collect();
        assert_eq!(
            names,
            ["clear", "partly-cloudy", "cloudy", "fog-smoke", "thunderstorm-rain", "snow"]
        );
        assert_eq!(serde_json::to_string(&IconId::FogSmoke).unwrap(), "\"fog-smoke\"");
    }
}
