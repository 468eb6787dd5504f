use serde::Deserialize;

use crate::{
    error::{MalformedReason, WeatherError},
    model::WeatherResult,
};

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    code: i32,
    text: String,
    // Required by the response contract, not carried into the result.
    #[allow(dead_code)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    temp_f: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[derive(Debug, Deserialize)]
struct WaErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct WaErrorEnvelope {
    error: WaErrorBody,
}

/// Decode a current-conditions response body.
///
/// `location.name`, `current.temp_c`, `current.temp_f` and
/// `current.condition.{code,text,icon}` are all required; anything missing or
/// of the wrong type fails the whole decode. WeatherAPI.com's error envelope
/// is also a malformed response, with its code and message kept.
pub fn decode(payload: &[u8]) -> Result<WeatherResult, WeatherError> {
    if let Ok(envelope) = serde_json::from_slice::<WaErrorEnvelope>(payload) {
        return Err(MalformedReason::Api {
            code: envelope.error.code,
            message: envelope.error.message,
        }
        .into());
    }

    let parsed: WaResponse = serde_json::from_slice(payload)?;

    Ok(WeatherResult {
        location_name: parsed.location.name,
        temperature_celsius: parsed.current.temp_c,
        temperature_fahrenheit: parsed.current.temp_f,
        condition_code: parsed.current.condition.code,
        condition_text: parsed.current.condition.text,
    })
}
