//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Request URL construction for the WeatherAPI.com current-conditions endpoint
//! - Strict decoding of its JSON responses
//! - Unit selection/formatting and condition-code to icon mapping
//! - An async client over a pluggable HTTP transport
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod icon;
pub mod model;
pub mod transport;
pub mod units;
pub mod url_builder;

pub use client::WeatherClient;
pub use config::Config;
pub use decode::decode;
pub use error::{ErrorKind, MalformedReason, TransportError, WeatherError};
pub use icon::{IconId, resolve};
pub use model::WeatherResult;
pub use transport::{HttpTransport, ReqwestTransport};
pub use units::{DisplayUnit, display_temperature, format_temperature};
pub use url_builder::{DEFAULT_ENDPOINT, UrlBuilder};
pub use url::Url;
