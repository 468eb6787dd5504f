use std::fmt;

use tracing::{debug, instrument};
use url::Url;

use crate::{
    decode::decode,
    error::WeatherError,
    model::WeatherResult,
    transport::{HttpTransport, ReqwestTransport},
    url_builder::UrlBuilder,
};

/// Fetches current conditions from WeatherAPI.com.
///
/// Every call issues exactly one GET: no retries, no cache, no timeout.
/// Calls share nothing mutable, so a client can be used from many tasks at
/// once; ordering of their results is up to the caller.
pub struct WeatherClient<T = ReqwestTransport> {
    urls: UrlBuilder,
    api_key: String,
    transport: T,
}

impl WeatherClient<ReqwestTransport> {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_transport(api_key, ReqwestTransport::new())
    }
}

impl<T: HttpTransport> WeatherClient<T> {
    pub fn with_transport(api_key: impl Into<String>, transport: T) -> Self {
        Self { urls: UrlBuilder::default(), api_key: api_key.into(), transport }
    }

    /// Point the client at another endpoint (a proxy, a mock server).
    pub fn with_base_url(mut self, base: Url) -> Self {
        self.urls = UrlBuilder::new(base);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[instrument(skip(self))]
    pub async fn fetch_weather(&self, query: &str) -> Result<WeatherResult, WeatherError> {
        let url = self.urls.build(query, &self.api_key)?;
        debug!(endpoint = %self.urls.base(), "requesting current conditions");

        let body = self.transport.get(&url).await?;
        let result = decode(&body)?;
        debug!(
            location = %result.location_name,
            code = result.condition_code,
            "decoded current conditions"
        );

        Ok(result)
    }

    /// Same as [`fetch_weather`](Self::fetch_weather) with a `"lat,lon"` query.
    pub async fn fetch_weather_for_coordinates(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<WeatherResult, WeatherError> {
        self.fetch_weather(&format!("{lat},{lon}")).await
    }
}

impl<T: fmt::Debug> fmt::Debug for WeatherClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherClient")
            .field("endpoint", &self.urls.base().as_str())
            .field("api_key", &"<redacted>")
            .field("transport", &self.transport)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::{ErrorKind, TransportError};

    const LONDON: &str = r#"{"location":{"name":"London"},
        "current":{"temp_c":21.0,"temp_f":69.8,
        "condition":{"text":"Sunny","icon":"//cdn.weatherapi.com/weather/64x64/day/113.png","code":1000}}}"#;

    /// Answers every request with a canned body and records the URLs it saw.
    #[derive(Debug)]
    struct StubTransport {
        reply: Result<&'static str, &'static str>,
        seen: Mutex<Vec<Url>>,
    }

    impl StubTransport {
        fn ok(body: &'static str) -> Self {
            Self { reply: Ok(body), seen: Mutex::new(Vec::new()) }
        }

        fn failing(reason: &'static str) -> Self {
            Self { reply: Err(reason), seen: Mutex::new(Vec::new()) }
        }

        fn requests(&self) -> Vec<Url> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn get(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
            self.seen.lock().unwrap().push(url.clone());
            match self.reply {
                Ok(body) => Ok(body.as_bytes().to_vec()),
                Err(reason) => Err(TransportError(reason.to_string())),
            }
        }
    }

    fn q_param(url: &Url) -> String {
        url.query_pairs().find(|(k, _)| k == "q").map(|(_, v)| v.into_owned()).unwrap()
    }

    #[tokio::test]
    async fn fetch_weather_returns_decoded_payload() {
        let client = WeatherClient::with_transport("KEY", StubTransport::ok(LONDON));

        let result = client.fetch_weather("London").await.unwrap();

        assert_eq!(result, decode(LONDON.as_bytes()).unwrap());
        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].as_str(),
            "https://api.weatherapi.com/v1/current.json?key=KEY&q=London"
        );
    }

    #[tokio::test]
    async fn coordinates_become_lat_lon_query() {
        let client = WeatherClient::with_transport("KEY", StubTransport::ok(LONDON));

        client.fetch_weather_for_coordinates(51.5, -0.1).await.unwrap();

        let requests = client.transport().requests();
        assert_eq!(q_param(&requests[0]), "51.5,-0.1");
    }

    #[tokio::test]
    async fn invalid_query_never_reaches_transport() {
        let client = WeatherClient::with_transport("KEY", StubTransport::ok(LONDON));

        let err = client.fetch_weather("  ").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidQuery);
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn transport_failure_is_network_error() {
        let client =
            WeatherClient::with_transport("KEY", StubTransport::failing("connection reset"));

        let err = client.fetch_weather("London").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(err.to_string().contains("connection reset"));
    }

    #[tokio::test]
    async fn decode_errors_propagate_unchanged() {
        let client = WeatherClient::with_transport("KEY", StubTransport::ok(r#"{"location":{}}"#));
        let err = client.fetch_weather("London").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);

        let client = WeatherClient::with_transport(
            "KEY",
            StubTransport::ok(r#"{"error":{"code":2006,"message":"API key is invalid."}}"#),
        );
        let err = client.fetch_weather("London").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        assert_eq!(err.api_error(), Some((2006, "API key is invalid.")));
    }

    #[tokio::test]
    async fn failed_call_does_not_affect_next_one() {
        let client = WeatherClient::with_transport("KEY", StubTransport::ok(LONDON));

        assert!(client.fetch_weather("").await.is_err());
        assert!(client.fetch_weather("London").await.is_ok());
    }

    #[test]
    fn custom_base_url_is_used() {
        let base = Url::parse("http://localhost:9000/v1/current.json").unwrap();
        let client = WeatherClient::with_transport("KEY", StubTransport::ok(LONDON))
            .with_base_url(base.clone());

        assert_eq!(client.urls.base(), &base);
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let client = WeatherClient::new("SUPER-SECRET");
        let debug = format!("{client:?}");

        assert!(!debug.contains("SUPER-SECRET"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("api.weatherapi.com"));
    }
}
