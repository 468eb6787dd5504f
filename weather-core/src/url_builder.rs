use url::Url;

use crate::error::WeatherError;

/// WeatherAPI.com current-conditions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.weatherapi.com/v1/current.json";

/// Builds request URLs for the current-conditions endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base: Url,
}

impl UrlBuilder {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Compose `<base>?key=<api_key>&q=<query>`.
    ///
    /// Both values are percent-encoded, spaces as `%20`; the query is sent
    /// exactly as given, the trim only decides whether it counts as empty.
    pub fn build(&self, query: &str, api_key: &str) -> Result<Url, WeatherError> {
        if query.trim().is_empty() {
            return Err(WeatherError::InvalidQuery("query must not be empty".into()));
        }
        if api_key.trim().is_empty() {
            return Err(WeatherError::InvalidQuery("API key must not be empty".into()));
        }

        let mut url = self.base.clone();
        if url.cannot_be_a_base() {
            return Err(WeatherError::InvalidQuery(format!(
                "endpoint '{}' cannot carry query parameters",
                self.base
            )));
        }
        url.query_pairs_mut().append_pair("key", api_key).append_pair("q", query);

        // Form encoding turns spaces into '+' and escapes literal '+' as %2B,
        // so every remaining '+' is a space.
        let query = url.query().map(|q| q.replace('+', "%20"));
        url.set_query(query.as_deref());

        Ok(url)
    }
}

impl Default for UrlBuilder {
    fn default() -> Self {
        let base = Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL");
        Self { base }
    }
}
