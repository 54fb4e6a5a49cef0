use std::time::Duration;

use reqwest::Client;

use crate::api::body::parse_list_body;
use crate::api::error::FetchError;
use crate::config::ApiConfig;
use crate::pokemon::PokemonSummary;

/// Builds the list endpoint: `{base_url}/pokemon?limit={page_size}`.
pub fn list_url(base_url: &str, page_size: u32) -> String {
    format!("{}/pokemon?limit={}", base_url.trim_end_matches('/'), page_size)
}

/// HTTP client for the list endpoint.
///
/// Cloning is cheap; the underlying connection pool is shared, which lets
/// artwork requests reuse it.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    list_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds));
        if let Some(total) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(total));
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            client,
            list_url: list_url(&config.base_url, config.page_size),
        })
    }

    pub fn list_url(&self) -> &str {
        &self.list_url
    }

    pub fn http(&self) -> &Client {
        &self.client
    }

    /// Performs the single list request.
    ///
    /// `Ok(None)` is a successful response that carried no `results`.
    pub async fn fetch_page(&self) -> Result<Option<Vec<PokemonSummary>>, FetchError> {
        let url = self.list_url.as_str();
        tracing::debug!(%url, "Requesting Pokémon list");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_transport(url, e))?;

        Ok(parse_list_body(&bytes)?)
    }
}
