use serde::{Deserialize, Serialize};

use crate::pokemon::DEFAULT_ARTWORK_TEMPLATE;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub artwork: ArtworkConfig,
    pub ui: UiConfig,
}

/// List endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API root, without the `/pokemon` resource.
    pub base_url: String,
    /// Value of the `limit` query parameter.
    pub page_size: u32,
    /// Connection timeout in seconds (default: 10).
    pub connect_timeout_seconds: u64,
    /// Total request timeout. Unset means a slow request keeps loading.
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtworkConfig {
    /// Image URL template; `{id}` is replaced by the identifier.
    pub template: String,
}

/// Terminal presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Redraw and spinner interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Card size in terminal cells, borders included.
    pub card_width: u16,
    pub card_height: u16,
    /// Fetch and draw artwork inside cards.
    pub artwork: bool,
}

fn default_user_agent() -> String {
    format!("pokelist/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            page_size: 20,
            connect_timeout_seconds: 10,
            timeout_seconds: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ArtworkConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_ARTWORK_TEMPLATE.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 120,
            card_width: 22,
            card_height: 12,
            artwork: true,
        }
    }
}
