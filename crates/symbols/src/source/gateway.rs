//! REST client for the trading gateway's symbol listing endpoint.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode};

use crate::config::GatewayConfig;
use crate::errors::SymbolError;

use super::SymbolSource;

const SOURCE_ID: &str = "GATEWAY";

/// Endpoint returning a JSON array of symbol names.
const SYMBOL_LIST_PATH: &str = "/SymbolList";

/// Symbol source backed by the gateway's `GET /SymbolList?id={token}`.
///
/// # Example
///
/// ```ignore
/// use mtgate_symbols::{GatewayClient, GatewayConfig, SymbolNormalizer};
///
/// let client = GatewayClient::new(GatewayConfig::default().with_token(token));
/// let normalizer = SymbolNormalizer::new(client);
/// let symbol = normalizer.normalize("gold").await?;
/// ```
pub struct GatewayClient {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(config.token),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the session token returned by the gateway's connect call.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn symbol_list_url(&self) -> String {
        format!("{}{}", self.base_url, SYMBOL_LIST_PATH)
    }
}

#[async_trait]
impl SymbolSource for GatewayClient {
    fn id(&self) -> &str {
        SOURCE_ID
    }

    async fn list_symbols(&self) -> Result<Vec<String>, SymbolError> {
        let token = self
            .token()
            .filter(|t| !t.is_empty())
            .ok_or(SymbolError::NotConnected)?;

        let url = self.symbol_list_url();
        debug!("Fetching symbol list from {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("id", token.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            warn!("Symbol list request failed with status {}", status);
            return Err(SymbolError::Gateway {
                status: status.as_u16(),
                body,
            });
        }

        parse_symbol_list(&body)
    }
}

fn parse_symbol_list(body: &str) -> Result<Vec<String>, SymbolError> {
    serde_json::from_str::<Vec<String>>(body)
        .map_err(|e| SymbolError::Decode(format!("{}, body: {}", e, body)))
}
