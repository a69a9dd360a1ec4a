//! Broker symbol listing.
//!
//! The normalizer depends on a single external operation: list every
//! tradable symbol the broker currently offers, suffix variants included.
//! [`SymbolSource`] is that seam; [`GatewayClient`] implements it over the
//! trading gateway's REST API.

mod gateway;

pub use gateway::GatewayClient;

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::SymbolError;

/// Supplier of the broker's tradable symbol universe.
///
/// Implementations own transport concerns (timeouts, auth, retries). The
/// normalizer calls [`list_symbols`](Self::list_symbols) at most once per
/// refresh and surfaces any error unchanged.
#[async_trait]
pub trait SymbolSource: Send + Sync {
    /// Identifier used in log messages.
    fn id(&self) -> &str;

    /// Every broker-native tradable symbol name, in broker order.
    async fn list_symbols(&self) -> Result<Vec<String>, SymbolError>;
}

#[async_trait]
impl<T: SymbolSource + ?Sized> SymbolSource for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    async fn list_symbols(&self) -> Result<Vec<String>, SymbolError> {
        (**self).list_symbols().await
    }
}
