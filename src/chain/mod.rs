//! Chain client wrapper over the ethers HTTP provider
//!
//! Holds the provider handle for the configured endpoint and exposes the
//! connectivity probe and the canonical address check. Contract access
//! lives in the facade under `contract`.

pub mod contract;

pub use contract::{CollectionReader, Erc721Collection};

use crate::errors::ViewerError;
use crate::logger::{self, LogTag};
use ethers::providers::{Http, Middleware, Provider};
use ethers::types::Address;
use std::sync::Arc;

pub struct ChainClient {
    provider: Arc<Provider<Http>>,
    endpoint: String,
}

impl ChainClient {
    /// Bind a provider to the RPC endpoint URL
    ///
    /// Only the URL shape is validated here; reachability is checked
    /// separately so the two failure modes stay distinguishable.
    pub fn connect(rpc_url: &str) -> Result<Self, ViewerError> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| ViewerError::configuration("rpc_url", e.to_string()))?;
        Ok(Self {
            provider: Arc::new(provider),
            endpoint: rpc_url.to_string(),
        })
    }

    /// One eth_blockNumber round trip to confirm the node answers
    pub async fn check_connectivity(&self) -> Result<(), ViewerError> {
        match self.provider.get_block_number().await {
            Ok(block) => {
                logger::debug(
                    LogTag::Chain,
                    &format!("Node reachable, current block {}", block),
                );
                Ok(())
            }
            Err(e) => Err(ViewerError::connectivity(&self.endpoint, e.to_string())),
        }
    }

    /// Canonical address-format check (20-byte hex, optional 0x prefix)
    pub fn validate_address(input: &str) -> Result<Address, ViewerError> {
        let trimmed = input.trim();
        trimmed
            .parse::<Address>()
            .map_err(|_| ViewerError::invalid_address(trimmed))
    }

    pub fn provider(&self) -> Arc<Provider<Http>> {
        Arc::clone(&self.provider)
    }
}
