use serde::{Deserialize, Serialize};
use std::env;

/// Base mainnet RPC endpoint template - the API key is appended as the
/// final path segment
const ALCHEMY_BASE_URL: &str = "https://base-mainnet.g.alchemy.com/v2";

/// Runtime configuration sourced from the environment
///
/// Values are read as-is: a missing key or contract address is carried as
/// an empty string and surfaces later as a connectivity or call failure,
/// it is not rejected at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub alchemy_api_key: String,
    pub contract_address: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            alchemy_api_key: env::var("ALCHEMY_API_KEY").unwrap_or_default(),
            contract_address: env::var("NFT_CONTRACT_ADDRESS").unwrap_or_default(),
        }
    }

    /// Full RPC endpoint URL with the API key interpolated
    pub fn rpc_url(&self) -> String {
        format!("{}/{}", ALCHEMY_BASE_URL, self.alchemy_api_key)
    }
}
