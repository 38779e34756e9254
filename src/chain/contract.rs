//! Read-only ERC-721 collection facade
//!
//! The collection contract is consumed through exactly three view methods;
//! their selectors are a hard external contract shared with the deployed
//! collections, so the ABI below must not drift.

use super::ChainClient;
use crate::errors::ViewerError;
use async_trait::async_trait;
use ethers::contract::{abigen, ContractError};
use ethers::providers::{Http, Provider};
use ethers::types::{Address, U256};

abigen!(
    CollectionContract,
    r#"[
        function balanceOf(address owner) view returns (uint256)
        function tokenOfOwnerByIndex(address owner, uint256 index) view returns (uint256)
        function tokenURI(uint256 tokenId) view returns (string)
    ]"#
);

/// Read access to one NFT collection
///
/// Seam between the driver and the chain: production uses the
/// ethers-backed [`Erc721Collection`], tests substitute a mock that
/// records the call sequence.
#[async_trait]
pub trait CollectionReader: Send + Sync {
    async fn balance_of(&self, owner: Address) -> Result<U256, ViewerError>;

    /// Only defined for `index < balance_of(owner)`; the caller must keep
    /// the index within the last-read balance.
    async fn token_of_owner_by_index(
        &self,
        owner: Address,
        index: U256,
    ) -> Result<U256, ViewerError>;

    async fn token_uri(&self, token_id: U256) -> Result<String, ViewerError>;
}

pub struct Erc721Collection {
    contract: CollectionContract<Provider<Http>>,
}

impl Erc721Collection {
    pub fn new(client: &ChainClient, contract_address: Address) -> Self {
        Self {
            contract: CollectionContract::new(contract_address, client.provider()),
        }
    }
}

#[async_trait]
impl CollectionReader for Erc721Collection {
    async fn balance_of(&self, owner: Address) -> Result<U256, ViewerError> {
        self.contract
            .balance_of(owner)
            .call()
            .await
            .map_err(|e| map_contract_error("balanceOf", e))
    }

    async fn token_of_owner_by_index(
        &self,
        owner: Address,
        index: U256,
    ) -> Result<U256, ViewerError> {
        self.contract
            .token_of_owner_by_index(owner, index)
            .call()
            .await
            .map_err(|e| map_contract_error("tokenOfOwnerByIndex", e))
    }

    async fn token_uri(&self, token_id: U256) -> Result<String, ViewerError> {
        self.contract
            .token_uri(token_id)
            .call()
            .await
            .map_err(|e| map_contract_error("tokenURI", e))
    }
}

/// Split reverts (nonexistent token, index past the balance) from
/// transport-level RPC failures
fn map_contract_error(method: &str, err: ContractError<Provider<Http>>) -> ViewerError {
    if matches!(err, ContractError::Revert(_)) {
        ViewerError::contract_revert(method, err.to_string())
    } else {
        ViewerError::rpc(method, err.to_string())
    }
}
