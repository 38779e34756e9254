//! Interactive driver
//!
//! Linear sequence per run: connectivity probe, one address prompt,
//! validation, balance lookup, then a strictly increasing index walk over
//! the owned tokens. Each remote call is awaited before the next; chain
//! and metadata access come in through the `CollectionReader` /
//! `MetadataSource` seams so the sequence is testable against mocks.

pub mod display;

use crate::chain::{ChainClient, CollectionReader, Erc721Collection};
use crate::config::Config;
use crate::errors::ViewerError;
use crate::logger::{self, LogTag};
use crate::metadata::{MetadataFetcher, MetadataSource, NftMetadata};
use ethers::types::{Address, U256};
use std::io::{self, BufRead, Write};

/// One enumerated token, ready for display
#[derive(Debug, Clone)]
pub struct OwnedNft {
    /// 1-based position in the output, index + 1
    pub ordinal: U256,
    pub token_id: U256,
    pub token_uri: String,
    pub metadata: Option<NftMetadata>,
}

/// Run the full interactive flow
///
/// The Aborted states (unreachable node, invalid address) print their
/// localized diagnostic and return Ok; only errors the flow cannot
/// continue past (bad contract address, failed balance call) propagate
/// to the caller's catch.
pub async fn run(config: &Config) -> Result<(), ViewerError> {
    let client = ChainClient::connect(&config.rpc_url())?;

    if let Err(e) = client.check_connectivity().await {
        logger::debug(LogTag::Viewer, &format!("Connectivity check failed: {}", e));
        println!("{}", display::MSG_NO_CONNECTION);
        return Ok(());
    }
    logger::debug(LogTag::Viewer, "Connectivity check passed");

    let input = prompt_wallet_address()?;
    let owner = match ChainClient::validate_address(&input) {
        Ok(address) => address,
        Err(_) => {
            println!("{}", display::MSG_INVALID_ADDRESS);
            return Ok(());
        }
    };

    let contract_address = ChainClient::validate_address(&config.contract_address)
        .map_err(|_| {
            ViewerError::configuration(
                "NFT_CONTRACT_ADDRESS",
                format!("not a valid contract address: '{}'", config.contract_address),
            )
        })?;

    let collection = Erc721Collection::new(&client, contract_address);
    let fetcher = MetadataFetcher::new();

    view_wallet(&collection, &fetcher, owner).await?;
    Ok(())
}

/// Prompt once on stdout and read one line from stdin
///
/// The stdin lock is scoped to the read and released on both success and
/// failure paths.
fn prompt_wallet_address() -> Result<String, ViewerError> {
    print!("{}", display::MSG_PROMPT);
    io::stdout()
        .flush()
        .map_err(|e| ViewerError::io("stdout", e.to_string()))?;

    let mut input = String::new();
    {
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        handle
            .read_line(&mut input)
            .map_err(|e| ViewerError::io("stdin", e.to_string()))?;
    }
    Ok(input.trim().to_string())
}

/// Enumerate and display every token the wallet owns
///
/// Exactly one balanceOf call, then for indices 0..balance one
/// tokenOfOwnerByIndex + tokenURI + metadata fetch each. A failure inside
/// one iteration is logged with its ordinal and the walk continues; only
/// the balance call itself is fatal, since without it the loop bound is
/// unknown. Returns the successfully enumerated tokens.
pub async fn view_wallet(
    reader: &dyn CollectionReader,
    fetcher: &dyn MetadataSource,
    owner: Address,
) -> Result<Vec<OwnedNft>, ViewerError> {
    let balance = reader.balance_of(owner).await?;
    println!("\nSố lượng NFT trong ví: {}", balance);

    if balance.is_zero() {
        println!("{}", display::MSG_NO_NFTS);
        return Ok(Vec::new());
    }

    println!("{}", display::MSG_FETCHING);

    let mut owned = Vec::new();
    let mut index = U256::zero();
    while index < balance {
        let ordinal = index + U256::one();
        match fetch_owned_nft(reader, fetcher, owner, index).await {
            Ok(nft) => {
                print!("{}", display::render_nft_block(&nft));
                owned.push(nft);
            }
            Err(e) => {
                println!("Lỗi khi lấy thông tin NFT #{}: {}", ordinal, e);
            }
        }
        index = ordinal;
    }

    Ok(owned)
}

/// Resolve one owned token: id at index, its URI, its metadata
///
/// The chain lookups share one error path (a failure in either skips the
/// item); a metadata failure is absorbed by the fetcher and shows up as
/// None.
async fn fetch_owned_nft(
    reader: &dyn CollectionReader,
    fetcher: &dyn MetadataSource,
    owner: Address,
    index: U256,
) -> Result<OwnedNft, ViewerError> {
    let token_id = reader.token_of_owner_by_index(owner, index).await?;
    let token_uri = reader.token_uri(token_id).await?;
    let metadata = fetcher.fetch(&token_uri).await;

    Ok(OwnedNft {
        ordinal: index + U256::one(),
        token_id,
        token_uri,
        metadata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::rewrite_gateway_url;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Collection mock that records every call in order
    struct MockCollection {
        balance: U256,
        /// token id per index, with its URI
        tokens: Vec<(U256, String)>,
        /// indices whose id lookup fails
        failing_indices: Vec<u64>,
        calls: Mutex<Vec<String>>,
    }

    impl MockCollection {
        fn new(tokens: Vec<(U256, String)>) -> Self {
            Self {
                balance: U256::from(tokens.len()),
                tokens,
                failing_indices: Vec::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn recorded_calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl CollectionReader for MockCollection {
        async fn balance_of(&self, _owner: Address) -> Result<U256, ViewerError> {
            self.record("balanceOf".to_string());
            Ok(self.balance)
        }

        async fn token_of_owner_by_index(
            &self,
            _owner: Address,
            index: U256,
        ) -> Result<U256, ViewerError> {
            self.record(format!("tokenOfOwnerByIndex({})", index));
            if self.failing_indices.contains(&index.as_u64()) {
                return Err(ViewerError::rpc("tokenOfOwnerByIndex", "simulated"));
            }
            Ok(self.tokens[index.as_usize()].0)
        }

        async fn token_uri(&self, token_id: U256) -> Result<String, ViewerError> {
            self.record(format!("tokenURI({})", token_id));
            self.tokens
                .iter()
                .find(|(id, _)| *id == token_id)
                .map(|(_, uri)| uri.clone())
                .ok_or_else(|| ViewerError::contract_revert("tokenURI", "nonexistent token"))
        }
    }

    /// Metadata mock keyed by the already-rewritten gateway URL; a missing
    /// key behaves like a failed GET (absent metadata)
    struct MockMetadata {
        responses: HashMap<String, NftMetadata>,
        calls: Mutex<Vec<String>>,
    }

    impl MockMetadata {
        fn empty() -> Self {
            Self {
                responses: HashMap::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn with_responses(responses: HashMap<String, NftMetadata>) -> Self {
            Self {
                responses,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn recorded_calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MetadataSource for MockMetadata {
        async fn fetch(&self, uri: &str) -> Option<NftMetadata> {
            let target = rewrite_gateway_url(uri);
            self.calls.lock().unwrap().push(target.clone());
            self.responses.get(&target).cloned()
        }
    }

    fn owner() -> Address {
        "0xd8da6bf26964af9d7eed9e03e53415d37aa96045"
            .parse()
            .unwrap()
    }

    #[tokio::test]
    async fn test_zero_balance_issues_no_enumeration_calls() {
        let collection = MockCollection::new(Vec::new());
        let fetcher = MockMetadata::empty();

        let owned = view_wallet(&collection, &fetcher, owner()).await.unwrap();

        assert!(owned.is_empty());
        assert_eq!(collection.recorded_calls(), vec!["balanceOf"]);
        assert!(fetcher.recorded_calls().is_empty());
    }

    #[tokio::test]
    async fn test_enumerates_indices_in_increasing_order() {
        let collection = MockCollection::new(vec![
            (U256::from(11), "https://meta.example/11.json".to_string()),
            (U256::from(22), "https://meta.example/22.json".to_string()),
            (U256::from(33), "https://meta.example/33.json".to_string()),
        ]);
        let fetcher = MockMetadata::empty();

        let owned = view_wallet(&collection, &fetcher, owner()).await.unwrap();

        assert_eq!(owned.len(), 3);
        assert_eq!(
            collection.recorded_calls(),
            vec![
                "balanceOf",
                "tokenOfOwnerByIndex(0)",
                "tokenURI(11)",
                "tokenOfOwnerByIndex(1)",
                "tokenURI(22)",
                "tokenOfOwnerByIndex(2)",
                "tokenURI(33)",
            ]
        );
    }

    #[tokio::test]
    async fn test_balance_failure_is_fatal() {
        struct FailingBalance;

        #[async_trait]
        impl CollectionReader for FailingBalance {
            async fn balance_of(&self, _owner: Address) -> Result<U256, ViewerError> {
                Err(ViewerError::rpc("balanceOf", "simulated outage"))
            }
            async fn token_of_owner_by_index(
                &self,
                _owner: Address,
                _index: U256,
            ) -> Result<U256, ViewerError> {
                unreachable!("must not be called when the balance lookup fails")
            }
            async fn token_uri(&self, _token_id: U256) -> Result<String, ViewerError> {
                unreachable!("must not be called when the balance lookup fails")
            }
        }

        let fetcher = MockMetadata::empty();
        let result = view_wallet(&FailingBalance, &fetcher, owner()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_item_failure_skips_and_continues() {
        let mut collection = MockCollection::new(vec![
            (U256::from(11), "https://meta.example/11.json".to_string()),
            (U256::from(22), "https://meta.example/22.json".to_string()),
            (U256::from(33), "https://meta.example/33.json".to_string()),
        ]);
        collection.failing_indices = vec![1];
        let fetcher = MockMetadata::empty();

        let owned = view_wallet(&collection, &fetcher, owner()).await.unwrap();

        // item 1 dropped, items 0 and 2 still enumerated
        assert_eq!(owned.len(), 2);
        assert_eq!(owned[0].token_id, U256::from(11));
        assert_eq!(owned[1].token_id, U256::from(33));
        let calls = collection.recorded_calls();
        assert!(calls.contains(&"tokenOfOwnerByIndex(2)".to_string()));
        assert!(!calls.contains(&"tokenURI(22)".to_string()));
    }

    #[tokio::test]
    async fn test_end_to_end_scenario_with_mixed_metadata() {
        let collection = MockCollection::new(vec![
            (U256::from(5), "ipfs://QmX/5.json".to_string()),
            (U256::from(9), "https://example.com/9.json".to_string()),
        ]);
        let mut responses = HashMap::new();
        // only the rewritten ipfs URL resolves; the second URI 404s
        responses.insert(
            "https://ipfs.io/ipfs/QmX/5.json".to_string(),
            NftMetadata {
                name: Some("Cat #5".to_string()),
                description: None,
                image: Some("http://img/5.png".to_string()),
            },
        );
        let fetcher = MockMetadata::with_responses(responses);

        let owned = view_wallet(&collection, &fetcher, owner()).await.unwrap();

        assert_eq!(owned.len(), 2);
        assert_eq!(
            fetcher.recorded_calls(),
            vec![
                "https://ipfs.io/ipfs/QmX/5.json",
                "https://example.com/9.json",
            ]
        );

        let first = display::render_nft_block(&owned[0]);
        assert!(first.contains("NFT #1:"));
        assert!(first.contains("Token ID: 5"));
        assert!(first.contains("Tên: Cat #5"));
        assert!(first.contains(&format!("Mô tả: {}", display::PLACEHOLDER_DESCRIPTION)));
        assert!(first.contains("Hình ảnh: http://img/5.png"));

        let second = display::render_nft_block(&owned[1]);
        assert!(second.contains("NFT #2:"));
        assert!(second.contains("Token ID: 9"));
        assert!(second.contains(display::MSG_METADATA_UNAVAILABLE));
    }
}
