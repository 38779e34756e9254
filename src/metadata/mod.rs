//! Off-chain metadata fetching
//!
//! Token URIs either point straight at an HTTP endpoint or use the
//! content-addressed `ipfs://` scheme, which is rewritten to the ipfs.io
//! gateway before the GET. A failed fetch never stops the caller: the
//! result is simply absent metadata.

pub mod types;

pub use types::NftMetadata;

use crate::errors::ViewerError;
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use reqwest::Client;

const IPFS_SCHEME: &str = "ipfs://";
const IPFS_GATEWAY_BASE: &str = "https://ipfs.io/ipfs/";

/// Rewrite a content-addressed URI to its HTTP gateway form
///
/// Idempotent on anything that is not `ipfs://`.
pub fn rewrite_gateway_url(uri: &str) -> String {
    match uri.strip_prefix(IPFS_SCHEME) {
        Some(rest) => format!("{}{}", IPFS_GATEWAY_BASE, rest),
        None => uri.to_string(),
    }
}

/// Parse a metadata JSON body
pub fn parse_metadata(body: &str) -> Result<NftMetadata, serde_json::Error> {
    serde_json::from_str(body)
}

/// Source of token metadata keyed by token URI
///
/// Absent means the fetch or parse failed; the error has already been
/// reported and must not abort the batch.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn fetch(&self, uri: &str) -> Option<NftMetadata>;
}

/// HTTP-backed metadata source
///
/// One GET per URI with the client library defaults: no custom headers,
/// no timeout override, no retry.
pub struct MetadataFetcher {
    client: Client,
}

impl MetadataFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn fetch_inner(&self, target: &str) -> Result<NftMetadata, ViewerError> {
        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| ViewerError::metadata_fetch(target, e.to_string()))?
            .error_for_status()
            .map_err(|e| ViewerError::metadata_fetch(target, e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| ViewerError::metadata_fetch(target, e.to_string()))?;

        parse_metadata(&body)
            .map_err(|e| ViewerError::metadata_fetch(target, format!("JSON parse failed: {}", e)))
    }
}

impl Default for MetadataFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataSource for MetadataFetcher {
    async fn fetch(&self, uri: &str) -> Option<NftMetadata> {
        let target = rewrite_gateway_url(uri);
        logger::debug(LogTag::Metadata, &format!("GET {}", target));

        match self.fetch_inner(&target).await {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                println!("Lỗi khi lấy metadata: {}", e);
                None
            }
        }
    }
}
