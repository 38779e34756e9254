//! User-facing output for the interactive flow
//!
//! All protocol text is localized Vietnamese, carried over verbatim from
//! the shipped interface. Rendering is pure so the block format is
//! testable without capturing stdout.

use super::OwnedNft;

pub const MSG_PROMPT: &str = "Nhập địa chỉ ví Ethereum của bạn: ";
pub const MSG_NO_CONNECTION: &str =
    "Không thể kết nối đến mạng BASE. Vui lòng kiểm tra API key của bạn.";
pub const MSG_INVALID_ADDRESS: &str = "Địa chỉ ví không hợp lệ!";
pub const MSG_NO_NFTS: &str = "Ví này không sở hữu NFT nào trong bộ sưu tập này.";
pub const MSG_FETCHING: &str = "\nĐang lấy thông tin NFT...";
pub const MSG_METADATA_UNAVAILABLE: &str = "Không thể lấy metadata của NFT";

pub const PLACEHOLDER_NAME: &str = "Không có tên";
pub const PLACEHOLDER_DESCRIPTION: &str = "Không có mô tả";
pub const PLACEHOLDER_IMAGE: &str = "Không có hình ảnh";

/// Render one numbered NFT block
///
/// Metadata fields fall back to per-field placeholders; a wholly absent
/// metadata document collapses to the single unavailable line.
pub fn render_nft_block(nft: &OwnedNft) -> String {
    let mut block = String::new();
    block.push_str(&format!("\nNFT #{}:\n", nft.ordinal));
    block.push_str(&format!("Token ID: {}\n", nft.token_id));

    match &nft.metadata {
        Some(metadata) => {
            block.push_str(&format!(
                "Tên: {}\n",
                metadata.name.as_deref().unwrap_or(PLACEHOLDER_NAME)
            ));
            block.push_str(&format!(
                "Mô tả: {}\n",
                metadata
                    .description
                    .as_deref()
                    .unwrap_or(PLACEHOLDER_DESCRIPTION)
            ));
            block.push_str(&format!(
                "Hình ảnh: {}\n",
                metadata.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
            ));
        }
        None => {
            block.push_str(MSG_METADATA_UNAVAILABLE);
            block.push('\n');
        }
    }

    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::NftMetadata;
    use ethers::types::U256;

    #[test]
    fn test_render_block_with_full_metadata() {
        let nft = OwnedNft {
            ordinal: U256::from(1),
            token_id: U256::from(5),
            token_uri: "ipfs://QmX/5.json".to_string(),
            metadata: Some(NftMetadata {
                name: Some("Cat #5".to_string()),
                description: Some("A cat".to_string()),
                image: Some("http://img/5.png".to_string()),
            }),
        };
        let block = render_nft_block(&nft);
        assert!(block.contains("NFT #1:"));
        assert!(block.contains("Token ID: 5"));
        assert!(block.contains("Tên: Cat #5"));
        assert!(block.contains("Mô tả: A cat"));
        assert!(block.contains("Hình ảnh: http://img/5.png"));
    }

    #[test]
    fn test_render_block_uses_placeholders_for_missing_fields() {
        let nft = OwnedNft {
            ordinal: U256::from(1),
            token_id: U256::from(5),
            token_uri: "ipfs://QmX/5.json".to_string(),
            metadata: Some(NftMetadata {
                name: Some("Cat #5".to_string()),
                description: None,
                image: Some("http://img/5.png".to_string()),
            }),
        };
        let block = render_nft_block(&nft);
        assert!(block.contains(&format!("Mô tả: {}", PLACEHOLDER_DESCRIPTION)));
    }

    #[test]
    fn test_render_block_with_absent_metadata() {
        let nft = OwnedNft {
            ordinal: U256::from(2),
            token_id: U256::from(9),
            token_uri: "https://example.com/9.json".to_string(),
            metadata: None,
        };
        let block = render_nft_block(&nft);
        assert!(block.contains("NFT #2:"));
        assert!(block.contains("Token ID: 9"));
        assert!(block.contains(MSG_METADATA_UNAVAILABLE));
        assert!(!block.contains("Tên:"));
    }
}
