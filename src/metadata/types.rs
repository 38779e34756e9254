use serde::{Deserialize, Serialize};

/// Off-chain token metadata
///
/// Every recognized field is optional; a missing field is a modeled state
/// rendered with a placeholder, not a lookup failure. Unknown fields in
/// the JSON body are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NftMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}
