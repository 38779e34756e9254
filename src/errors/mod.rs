/// Structured error types for the viewer
///
/// Every remote interaction produces a typed failure so the driver can
/// pattern-match the fatal/recoverable split instead of unwinding through
/// the whole run:
/// - Connectivity / InvalidAddress / Configuration and an Rpc or revert on
///   the balance call abort the run
/// - Rpc / ContractRevert on a per-item call skip that item
/// - MetadataFetch renders as absent metadata

#[derive(Debug, Clone)]
pub enum ViewerError {
    /// Node unreachable before any contract work started
    Connectivity { endpoint: String, reason: String },

    /// Bad or missing runtime configuration (endpoint URL, contract address)
    Configuration { field: String, reason: String },

    /// Wallet address failed the canonical format check
    InvalidAddress { input: String },

    /// RPC transport failure on a contract call
    Rpc { method: String, reason: String },

    /// The contract reverted the call (nonexistent token, index out of range)
    ContractRevert { method: String, reason: String },

    /// Off-chain metadata GET failed (network, non-2xx status, bad JSON)
    MetadataFetch { uri: String, reason: String },

    /// Local I/O failure (stdin/stdout during the prompt)
    Io { context: String, reason: String },
}

impl std::fmt::Display for ViewerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewerError::Connectivity { endpoint, reason } => {
                write!(f, "Cannot reach node at {}: {}", endpoint, reason)
            }
            ViewerError::Configuration { field, reason } => {
                write!(f, "Invalid config field '{}': {}", field, reason)
            }
            ViewerError::InvalidAddress { input } => {
                write!(f, "Invalid wallet address: {}", input)
            }
            ViewerError::Rpc { method, reason } => {
                write!(f, "RPC call {} failed: {}", method, reason)
            }
            ViewerError::ContractRevert { method, reason } => {
                write!(f, "Contract reverted {}: {}", method, reason)
            }
            ViewerError::MetadataFetch { uri, reason } => {
                write!(f, "Metadata fetch from {} failed: {}", uri, reason)
            }
            ViewerError::Io { context, reason } => {
                write!(f, "I/O error ({}): {}", context, reason)
            }
        }
    }
}

impl std::error::Error for ViewerError {}

impl ViewerError {
    pub fn connectivity(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        ViewerError::Connectivity {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    pub fn configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ViewerError::Configuration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_address(input: impl Into<String>) -> Self {
        ViewerError::InvalidAddress {
            input: input.into(),
        }
    }

    pub fn rpc(method: impl Into<String>, reason: impl Into<String>) -> Self {
        ViewerError::Rpc {
            method: method.into(),
            reason: reason.into(),
        }
    }

    pub fn contract_revert(method: impl Into<String>, reason: impl Into<String>) -> Self {
        ViewerError::ContractRevert {
            method: method.into(),
            reason: reason.into(),
        }
    }

    pub fn metadata_fetch(uri: impl Into<String>, reason: impl Into<String>) -> Self {
        ViewerError::MetadataFetch {
            uri: uri.into(),
            reason: reason.into(),
        }
    }

    pub fn io(context: impl Into<String>, reason: impl Into<String>) -> Self {
        ViewerError::Io {
            context: context.into(),
            reason: reason.into(),
        }
    }
}
