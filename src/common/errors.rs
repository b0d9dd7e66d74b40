#[derive(thiserror::Error, Debug)]
pub enum NameServiceError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("JSON-RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("WebSocket / RPC error: {0}")]
    WsRpcError(String),

    #[error("No authorized account found")]
    NoAccounts,

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Timed out waiting for receipt of {0}")]
    ReceiptTimeout(String),

    #[error("ABI error: {0}")]
    Abi(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Wallet error code for a chain the wallet does not know yet (EIP-3085 flow).
pub const UNRECOGNIZED_CHAIN_CODE: i64 = 4902;

/// EIP-1193 code for a request the user rejected in the wallet.
pub const USER_REJECTED_CODE: i64 = 4001;

impl NameServiceError {
    /// JSON-RPC error code, if this error came back from the wallet.
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            NameServiceError::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_unrecognized_chain(&self) -> bool {
        self.rpc_code() == Some(UNRECOGNIZED_CHAIN_CODE)
    }

    pub fn is_user_rejected(&self) -> bool {
        self.rpc_code() == Some(USER_REJECTED_CODE)
    }
}
