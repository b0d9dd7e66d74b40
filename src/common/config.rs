//! Client configuration read from the environment (optionally via `.env`).

use crate::common::NameServiceError;
use ethers::core::types::Address;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_RPC_URL: &str = "LNS_RPC_URL";
pub const ENV_CONTRACT_ADDRESS: &str = "LNS_CONTRACT_ADDRESS";
pub const ENV_TLD: &str = "LNS_TLD";
pub const ENV_RECEIPT_POLL_MS: &str = "LNS_RECEIPT_POLL_MS";
pub const ENV_RECEIPT_MAX_ATTEMPTS: &str = "LNS_RECEIPT_MAX_ATTEMPTS";

pub const DEFAULT_TLD: &str = "love";
const DEFAULT_RECEIPT_POLL_MS: u64 = 2000;
const DEFAULT_RECEIPT_MAX_ATTEMPTS: u32 = 60;

/// Loads `.env` from the current or project directory. Call before reading env vars (e.g. in tests).
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// How long to keep polling for a transaction receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptPolling {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for ReceiptPolling {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_RECEIPT_POLL_MS),
            max_attempts: DEFAULT_RECEIPT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NameServiceConfig {
    /// JSON-RPC endpoint of the wallet / node (http(s):// or ws(s)://), see `RpcWallet::connect`.
    pub rpc_url: String,
    /// Deployed name-service contract.
    pub contract_address: Address,
    /// Top-level domain shown after minted names, without the dot.
    pub tld: String,
    pub receipt_polling: ReceiptPolling,
}

impl NameServiceConfig {
    pub fn new(rpc_url: impl Into<String>, contract_address: Address) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            contract_address,
            tld: DEFAULT_TLD.to_string(),
            receipt_polling: ReceiptPolling::default(),
        }
    }

    /// Read config from the process environment after loading `.env`.
    pub fn from_env() -> Result<Self, NameServiceError> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NameServiceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let rpc_url = get(ENV_RPC_URL)
            .ok_or_else(|| NameServiceError::Config(format!("{} is not set", ENV_RPC_URL)))?;
        let contract_raw = get(ENV_CONTRACT_ADDRESS).ok_or_else(|| {
            NameServiceError::Config(format!("{} is not set", ENV_CONTRACT_ADDRESS))
        })?;
        let contract_address = Address::from_str(contract_raw.trim().trim_start_matches("0x"))
            .map_err(|e| NameServiceError::Config(format!("{}: {}", ENV_CONTRACT_ADDRESS, e)))?;

        let mut config = Self::new(rpc_url, contract_address);
        if let Some(tld) = get(ENV_TLD) {
            config.tld = tld.trim_start_matches('.').to_string();
        }
        if let Some(ms) = get(ENV_RECEIPT_POLL_MS) {
            let ms = parse_number::<u64>(&ms, ENV_RECEIPT_POLL_MS)?;
            config.receipt_polling.interval = Duration::from_millis(ms);
        }
        if let Some(attempts) = get(ENV_RECEIPT_MAX_ATTEMPTS) {
            config.receipt_polling.max_attempts =
                parse_number::<u32>(&attempts, ENV_RECEIPT_MAX_ATTEMPTS)?;
        }
        Ok(config)
    }
}

fn parse_number<T: FromStr>(value: &str, key: &str) -> Result<T, NameServiceError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| NameServiceError::Config(format!("{} must be a number, got {:?}", key, value)))
}
