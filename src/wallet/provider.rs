use crate::chains::AddChainParams;
use crate::common::NameServiceError;
use async_trait::async_trait;
use ethers::core::types::{Address, Bytes, H256, TransactionRequest, U64};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// The parts of a transaction receipt the client reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxReceipt {
    pub transaction_hash: H256,
    #[serde(default)]
    pub block_number: Option<U64>,
    /// 1 = success, 0 = reverted. Absent on pre-Byzantium chains.
    #[serde(default)]
    pub status: Option<U64>,
}

impl TxReceipt {
    pub fn succeeded(&self) -> bool {
        self.status == Some(U64::one())
    }
}

// EIP-1193 style wallet: one request method, typed helpers on top
#[async_trait]
pub trait WalletProvider: Send + Sync {
    // Backend specific methods
    fn wallet_name(&self) -> &str;

    /// Send a raw JSON-RPC request. `params` is the positional params array.
    async fn request(&self, method: &str, params: Value) -> Result<Value, NameServiceError>;

    // Default implementations
    async fn request_typed<T: for<'de> Deserialize<'de>>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, NameServiceError> {
        let value = self.request(method, params).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Accounts already authorized for this origin. Never prompts.
    async fn accounts(&self) -> Result<Vec<String>, NameServiceError> {
        self.request_typed("eth_accounts", json!([])).await
    }

    /// Ask the wallet to authorize accounts. May prompt the user.
    async fn request_accounts(&self) -> Result<Vec<String>, NameServiceError> {
        self.request_typed("eth_requestAccounts", json!([])).await
    }

    async fn chain_id(&self) -> Result<String, NameServiceError> {
        self.request_typed("eth_chainId", json!([])).await
    }

    async fn switch_chain(&self, chain_id_hex: &str) -> Result<(), NameServiceError> {
        self.request(
            "wallet_switchEthereumChain",
            json!([{ "chainId": chain_id_hex }]),
        )
        .await?;
        Ok(())
    }

    async fn add_chain(&self, params: &AddChainParams) -> Result<(), NameServiceError> {
        self.request("wallet_addEthereumChain", json!([params])).await?;
        Ok(())
    }

    /// Hand a transaction to the wallet for signing and broadcast.
    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<H256, NameServiceError> {
        self.request_typed("eth_sendTransaction", json!([tx])).await
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, NameServiceError> {
        self.request_typed("eth_call", json!([{ "to": to, "data": data }, "latest"]))
            .await
    }

    async fn transaction_receipt(&self, hash: H256) -> Result<Option<TxReceipt>, NameServiceError> {
        self.request_typed("eth_getTransactionReceipt", json!([hash])).await
    }
}
