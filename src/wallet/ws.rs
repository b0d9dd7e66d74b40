//! Wallet backend over a WebSocket RPC connection (ethers-rs).

use crate::common::NameServiceError;
use crate::wallet::WalletProvider;
use async_trait::async_trait;
use ethers::providers::{Provider, ProviderError, RpcError, Ws};
use serde_json::Value;
use tracing::debug;

pub struct WsWallet {
    provider: Provider<Ws>,
}

impl WsWallet {
    pub async fn connect(rpc_ws_url: &str) -> Result<Self, NameServiceError> {
        let provider = Provider::<Ws>::connect(rpc_ws_url)
            .await
            .map_err(|e| NameServiceError::WsRpcError(e.to_string()))?;
        Ok(Self { provider })
    }

    pub fn provider(&self) -> &Provider<Ws> {
        &self.provider
    }
}

fn map_provider_error(err: ProviderError) -> NameServiceError {
    match err.as_error_response() {
        Some(rpc) => NameServiceError::Rpc {
            code: rpc.code,
            message: rpc.message.clone(),
        },
        None => NameServiceError::WsRpcError(err.to_string()),
    }
}

#[async_trait]
impl WalletProvider for WsWallet {
    fn wallet_name(&self) -> &str {
        "WebSocket JSON-RPC"
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, NameServiceError> {
        debug!(method, "wallet request (ws)");
        self.provider
            .request::<Value, Value>(method, params)
            .await
            .map_err(map_provider_error)
    }
}
