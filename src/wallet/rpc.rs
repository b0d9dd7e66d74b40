//! Backend chosen from the RPC URL scheme.

use crate::common::NameServiceError;
use crate::wallet::{HttpWallet, WalletProvider, WsWallet};
use async_trait::async_trait;
use serde_json::Value;

pub enum RpcWallet {
    Http(HttpWallet),
    Ws(WsWallet),
}

impl RpcWallet {
    /// `http(s)://` goes over reqwest, `ws(s)://` over an ethers WebSocket.
    pub async fn connect(rpc_url: &str) -> Result<Self, NameServiceError> {
        let scheme = rpc_url
            .split_once("://")
            .map(|(scheme, _)| scheme.to_ascii_lowercase())
            .unwrap_or_default();
        match scheme.as_str() {
            "http" | "https" => Ok(Self::Http(HttpWallet::new(rpc_url)?)),
            "ws" | "wss" => Ok(Self::Ws(WsWallet::connect(rpc_url).await?)),
            _ => Err(NameServiceError::Config(format!(
                "unsupported RPC URL scheme: {}",
                rpc_url
            ))),
        }
    }
}

#[async_trait]
impl WalletProvider for RpcWallet {
    fn wallet_name(&self) -> &str {
        match self {
            Self::Http(wallet) => wallet.wallet_name(),
            Self::Ws(wallet) => wallet.wallet_name(),
        }
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, NameServiceError> {
        match self {
            Self::Http(wallet) => wallet.request(method, params).await,
            Self::Ws(wallet) => wallet.request(method, params).await,
        }
    }
}
