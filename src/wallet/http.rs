//! JSON-RPC 2.0 wallet backend over HTTP (reqwest).
//!
//! Works against any node that signs for unlocked accounts (anvil, hardhat, geth --dev).

use crate::common::{NameServiceError, create_http_client};
use crate::wallet::WalletProvider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<JsonRpcErrorObject>,
}

impl JsonRpcResponse {
    pub(crate) fn into_result(self) -> Result<Value, NameServiceError> {
        match (self.error, self.result) {
            (Some(err), _) => Err(NameServiceError::Rpc {
                code: err.code,
                message: err.message,
            }),
            (None, Some(result)) => Ok(result),
            // `null` results (e.g. pending receipts) deserialize to None
            (None, None) => Ok(Value::Null),
        }
    }
}

/// Non-2xx reply: some nodes still send a JSON-RPC error object in the body,
/// which keeps its code; anything else is a transport error.
pub(crate) fn error_from_http_status(
    wallet_name: &str,
    status: reqwest::StatusCode,
    body: &str,
) -> NameServiceError {
    if let Ok(JsonRpcResponse {
        error: Some(err), ..
    }) = serde_json::from_str::<JsonRpcResponse>(body)
    {
        return NameServiceError::Rpc {
            code: err.code,
            message: err.message,
        };
    }
    NameServiceError::WsRpcError(format!("{} HTTP error: {} - {}", wallet_name, status, body))
}

pub struct HttpWallet {
    url: String,
    client: reqwest::Client,
    next_id: AtomicU64,
}

impl HttpWallet {
    pub fn new(url: impl Into<String>) -> Result<Self, NameServiceError> {
        Ok(Self::with_client(url, create_http_client()?))
    }

    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WalletProvider for HttpWallet {
    fn wallet_name(&self) -> &str {
        "HTTP JSON-RPC"
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, NameServiceError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };
        debug!(id, method, url = %self.url, "wallet request");

        let response = self.client.post(&self.url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(error_from_http_status(self.wallet_name(), status, &error_text));
        }

        let rpc: JsonRpcResponse = response.json().await?;
        rpc.into_result()
    }
}
