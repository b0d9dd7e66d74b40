use async_trait::async_trait;
use ethers::core::abi::{self, ParamType, Token};
use ethers::core::types::{Address, Bytes, H256};
use love_name_service_rs::domains::abi::selector;
use love_name_service_rs::{NameServiceConfig, NameServiceError, WalletProvider};
use serde_json::{Value, json};
use std::sync::Mutex;
use std::time::Duration;

type Handler = Box<dyn Fn(&str, &Value) -> Result<Value, NameServiceError> + Send + Sync>;

/// In-memory wallet: answers every request through a closure and records it.
pub struct MockWallet {
    handler: Handler,
    calls: Mutex<Vec<(String, Value)>>,
}

// Allow dead code warnings since different test files use different items from this module
#[allow(dead_code)]
impl MockWallet {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&str, &Value) -> Result<Value, NameServiceError> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls().into_iter().map(|(method, _)| method).collect()
    }

    pub fn calls_to(&self, method: &str) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter(|(m, _)| m == method)
            .map(|(_, params)| params)
            .collect()
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    fn wallet_name(&self) -> &str {
        "mock"
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, NameServiceError> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), params.clone()));
        (self.handler)(method, &params)
    }
}

#[allow(dead_code)]
pub const REGISTER_HASH: &str =
    "0x1111111111111111111111111111111111111111111111111111111111111111";
#[allow(dead_code)]
pub const RECORDS_HASH: &str =
    "0x2222222222222222222222222222222222222222222222222222222222222222";

#[allow(dead_code)]
pub fn rpc_error(code: i64, message: &str) -> NameServiceError {
    NameServiceError::Rpc {
        code,
        message: message.to_string(),
    }
}

#[allow(dead_code)]
pub fn contract() -> Address {
    Address::from_low_u64_be(0x10ce)
}

#[allow(dead_code)]
pub fn sender() -> Address {
    Address::from_low_u64_be(0xbeef)
}

/// Config pointed at the mock with fast receipt polling.
#[allow(dead_code)]
pub fn test_config(max_attempts: u32) -> NameServiceConfig {
    test_config_with_interval(max_attempts, Duration::from_millis(1))
}

#[allow(dead_code)]
pub fn test_config_with_interval(max_attempts: u32, interval: Duration) -> NameServiceConfig {
    let mut config = NameServiceConfig::new("mock://wallet", contract());
    config.receipt_polling.interval = interval;
    config.receipt_polling.max_attempts = max_attempts;
    config
}

#[allow(dead_code)]
pub fn receipt(hash: &str, status: &str) -> Value {
    json!({
        "transactionHash": hash,
        "blockNumber": "0x1",
        "status": status
    })
}

#[allow(dead_code)]
pub fn hash(value: &str) -> H256 {
    serde_json::from_value(json!(value)).unwrap()
}

/// Calldata of an `eth_call` / `eth_sendTransaction` request.
#[allow(dead_code)]
pub fn calldata(params: &Value) -> Bytes {
    serde_json::from_value(params[0]["data"].clone()).unwrap()
}

#[allow(dead_code)]
pub fn is_call_to(params: &Value, signature: &str) -> bool {
    calldata(params)[..4] == selector(signature)
}

/// Decode the string arguments following the selector.
#[allow(dead_code)]
pub fn string_args(params: &Value, count: usize) -> Vec<String> {
    let data = calldata(params);
    abi::decode(&vec![ParamType::String; count], &data[4..])
        .unwrap()
        .into_iter()
        .map(|token| token.into_string().unwrap())
        .collect()
}

/// ABI-encode return values as the hex string an RPC returns.
#[allow(dead_code)]
pub fn encoded(tokens: &[Token]) -> Value {
    serde_json::to_value(Bytes::from(abi::encode(tokens))).unwrap()
}
