pub mod http;
pub mod provider;
pub mod rpc;
pub mod session;
pub mod ws;

// Re-export
pub use http::HttpWallet;
pub use provider::{TxReceipt, WalletProvider};
pub use rpc::RpcWallet;
pub use session::WalletSession;
pub use ws::WsWallet;
