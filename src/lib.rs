//! `love-name-service-rs`
//!
//! Client for the Love Name Service: connect a wallet, make sure it is on the
//! right chain, mint `.love` names and attach records to them.
//!
//! ## Chain names
//!
//! ```
//! use love_name_service_rs::network_name;
//!
//! assert_eq!(network_name("0x89"), "Polygon Mainnet");
//! assert_eq!(network_name("0x999"), "Unknown (0x999)");
//! ```
//!
//! ## Minting
//!
//! ```no_run
//! use love_name_service_rs::{
//!     DomainForm, NameService, NameServiceConfig, Network, RpcWallet, WalletSession,
//! };
//! use std::str::FromStr;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), love_name_service_rs::NameServiceError> {
//! let config = NameServiceConfig::from_env()?;
//! let wallet = RpcWallet::connect(&config.rpc_url).await?;
//!
//! let mut session = WalletSession::new(Network::PolygonMumbai);
//! let account = session.connect_wallet(&wallet).await?;
//! if !session.is_on_target_network() {
//!     session.switch_network(&wallet).await?;
//! }
//!
//! let service = NameService::new(wallet, &config);
//! let from = ethers::core::types::Address::from_str(account.trim_start_matches("0x"))
//!     .map_err(|e| love_name_service_rs::NameServiceError::Config(e.to_string()))?;
//! let outcome = service.mint_domain(from, &DomainForm::new("cupid")).await?;
//! println!("minted {} for {} MATIC", outcome.name, outcome.price);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod chains;
pub mod common;
pub mod domains;
pub mod wallet;

// Re-export common types
pub use app::AppView;
pub use chains::{AddChainParams, NativeCurrency, Network, known_networks, network_name};
pub use common::{NameServiceConfig, NameServiceError, ReceiptPolling, init_tracing, load_dotenv};
pub use domains::{
    DomainForm, DomainRecord, DomainRecords, MintOutcome, NameService, price_for, price_wei,
    validate_domain,
};
pub use wallet::{HttpWallet, RpcWallet, TxReceipt, WalletProvider, WalletSession, WsWallet};
