//! Wallet session: which account is authorized and which network the wallet is on.

use crate::chains::{Network, network_name};
use crate::common::{NameServiceError, short_address};
use crate::wallet::WalletProvider;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSession {
    target: Network,
    current_account: Option<String>,
    chain_id: Option<String>,
}

impl WalletSession {
    /// New disconnected session that expects the wallet on `target`.
    pub fn new(target: Network) -> Self {
        Self {
            target,
            current_account: None,
            chain_id: None,
        }
    }

    pub fn target(&self) -> Network {
        self.target
    }

    pub fn current_account(&self) -> Option<&str> {
        self.current_account.as_deref()
    }

    pub fn chain_id(&self) -> Option<&str> {
        self.chain_id.as_deref()
    }

    /// Display name of the wallet's current network, if known.
    pub fn network(&self) -> Option<String> {
        self.chain_id.as_deref().map(network_name)
    }

    pub fn is_connected(&self) -> bool {
        self.current_account.is_some()
    }

    pub fn is_on_target_network(&self) -> bool {
        self.chain_id.as_deref() == Some(self.target.chain_id_hex())
    }

    /// Silent check on page load: adopt the first already-authorized account
    /// and read the current chain. An empty account list is not an error.
    pub async fn check_if_wallet_is_connected<P: WalletProvider>(
        &mut self,
        wallet: &P,
    ) -> Result<bool, NameServiceError> {
        let accounts = wallet.accounts().await?;
        let chain_id = wallet.chain_id().await?;
        match accounts.first() {
            Some(account) => {
                info!(account = %short_address(account), "found an authorized account");
                self.current_account = Some(account.clone());
            }
            None => {
                info!("no authorized account found");
                self.current_account = None;
            }
        }
        self.on_chain_changed(&chain_id);
        Ok(self.is_connected())
    }

    /// Prompting connect: ask the wallet for accounts and adopt the first one.
    pub async fn connect_wallet<P: WalletProvider>(
        &mut self,
        wallet: &P,
    ) -> Result<String, NameServiceError> {
        let accounts = wallet.request_accounts().await.inspect_err(|e| {
            warn!(wallet = wallet.wallet_name(), error = %e, "connect request failed");
        })?;
        let account = accounts.first().cloned().ok_or(NameServiceError::NoAccounts)?;
        let chain_id = wallet.chain_id().await?;
        info!(account = %short_address(&account), "connected");
        self.current_account = Some(account.clone());
        self.on_chain_changed(&chain_id);
        Ok(account)
    }

    pub async fn refresh_network<P: WalletProvider>(
        &mut self,
        wallet: &P,
    ) -> Result<String, NameServiceError> {
        let chain_id = wallet.chain_id().await?;
        self.on_chain_changed(&chain_id);
        Ok(network_name(&chain_id))
    }

    /// Ask the wallet to switch to the target network, adding it first when the
    /// wallet answers that the chain is unrecognized.
    pub async fn switch_network<P: WalletProvider>(
        &mut self,
        wallet: &P,
    ) -> Result<(), NameServiceError> {
        let target_id = self.target.chain_id_hex();
        match wallet.switch_chain(target_id).await {
            Ok(()) => {}
            Err(err) if err.is_unrecognized_chain() => {
                let params = self.target.add_chain_params().ok_or_else(|| {
                    NameServiceError::Config(format!(
                        "wallet does not know {} and no add-chain parameters exist for it",
                        self.target.name()
                    ))
                })?;
                info!(chain = %params.chain_name, "chain unknown to wallet, adding it");
                wallet.add_chain(&params).await?;
            }
            Err(err) => {
                warn!(error = %err, "switch network failed");
                return Err(err);
            }
        }
        self.on_chain_changed(target_id);
        Ok(())
    }

    /// Apply a `chainChanged` wallet event.
    pub fn on_chain_changed(&mut self, chain_id: &str) {
        self.chain_id = Some(chain_id.to_string());
    }

    /// Apply an `accountsChanged` wallet event. An empty list disconnects.
    pub fn on_accounts_changed(&mut self, accounts: &[String]) {
        self.current_account = accounts.first().cloned();
    }
}
