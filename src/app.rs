//! Which screen the front end shows for a given wallet session.

use crate::domains::DomainForm;
use crate::wallet::WalletSession;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppView {
    /// No authorized account: show the connect button.
    NotConnected,
    /// Connected, but the wallet is on another chain: offer to switch.
    WrongNetwork { current: String, target: String },
    /// Ready to mint a new name.
    MintForm { account: String, network: String },
    /// Editing the records of an existing name.
    EditForm {
        account: String,
        network: String,
        form: DomainForm,
    },
}

impl AppView {
    pub fn from_session(session: &WalletSession, editing: Option<&DomainForm>) -> AppView {
        let Some(account) = session.current_account() else {
            return AppView::NotConnected;
        };
        let target = session.target().name().to_string();
        let network = session.network().unwrap_or_else(|| "Unknown".to_string());

        if !session.is_on_target_network() {
            return AppView::WrongNetwork {
                current: network,
                target,
            };
        }

        match editing {
            Some(form) => AppView::EditForm {
                account: account.to_string(),
                network,
                form: form.clone(),
            },
            None => AppView::MintForm {
                account: account.to_string(),
                network,
            },
        }
    }
}
