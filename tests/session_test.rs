mod common;

use common::{MockWallet, rpc_error};
use love_name_service_rs::{Network, NameServiceError, WalletSession};
use serde_json::{Value, json};

fn wallet_on(chain_id: &'static str, accounts: Value) -> MockWallet {
    MockWallet::new(move |method, _params| match method {
        "eth_accounts" | "eth_requestAccounts" => Ok(accounts.clone()),
        "eth_chainId" => Ok(json!(chain_id)),
        other => panic!("unexpected method {}", other),
    })
}

#[tokio::test]
async fn test_check_adopts_first_authorized_account() {
    let wallet = wallet_on("0x13881", json!(["0xaaa", "0xbbb"]));
    let mut session = WalletSession::new(Network::PolygonMumbai);

    let connected = session.check_if_wallet_is_connected(&wallet).await.unwrap();

    assert!(connected);
    assert_eq!(session.current_account(), Some("0xaaa"));
    assert_eq!(session.network().as_deref(), Some("Polygon Mumbai Testnet"));
    assert!(session.is_on_target_network());
    assert_eq!(wallet.methods(), vec!["eth_accounts", "eth_chainId"]);
}

#[tokio::test]
async fn test_check_without_accounts_is_not_an_error() {
    let wallet = wallet_on("0x1", json!([]));
    let mut session = WalletSession::new(Network::PolygonMumbai);

    let connected = session.check_if_wallet_is_connected(&wallet).await.unwrap();

    assert!(!connected);
    assert_eq!(session.current_account(), None);
    assert_eq!(session.network().as_deref(), Some("Mainnet"));
}

#[tokio::test]
async fn test_connect_wallet_prompts_and_reads_chain() {
    let wallet = wallet_on("0x999", json!(["0xccc"]));
    let mut session = WalletSession::new(Network::PolygonMumbai);

    let account = session.connect_wallet(&wallet).await.unwrap();

    assert_eq!(account, "0xccc");
    assert_eq!(session.network().as_deref(), Some("Unknown (0x999)"));
    assert!(!session.is_on_target_network());
    assert_eq!(wallet.methods(), vec!["eth_requestAccounts", "eth_chainId"]);
}

#[tokio::test]
async fn test_connect_wallet_with_no_accounts_fails() {
    let wallet = wallet_on("0x13881", json!([]));
    let mut session = WalletSession::new(Network::PolygonMumbai);

    let result = session.connect_wallet(&wallet).await;

    assert!(matches!(result, Err(NameServiceError::NoAccounts)));
    assert!(!session.is_connected());
}

#[tokio::test]
async fn test_connect_wallet_user_rejection_propagates() {
    let wallet = MockWallet::new(|_, _| Err(rpc_error(4001, "User rejected the request.")));
    let mut session = WalletSession::new(Network::PolygonMumbai);

    let err = session.connect_wallet(&wallet).await.unwrap_err();

    assert!(err.is_user_rejected());
}

fn wallet_without_chain_id(accounts: Value) -> MockWallet {
    MockWallet::new(move |method, _params| match method {
        "eth_accounts" | "eth_requestAccounts" => Ok(accounts.clone()),
        "eth_chainId" => Err(rpc_error(-32603, "Internal error")),
        other => panic!("unexpected method {}", other),
    })
}

#[tokio::test]
async fn test_check_chain_id_failure_leaves_session_untouched() {
    let wallet = wallet_without_chain_id(json!(["0xaaa"]));
    let mut session = WalletSession::new(Network::PolygonMumbai);

    let result = session.check_if_wallet_is_connected(&wallet).await;

    assert!(result.is_err());
    assert_eq!(session.current_account(), None);
    assert_eq!(session.network(), None);
}

#[tokio::test]
async fn test_connect_chain_id_failure_leaves_session_untouched() {
    let wallet = wallet_without_chain_id(json!(["0xccc"]));
    let mut session = WalletSession::new(Network::PolygonMumbai);

    let err = session.connect_wallet(&wallet).await.unwrap_err();

    assert_eq!(err.rpc_code(), Some(-32603));
    assert!(!session.is_connected());
    assert_eq!(session.chain_id(), None);
}

#[tokio::test]
async fn test_switch_network_to_known_chain() {
    let wallet = MockWallet::new(|method, _| match method {
        "wallet_switchEthereumChain" => Ok(Value::Null),
        other => panic!("unexpected method {}", other),
    });
    let mut session = WalletSession::new(Network::PolygonMumbai);
    session.on_chain_changed("0x1");

    session.switch_network(&wallet).await.unwrap();

    assert!(session.is_on_target_network());
    let calls = wallet.calls_to("wallet_switchEthereumChain");
    assert_eq!(calls, vec![json!([{ "chainId": "0x13881" }])]);
}

#[tokio::test]
async fn test_switch_network_adds_unrecognized_chain() {
    let wallet = MockWallet::new(|method, _| match method {
        "wallet_switchEthereumChain" => Err(rpc_error(4902, "Unrecognized chain ID")),
        "wallet_addEthereumChain" => Ok(Value::Null),
        other => panic!("unexpected method {}", other),
    });
    let mut session = WalletSession::new(Network::PolygonMumbai);

    session.switch_network(&wallet).await.unwrap();

    assert_eq!(
        wallet.methods(),
        vec!["wallet_switchEthereumChain", "wallet_addEthereumChain"]
    );
    let calls = wallet.calls_to("wallet_addEthereumChain");
    let added = &calls[0][0];
    assert_eq!(added["chainId"], "0x13881");
    assert_eq!(added["chainName"], "Polygon Mumbai Testnet");
    assert_eq!(added["nativeCurrency"]["symbol"], "MATIC");
    assert_eq!(added["rpcUrls"][0], "https://rpc-mumbai.maticvigil.com/");
    assert!(session.is_on_target_network());
}

#[tokio::test]
async fn test_switch_network_other_errors_do_not_add_chain() {
    let wallet = MockWallet::new(|_, _| Err(rpc_error(4001, "User rejected the request.")));
    let mut session = WalletSession::new(Network::PolygonMumbai);
    session.on_chain_changed("0x1");

    let err = session.switch_network(&wallet).await.unwrap_err();

    assert!(err.is_user_rejected());
    assert_eq!(wallet.methods(), vec!["wallet_switchEthereumChain"]);
    assert!(!session.is_on_target_network());
}

#[tokio::test]
async fn test_switch_network_without_add_params_is_config_error() {
    let wallet = MockWallet::new(|_, _| Err(rpc_error(4902, "Unrecognized chain ID")));
    let mut session = WalletSession::new(Network::Fantom);

    let err = session.switch_network(&wallet).await.unwrap_err();

    assert!(matches!(err, NameServiceError::Config(_)));
}

#[tokio::test]
async fn test_refresh_network_reads_current_chain() {
    let wallet = wallet_on("0x89", json!([]));
    let mut session = WalletSession::new(Network::PolygonMumbai);

    let name = session.refresh_network(&wallet).await.unwrap();

    assert_eq!(name, "Polygon Mainnet");
    assert_eq!(session.chain_id(), Some("0x89"));
    assert_eq!(wallet.methods(), vec!["eth_chainId"]);
}
