//! EIP-3085 `wallet_addEthereumChain` parameters.

use crate::chains::Network;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}

impl Network {
    /// Parameters for adding this network to a wallet that does not know it.
    /// Only the Polygon networks carry them.
    pub fn add_chain_params(&self) -> Option<AddChainParams> {
        let (rpc_url, explorer_url) = match self {
            Network::PolygonMumbai => (
                "https://rpc-mumbai.maticvigil.com/",
                "https://mumbai.polygonscan.com/",
            ),
            Network::PolygonMainnet => ("https://polygon-rpc.com/", "https://polygonscan.com/"),
            _ => return None,
        };

        Some(AddChainParams {
            chain_id: self.chain_id_hex().to_string(),
            chain_name: self.name().to_string(),
            native_currency: NativeCurrency {
                name: "Polygon".to_string(),
                symbol: "MATIC".to_string(),
                decimals: 18,
            },
            rpc_urls: vec![rpc_url.to_string()],
            block_explorer_urls: vec![explorer_url.to_string()],
        })
    }
}
