use serde::{Deserialize, Serialize};

/// Networks the front end knows by name. Discriminants are the numeric chain ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Mainnet = 0x1,
    Ropsten = 0x3,
    Kovan = 0x2a,
    Rinkeby = 0x4,
    Goerli = 0x5,
    BscTestnet = 0x61,
    BscMainnet = 0x38,
    PolygonMainnet = 0x89,
    PolygonMumbai = 0x13881,
    AvaxMainnet = 0xa86a,
    Fantom = 0xfa,
    FantomTestnet = 0xfa2,
}

impl Network {
    pub const ALL: [Network; 12] = [
        Network::Mainnet,
        Network::Ropsten,
        Network::Kovan,
        Network::Rinkeby,
        Network::Goerli,
        Network::BscTestnet,
        Network::BscMainnet,
        Network::PolygonMainnet,
        Network::PolygonMumbai,
        Network::AvaxMainnet,
        Network::Fantom,
        Network::FantomTestnet,
    ];

    /// Hex chain id exactly as wallets report it from `eth_chainId`.
    pub fn chain_id_hex(&self) -> &'static str {
        match self {
            Network::Mainnet => "0x1",
            Network::Ropsten => "0x3",
            Network::Kovan => "0x2a",
            Network::Rinkeby => "0x4",
            Network::Goerli => "0x5",
            Network::BscTestnet => "0x61",
            Network::BscMainnet => "0x38",
            Network::PolygonMainnet => "0x89",
            Network::PolygonMumbai => "0x13881",
            Network::AvaxMainnet => "0xa86a",
            Network::Fantom => "0xfa",
            Network::FantomTestnet => "0xfa2",
        }
    }

    pub fn chain_id(&self) -> u64 {
        *self as u64
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Ropsten => "Ropsten",
            Network::Kovan => "Kovan",
            Network::Rinkeby => "Rinkeby",
            Network::Goerli => "Goerli",
            Network::BscTestnet => "BSC Testnet",
            Network::BscMainnet => "BSC Mainnet",
            Network::PolygonMainnet => "Polygon Mainnet",
            Network::PolygonMumbai => "Polygon Mumbai Testnet",
            Network::AvaxMainnet => "AVAX Mainnet",
            Network::Fantom => "Fantom",
            Network::FantomTestnet => "Fantom Testnet",
        }
    }

    /// Exact-match lookup on the wallet's hex string; no case folding or padding.
    pub fn from_chain_id_hex(chain_id: &str) -> Option<Network> {
        Network::ALL
            .into_iter()
            .find(|network| network.chain_id_hex() == chain_id)
    }
}
