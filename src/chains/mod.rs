pub mod chain;
pub mod networks;
pub mod params;

// Re-export
pub use chain::Network;
pub use networks::{known_networks, network_name};
pub use params::{AddChainParams, NativeCurrency};
