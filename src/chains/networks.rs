use crate::chains::Network;

/// Human-readable name for a wallet chain id, or `Unknown (<id>)` when the id
/// is not one of [`Network::ALL`].
pub fn network_name(chain_id: &str) -> String {
    match Network::from_chain_id_hex(chain_id) {
        Some(network) => network.name().to_string(),
        None => format!("Unknown ({})", chain_id),
    }
}

/// The static id -> name table, in declaration order.
pub fn known_networks() -> impl Iterator<Item = (&'static str, &'static str)> {
    Network::ALL
        .into_iter()
        .map(|network| (network.chain_id_hex(), network.name()))
}
