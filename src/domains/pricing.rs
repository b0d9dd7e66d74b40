use crate::common::NameServiceError;
use ethers::core::types::U256;
use ethers::core::utils::parse_ether;
use rust_decimal::Decimal;

/// Names shorter than this are rejected before any transaction is sent.
pub const MIN_DOMAIN_LEN: usize = 3;

pub fn validate_domain(name: &str) -> Result<(), NameServiceError> {
    let len = name.chars().count();
    if len < MIN_DOMAIN_LEN {
        return Err(NameServiceError::InvalidDomain(format!(
            "Domain must be at least {} characters long, got {:?}",
            MIN_DOMAIN_LEN, name
        )));
    }
    Ok(())
}

/// Mint price in the native token: shorter names cost more.
pub fn price_for(name: &str) -> Decimal {
    match name.chars().count() {
        3 => Decimal::new(5, 1),
        4 => Decimal::new(3, 1),
        _ => Decimal::new(1, 1),
    }
}

/// [`price_for`] in wei (18 decimals).
pub fn price_wei(name: &str) -> Result<U256, NameServiceError> {
    let price = price_for(name);
    parse_ether(price.to_string())
        .map_err(|e| NameServiceError::Abi(format!("cannot convert price {}: {}", price, e)))
}
