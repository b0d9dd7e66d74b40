pub mod abi;
pub mod pricing;
pub mod record;
pub mod service;

// Re-export
pub use pricing::{MIN_DOMAIN_LEN, price_for, price_wei, validate_domain};
pub use record::{DomainForm, DomainRecord, DomainRecords};
pub use service::{MintOutcome, NameService};
