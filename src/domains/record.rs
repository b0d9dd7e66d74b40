use ethers::core::types::Address;
use serde::{Deserialize, Serialize};

/// Metadata attached to a minted name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecords {
    pub website: String,
    pub email: String,
    pub twitter: String,
    pub github: String,
}

impl DomainRecords {
    pub fn is_empty(&self) -> bool {
        self.website.is_empty()
            && self.email.is_empty()
            && self.twitter.is_empty()
            && self.github.is_empty()
    }
}

/// A minted name as read back from the contract. Passed through for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub token_id: u64,
    pub name: String,
    pub owner: Address,
    pub records: DomainRecords,
}

impl DomainRecord {
    /// `name.tld`, the way the front end lists mints.
    pub fn full_name(&self, tld: &str) -> String {
        format!("{}.{}", self.name, tld)
    }

    pub fn is_owned_by(&self, account: &str) -> bool {
        account
            .trim_start_matches("0x")
            .eq_ignore_ascii_case(&format!("{:x}", self.owner))
    }
}

/// User input for minting a new name or updating an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainForm {
    pub name: String,
    pub records: DomainRecords,
}

impl DomainForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: DomainRecords::default(),
        }
    }

    pub fn with_records(mut self, records: DomainRecords) -> Self {
        self.records = records;
        self
    }

    /// Prefill the edit form from an existing mint.
    pub fn from_record(record: &DomainRecord) -> Self {
        Self {
            name: record.name.clone(),
            records: record.records.clone(),
        }
    }
}
