//! Mint names, attach records, and list mints through a wallet provider.

use crate::common::{NameServiceConfig, NameServiceError, ReceiptPolling, get_timestamp_millis};
use crate::domains::abi::{
    decode_address, decode_all_names, decode_records, encode_get_address, encode_get_all_names,
    encode_records, encode_register, encode_set_records,
};
use crate::domains::{DomainForm, DomainRecord, DomainRecords, price_for, price_wei, validate_domain};
use crate::wallet::{TxReceipt, WalletProvider};
use ethers::core::types::{Address, Bytes, H256, TransactionRequest, U256};
use futures::future::try_join_all;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Hashes of the two transactions a mint sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintOutcome {
    pub name: String,
    pub price: Decimal,
    pub register_tx: H256,
    /// None when the form carried no records to set, or setting them failed.
    pub records_tx: Option<H256>,
    /// Why `setRecords` failed after the name was already minted.
    /// Retry with [`NameService::update_domain`], not another mint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_error: Option<String>,
    pub timestamp: u64,
}

pub struct NameService<P: WalletProvider> {
    wallet: P,
    contract: Address,
    tld: String,
    polling: ReceiptPolling,
}

impl<P: WalletProvider> NameService<P> {
    pub fn new(wallet: P, config: &NameServiceConfig) -> Self {
        Self {
            wallet,
            contract: config.contract_address,
            tld: config.tld.clone(),
            polling: config.receipt_polling,
        }
    }

    pub fn wallet(&self) -> &P {
        &self.wallet
    }

    pub fn contract(&self) -> Address {
        self.contract
    }

    pub fn tld(&self) -> &str {
        &self.tld
    }

    /// Register `form.name` paying the length-based price, wait for it to be
    /// mined, then attach the form's records.
    ///
    /// Once the register receipt succeeds this returns `Ok`: a failed
    /// `setRecords` lands in [`MintOutcome::records_error`].
    pub async fn mint_domain(
        &self,
        from: Address,
        form: &DomainForm,
    ) -> Result<MintOutcome, NameServiceError> {
        validate_domain(&form.name).inspect_err(|e| warn!(error = %e, "mint rejected"))?;

        let price = price_for(&form.name);
        let value = price_wei(&form.name)?;
        info!(name = %form.name, tld = %self.tld, %price, "minting domain");

        let register_tx = self
            .send(from, encode_register(&form.name), Some(value))
            .await?;
        let receipt = self.wait_for_receipt(register_tx).await?;
        if !receipt.succeeded() {
            warn!(tx = ?register_tx, "register transaction reverted");
            return Err(NameServiceError::TransactionFailed(format!(
                "register({}) reverted in {:?}",
                form.name, register_tx
            )));
        }
        info!(name = %form.name, tx = ?register_tx, "domain minted");

        let (records_tx, records_error) = if form.records.is_empty() {
            (None, None)
        } else {
            match self.set_records(from, &form.name, &form.records).await {
                Ok(tx) => (Some(tx), None),
                Err(e) => {
                    warn!(name = %form.name, error = %e, "domain minted but records were not set");
                    (None, Some(e.to_string()))
                }
            }
        };

        Ok(MintOutcome {
            name: form.name.clone(),
            price,
            register_tx,
            records_tx,
            records_error,
            timestamp: get_timestamp_millis(),
        })
    }

    /// Overwrite the records of an already minted name.
    pub async fn update_domain(
        &self,
        from: Address,
        form: &DomainForm,
    ) -> Result<H256, NameServiceError> {
        validate_domain(&form.name)?;
        self.set_records(from, &form.name, &form.records).await
    }

    async fn set_records(
        &self,
        from: Address,
        name: &str,
        records: &DomainRecords,
    ) -> Result<H256, NameServiceError> {
        let tx = self.send(from, encode_set_records(name, records), None).await?;
        let receipt = self.wait_for_receipt(tx).await?;
        if !receipt.succeeded() {
            return Err(NameServiceError::TransactionFailed(format!(
                "setRecords({}) reverted in {:?}",
                name, tx
            )));
        }
        info!(name, tx = ?tx, "records set");
        Ok(tx)
    }

    /// Every minted name with owner and records, token id = position in `getAllNames`.
    pub async fn fetch_mints(&self) -> Result<Vec<DomainRecord>, NameServiceError> {
        let names = decode_all_names(&self.call(encode_get_all_names()).await?)?;
        debug!(count = names.len(), "fetched names");

        try_join_all(names.into_iter().enumerate().map(|(index, name)| async move {
            let (owner, records) =
                futures::try_join!(self.owner_of(&name), self.records_of(&name))?;
            Ok::<_, NameServiceError>(DomainRecord {
                token_id: index as u64,
                name,
                owner,
                records,
            })
        }))
        .await
    }

    pub async fn owner_of(&self, name: &str) -> Result<Address, NameServiceError> {
        decode_address(&self.call(encode_get_address(name)).await?)
    }

    pub async fn records_of(&self, name: &str) -> Result<DomainRecords, NameServiceError> {
        decode_records(&self.call(encode_records(name)).await?)
    }

    async fn call(&self, data: Bytes) -> Result<Bytes, NameServiceError> {
        self.wallet.call(self.contract, data).await
    }

    async fn send(
        &self,
        from: Address,
        data: Bytes,
        value: Option<U256>,
    ) -> Result<H256, NameServiceError> {
        let mut tx = TransactionRequest::new().from(from).to(self.contract).data(data);
        if let Some(value) = value {
            tx = tx.value(value);
        }
        let hash = self.wallet.send_transaction(&tx).await?;
        debug!(tx = ?hash, "transaction submitted");
        Ok(hash)
    }

    /// Poll for the receipt until it shows up or the attempts run out.
    pub async fn wait_for_receipt(&self, hash: H256) -> Result<TxReceipt, NameServiceError> {
        for attempt in 1..=self.polling.max_attempts {
            if let Some(receipt) = self.wallet.transaction_receipt(hash).await? {
                return Ok(receipt);
            }
            debug!(tx = ?hash, attempt, "receipt not available yet");
            if attempt < self.polling.max_attempts {
                tokio::time::sleep(self.polling.interval).await;
            }
        }
        Err(NameServiceError::ReceiptTimeout(format!("{:?}", hash)))
    }
}
