//! Calldata for the name-service contract.
//!
//! Selectors are the first 4 bytes of keccak256 over the canonical signature.

use crate::common::NameServiceError;
use crate::domains::DomainRecords;
use ethers::core::abi::{self, ParamType, Token};
use ethers::core::types::{Address, Bytes};
use ethers::core::utils::keccak256;

pub const SIG_REGISTER: &str = "register(string)";
pub const SIG_SET_RECORDS: &str = "setRecords(string,string,string,string,string)";
pub const SIG_GET_ALL_NAMES: &str = "getAllNames()";
pub const SIG_GET_ADDRESS: &str = "getAddress(string)";
pub const SIG_RECORDS: &str = "records(string)";

pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

fn encode_call(signature: &str, args: &[Token]) -> Bytes {
    let mut data = selector(signature).to_vec();
    data.extend(abi::encode(args));
    Bytes::from(data)
}

pub fn encode_register(name: &str) -> Bytes {
    encode_call(SIG_REGISTER, &[Token::String(name.to_string())])
}

pub fn encode_set_records(name: &str, records: &DomainRecords) -> Bytes {
    encode_call(
        SIG_SET_RECORDS,
        &[
            Token::String(name.to_string()),
            Token::String(records.website.clone()),
            Token::String(records.email.clone()),
            Token::String(records.twitter.clone()),
            Token::String(records.github.clone()),
        ],
    )
}

pub fn encode_get_all_names() -> Bytes {
    encode_call(SIG_GET_ALL_NAMES, &[])
}

pub fn encode_get_address(name: &str) -> Bytes {
    encode_call(SIG_GET_ADDRESS, &[Token::String(name.to_string())])
}

pub fn encode_records(name: &str) -> Bytes {
    encode_call(SIG_RECORDS, &[Token::String(name.to_string())])
}

fn decode(types: &[ParamType], data: &[u8], what: &str) -> Result<Vec<Token>, NameServiceError> {
    abi::decode(types, data)
        .map_err(|e| NameServiceError::Abi(format!("cannot decode {}: {}", what, e)))
}

fn token_string(token: Token, what: &str) -> Result<String, NameServiceError> {
    token
        .into_string()
        .ok_or_else(|| NameServiceError::Abi(format!("{} is not a string", what)))
}

pub fn decode_all_names(data: &[u8]) -> Result<Vec<String>, NameServiceError> {
    let mut tokens = decode(
        &[ParamType::Array(Box::new(ParamType::String))],
        data,
        "getAllNames",
    )?;
    let array = tokens
        .pop()
        .and_then(Token::into_array)
        .ok_or_else(|| NameServiceError::Abi("getAllNames did not return an array".into()))?;
    array
        .into_iter()
        .map(|token| token_string(token, "name"))
        .collect()
}

pub fn decode_address(data: &[u8]) -> Result<Address, NameServiceError> {
    decode(&[ParamType::Address], data, "getAddress")?
        .pop()
        .and_then(Token::into_address)
        .ok_or_else(|| NameServiceError::Abi("getAddress did not return an address".into()))
}

pub fn decode_records(data: &[u8]) -> Result<DomainRecords, NameServiceError> {
    let tokens = decode(&vec![ParamType::String; 4], data, "records")?;
    let mut fields = tokens.into_iter();
    let mut next = |what: &str| match fields.next() {
        Some(token) => token_string(token, what),
        None => Err(NameServiceError::Abi(format!("records is missing {}", what))),
    };
    Ok(DomainRecords {
        website: next("website")?,
        email: next("email")?,
        twitter: next("twitter")?,
        github: next("github")?,
    })
}
