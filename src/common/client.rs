use crate::common::NameServiceError;

const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

pub fn create_http_client() -> Result<reqwest::Client, NameServiceError> {
    Ok(reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?)
}
