use reqwest::StatusCode;
use thiserror::Error;

use crate::{client::API_URL, data::User};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("API error ({0})")]
    Status(StatusCode),
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

pub fn decode_users(body: &[u8]) -> Result<Vec<User>, FetchError> {
    Ok(serde_json::from_slice(body)?)
}

pub async fn fetch_users() -> Result<Vec<User>, FetchError> {
    fetch_users_from(API_URL).await
}

/// One GET, no retries: any failure goes straight back to the caller.
pub async fn fetch_users_from(url: &str) -> Result<Vec<User>, FetchError> {
    log::debug!("fetching users from {url}");
    let resp = reqwest::get(url).await?;
    check_status(resp.status())?;
    let body = resp.bytes().await?;
    decode_users(&body)
}
