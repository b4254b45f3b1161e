//! Accounts - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::accounts::AccountEntry;
use gloo_net::http::Request;

/// Fetch the registered accounts.
pub async fn fetch_accounts() -> Result<Vec<AccountEntry>, String> {
    let response = Request::get(&api_url("/api/users"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
