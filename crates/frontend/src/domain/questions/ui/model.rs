//! Question Log - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::questions::QuestionEntry;
use gloo_net::http::Request;

/// Fetch the most recent questions, newest first.
pub async fn fetch_questions() -> Result<Vec<QuestionEntry>, String> {
    let response = Request::get(&api_url("/api/prompts"))
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
