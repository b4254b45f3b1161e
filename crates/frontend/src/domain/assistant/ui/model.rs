//! Assistant Chat - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::rag::{AskReply, AskRequest};
use gloo_net::http::Request;

/// Send one question to the answering endpoint.
pub async fn ask(pregunta: &str) -> Result<AskReply, String> {
    let response = Request::post(&api_url("/rag"))
        .json(&AskRequest::new(pregunta))
        .map_err(|e| format!("Request failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    // Backend failures come as {"error": ...} with a non-2xx status; the
    // body is parsed regardless of the status.
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
