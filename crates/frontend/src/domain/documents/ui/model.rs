//! Document Manager - Model (API functions)

use crate::shared::api_utils::{api_base, api_url};
use contracts::files::{Ack, FilesIndex, UploadAck};
use gloo_net::http::Request;

/// Fetch the stored document set.
pub async fn fetch_index() -> Result<FilesIndex, String> {
    let response = Request::get(&api_url("/api/files"))
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

/// Upload one document as a multipart form, field `file`.
pub async fn upload_file(file: web_sys::File) -> Result<UploadAck, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = format!("{}/upload", api_base());
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    // Rejections ("ok": false) arrive with a non-2xx status but still carry
    // this JSON body, so the body is parsed regardless of the status.
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: UploadAck = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    Ok(data)
}

/// Delete one stored document by name.
pub async fn delete_file(name: &str) -> Result<Ack, String> {
    let url = api_url(&format!("/delete/{}", urlencoding::encode(name)));

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    // A missing file answers 404 with {"ok": false, "msg": ...}.
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Ask the backend to rebuild its derived index from the stored documents.
pub async fn rebuild_index() -> Result<Ack, String> {
    let response = Request::post(&api_url("/rebuild"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
