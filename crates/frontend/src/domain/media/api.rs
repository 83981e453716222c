use contracts::domain::media::Media;
use contracts::shared::list::SingleResponse;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::shared::api_utils::{api_url, response_error};

const UPLOAD_FALLBACK: &str = "Failed to upload image. Please try again.";

/// Upload one file as multipart form data (single `file` field) and return
/// the created media record.
pub async fn upload_media(file: web_sys::File) -> Result<Media, String> {
    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;

    let response = Request::post(&api_url("/docs/create-media"))
        .body(JsValue::from(form_data))
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, UPLOAD_FALLBACK).await);
    }

    response
        .json::<SingleResponse<Media>>()
        .await
        .map(|body| body.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
