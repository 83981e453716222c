use contracts::domain::doc::{Doc, DocPayload, DocStatus};
use contracts::shared::list::ListResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, response_error};
use crate::shared::list_query::ListQuery;

const CREATE_FALLBACK: &str = "Failed to create doc. Please try again.";
const UPDATE_FALLBACK: &str = "Failed to update doc. Please try again.";
const DELETE_FALLBACK: &str = "Failed to delete doc. Please try again.";

/// Fetch one page of docs
pub async fn fetch_docs(query: ListQuery) -> Result<ListResponse<Doc>, String> {
    let url = api_url(&format!("/docs?{}", query.query_string()));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch docs: {}", response.status()));
    }

    response
        .json::<ListResponse<Doc>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new doc. Drafts go through the relaxed draft endpoint, which the
/// backend exempts from required-field checks.
pub async fn create_doc(payload: DocPayload) -> Result<(), String> {
    let path = if payload.status == DocStatus::Draft {
        "/docs/create-draft-doc"
    } else {
        "/docs/create-doc"
    };
    let response = Request::post(&api_url(path))
        .json(&payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, CREATE_FALLBACK).await);
    }

    Ok(())
}

/// Update doc, routed through the draft endpoint while the doc stays draft.
pub async fn update_doc(id: &str, payload: DocPayload) -> Result<(), String> {
    let path = if payload.status == DocStatus::Draft {
        format!("/docs/update-draft-doc/{}", id)
    } else {
        format!("/docs/update-doc/{}", id)
    };
    let response = Request::patch(&api_url(&path))
        .json(&payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, UPDATE_FALLBACK).await);
    }

    Ok(())
}

/// Delete doc
pub async fn delete_doc(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/docs/delete-doc/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, DELETE_FALLBACK).await);
    }

    Ok(())
}
