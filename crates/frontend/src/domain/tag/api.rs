use contracts::domain::tag::{Tag, TagPayload};
use contracts::shared::list::ListResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, response_error};
use crate::shared::list_query::ListQuery;

const CREATE_FALLBACK: &str = "Failed to create tag. Please try again.";
const UPDATE_FALLBACK: &str = "Failed to update tag. Please try again.";
const DELETE_FALLBACK: &str = "Failed to delete tag. Please try again.";

/// Fetch one page of tags
pub async fn fetch_tags(query: ListQuery) -> Result<ListResponse<Tag>, String> {
    let url = api_url(&format!("/docs/tag?{}", query.query_string()));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch tags: {}", response.status()));
    }

    response
        .json::<ListResponse<Tag>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// All tags for the doc form picker (one large page)
pub async fn fetch_tag_options() -> Result<Vec<Tag>, String> {
    let mut query = ListQuery::default();
    query.set_limit(100);
    Ok(fetch_tags(query).await?.data)
}

/// Create new tag
pub async fn create_tag(payload: TagPayload) -> Result<(), String> {
    let response = Request::post(&api_url("/docs/create-tag"))
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

/// Update tag
pub async fn update_tag(id: &str, payload: TagPayload) -> Result<(), String> {
    let response = Request::patch(&api_url(&format!("/docs/update-tag/{}", id)))
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

/// Delete tag
pub async fn delete_tag(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/docs/delete-tag/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, DELETE_FALLBACK).await);
    }

    Ok(())
}
