use contracts::domain::subcategory::{Subcategory, SubcategoryPayload, SubcategoryUpdatePayload};
use contracts::shared::list::ListResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, response_error};
use crate::shared::list_query::ListQuery;

const CREATE_FALLBACK: &str = "Failed to create subcategory. Please try again.";
const UPDATE_FALLBACK: &str = "Failed to update subcategory. Please try again.";
const DELETE_FALLBACK: &str = "Failed to delete subcategory. Please try again.";

/// Fetch one page of subcategories
pub async fn fetch_subcategories(query: ListQuery) -> Result<ListResponse<Subcategory>, String> {
    let url = api_url(&format!("/docs/subcategory?{}", query.query_string()));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch subcategories: {}",
            response.status()
        ));
    }

    response
        .json::<ListResponse<Subcategory>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// All subcategories for reference pickers (one large page)
pub async fn fetch_subcategory_options() -> Result<Vec<Subcategory>, String> {
    let mut query = ListQuery::default();
    query.set_limit(100);
    Ok(fetch_subcategories(query).await?.data)
}

/// Create new subcategory
pub async fn create_subcategory(payload: SubcategoryPayload) -> Result<(), String> {
    let response = Request::post(&api_url("/docs/create-subcategory"))
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

/// Update subcategory. The update endpoint drops `categoryId` (immutable)
/// and wants `isHomepage` stringly-typed; `into_update` handles both.
pub async fn update_subcategory(id: &str, payload: SubcategoryPayload) -> Result<(), String> {
    let body: SubcategoryUpdatePayload = payload.into_update();
    let response = Request::patch(&api_url(&format!("/docs/update-subcategory/{}", id)))
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, UPDATE_FALLBACK).await);
    }

    Ok(())
}

/// Soft-delete subcategory
pub async fn delete_subcategory(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/docs/soft-delete-subcategory/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, DELETE_FALLBACK).await);
    }

    Ok(())
}
