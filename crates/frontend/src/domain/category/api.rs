use contracts::domain::category::{Category, CategoryPayload};
use contracts::shared::list::ListResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, response_error};
use crate::shared::list_query::ListQuery;

const CREATE_FALLBACK: &str = "Failed to create category. Please try again.";
const UPDATE_FALLBACK: &str = "Failed to update category. Please try again.";
const DELETE_FALLBACK: &str = "Failed to delete category. Please try again.";

/// Fetch one page of categories
pub async fn fetch_categories(query: ListQuery) -> Result<ListResponse<Category>, String> {
    let url = api_url(&format!("/docs/category?{}", query.query_string()));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch categories: {}", response.status()));
    }

    response
        .json::<ListResponse<Category>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// All categories for reference pickers (one large page)
pub async fn fetch_category_options() -> Result<Vec<Category>, String> {
    let mut query = ListQuery::default();
    query.set_limit(100);
    Ok(fetch_categories(query).await?.data)
}

/// Create new category
pub async fn create_category(payload: CategoryPayload) -> Result<(), String> {
    let response = Request::post(&api_url("/docs/create-category"))
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

/// Update category
pub async fn update_category(id: &str, payload: CategoryPayload) -> Result<(), String> {
    let response = Request::patch(&api_url(&format!("/docs/update-category/{}", id)))
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

/// Soft-delete category
pub async fn delete_category(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/docs/soft-delete-category/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, DELETE_FALLBACK).await);
    }

    Ok(())
}
