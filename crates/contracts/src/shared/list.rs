//! List-endpoint envelope types and the sort vocabulary shared by every
//! paginated resource.

use serde::{Deserialize, Serialize};

/// Pagination block returned alongside every list response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationMeta {
    #[serde(default)]
    pub total: u64,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u64,
    /// Docs and subcategories report how many homepage slots are in use.
    #[serde(rename = "homepageTotal", default, skip_serializing_if = "Option::is_none")]
    pub homepage_total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: PaginationMeta,
}

/// Single-record envelope used by create/read endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleResponse<T> {
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "updatedAt")]
    UpdatedAt,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}
