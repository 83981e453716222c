//! Query-controller state shared by every paginated resource list.
//!
//! `ListQuery` is the committed fetch key: every field participates in the
//! query string, and every reducer that changes what the first page *means*
//! snaps back to page 1. The live search input is deliberately NOT part of
//! this struct -- list components keep it in a separate signal and only
//! commit it here, so typing alone can never re-fire a fetch.

use contracts::shared::list::{SortField, SortOrder};
use serde::Serialize;

pub const LIMIT_OPTIONS: [u64; 5] = [5, 10, 20, 50, 100];
pub const DEFAULT_LIMIT: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListQuery {
    pub page: u64,
    pub limit: u64,
    #[serde(rename = "sortBy")]
    pub sort_by: SortField,
    pub sort: SortOrder,
    #[serde(rename = "searchTerm", skip_serializing_if = "String::is_empty")]
    pub search_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            sort_by: SortField::CreatedAt,
            sort: SortOrder::Desc,
            search_query: String::new(),
            status: None,
        }
    }
}

impl ListQuery {
    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    pub fn set_limit(&mut self, limit: u64) {
        self.limit = if LIMIT_OPTIONS.contains(&limit) {
            limit
        } else {
            DEFAULT_LIMIT
        };
        self.page = 1;
    }

    /// Re-selecting the active field flips the direction; a new field starts
    /// newest-first.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_by == field {
            self.sort = self.sort.flipped();
        } else {
            self.sort_by = field;
            self.sort = SortOrder::Desc;
        }
        self.page = 1;
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status.filter(|s| !s.is_empty());
        self.page = 1;
    }

    pub fn commit_search(&mut self, text: &str) {
        self.search_query = text.trim().to_string();
        self.page = 1;
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.page = 1;
    }

    /// Stable query string doubling as the fetch cache key.
    pub fn query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page_three() -> ListQuery {
        let mut q = ListQuery::default();
        q.set_page(3);
        q
    }

    #[test]
    fn limit_change_resets_page() {
        let mut q = on_page_three();
        q.set_limit(50);
        assert_eq!((q.page, q.limit), (1, 50));
    }

    #[test]
    fn unknown_limit_falls_back_to_default() {
        let mut q = ListQuery::default();
        q.set_limit(17);
        assert_eq!(q.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn sort_change_resets_page() {
        let mut q = on_page_three();
        q.toggle_sort(SortField::UpdatedAt);
        assert_eq!(q.page, 1);
    }

    #[test]
    fn status_change_resets_page() {
        let mut q = on_page_three();
        q.set_status(Some("archived".into()));
        assert_eq!(q.page, 1);
        assert_eq!(q.status.as_deref(), Some("archived"));

        q.set_page(2);
        q.set_status(None);
        assert_eq!(q.page, 1);
        assert_eq!(q.status, None);
    }

    #[test]
    fn search_commit_resets_page_and_trims() {
        let mut q = on_page_three();
        q.commit_search("  mgt-7 ");
        assert_eq!(q.page, 1);
        assert_eq!(q.search_query, "mgt-7");

        q.set_page(4);
        q.clear_search();
        assert_eq!(q.page, 1);
        assert!(q.search_query.is_empty());
    }

    #[test]
    fn toggling_active_field_flips_direction() {
        let mut q = ListQuery::default();
        assert_eq!((q.sort_by, q.sort), (SortField::CreatedAt, SortOrder::Desc));
        q.toggle_sort(SortField::CreatedAt);
        assert_eq!(q.sort, SortOrder::Asc);
        q.toggle_sort(SortField::CreatedAt);
        assert_eq!(q.sort, SortOrder::Desc);
    }

    #[test]
    fn new_sort_field_starts_descending() {
        let mut q = ListQuery::default();
        q.toggle_sort(SortField::CreatedAt); // now asc
        q.toggle_sort(SortField::UpdatedAt);
        assert_eq!((q.sort_by, q.sort), (SortField::UpdatedAt, SortOrder::Desc));
    }

    #[test]
    fn query_string_carries_the_full_tuple() {
        let mut q = ListQuery::default();
        q.commit_search("annual return");
        q.set_status(Some("published".into()));
        let qs = q.query_string();
        assert!(qs.contains("page=1"));
        assert!(qs.contains("limit=10"));
        assert!(qs.contains("sortBy=createdAt"));
        assert!(qs.contains("sort=desc"));
        assert!(qs.contains("searchTerm=annual"));
        assert!(qs.contains("status=published"));
    }

    #[test]
    fn empty_search_and_status_are_omitted() {
        let qs = ListQuery::default().query_string();
        assert!(!qs.contains("searchTerm"));
        assert!(!qs.contains("status"));
    }
}
