use contracts::domain::category::Category;
use contracts::shared::list::PaginationMeta;
use leptos::prelude::*;

use crate::shared::list_query::ListQuery;

#[derive(Clone, Debug, Default)]
pub struct CategoryListState {
    pub query: ListQuery,
    pub items: Vec<Category>,
    pub meta: PaginationMeta,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<CategoryListState> {
    RwSignal::new(CategoryListState::default())
}
