use contracts::domain::subcategory::Subcategory;
use contracts::shared::list::PaginationMeta;
use leptos::prelude::*;

use crate::shared::list_query::ListQuery;

#[derive(Clone, Debug, Default)]
pub struct SubcategoryListState {
    pub query: ListQuery,
    pub items: Vec<Subcategory>,
    pub meta: PaginationMeta,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<SubcategoryListState> {
    RwSignal::new(SubcategoryListState::default())
}
