use contracts::domain::doc::Doc;
use contracts::shared::list::PaginationMeta;
use leptos::prelude::*;

use crate::shared::list_query::ListQuery;

#[derive(Clone, Debug, Default)]
pub struct DocListState {
    pub query: ListQuery,
    pub items: Vec<Doc>,
    pub meta: PaginationMeta,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<DocListState> {
    RwSignal::new(DocListState::default())
}
