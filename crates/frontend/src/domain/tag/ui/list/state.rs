use contracts::domain::tag::Tag;
use contracts::shared::list::PaginationMeta;
use leptos::prelude::*;

use crate::shared::list_query::ListQuery;

#[derive(Clone, Debug, Default)]
pub struct TagListState {
    pub query: ListQuery,
    pub items: Vec<Tag>,
    pub meta: PaginationMeta,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<TagListState> {
    RwSignal::new(TagListState::default())
}
