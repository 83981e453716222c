use crate::companies::public_documents::ui::PublicDocumentsPage;
use crate::domain::category::ui::list::CategoryList;
use crate::domain::doc::ui::list::DocList;
use crate::domain::subcategory::ui::list::SubcategoryList;
use crate::domain::tag::ui::list::TagList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=DocList />
                    <Route path=path!("/docs") view=DocList />
                    <Route path=path!("/categories") view=CategoryList />
                    <Route path=path!("/subcategories") view=SubcategoryList />
                    <Route path=path!("/tags") view=TagList />
                    <Route path=path!("/public-documents") view=PublicDocumentsPage />
                </Routes>
            </Shell>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="content">
            <h2>"Page not found"</h2>
        </div>
    }
}
