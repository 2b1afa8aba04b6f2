use leptos::prelude::*;

use super::components::Placeholder;

#[component]
pub fn BlogPage() -> impl IntoView {
    view! { <Placeholder heading_key="blog" body_key="blogSoon" /> }
}
