use leptos::prelude::*;

use super::components::Placeholder;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! { <Placeholder heading_key="projects" body_key="projectsSoon" /> }
}
