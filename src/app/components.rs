use leptos::prelude::*;
use leptos_meta::Title;

use super::prefs::use_preferences;

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "bg-white dark:bg-slate-800 border border-gray-200 dark:border-slate-700 rounded-2xl shadow-sm hover:shadow-md transition-all duration-300 p-6 {class}",
        )>{children()}</div>
    }
}

/// Frame around every routed page. Routes remount their view on each path
/// change, so the enter animation replays per navigation.
#[component]
pub fn PageFrame(title_key: &'static str, children: Children) -> impl IntoView {
    let prefs = use_preferences();
    view! {
        <Title text=move || prefs.t(title_key) />
        <div class="page-enter space-y-6">{children()}</div>
    }
}

#[component]
pub fn PageHeading(key: &'static str) -> impl IntoView {
    let prefs = use_preferences();
    view! {
        <h2 class="text-3xl font-bold mb-6 bg-gradient-to-r from-blue-600 to-teal-600 bg-clip-text text-transparent">
            {move || prefs.t(key)}
        </h2>
    }
}

/// Heading plus a "coming soon" line, for pages without content yet.
#[component]
pub fn Placeholder(heading_key: &'static str, body_key: &'static str) -> impl IntoView {
    let prefs = use_preferences();
    view! {
        <PageFrame title_key=heading_key>
            <Card>
                <PageHeading key=heading_key />
                <p class="text-slate-600 dark:text-slate-300 text-center py-12 text-lg fade-in">
                    {move || prefs.t(body_key)}
                </p>
            </Card>
        </PageFrame>
    }
}
