use leptos::prelude::*;
use leptos_router::components::A;

use super::{
    components::{Card, PageFrame, PageHeading},
    prefs::use_preferences,
};

/// Shown for any path outside the six pages.
#[component]
pub fn NotFound() -> impl IntoView {
    let prefs = use_preferences();
    view! {
        <PageFrame title_key="notFoundTitle">
            <Card class="text-center">
                <PageHeading key="notFoundTitle" />
                <p class="text-slate-600 dark:text-slate-300 mb-6">{move || prefs.t("notFoundBody")}</p>
                <A href="/" attr:class="text-blue-600 dark:text-blue-400 hover:underline font-semibold">
                    {move || prefs.t("backHome")}
                </A>
            </Card>
        </PageFrame>
    }
}
