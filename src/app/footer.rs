use chrono::{Datelike, Utc};
use leptos::prelude::*;

use super::prefs::use_preferences;
use crate::content::SITE;

#[component]
pub fn Footer() -> impl IntoView {
    let prefs = use_preferences();
    let year = Utc::now().year();
    view! {
        <footer class="border-t border-slate-200 dark:border-slate-800 py-6 text-center text-sm text-slate-600 dark:text-slate-400">
            {move || {
                format!(
                    "© {year} {} - {}",
                    SITE.brand.resolve(prefs.language()),
                    prefs.t("rightsReserved"),
                )
            }}
        </footer>
    }
}
