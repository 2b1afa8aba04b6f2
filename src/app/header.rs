use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

use super::{icon::SvgIcon, prefs::use_preferences};
use crate::{
    content::SITE,
    icons::Icon,
    routes::{is_active, resolve, NavItem, RouteMatch, NAV_ITEMS},
};

#[component]
pub fn Header() -> impl IntoView {
    let prefs = use_preferences();
    let pathname = use_location().pathname;

    // the nav collapses on small screens, so name the current page instead
    let current_page = move || match resolve(&pathname.get()) {
        RouteMatch::Page(page) => prefs.t(page.label_key()),
        RouteMatch::NotFound => prefs.t("notFoundTitle"),
    };

    view! {
        <header class="bg-white/80 dark:bg-slate-800/80 backdrop-blur-sm shadow-sm border-b border-gray-200 dark:border-slate-700 sticky top-0 z-50">
            <div class="max-w-6xl mx-auto px-4 py-3 flex flex-wrap items-center justify-between gap-4">
                <div class="flex items-center gap-6">
                    <A href="/" attr:class="font-bold text-blue-600 dark:text-blue-400 text-xl">
                        {move || SITE.brand.resolve(prefs.language())}
                    </A>
                    <span class="md:hidden text-sm text-slate-500">{current_page}</span>
                    <nav class="hidden md:flex items-center gap-1">
                        {NAV_ITEMS.iter().map(|item| view! { <NavLink item=*item /> }).collect_view()}
                    </nav>
                </div>
                <div class="flex items-center gap-2">
                    <LanguageToggle />
                    <ThemeToggle />
                </div>
            </div>
        </header>
    }
}

#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    let prefs = use_preferences();
    let pathname = use_location().pathname;
    let active = move || is_active(&item, &pathname.get());

    view! {
        <A
            href=item.path
            attr:class=move || {
                if active() {
                    "nav-link px-4 py-2 rounded-lg text-sm flex items-center gap-2 bg-blue-600 text-white shadow-lg shadow-blue-500/25"
                } else {
                    "nav-link px-4 py-2 rounded-lg text-sm flex items-center gap-2 text-slate-700 dark:text-slate-200 hover:bg-blue-100 dark:hover:bg-slate-700 hover:text-blue-600 dark:hover:text-blue-400"
                }
            }
        >
            <SvgIcon icon=item.icon size=18 />
            {move || prefs.t(item.label_key)}
        </A>
    }
}

#[component]
fn LanguageToggle() -> impl IntoView {
    let prefs = use_preferences();
    view! {
        <button
            class="inline-flex items-center gap-2 px-4 py-2 rounded-full font-semibold border border-gray-300 dark:border-gray-600 bg-white dark:bg-slate-800 hover:bg-gray-50 dark:hover:bg-slate-700 transition-all duration-300"
            on:click=move |_| prefs.toggle_language()
        >
            // labelled with the language it switches to
            {move || prefs.language().other().native_name()}
        </button>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let prefs = use_preferences();
    let is_dark = move || prefs.theme().is_dark();
    view! {
        <button
            class="inline-flex items-center gap-3 rounded-full border border-gray-300 dark:border-gray-600 px-4 py-2 text-sm font-semibold bg-white dark:bg-slate-800 hover:bg-slate-100 dark:hover:bg-slate-700 transition-all duration-300"
            aria-pressed=move || is_dark().to_string()
            on:click=move |_| prefs.toggle_theme()
        >
            {move || {
                if is_dark() {
                    view! {
                        <span class="inline-flex text-slate-200">
                            <SvgIcon icon=Icon::Moon size=18 />
                        </span>
                    }
                } else {
                    view! {
                        <span class="inline-flex text-amber-500">
                            <SvgIcon icon=Icon::Sun size=18 />
                        </span>
                    }
                }
            }}
            <span class="min-w-[70px] text-center">
                {move || prefs.t(if is_dark() { "themeLight" } else { "themeDark" })}
            </span>
        </button>
    }
}
