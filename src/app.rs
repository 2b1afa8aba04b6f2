mod about;
mod blog;
mod components;
mod contact;
mod counter;
mod footer;
mod header;
mod homepage;
mod icon;
mod mentorship;
mod not_found;
mod prefs;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_location, StaticSegment};

use crate::{content::SITE, routes::Page};
use about::AboutPage;
use blog::BlogPage;
use contact::ContactPage;
use footer::Footer;
use header::Header;
use homepage::HomePage;
use mentorship::MentorshipPage;
use not_found::NotFound;
use projects::ProjectsPage;

pub use prefs::{provide_preferences, use_preferences, SitePreferences};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // matches the default preferences, the stored ones are applied after hydration
    view! {
        <!DOCTYPE html>
        <html lang="ar" dir="rtl">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let prefs = provide_preferences();

    view! {
        <Title formatter=move |title| {
            format!("{} - {title}", SITE.brand.resolve(prefs.language()))
        } />

        <Router>
            <div class="min-h-screen flex flex-col bg-slate-50 dark:bg-slate-900 text-slate-900 dark:text-slate-100 transition-colors duration-300">
                <Header />
                <main class="flex-grow w-full max-w-6xl mx-auto px-4 py-8">
                    <ScrollToTop />
                    // each route is built from its page's segment, matching routes::resolve
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=StaticSegment(Page::Home.segment()) view=HomePage />
                        <Route path=StaticSegment(Page::About.segment()) view=AboutPage />
                        <Route path=StaticSegment(Page::Projects.segment()) view=ProjectsPage />
                        <Route path=StaticSegment(Page::Blog.segment()) view=BlogPage />
                        <Route path=StaticSegment(Page::Contact.segment()) view=ContactPage />
                        <Route path=StaticSegment(Page::Mentorship.segment()) view=MentorshipPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// Resets the scroll position whenever the path changes.
#[component]
fn ScrollToTop() -> impl IntoView {
    let pathname = use_location().pathname;
    Effect::watch(
        move || pathname.get(),
        |_, _, _| {
            window().scroll_to_with_x_and_y(0.0, 0.0);
        },
        false,
    );
}
