use leptos::prelude::*;
use leptos_router::components::A;

use super::{
    components::{Card, PageFrame},
    counter::AnimatedCounter,
    icon::SvgIcon,
    prefs::use_preferences,
};
use crate::{
    content::{Feature, SITE},
    icons::Icon,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let prefs = use_preferences();
    let lang = move || prefs.language();

    view! {
        <PageFrame title_key="home">
            <Card class="relative overflow-hidden text-center">
                <div class="w-32 h-32 mx-auto rounded-full bg-gradient-to-br from-blue-500 to-teal-500 grid place-items-center text-white text-5xl mb-6 pop-in">
                    <SvgIcon icon=Icon::User size=64 />
                </div>
                <h1 class="text-4xl font-bold bg-gradient-to-r from-blue-600 to-teal-600 bg-clip-text text-transparent">
                    {move || SITE.brand.resolve(lang())}
                </h1>
                <p class="text-blue-600 dark:text-blue-400 mt-2 text-xl font-semibold">
                    {move || SITE.headline.resolve(lang())}
                </p>
                <p class="text-slate-600 dark:text-slate-300 max-w-2xl mx-auto mt-4 text-lg leading-relaxed">
                    {move || SITE.bio.resolve(lang())}
                </p>
                <div class="grid grid-cols-3 gap-6 max-w-md mx-auto mt-8">
                    {SITE
                        .stats
                        .iter()
                        .map(|stat| {
                            view! {
                                <AnimatedCounter
                                    number=stat.number
                                    delay=stat.delay
                                    label_key=stat.label_key
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap justify-center gap-3 mt-8">
                    {SITE
                        .socials
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.href
                                    target="_blank"
                                    rel="noreferrer"
                                    class="px-6 py-3 rounded-full border border-blue-300 dark:border-blue-700 bg-blue-50 dark:bg-blue-900/30 text-blue-700 dark:text-blue-300 font-medium hover:-translate-y-0.5 transition-all"
                                >
                                    {social.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Card>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 stagger">
                {SITE
                    .features
                    .iter()
                    .map(|feature| view! { <FeatureCard feature /> })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    let prefs = use_preferences();
    let icon_class = format!(
        "w-12 h-12 rounded-lg bg-gradient-to-br {} grid place-items-center text-white mb-4",
        feature.accent,
    );

    view! {
        <A href=feature.page.path() attr:class="group block h-full hover:-translate-y-2 transition-transform">
            <Card class="relative overflow-hidden h-full">
                <div class=icon_class>
                    <SvgIcon icon=feature.page.icon() size=24 />
                </div>
                <h3 class="font-bold text-xl mb-3 group-hover:text-blue-600 dark:group-hover:text-blue-400 transition-colors">
                    {move || prefs.t(feature.page.label_key())}
                </h3>
                <p class="text-slate-600 dark:text-slate-300 mb-6 leading-relaxed">
                    {move || feature.description.resolve(prefs.language())}
                </p>
                <span class="inline-flex items-center gap-2 text-blue-600 dark:text-blue-400 font-medium">
                    {move || prefs.t("discoverMore")}
                    <span class="inline-flex rtl:rotate-180">
                        <SvgIcon icon=Icon::Arrow size=18 />
                    </span>
                </span>
            </Card>
        </A>
    }
}
