use leptos::prelude::*;

use super::{
    components::{Card, PageFrame, PageHeading},
    prefs::use_preferences,
};
use crate::content::SITE;

#[component]
pub fn AboutPage() -> impl IntoView {
    let prefs = use_preferences();
    let lang = move || prefs.language();

    view! {
        <PageFrame title_key="about">
            <Card>
                <PageHeading key="about" />
                <p class="text-slate-600 dark:text-slate-300 mb-6 text-lg leading-relaxed fade-in">
                    {move || SITE.bio.resolve(lang())}
                </p>
                <div class="grid md:grid-cols-2 gap-6 mt-8">
                    <div class="space-y-4">
                        <h3 class="font-semibold text-xl mb-4">{move || prefs.t("contactInfo")}</h3>
                        <div class="space-y-3 text-sm">
                            <div class="flex items-center gap-3">
                                <span class="text-blue-600">"📍"</span>
                                <span>{move || SITE.location.resolve(lang())}</span>
                            </div>
                            <div class="flex items-center gap-3">
                                <span class="text-blue-600">"📧"</span>
                                <a
                                    href=format!("mailto:{}", SITE.email)
                                    class="text-blue-600 hover:underline"
                                >
                                    {SITE.email}
                                </a>
                            </div>
                            <div class="flex items-center gap-3">
                                <span class="text-blue-600">"📞"</span>
                                <span dir="ltr">{SITE.phone}</span>
                            </div>
                        </div>
                    </div>
                    <div>
                        <h3 class="font-semibold text-xl mb-4">{move || prefs.t("skills")}</h3>
                        <div class="space-y-4">
                            {SITE
                                .skills
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <div>
                                            <div class="flex justify-between mb-1">
                                                <span class="text-sm font-medium">
                                                    {move || skill.name.resolve(lang())}
                                                </span>
                                                <span class="text-sm text-slate-500">
                                                    {format!("{}%", skill.level)}
                                                </span>
                                            </div>
                                            <div class="w-full bg-slate-200 dark:bg-slate-700 rounded-full h-2">
                                                <div
                                                    class="skill-bar bg-gradient-to-r from-blue-500 to-teal-500 h-2 rounded-full"
                                                    style=format!("width: {}%", skill.level)
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </Card>
        </PageFrame>
    }
}
