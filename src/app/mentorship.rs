use leptos::prelude::*;

use super::{
    components::{Card, PageFrame, PageHeading},
    prefs::use_preferences,
};
use crate::content::SITE;

#[component]
pub fn MentorshipPage() -> impl IntoView {
    let prefs = use_preferences();
    let lang = move || prefs.language();

    view! {
        <PageFrame title_key="mentorship">
            <Card>
                <PageHeading key="mentorship" />
                <p class="text-slate-600 dark:text-slate-300 mb-6 text-lg leading-relaxed fade-in">
                    {move || SITE.mentorship_intro.resolve(lang())}
                </p>
                <div class="grid md:grid-cols-2 gap-6 mt-8">
                    <div class="space-y-4">
                        <h3 class="font-semibold text-xl mb-4">{move || prefs.t("whatIOffer")}</h3>
                        <ul class="space-y-3 stagger">
                            {SITE
                                .mentorship_offers
                                .iter()
                                .map(|offer| {
                                    view! {
                                        <li class="flex items-center gap-3">
                                            <div class="w-2 h-2 bg-blue-500 rounded-full"></div>
                                            <span>{move || offer.resolve(lang())}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="text-center">
                        <div class="bg-gradient-to-br from-blue-500 to-teal-500 text-white p-8 rounded-2xl">
                            <h3 class="text-2xl font-bold mb-4">{move || prefs.t("startJourney")}</h3>
                            <p class="mb-6 opacity-90">{move || prefs.t("freeConsultation")}</p>
                            // no booking flow exists yet
                            <button
                                type="button"
                                class="bg-white text-blue-600 px-6 py-3 rounded-full font-semibold hover:bg-gray-100 transition-colors"
                            >
                                {move || prefs.t("bookNow")}
                            </button>
                        </div>
                    </div>
                </div>
            </Card>
        </PageFrame>
    }
}
