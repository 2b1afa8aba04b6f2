use leptos::prelude::*;

use super::{
    components::{Card, PageFrame},
    prefs::use_preferences,
};
use crate::{
    contact::{Field, FormDraft, SubmitNotice},
    content::SITE,
};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-slate-800 focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
pub fn ContactPage() -> impl IntoView {
    let prefs = use_preferences();
    let draft = RwSignal::new(FormDraft::default());
    let (notice, set_notice) = signal(None::<SubmitNotice>);

    let value_of = move |field: Field| move || draft.with(|d| d.get(field).to_string());
    let update = move |field: Field, value: String| draft.update(|d| d.set(field, value));

    view! {
        <PageFrame title_key="contact">
            <div class="grid md:grid-cols-2 gap-6">
                <Card>
                    <h2 class="text-2xl font-bold mb-4">{move || prefs.t("contactInfo")}</h2>
                    <div class="space-y-4">
                        <div>
                            <h3 class="font-semibold mb-2">{move || prefs.t("email")}</h3>
                            <a
                                href=format!("mailto:{}", SITE.email)
                                class="text-blue-600 dark:text-blue-400 hover:underline"
                            >
                                {SITE.email}
                            </a>
                        </div>
                        <div>
                            <h3 class="font-semibold mb-2">{move || prefs.t("phone")}</h3>
                            <div dir="ltr">{SITE.phone}</div>
                        </div>
                        <div>
                            <h3 class="font-semibold mb-2">{move || prefs.t("location")}</h3>
                            <div>{move || SITE.location.resolve(prefs.language())}</div>
                        </div>
                    </div>
                </Card>
                <Card>
                    <h2 class="text-2xl font-bold mb-4">{move || prefs.t("sendMessage")}</h2>
                    <form
                        class="space-y-4"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            let Some(result) = draft.try_update(FormDraft::submit) else {
                                return;
                            };
                            set_notice(Some(result));
                            #[cfg(feature = "hydrate")]
                            {
                                let [headline, detail] = result.message_keys();
                                let text = format!("{}\n{}", prefs.t(headline), prefs.t(detail));
                                _ = window().alert_with_message(&text);
                            }
                        }
                    >
                        <div>
                            <label for="contact_name" class="block text-sm font-medium mb-2">
                                {move || prefs.t("name")}
                            </label>
                            <input
                                id="contact_name"
                                type="text"
                                required
                                class=INPUT_CLASS
                                prop:value=value_of(Field::Name)
                                on:input=move |ev| update(Field::Name, event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="contact_email" class="block text-sm font-medium mb-2">
                                {move || prefs.t("email")}
                            </label>
                            <input
                                id="contact_email"
                                type="email"
                                required
                                dir="ltr"
                                class=INPUT_CLASS
                                prop:value=value_of(Field::Email)
                                on:input=move |ev| update(Field::Email, event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="contact_message" class="block text-sm font-medium mb-2">
                                {move || prefs.t("message")}
                            </label>
                            <textarea
                                id="contact_message"
                                rows="4"
                                required
                                class=INPUT_CLASS
                                prop:value=value_of(Field::Message)
                                on:input=move |ev| update(Field::Message, event_target_value(&ev))
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            class="w-full bg-blue-600 text-white py-3 rounded-lg font-semibold hover:bg-blue-700 transition-colors"
                        >
                            {move || prefs.t("sendMessageButton")}
                        </button>
                    </form>
                    {move || {
                        notice
                            .get()
                            .map(|n| {
                                let [headline, detail] = n.message_keys();
                                view! {
                                    <div
                                        role="status"
                                        class="mt-4 p-3 rounded-lg bg-amber-50 dark:bg-amber-900/30 text-amber-800 dark:text-amber-200 text-sm"
                                    >
                                        <p class="font-semibold">{prefs.t(headline)}</p>
                                        <p>{prefs.t(detail)}</p>
                                    </div>
                                }
                            })
                    }}
                </Card>
            </div>
        </PageFrame>
    }
}
