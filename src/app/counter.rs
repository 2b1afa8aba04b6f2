use leptos::prelude::*;
use leptos_use::{
    use_raf_fn_with_options, use_timeout_fn, utils::Pausable, UseRafFnOptions,
    UseTimeoutFnReturn,
};

use super::prefs::use_preferences;
use crate::counter::CounterAnimation;

/// Counts from zero up to `number` after `delay` seconds, one step per
/// animation frame. Timers are dropped with the component.
#[component]
pub fn AnimatedCounter(number: u32, delay: f64, label_key: &'static str) -> impl IntoView {
    let prefs = use_preferences();
    let (count, set_count) = signal(0_u32);
    let (finished, set_finished) = signal(false);
    let animation = StoredValue::new(CounterAnimation::new(number));

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |_| {
            let step = animation
                .try_update_value(|a| a.tick().map(|v| (v, a.is_finished())))
                .flatten();
            if let Some((value, done)) = step {
                set_count(value);
                if done {
                    set_finished(true);
                }
            }
        },
        UseRafFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        if finished.get() {
            pause();
        }
    });

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(move |_: ()| resume(), delay * 1000.0);
    start(());

    on_cleanup(move || {
        animation.try_update_value(|a| a.cancel());
    });

    view! {
        <div class="counter text-center p-4 rounded-xl bg-white/50 dark:bg-slate-800/50 border border-slate-200 dark:border-slate-700">
            <div class="text-3xl font-bold text-blue-600 dark:text-blue-400">{count} "+"</div>
            <div class="text-sm text-slate-600 dark:text-slate-400 mt-2">
                {move || prefs.t(label_key)}
            </div>
        </div>
    }
}
