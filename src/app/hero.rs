use std::time::Duration;

use leptos::prelude::*;

use crate::portfolio::{HERO_PHRASES, OWNER_NAME, RESUME_PATH};
use crate::typed::{CancelTimer, PendingTick, Typewriter};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center text-center px-4 relative z-10">
            <div>
                <h2 class="text-6xl sm:text-7xl font-extrabold mb-6 text-blue-400 leading-tight tracking-tight">
                    "Hi, I'm " <span class="text-white">{OWNER_NAME}</span>
                </h2>
                <p class="text-3xl md:text-4xl text-gray-300 font-semibold">
                    "I'm a " <TypedText phrases=HERO_PHRASES />
                </p>
                <a
                    href=RESUME_PATH
                    download="myresume.pdf"
                    class="inline-block mt-6 px-8 py-4 bg-blue-600 hover:bg-blue-700 text-white text-base sm:text-lg rounded-lg transition-all duration-300 shadow-md"
                >
                    "Download Resume"
                </a>
            </div>
        </section>
    }
}

#[component]
fn TypedText(phrases: &'static [&'static str]) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let typewriter = StoredValue::new(Typewriter::new(phrases));
    let pending = StoredValue::new(PendingTick::<TimeoutHandle>::default());

    // effects only run in the browser, so the loop never starts during SSR
    Effect::new(move |_| {
        if let Some(delay) = typewriter.with_value(|t| t.start_delay()) {
            schedule_tick(typewriter, pending, set_text, delay);
        }
    });

    on_cleanup(move || {
        pending.try_update_value(|p| p.cancel());
    });

    view! {
        <span class="text-blue-300 font-semibold">{text}</span>
        <span class="typed-cursor text-blue-300">"|"</span>
    }
}

fn schedule_tick(
    typewriter: StoredValue<Typewriter>,
    pending: StoredValue<PendingTick<TimeoutHandle>>,
    set_text: WriteSignal<String>,
    delay: Duration,
) {
    let handle = set_timeout_with_handle(
        move || {
            pending.try_update_value(|p| p.fired());
            // component is gone
            let Some((text, next)) = typewriter.try_update_value(|t| {
                let next = t.tick();
                (t.text(), next)
            }) else {
                return;
            };
            set_text.set(text);
            if let Some(next) = next {
                schedule_tick(typewriter, pending, set_text, next);
            }
        },
        delay,
    );
    match handle {
        Ok(handle) => {
            pending.try_update_value(|p| p.schedule(handle));
        }
        Err(err) => log::error!("Couldn't schedule typing effect: {err:?}"),
    }
}

impl CancelTimer for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}
