use leptos::prelude::*;

use crate::portfolio::{devicon_url, TECH_ICONS};

/// Decorative floating tech icons behind the hero. Pure CSS animation, no
/// state.
#[component]
pub fn Backdrop() -> impl IntoView {
    view! {
        <div class="absolute top-0 left-0 w-full h-screen pointer-events-none z-0">
            {TECH_ICONS
                .iter()
                .enumerate()
                .map(|(i, icon)| {
                    let drift = icon.drift(i);
                    let style = format!(
                        "left: {}%; top: {}%; --drift-x: {}px; --drift-y: {}px; animation-duration: {:.2}s; animation-delay: {}s",
                        icon.x,
                        icon.y,
                        drift.dx,
                        drift.dy,
                        drift.duration,
                        icon.delay,
                    );
                    view! {
                        <img
                            src=devicon_url(icon.name)
                            alt=icon.name
                            class="float-icon absolute w-20 h-20 mix-blend-lighten"
                            style=style
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
