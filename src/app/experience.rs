use leptos::{html::Div, prelude::*};

use super::hooks::use_reveal_once;
use crate::portfolio::EXPERIENCE;
use crate::reveal::RevealOptions;

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<Div>::new();
    let revealed = use_reveal_once(section_ref, RevealOptions::amount(0.3));

    view! {
        <section id="experience" class="px-6 py-24 max-w-7xl mx-auto">
            <div node_ref=section_ref class="reveal" class:revealed=move || revealed.get()>
                <h2 class="text-5xl font-bold text-red-400 mb-12">"Experience"</h2>
                {EXPERIENCE
                    .iter()
                    .map(|exp| {
                        view! {
                            <div class="mb-12">
                                <h3 class="text-2xl font-bold mb-1">{exp.title}</h3>
                                <p class="italic text-red-200 mb-4">{exp.role}</p>
                                <ul class="list-disc list-inside space-y-2 text-lg text-gray-300">
                                    {exp.details.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
