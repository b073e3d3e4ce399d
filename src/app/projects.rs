use leptos::{html::Div, prelude::*};

use super::hooks::use_reveal_once;
use crate::portfolio::{stagger, ProjectEntry, PROJECTS};
use crate::reveal::RevealOptions;

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<Div>::new();
    let revealed = use_reveal_once(section_ref, RevealOptions::amount(0.3));

    view! {
        <section id="projects" class="px-6 py-24 max-w-7xl mx-auto">
            <div node_ref=section_ref class="reveal" class:revealed=move || revealed.get()>
                <h2 class="text-5xl font-bold text-blue-400 mb-12">"Projects"</h2>
                <div class="grid md:grid-cols-2 gap-12">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project=*project index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Flip-card: summary on the front, link to the code on the back (hover).
#[component]
fn ProjectCard(project: ProjectEntry, index: usize) -> impl IntoView {
    let card_ref = NodeRef::<Div>::new();
    let revealed = use_reveal_once(card_ref, RevealOptions::amount(0.3));

    view! {
        <div
            node_ref=card_ref
            class="reveal-card flip-card relative h-64 group rounded-xl shadow-lg border border-gray-700"
            class:revealed=move || revealed.get()
            style=format!("transition-delay: {}s", stagger(index))
        >
            <div class="flip-card-inner absolute inset-0">
                <div class="flip-card-face absolute inset-0 p-6 overflow-hidden">
                    <h3 class="text-2xl font-bold mb-2 flex items-center gap-2">
                        {project.title}
                        {project
                            .tech_icons()
                            .map(|(name, src)| view! { <img src=src alt=name class="h-6 w-6" /> })
                            .collect_view()}
                    </h3>
                    <ul class="list-disc list-inside space-y-3 text-lg text-gray-300">
                        {project
                            .details
                            .iter()
                            .map(|detail| {
                                view! { <li class="truncate hover:whitespace-normal">{*detail}</li> }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="flip-card-face flip-card-back absolute inset-0 bg-black/80 text-center flex flex-col items-center justify-center">
                    <a
                        href=project.link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-6 py-3 bg-blue-600 text-white font-semibold rounded-lg shadow-lg hover:bg-blue-700 hover:scale-110 active:scale-95 transition duration-300"
                    >
                        "View Code on GitHub"
                    </a>
                </div>
            </div>
        </div>
    }
}
