use leptos::{html::Div, prelude::*};

use super::hooks::use_reveal_once;
use crate::portfolio::{stagger, SKILLS};
use crate::reveal::RevealOptions;

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<Div>::new();
    // bars fill from zero once the section has been seen
    let seen = use_reveal_once(section_ref, RevealOptions::margin("-100px"));

    view! {
        <section id="skills" class="px-6 py-24 max-w-7xl mx-auto">
            <div node_ref=section_ref>
                <h2 class="text-5xl font-bold text-blue-400 mb-12">"Skillset"</h2>
                <div class="grid md:grid-cols-2 gap-x-16 gap-y-6">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            let skill = *skill;
                            view! {
                                <div class="flex justify-between items-center">
                                    <span class="text-lg font-medium text-white w-48">
                                        {skill.label}
                                    </span>
                                    <div class="flex-1 ml-4">
                                        <div class="relative w-full h-3 bg-gray-700 rounded-full overflow-hidden">
                                            <div
                                                class="skill-fill absolute top-0 left-0 h-3 bg-blue-500 rounded-full"
                                                style=move || {
                                                    format!(
                                                        "width: {}; transition-delay: {}s",
                                                        skill.fill_width(seen.get()),
                                                        stagger(i),
                                                    )
                                                }
                                            ></div>
                                        </div>
                                    </div>
                                    <span class="ml-4 text-sm text-gray-300 font-semibold">
                                        {format!("{}%", skill.percent)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
