use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    contact::Contact, experience::Experience, hero::Hero, projects::Projects, skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <Experience />
        <Projects />
        <Skills />
        <Contact />
    }
}
