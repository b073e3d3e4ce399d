use leptos::prelude::*;

use crate::portfolio::{GITHUB_URL, LINKEDIN_URL, MAILTO_URL};

const LINK_CLASS: &str = "text-2xl hover:text-blue-400 transition-colors duration-300";

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="fixed w-full bg-[#0f0f0f]/70 backdrop-blur-md text-white z-50 shadow-lg border-b border-gray-800">
            <div class="max-w-7xl mx-auto px-6 py-4 flex justify-between items-center">
                <h1 class="text-3xl font-extrabold text-blue-400 tracking-wide uppercase"></h1>
                <nav class="flex gap-4 items-center">
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class=LINK_CLASS
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a
                        href=LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class=LINK_CLASS
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <a href=MAILTO_URL class=LINK_CLASS aria-label="Email">
                        <MailIcon />
                    </a>
                </nav>
            </div>
        </header>
    }
}

#[component]
fn MailIcon() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <rect width="20" height="16" x="2" y="4" rx="2"></rect>
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"></path>
        </svg>
    }
}
