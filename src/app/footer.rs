use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::portfolio::OWNER_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();
    view! {
        <footer class="py-8 border-t border-gray-800 text-center">
            <div class="container mx-auto px-6">
                <p class="text-gray-400">
                    {format!("© {year} [{OWNER_NAME}]. All rights reserved.")}
                </p>
            </div>
        </footer>
    }
}
