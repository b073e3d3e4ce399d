use leptos::{ev::SubmitEvent, html::Div, prelude::*, task::spawn_local, web_sys};

use super::hooks::use_reveal_once;
use crate::contact::{deliver, ContactField, ContactForm, Notice};
use crate::relay::{EmailJsRelay, RelayConfig};
use crate::reveal::RevealOptions;

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-gray-700 border border-gray-600 rounded-lg focus:border-blue-500 focus:outline-none text-white";

#[component]
pub fn Contact() -> impl IntoView {
    let contact = RwSignal::new(ContactForm::new());
    // owned here so it outlives the modal
    let relay_config = StoredValue::new(use_context::<RelayConfig>().unwrap_or_default());
    let cta_ref = NodeRef::<Div>::new();
    let revealed = use_reveal_once(cta_ref, RevealOptions::margin("-100px"));

    view! {
        <section id="contact" class="py-20 bg-gray-800/30 relative">
            <div class="container mx-auto px-6 text-center">
                <div
                    node_ref=cta_ref
                    class="fade-in max-w-2xl mx-auto"
                    class:revealed=move || revealed.get()
                >
                    <h2 class="text-4xl sm:text-5xl font-bold text-blue-400 mb-6">
                        "Get in Touch"
                    </h2>
                    <p class="text-xl text-gray-300 mb-8">
                        "Have a project in mind or want to discuss potential opportunities? I'd love to hear from you!"
                    </p>
                    <button
                        on:click=move |_| contact.update(|c| c.open_modal())
                        class="px-8 py-4 bg-blue-600 hover:bg-blue-700 hover:scale-105 active:scale-95 hover:shadow-[0_5px_15px_rgba(37,99,235,0.4)] text-white rounded-lg font-medium text-lg transition-all duration-300"
                    >
                        "Contact Me"
                    </button>
                </div>
            </div>
        </section>
        <Show when=move || contact.with(|c| c.is_open())>
            <ContactModal contact relay_config />
        </Show>
    }
}

#[component]
fn ContactModal(
    contact: RwSignal<ContactForm>,
    relay_config: StoredValue<RelayConfig>,
) -> impl IntoView {
    let field_value = move |field: ContactField| contact.with(|c| c.form().get(field).to_string());

    let on_input = move |ev: leptos::ev::Event| {
        let name = event_target::<web_sys::Element>(&ev)
            .get_attribute("name")
            .unwrap_or_default();
        let value = event_target_value(&ev);
        contact.update(|c| {
            if let Err(err) = c.update_field(&name, value) {
                log::warn!("{err}");
            }
        });
    };

    let on_cancel = move |_: leptos::ev::MouseEvent| contact.update(|c| c.cancel());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let relay = relay_config.try_get_value().map(EmailJsRelay::new);
        // close and reset first, the send result only picks the alert
        let Some(Some((relay, payload))) = contact.try_update(|c| c.submit_to(relay)) else {
            return;
        };
        spawn_local(async move {
            let notice = deliver(&relay, payload).await;
            show_notice(notice);
        });
    };

    view! {
        <div class="modal-backdrop fixed inset-0 z-50 flex items-center justify-center bg-black backdrop-blur-sm p-4">
            <div class="modal-panel bg-black border border-gray-700 rounded-xl shadow-2xl w-full max-w-md overflow-hidden">
                <div class="p-6">
                    <div class="flex justify-between items-center mb-6">
                        <h3 class="text-2xl font-bold text-blue-400">"Contact Me"</h3>
                        <button
                            type="button"
                            on:click=on_cancel
                            class="text-gray-400 hover:text-white"
                            aria-label="Close"
                        >
                            "✕"
                        </button>
                    </div>
                    <form on:submit=on_submit class="space-y-4">
                        <div>
                            <label for="name" class="block text-gray-300 mb-2">
                                "Name"
                            </label>
                            <input
                                type="text"
                                id=ContactField::Name.as_str()
                                name=ContactField::Name.as_str()
                                prop:value=move || field_value(ContactField::Name)
                                on:input=on_input
                                class=INPUT_CLASS
                                required=true
                            />
                        </div>
                        <div>
                            <label for="email" class="block text-gray-300 mb-2">
                                "Email"
                            </label>
                            <input
                                type="email"
                                id=ContactField::Email.as_str()
                                name=ContactField::Email.as_str()
                                prop:value=move || field_value(ContactField::Email)
                                on:input=on_input
                                class=INPUT_CLASS
                                required=true
                            />
                        </div>
                        <div>
                            <label for="message" class="block text-gray-300 mb-2">
                                "Message"
                            </label>
                            <textarea
                                id=ContactField::Message.as_str()
                                name=ContactField::Message.as_str()
                                rows="4"
                                prop:value=move || field_value(ContactField::Message)
                                on:input=on_input
                                class=INPUT_CLASS
                                required=true
                            ></textarea>
                        </div>
                        <div class="flex justify-end gap-3 pt-2">
                            <button
                                type="button"
                                on:click=on_cancel
                                class="px-6 py-2 bg-gray-700 hover:bg-gray-600 hover:scale-[1.03] active:scale-[0.97] text-white rounded-lg transition"
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="px-6 py-2 bg-blue-600 hover:bg-blue-700 hover:scale-[1.03] active:scale-[0.97] text-white rounded-lg transition"
                            >
                                "Send Message"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

fn show_notice(notice: Notice) {
    if let Err(err) = window().alert_with_message(notice.message()) {
        log::error!("Couldn't show notice: {err:?}");
    }
}
