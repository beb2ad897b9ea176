// crates/folio-app/src/sections/connect.rs
// Contact links

use folio_core::catalog::CONTACT_LINKS;
use leptos::prelude::*;

#[component]
pub fn Connect() -> impl IntoView {
    view! {
        <section id="connect" class="py-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="max-w-4xl mx-auto text-center relative z-10">
                <h2 class="text-3xl sm:text-4xl font-bold bg-gradient-to-r from-blue-400 via-purple-400 to-blue-400 bg-clip-text text-transparent mb-4">
                    "Get In Touch"
                </h2>
                <p class="text-gray-400 mb-12 max-w-2xl mx-auto">
                    "I'm currently looking for internship opportunities. Whether you have a question or just want to say hi, feel free to reach out!"
                </p>

                <div class="flex flex-col sm:flex-row justify-center items-center gap-4 flex-wrap">
                    {CONTACT_LINKS
                        .iter()
                        .map(|link| {
                            let target = link.opens_new_tab().then_some("_blank");
                            view! {
                                <a
                                    href=link.href
                                    target=target
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-3 px-6 py-3 bg-gray-800/50 text-gray-300 rounded-lg hover:text-white transition-all duration-300 border border-gray-700/50 hover:border-blue-400/50 hover:scale-105"
                                >
                                    <span class="font-medium">{link.name}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
