// crates/folio-app/src/sections/hero.rs
// Landing section with the typewriter and cursor glow

use folio_core::FolioConfig;
use folio_core::catalog::HERO_PHRASES;
use leptos::prelude::*;

use crate::components::scroll_to_section;
use crate::glow::use_glow;
use crate::typing::use_typewriter;

#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<FolioConfig>();
    let glow = use_glow(config.motion.hero_damping);
    let typed = use_typewriter(HERO_PHRASES, config.typewriter);

    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center justify-center px-4 sm:px-6 lg:px-8 pt-16 overflow-hidden"
            on:mousemove=move |ev| glow.track(&ev)
        >
            <div class="absolute inset-0 bg-gradient-to-br from-blue-900/20 via-purple-900/20 to-pink-900/20"></div>

            // Primary and accent glows share the smoothed point
            <div
                class="absolute w-[500px] h-[500px] bg-gradient-to-r from-blue-500/15 via-purple-500/10 to-transparent rounded-full blur-[80px] pointer-events-none"
                style=move || glow.style(250.0)
            ></div>
            <div
                class="absolute w-[300px] h-[300px] bg-gradient-to-r from-blue-400/10 to-transparent rounded-full blur-[60px] pointer-events-none"
                style=move || glow.style(150.0)
            ></div>

            <div class="max-w-4xl mx-auto text-center relative z-10">
                <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold text-white mb-6">
                    "Hi, I'm "
                    <span
                        class="text-blue-400 hover:text-blue-300 transition-colors cursor-pointer"
                        on:click=move |_| scroll_to_section("about")
                    >
                        "Supakorn Prayongyam"
                    </span>
                </h1>

                <div class="text-lg sm:text-xl md:text-2xl text-gray-300 mb-4 h-8 flex items-center justify-center">
                    <span class="font-mono">{move || typed.get()}</span>
                    <span class="inline-block w-0.5 h-6 bg-blue-400 ml-1 animate-pulse"></span>
                </div>

                <p class="text-base sm:text-lg text-gray-400 mb-2">
                    "Computer Engineering Student | SIIT, Thammasat University"
                </p>
                <p class="text-sm text-gray-500 mb-4">"3rd Year | GPA 3.23 | Pathum Thani, Thailand"</p>
                <p class="text-base sm:text-lg text-gray-400 mb-12 max-w-2xl mx-auto">
                    "Fascinated by building full-stack applications, designing APIs, and working with relational and NoSQL databases. "
                    "Seeking a Software Engineer internship to contribute to reliable systems while growing as an engineer."
                </p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-16">
                    <button
                        type="button"
                        class="px-8 py-3 bg-blue-500 text-white rounded-lg font-medium hover:bg-blue-600 transition-all duration-200 shadow-lg"
                        on:click=move |_| scroll_to_section("projects")
                    >
                        "View Projects →"
                    </button>
                    <button
                        type="button"
                        class="px-8 py-3 bg-gray-800 text-white rounded-lg font-medium hover:bg-gray-700 transition-all duration-200 border border-gray-700 hover:border-blue-500"
                        on:click=move |_| scroll_to_section("connect")
                    >
                        "Get in Touch"
                    </button>
                </div>

                <button
                    type="button"
                    class="inline-block animate-bounce text-gray-400 hover:text-white"
                    aria-label="Scroll to about"
                    on:click=move |_| scroll_to_section("about")
                >
                    "↓"
                </button>
            </div>
        </section>
    }
}
