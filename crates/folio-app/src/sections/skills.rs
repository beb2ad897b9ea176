// crates/folio-app/src/sections/skills.rs
// Skills grid

use folio_core::catalog::SKILL_GROUPS;
use leptos::prelude::*;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="max-w-5xl mx-auto relative z-10">
                <p class="text-xs sm:text-sm uppercase tracking-[0.2em] text-blue-300/80 text-center mb-3">
                    "Technical Snapshot"
                </p>
                <h2 class="text-3xl sm:text-4xl font-bold bg-gradient-to-r from-blue-400 via-purple-400 to-blue-400 bg-clip-text text-transparent mb-3 text-center">
                    "Skills & Technologies"
                </h2>
                <p class="text-gray-400 text-sm sm:text-base text-center mb-10 max-w-3xl mx-auto">
                    "A practical snapshot of the tools and concepts I have worked with across academic, personal, and collaborative projects."
                </p>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="p-5 rounded-xl border border-gray-700/70 bg-gradient-to-br from-gray-900/70 to-gray-800/40 hover:border-blue-400/40 transition-all duration-300">
                                    <h3 class="text-sm font-semibold text-blue-300 mb-4 tracking-wide">{group.title}</h3>
                                    <div class="flex flex-wrap gap-2.5">
                                        {group
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="px-3.5 py-1.5 bg-gray-800/80 text-gray-300 rounded-full text-sm border border-gray-700/80 hover:text-blue-200 hover:border-blue-400/50 transition-all duration-300 cursor-default">
                                                        {*skill}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="mt-10 text-sm sm:text-base text-gray-400 leading-relaxed text-center max-w-4xl mx-auto">
                    "The skills listed above reflect technologies and concepts I have learned and applied through coursework and hands-on projects. "
                    "While I am still developing depth in several areas, I bring a strong learning mindset, practical experience, and the discipline to grow quickly in a professional environment."
                </p>
            </div>
        </section>
    }
}
