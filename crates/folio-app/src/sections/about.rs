// crates/folio-app/src/sections/about.rs
// About section

use leptos::prelude::*;

use super::GitHubStats;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="max-w-4xl mx-auto relative z-10">
                <h2 class="text-3xl sm:text-4xl font-bold bg-gradient-to-r from-blue-400 via-purple-400 to-blue-400 bg-clip-text text-transparent mb-8 text-center">
                    "About Me"
                </h2>
                <div class="space-y-6 text-gray-300 text-base sm:text-lg leading-relaxed">
                    <p>
                        "I'm a "
                        <span class="font-semibold">"Computer Engineering student"</span>
                        " at SIIT, Thammasat University with experience in software development, backend systems, and database design. "
                        "I have a strong foundation in object-oriented programming, data structures and algorithms, and software engineering principles."
                    </p>
                    <p>
                        "Through academic and industry-collaborative projects, I've gained hands-on experience building"
                        <span class="font-semibold">" full-stack web applications"</span>
                        ", designing RESTful APIs, and working with both relational (MySQL) and NoSQL (MongoDB) databases. "
                        "Currently, I'm collaborating with BAKA Co., Ltd. on redesigning their agricultural platform's UX/UI."
                    </p>
                    <p>
                        "I'm seeking a "
                        <span class="font-semibold">"Software Engineer internship"</span>
                        " where I can contribute to building reliable, well-structured systems while continuing to grow and learn from experienced engineers."
                    </p>
                </div>
                <GitHubStats/>
            </div>
        </section>
    }
}
