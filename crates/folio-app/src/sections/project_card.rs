// crates/folio-app/src/sections/project_card.rs
// Single project card with a cursor-following glow

use folio_core::FolioConfig;
use folio_types::Project;
use leptos::prelude::*;

use crate::glow::use_glow;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let config = expect_context::<FolioConfig>();
    let glow = use_glow(config.motion.card_damping);

    let Project {
        title,
        description,
        tags,
        image_url,
        github_url,
        demo_url,
        status,
        ..
    } = project;

    let image = match image_url.filter(|u| !u.is_empty()) {
        Some(src) => view! {
            <img
                src=src
                alt=title.clone()
                class="w-full h-48 object-cover group-hover:scale-105 transition-transform duration-300"
            />
        }
        .into_any(),
        None => view! {
            <div class="w-full h-48 bg-gradient-to-br from-blue-600/20 via-purple-600/20 to-gray-900 flex items-center justify-center">
                <span class="text-gray-500 text-lg">"No Image"</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <article
            class="relative h-full bg-gradient-to-br from-gray-800/50 to-gray-900/50 rounded-xl overflow-hidden border border-gray-700/50 hover:border-blue-400/50 transition-all duration-300 group"
            on:mousemove=move |ev| glow.track(&ev)
        >
            <div
                class="absolute w-[250px] h-[250px] bg-gradient-to-r from-blue-500/20 via-purple-500/15 to-transparent rounded-full blur-[60px] pointer-events-none opacity-0 group-hover:opacity-100"
                style=move || glow.style(125.0)
            ></div>
            <div
                class="absolute w-[150px] h-[150px] bg-gradient-to-r from-blue-400/15 to-transparent rounded-full blur-[40px] pointer-events-none opacity-0 group-hover:opacity-100"
                style=move || glow.style(75.0)
            ></div>

            {image}

            <div class="p-6">
                <div class="flex items-start justify-between gap-2 mb-2">
                    <h3 class="text-lg font-bold text-white group-hover:text-blue-400 transition-colors">
                        {title}
                    </h3>
                    {status.map(|s| view! {
                        <span class="shrink-0 px-2 py-0.5 text-xs rounded-full border border-purple-400/40 text-purple-300">
                            {s.label()}
                        </span>
                    })}
                </div>
                <p class="text-gray-400 mb-4 text-sm leading-relaxed">{description}</p>

                <div class="flex flex-wrap gap-2 mb-4">
                    {tags
                        .into_iter()
                        .map(|tag| view! {
                            <span class="px-3 py-1 bg-blue-500/10 text-gray-300 rounded-md text-xs border border-blue-500/20">
                                {tag}
                            </span>
                        })
                        .collect_view()}
                </div>

                <div class="flex gap-3">
                    {github_url.filter(|u| !u.is_empty()).map(|href| view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-400 hover:text-blue-400 p-1 rounded text-sm"
                            aria-label="View source code"
                        >
                            "Source"
                        </a>
                    })}
                    {demo_url.filter(|u| !u.is_empty()).map(|href| view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-400 hover:text-blue-400 p-1 rounded text-sm"
                            aria-label="View live demo"
                        >
                            "Live demo"
                        </a>
                    })}
                </div>
            </div>
        </article>
    }
}
