// crates/folio-app/src/sections/projects.rs
// Category filter, 3D carousel and grid over the project showcase

use folio_core::carousel::{Carousel, Slot, ViewMode};
use folio_core::catalog;
use folio_types::Project;
use leptos::prelude::*;

use super::ProjectCard;

/// Cards outside the ±2 window stay mounted but invisible
const OFF_STAGE_CSS: &str = "transform:scale(0.5);opacity:0;z-index:0;pointer-events:none";

#[component]
pub fn Projects() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(catalog::projects()));
    let view_mode = RwSignal::new(ViewMode::default());
    let empty = Memo::new(move |_| carousel.with(|c| c.is_empty()));

    view! {
        <section id="projects" class="py-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="max-w-6xl mx-auto relative z-10">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-3xl sm:text-4xl font-bold bg-gradient-to-r from-blue-400 via-purple-400 to-blue-400 bg-clip-text text-transparent text-center flex-1">
                        "Featured Projects"
                    </h2>
                    <button
                        class="flex items-center gap-2 px-4 py-2 bg-gray-800/50 text-gray-300 rounded-lg hover:text-white transition-all duration-300 border border-gray-700/50 hover:border-blue-400/50"
                        aria-label="Toggle view"
                        on:click=move |_| view_mode.update(|m| *m = m.toggle())
                    >
                        {move || match view_mode.get() {
                            ViewMode::Carousel => "Grid",
                            ViewMode::Grid => "Carousel",
                        }}
                    </button>
                </div>

                <p class="text-gray-400 text-center mb-8 max-w-2xl mx-auto">
                    "Here are some of my recent projects that showcase my skills and experience."
                </p>

                <FilterBar carousel/>

                {move || {
                    if empty.get() {
                        view! {
                            <p class="text-center text-gray-500 py-24">"No projects in this category yet."</p>
                        }
                            .into_any()
                    } else {
                        match view_mode.get() {
                            ViewMode::Carousel => view! { <CarouselView carousel/> }.into_any(),
                            ViewMode::Grid => view! { <GridView carousel/> }.into_any(),
                        }
                    }
                }}
            </div>
        </section>
    }
}

/// Cards keyed by category and id so a new filter remounts them
fn keyed_entries(carousel: &Carousel) -> Vec<(String, usize, Project)> {
    carousel
        .keyed_items()
        .map(|(key, index, project)| (key, index, project.clone()))
        .collect()
}

// ============================================================================
// Filter bar
// ============================================================================

#[component]
fn FilterBar(carousel: RwSignal<Carousel>) -> impl IntoView {
    let categories = carousel.with_untracked(|c| {
        c.available_categories()
            .into_iter()
            .map(|cat| (cat, c.count_for(cat)))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="flex flex-wrap justify-center gap-2 mb-10" role="tablist">
            {categories
                .into_iter()
                .map(|(category, count)| {
                    let selected = move || carousel.with(|c| c.category()) == category;
                    view! {
                        <button
                            role="tab"
                            aria-selected=move || selected().to_string()
                            class=move || {
                                if selected() {
                                    "px-4 py-1.5 rounded-full text-sm border bg-blue-500/20 text-blue-300 border-blue-400/60"
                                } else {
                                    "px-4 py-1.5 rounded-full text-sm border text-gray-400 border-gray-700/60 hover:text-white hover:border-blue-400/40"
                                }
                            }
                            on:click=move |_| carousel.update(|c| c.select_category(category))
                        >
                            {category.label()}
                            <span class="ml-1.5 text-xs text-gray-500">{count}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

// ============================================================================
// Carousel view
// ============================================================================

#[component]
fn CarouselView(carousel: RwSignal<Carousel>) -> impl IntoView {
    let entries = move || carousel.with(keyed_entries);
    let len = move || carousel.with(|c| c.len());

    view! {
        <div class="relative">
            <div class="relative h-[600px] flex items-center justify-center">
                <div class="relative w-full h-full flex items-center justify-center overflow-hidden" style="perspective:2000px">
                    <For
                        each=entries
                        key=|(key, _, _)| key.clone()
                        children=move |(_, index, project)| view! { <CarouselItem carousel index project/> }
                    />
                </div>

                <button
                    class="absolute left-4 top-1/2 -translate-y-1/2 bg-gray-800/90 hover:bg-gray-700 text-white p-4 rounded-full z-40 shadow-xl disabled:opacity-40"
                    aria-label="Previous project"
                    disabled=move || len() < 2
                    on:click=move |_| carousel.update(|c| c.previous())
                >
                    "‹"
                </button>
                <button
                    class="absolute right-4 top-1/2 -translate-y-1/2 bg-gray-800/90 hover:bg-gray-700 text-white p-4 rounded-full z-40 shadow-xl disabled:opacity-40"
                    aria-label="Next project"
                    disabled=move || len() < 2
                    on:click=move |_| carousel.update(|c| c.next())
                >
                    "›"
                </button>
            </div>

            <div class="flex justify-center gap-2 mt-8">
                <For
                    each=move || 0..len()
                    key=|index| *index
                    children=move |index| {
                        let focused = move || carousel.with(|c| c.focus()) == Some(index);
                        view! {
                            <button
                                class=move || {
                                    if focused() {
                                        "transition-all duration-300 rounded-full bg-blue-500 w-8 h-3"
                                    } else {
                                        "transition-all duration-300 rounded-full bg-gray-600 hover:bg-gray-500 w-3 h-3"
                                    }
                                }
                                aria-label=format!("Go to project {}", index + 1)
                                on:click=move |_| carousel.maybe_update(|c| c.jump_to(index))
                            ></button>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn CarouselItem(carousel: RwSignal<Carousel>, index: usize, project: Project) -> impl IntoView {
    let slot = Memo::new(move |_| carousel.with(|c| c.slot_of(index)));
    let style = move || match slot.get() {
        Some(s) => s.visual().to_css(s.is_interactive()),
        None => OFF_STAGE_CSS.to_string(),
    };
    let frame = move || {
        if slot.get() == Some(Slot::Center) {
            "ring-4 ring-blue-500/60 shadow-[0_0_50px_rgba(59,130,246,0.5)] rounded-xl overflow-hidden"
        } else {
            "rounded-xl overflow-hidden"
        }
    };

    view! {
        <div
            class="absolute w-[360px] transition-all duration-700 ease-out cursor-pointer"
            style=style
            on:click=move |_| carousel.maybe_update(|c| c.select_index(index))
        >
            <div class=frame>
                <ProjectCard project/>
            </div>
        </div>
    }
}

// ============================================================================
// Grid view
// ============================================================================

#[component]
fn GridView(carousel: RwSignal<Carousel>) -> impl IntoView {
    // Fade-in delays restart with each filter
    let entries = move || carousel.with(keyed_entries);

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            <For
                each=entries
                key=|(key, _, _)| key.clone()
                children=move |(_, index, project)| {
                    view! {
                        <div style=format!("animation:fadeIn 0.6s ease-out {}ms both", index * 100)>
                            <ProjectCard project/>
                        </div>
                    }
                }
            />
        </div>
    }
}
