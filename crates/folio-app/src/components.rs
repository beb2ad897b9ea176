// crates/folio-app/src/components.rs
// Shared layout components

use folio_core::catalog::NAV_SECTIONS;
use folio_core::scroll_spy::{SectionBounds, is_scrolled, most_visible};
use leptos::ev;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scroll to the section with the given element id
pub fn scroll_to_section(id: &str) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("No section #{}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Section currently covering most of the viewport, if any clears the threshold
fn visible_section() -> Option<&'static str> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;

    let bounds: Vec<SectionBounds<'static>> = NAV_SECTIONS
        .iter()
        .filter_map(|section| {
            let rect = document.get_element_by_id(section.id)?.get_bounding_client_rect();
            Some(SectionBounds {
                id: section.id,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect();
    most_visible(&bounds, viewport_height)
}

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

// ============================================================================
// Nav
// ============================================================================

#[component]
pub fn Nav() -> impl IntoView {
    let (active, set_active) = signal(NAV_SECTIONS[0].id);
    let (scrolled, set_scrolled) = signal(false);
    let menu_open = RwSignal::new(false);

    let update = move || {
        set_scrolled.set(is_scrolled(scroll_y()));
        if let Some(id) = visible_section() {
            if active.get_untracked() != id {
                set_active.set(id);
            }
        }
    };

    let handle = window_event_listener(ev::scroll, move |_| update());
    on_cleanup(move || handle.remove());
    Effect::new(move |_| update());

    let go = move |id: &'static str| {
        scroll_to_section(id);
        menu_open.set(false);
    };

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-gray-900/95 backdrop-blur-md border-b border-blue-500/20 shadow-lg shadow-blue-500/10"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-gray-900/50 backdrop-blur-sm border-b border-gray-800/50"
            }
        }>
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        class="text-xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent"
                        on:click=move |_| go("home")
                    >
                        "Supakorn P."
                    </button>

                    <div class="hidden md:flex items-center space-x-1">
                        {NAV_SECTIONS
                            .iter()
                            .map(|section| {
                                let id = section.id;
                                view! {
                                    <button
                                        class=move || {
                                            if active.get() == id {
                                                "relative px-4 py-2 text-sm font-medium text-blue-400"
                                            } else {
                                                "relative px-4 py-2 text-sm font-medium text-gray-300 hover:text-white"
                                            }
                                        }
                                        on:click=move |_| go(id)
                                    >
                                        {section.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        class="md:hidden text-gray-300 hover:text-white rounded p-2"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "Close" } else { "Menu" }}
                    </button>
                </div>

                <div class=move || {
                    if menu_open.get() {
                        "md:hidden overflow-hidden transition-all duration-300 max-h-64 opacity-100"
                    } else {
                        "md:hidden overflow-hidden transition-all duration-300 max-h-0 opacity-0"
                    }
                }>
                    <div class="py-4 border-t border-gray-800">
                        {NAV_SECTIONS
                            .iter()
                            .map(|section| {
                                let id = section.id;
                                view! {
                                    <button
                                        class=move || {
                                            if active.get() == id {
                                                "block w-full text-left px-4 py-2 text-sm rounded bg-blue-500/10 text-blue-400 border-l-2 border-blue-400"
                                            } else {
                                                "block w-full text-left px-4 py-2 text-sm rounded text-gray-300 hover:text-white"
                                            }
                                        }
                                        on:click=move |_| go(id)
                                    >
                                        {section.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

// ============================================================================
// Footer
// ============================================================================

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="py-12 px-4 sm:px-6 lg:px-8 border-t border-gray-800/50 bg-gray-950">
            <div class="max-w-6xl mx-auto text-center">
                <p class="text-gray-400 text-sm mb-8">
                    {format!("© {} ", year)}
                    <span class="font-semibold">"Supakorn P."</span>
                    " Built with "
                    <span class="text-orange-400 font-bold">"Rust"</span>
                    ", "
                    <span class="text-purple-400 font-bold">"Leptos"</span>
                    " & "
                    <span class="text-pink-400 font-bold">"Tailwind CSS"</span>
                    "."
                </p>
                <div class="h-px bg-gradient-to-r from-transparent via-gray-700/50 to-transparent"></div>
                <p class="mt-6 text-gray-500 text-sm">"ohm.supakornth@gmail.com"</p>
            </div>
        </footer>
    }
}
