// crates/folio-app/src/lib.rs
// Folio - Leptos WASM portfolio frontend (CSR)

use folio_core::FolioConfig;
use leptos::prelude::*;
use leptos_meta::*;
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod frame;
mod glow;
mod sections;
mod typing;

use components::{Footer, Nav};
use sections::{About, Connect, Hero, Projects, Skills};

// Re-export shared types
pub use folio_types::*;

// ============================================================================
// Site Configuration (via Context)
// ============================================================================

const FOLIO_TOML: &str = include_str!("../folio.toml");

fn load_config() -> FolioConfig {
    FolioConfig::parse_or_default(FOLIO_TOML).with_handle_override(option_env!("FOLIO_GITHUB_HANDLE"))
}

fn provide_site_config() -> FolioConfig {
    let config = load_config();
    provide_context(config.clone());
    config
}

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Folio starting...");

    // Mount the app
    leptos::mount::mount_to_body(App);
}

// ============================================================================
// App Root
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = provide_site_config();
    log::debug!("Showing stats for {}", config.github.handle);

    view! {
        <Title text="Supakorn Prayongyam | Portfolio"/>
        <div class="min-h-screen bg-gray-950 text-gray-100">
            <Nav/>
            <main>
                <Hero/>
                <About/>
                <Skills/>
                <Projects/>
                <Connect/>
            </main>
            <Footer/>
        </div>
    }
}
