// crates/folio-app/src/typing.rs
// Drives the hero typewriter with gloo timers

use folio_core::config::TypewriterConfig;
use folio_core::cancel::until_cancelled;
use folio_core::typewriter::Typewriter;
use gloo_timers::future::sleep;
use leptos::prelude::*;
use tokio_util::sync::CancellationToken;
use wasm_bindgen_futures::spawn_local;

/// Visible typewriter text. The timer loop ends with the calling component.
pub fn use_typewriter(phrases: &'static [&'static str], timing: TypewriterConfig) -> ReadSignal<String> {
    let (text, set_text) = signal(String::new());

    let Some(mut writer) = Typewriter::new(phrases.iter().copied(), timing) else {
        log::warn!("Typewriter has no phrases");
        return text;
    };

    let token = CancellationToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    spawn_local(async move {
        let mut delay = writer.delay();
        loop {
            if until_cancelled(&token, sleep(delay)).await.is_err() {
                break;
            }
            delay = writer.tick();
            set_text.set(writer.text().to_string());
        }
    });

    text
}
