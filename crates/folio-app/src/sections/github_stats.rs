// crates/folio-app/src/sections/github_stats.rs
// Live GitHub profile card

use folio_core::FolioConfig;
use folio_core::stats::{StatsFetcher, StatsState};
use folio_types::ProfileStats;
use leptos::prelude::*;
use tokio_util::sync::CancellationToken;
use wasm_bindgen_futures::spawn_local;

use crate::api::GlooTransport;

#[component]
pub fn GitHubStats() -> impl IntoView {
    let config = expect_context::<FolioConfig>();
    let profile_link = format!("https://github.com/{}", config.github.handle);
    let (state, set_state) = signal(StatsState::Idle);

    // One token per mounted card; teardown abandons the fetch chain
    let token = CancellationToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    Effect::new(move |_| {
        let token = token.clone();
        let github = config.github.clone();
        spawn_local(async move {
            let fetcher = StatsFetcher::new(GlooTransport, github);
            fetcher.run(&token, move |s| set_state.set(s)).await;
        });
    });

    view! {
        <div class="mt-10 p-6 rounded-xl border border-gray-700/70 bg-gradient-to-br from-gray-900/70 to-gray-800/40">
            {move || match state.get() {
                StatsState::Idle | StatsState::Loading => view! { <StatsSkeleton/> }.into_any(),
                StatsState::Ready(stats) => view! { <StatsCard stats/> }.into_any(),
                StatsState::Unavailable => {
                    let href = profile_link.clone();
                    view! {
                        <div class="text-center text-gray-400">
                            <p class="mb-3">"GitHub stats are unavailable right now."</p>
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-blue-400 hover:underline"
                            >
                                "View profile on GitHub"
                            </a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn StatsSkeleton() -> impl IntoView {
    view! {
        <div class="animate-pulse flex items-center gap-4">
            <div class="w-16 h-16 rounded-full bg-gray-700"></div>
            <div class="flex-1 space-y-2">
                <div class="h-4 bg-gray-700 rounded w-1/3"></div>
                <div class="h-3 bg-gray-700 rounded w-2/3"></div>
            </div>
        </div>
    }
}

#[component]
fn StatsCard(stats: ProfileStats) -> impl IntoView {
    let language = stats.has_top_language().then(|| stats.top_language.clone());

    view! {
        <div>
            <div class="flex items-center gap-4 mb-6">
                <img src=stats.avatar_url.clone() alt=stats.login.clone() class="w-16 h-16 rounded-full border border-blue-500/40"/>
                <div class="text-left">
                    <a
                        href=stats.profile_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-lg font-semibold text-white hover:text-blue-400"
                    >
                        {stats.name.clone()}
                    </a>
                    <p class="text-sm text-gray-500">{format!("@{}", stats.login)}</p>
                    <p class="text-sm text-gray-400 mt-1">{stats.bio.clone()}</p>
                </div>
            </div>
            <div class="grid grid-cols-2 sm:grid-cols-4 gap-4 text-center">
                <Stat label="Repositories" value=stats.public_repos.to_string()/>
                <Stat label="Followers" value=stats.followers.to_string()/>
                <Stat label="Stars" value=stats.total_stars.to_string()/>
                <Stat label="Since" value=stats.since_year.to_string()/>
            </div>
            {language.map(|lang| view! {
                <p class="mt-4 text-sm text-gray-400">
                    "Most used language: "
                    <span class="text-blue-300 font-medium">{lang}</span>
                </p>
            })}
        </div>
    }
}

#[component]
fn Stat(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="p-3 rounded-lg bg-gray-800/60 border border-gray-700/60">
            <div class="text-xl font-bold text-white">{value}</div>
            <div class="text-xs uppercase tracking-wide text-gray-500">{label}</div>
        </div>
    }
}
