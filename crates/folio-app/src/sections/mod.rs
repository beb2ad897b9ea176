// crates/folio-app/src/sections/mod.rs
// Page sections, top to bottom

mod about;
mod connect;
mod github_stats;
mod hero;
mod project_card;
mod projects;
mod skills;

pub use about::About;
pub use connect::Connect;
pub use github_stats::GitHubStats;
pub use hero::Hero;
pub use project_card::ProjectCard;
pub use projects::Projects;
pub use skills::Skills;
