// crates/folio-types/src/lib.rs
// Shared types for the portfolio (native + WASM compatible)
// No native-only dependencies allowed here

use serde::{Deserialize, Serialize};
use std::fmt;

// ═══════════════════════════════════════
// PROJECT SHOWCASE
// ═══════════════════════════════════════

/// Closed set of project categories. `All` is the implicit catch-all used
/// as the default filter; projects never need to list it explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[default]
    All,
    Web,
    Mobile,
    Backend,
    Database,
    Tools,
    Embedded,
    Security,
    Cloud,
    #[serde(rename = "AI")]
    Ai,
    Design,
}

impl ProjectCategory {
    /// Every category in enumeration order, `All` first
    pub const ALL: [ProjectCategory; 11] = [
        ProjectCategory::All,
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::Backend,
        ProjectCategory::Database,
        ProjectCategory::Tools,
        ProjectCategory::Embedded,
        ProjectCategory::Security,
        ProjectCategory::Cloud,
        ProjectCategory::Ai,
        ProjectCategory::Design,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::All => "All",
            ProjectCategory::Web => "Web",
            ProjectCategory::Mobile => "Mobile",
            ProjectCategory::Backend => "Backend",
            ProjectCategory::Database => "Database",
            ProjectCategory::Tools => "Tools",
            ProjectCategory::Embedded => "Embedded",
            ProjectCategory::Security => "Security",
            ProjectCategory::Cloud => "Cloud",
            ProjectCategory::Ai => "AI",
            ProjectCategory::Design => "Design",
        }
    }

    /// Parse a raw label (case-insensitive). Anything unrecognized maps to `All`
    /// so a stale or hand-edited value can never leave the filter in a bad state.
    pub fn parse_lenient(raw: &str) -> Self {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(raw))
            .unwrap_or_default()
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for ProjectCategory {
    fn from(raw: &str) -> Self {
        Self::parse_lenient(raw)
    }
}

/// Lifecycle status shown as a badge on a project card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planned => "Planned",
        }
    }
}

/// A showcase project. Defined once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    pub categories: Vec<ProjectCategory>,
}

impl Project {
    /// True if this project shows up under `category`
    pub fn is_in(&self, category: ProjectCategory) -> bool {
        category == ProjectCategory::All || self.categories.contains(&category)
    }
}

// ═══════════════════════════════════════
// GITHUB PROFILE
// ═══════════════════════════════════════

/// Profile resource (`GET /users/{handle}`), only the fields we read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub repos_url: String,
    pub created_at: String,
}

/// One entry of the repository list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub language: Option<String>,
}

/// Shown when the profile has no bio
pub const BIO_FALLBACK: &str = "No bio provided.";

/// Shown when no repository reports a primary language
pub const LANGUAGE_FALLBACK: &str = "N/A";

/// Aggregated profile statistics, replaced wholesale on each successful fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub login: String,
    pub avatar_url: String,
    pub profile_url: String,
    pub name: String,
    pub bio: String,
    pub public_repos: u32,
    pub followers: u32,
    pub total_stars: u64,
    pub since_year: i32,
    pub top_language: String,
}

impl ProfileStats {
    pub fn has_top_language(&self) -> bool {
        self.top_language != LANGUAGE_FALLBACK
    }
}

// ═══════════════════════════════════════
// STATIC CONTENT
// ═══════════════════════════════════════

/// A titled group of skills on the Skills section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Phone,
    Email,
    GitHub,
    LinkedIn,
}

/// Contact link on the Connect section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactLink {
    pub name: &'static str,
    pub href: &'static str,
    pub kind: ContactKind,
}

impl ContactLink {
    /// `tel:` and `mailto:` links open in place, everything else in a new tab
    pub fn opens_new_tab(&self) -> bool {
        self.href.starts_with("http")
    }
}

/// Anchor section tracked by the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}
