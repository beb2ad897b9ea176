// crates/folio-core/src/stats/aggregate.rs
// Folding a profile and its repositories into a ProfileStats snapshot

use crate::error::{FolioError, Result};
use chrono::{DateTime, Datelike};
use folio_types::{BIO_FALLBACK, GitHubRepo, GitHubUser, LANGUAGE_FALLBACK, ProfileStats};

/// Sum of stargazers across all repositories
pub fn total_stars(repos: &[GitHubRepo]) -> u64 {
    repos.iter().map(|r| u64::from(r.stargazers_count)).sum()
}

/// Most frequent primary language. Repositories without a language are
/// skipped; on a tie the language seen first wins.
pub fn top_language(repos: &[GitHubRepo]) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for language in repos
        .iter()
        .filter_map(|r| r.language.as_deref())
        .filter(|l| !l.is_empty())
    {
        match counts.iter_mut().find(|(seen, _)| *seen == language) {
            Some((_, n)) => *n += 1,
            None => counts.push((language, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (language, n) in counts {
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((language, n));
        }
    }
    best.map(|(language, _)| language.to_string())
}

/// Year of an RFC 3339 timestamp such as `2019-03-01T00:00:00Z`
pub fn since_year(created_at: &str) -> Result<i32> {
    DateTime::parse_from_rfc3339(created_at)
        .map(|dt| dt.year())
        .map_err(|e| FolioError::InvalidTimestamp(format!("{}: {}", created_at, e)))
}

pub fn summarize(user: &GitHubUser, repos: &[GitHubRepo]) -> Result<ProfileStats> {
    let non_blank = |s: &Option<String>| s.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);

    Ok(ProfileStats {
        login: user.login.clone(),
        avatar_url: user.avatar_url.clone(),
        profile_url: user.html_url.clone(),
        name: non_blank(&user.name).unwrap_or_else(|| user.login.clone()),
        bio: non_blank(&user.bio).unwrap_or_else(|| BIO_FALLBACK.to_string()),
        public_repos: user.public_repos,
        followers: user.followers,
        total_stars: total_stars(repos),
        since_year: since_year(&user.created_at)?,
        top_language: top_language(repos).unwrap_or_else(|| LANGUAGE_FALLBACK.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(stars: u32, language: Option<&str>) -> GitHubRepo {
        GitHubRepo {
            name: "r".to_string(),
            html_url: "https://github.com/octo/r".to_string(),
            stargazers_count: stars,
            language: language.map(str::to_string),
        }
    }

    fn langs(languages: &[&str]) -> Vec<GitHubRepo> {
        languages.iter().map(|l| repo(0, Some(l))).collect()
    }

    fn user() -> GitHubUser {
        GitHubUser {
            login: "octo".to_string(),
            avatar_url: "https://avatars.example/u/1".to_string(),
            html_url: "https://github.com/octo".to_string(),
            name: None,
            bio: Some("   ".to_string()),
            public_repos: 12,
            followers: 5,
            repos_url: "https://api.github.com/users/octo/repos".to_string(),
            created_at: "2019-03-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_total_stars() {
        let repos = vec![repo(3, None), repo(1, None), repo(0, None), repo(2, None)];
        assert_eq!(total_stars(&repos), 6);
        assert_eq!(total_stars(&[]), 0);
    }

    #[test]
    fn test_top_language_majority() {
        assert_eq!(top_language(&langs(&["Go", "Rust", "Go"])).as_deref(), Some("Go"));
    }

    #[test]
    fn test_top_language_first_seen_wins_tie() {
        assert_eq!(top_language(&langs(&["Rust", "Go"])).as_deref(), Some("Rust"));
        assert_eq!(top_language(&langs(&["Go", "Rust", "Rust", "Go"])).as_deref(), Some("Go"));
    }

    #[test]
    fn test_top_language_ignores_missing() {
        let repos = vec![repo(0, None), repo(0, Some("")), repo(0, Some("C")), repo(0, None)];
        assert_eq!(top_language(&repos).as_deref(), Some("C"));
        assert_eq!(top_language(&[repo(1, None)]), None);
    }

    #[test]
    fn test_since_year() {
        assert_eq!(since_year("2019-03-01T00:00:00Z").unwrap(), 2019);
        assert_eq!(since_year("2021-12-31T23:59:59+07:00").unwrap(), 2021);
        assert!(matches!(since_year("yesterday"), Err(FolioError::InvalidTimestamp(_))));
    }

    #[test]
    fn test_summarize_reference_profile() {
        let repos = vec![
            repo(3, Some("TypeScript")),
            repo(1, Some("TypeScript")),
            repo(0, None),
            repo(2, Some("Python")),
        ];
        let stats = summarize(&user(), &repos).unwrap();
        assert_eq!(stats.total_stars, 6);
        assert_eq!(stats.top_language, "TypeScript");
        assert_eq!(stats.since_year, 2019);
        assert_eq!(stats.public_repos, 12);
        assert_eq!(stats.followers, 5);
    }

    #[test]
    fn test_summarize_fallbacks() {
        let stats = summarize(&user(), &[]).unwrap();
        assert_eq!(stats.name, "octo");
        assert_eq!(stats.bio, BIO_FALLBACK);
        assert_eq!(stats.top_language, LANGUAGE_FALLBACK);
        assert!(!stats.has_top_language());
    }

    #[test]
    fn test_summarize_bad_timestamp_fails() {
        let mut u = user();
        u.created_at = "03/01/2019".to_string();
        assert!(summarize(&u, &[]).is_err());
    }
}
