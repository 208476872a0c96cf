// src/github.rs

//! Identity resolution against the GitHub users API.
//!
//! This is the network-bound collaborator in front of the pure pipeline:
//! it maps a human-readable login (or an already-numeric ID) to the
//! numeric identifier the core hashes, and fetches the auxiliary
//! profile/social-graph lists. Every failure is surfaced as a distinct,
//! human-readable reason; the core is never handed an invalid
//! identifier. Retry policy, credential storage, and pagination beyond a
//! single 100-item page are the caller's problem.

use log::warn;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const API_BASE: &str = "https://api.github.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const PAGE_SIZE: u32 = 100;

/// A distinct, human-readable lookup failure.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("user '{0}' not found on GitHub; check the name and try again")]
    NotFound(String),
    #[error("rate limit exceeded; GitHub allows 60 unauthenticated requests per hour")]
    RateLimited,
    #[error("authentication required; the GitHub API request was not authorized")]
    Unauthorized,
    #[error("unable to fetch user data; GitHub responded with status {0}")]
    UnexpectedStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("search mode is 'id' but input '{0}' is not a number")]
    NonNumericId(String),
}

/// How to route the input to an API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SearchMode {
    /// Numeric input goes to the by-ID endpoint, anything else by login.
    #[default]
    Auto,
    /// Input must be a numeric user ID.
    Id,
    /// Input is always treated as a login.
    Login,
}

/// A user's repository, reduced to what the summary shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "stargazers_count", default)]
    pub stars: u64,
    #[serde(default)]
    pub language: Option<String>,
}

/// The resolved profile: the numeric identifier the core hashes, plus the
/// auxiliary data the presentation layer shows.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    /// Stable numeric identifier, stringified for the pipeline.
    pub id: String,
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub created_at: Option<String>,
    pub avatar_url: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    /// Up to one page of repositories, most recently updated first.
    pub repos: Vec<RepoSummary>,
    /// Up to one page of follower logins.
    pub followers_list: Vec<String>,
    /// Up to one page of followed logins.
    pub following_list: Vec<String>,
}

/// Raw wire shape of the user endpoints.
#[derive(Debug, Deserialize)]
struct RawUser {
    id: u64,
    login: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
    #[serde(default)]
    public_repos: u64,
    #[serde(default)]
    followers: u64,
    #[serde(default)]
    following: u64,
}

#[derive(Debug, Deserialize)]
struct RawAccount {
    login: String,
}

/// Picks the endpoint path for the input under the given mode.
///
/// Pure routing, split out so the mode rules are testable offline.
fn endpoint(input: &str, mode: SearchMode) -> Result<String, LookupError> {
    let is_numeric = !input.is_empty() && input.chars().all(|c| c.is_ascii_digit());
    match mode {
        SearchMode::Id if !is_numeric => Err(LookupError::NonNumericId(input.to_owned())),
        SearchMode::Id => Ok(format!("{API_BASE}/user/{input}")),
        SearchMode::Login => Ok(format!("{API_BASE}/users/{input}")),
        SearchMode::Auto if is_numeric => Ok(format!("{API_BASE}/user/{input}")),
        SearchMode::Auto => Ok(format!("{API_BASE}/users/{input}")),
    }
}

/// Maps a non-success profile response to its failure reason.
fn status_to_error(status: StatusCode, input: &str) -> LookupError {
    match status {
        StatusCode::NOT_FOUND => LookupError::NotFound(input.to_owned()),
        StatusCode::FORBIDDEN => LookupError::RateLimited,
        StatusCode::UNAUTHORIZED => LookupError::Unauthorized,
        other => LookupError::UnexpectedStatus(other.as_u16()),
    }
}

fn transport_error(err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        LookupError::Timeout
    } else {
        LookupError::Network(err)
    }
}

/// Blocking GitHub API client with an optional personal access token.
pub struct GithubClient {
    http: Client,
}

impl GithubClient {
    pub fn new(token: Option<&str>) -> Result<Self, LookupError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("token {token}"))
                .map_err(|_| LookupError::Unauthorized)?;
            headers.insert(AUTHORIZATION, value);
        }
        let http = Client::builder()
            .user_agent(concat!("identicon/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http })
    }

    /// Resolves the input to a full profile.
    ///
    /// The profile endpoint decides success or failure; the auxiliary
    /// list fetches degrade to empty lists on any error.
    pub fn fetch_user(&self, input: &str, mode: SearchMode) -> Result<UserProfile, LookupError> {
        let url = endpoint(input, mode)?;
        let response = self.http.get(&url).send().map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(status_to_error(response.status(), input));
        }
        let raw: RawUser = response.json().map_err(transport_error)?;

        // Lookups by ID still need the login for the list endpoints.
        let login = raw.login.clone();
        let repos = self.fetch_page::<RepoSummary, _>(
            &format!("{API_BASE}/users/{login}/repos?per_page={PAGE_SIZE}&sort=updated"),
            |r| r,
        );
        let followers_list = self.fetch_page::<RawAccount, _>(
            &format!("{API_BASE}/users/{login}/followers?per_page={PAGE_SIZE}"),
            |a| a.login,
        );
        let following_list = self.fetch_page::<RawAccount, _>(
            &format!("{API_BASE}/users/{login}/following?per_page={PAGE_SIZE}"),
            |a| a.login,
        );

        Ok(UserProfile {
            id: raw.id.to_string(),
            login,
            name: raw.name,
            bio: raw.bio,
            created_at: raw.created_at,
            avatar_url: raw.avatar_url,
            public_repos: raw.public_repos,
            followers: raw.followers,
            following: raw.following,
            repos,
            followers_list,
            following_list,
        })
    }

    /// Fetches one page of a list endpoint, transforming each item.
    /// Failures are logged and yield an empty list.
    fn fetch_page<T, U>(&self, url: &str, transform: impl Fn(T) -> U) -> Vec<U>
    where
        T: serde::de::DeserializeOwned,
    {
        let items: Result<Vec<T>, LookupError> = (|| {
            let response = self.http.get(url).send().map_err(transport_error)?;
            if !response.status().is_success() {
                return Err(LookupError::UnexpectedStatus(response.status().as_u16()));
            }
            response.json().map_err(transport_error)
        })();
        match items {
            Ok(items) => items.into_iter().map(transform).collect(),
            Err(err) => {
                warn!("list fetch failed for {url}: {err}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_mode_routes_numeric_input_by_id() {
        assert_eq!(
            endpoint("170270", SearchMode::Auto).unwrap(),
            "https://api.github.com/user/170270"
        );
        assert_eq!(
            endpoint("torvalds", SearchMode::Auto).unwrap(),
            "https://api.github.com/users/torvalds"
        );
        // Mixed input is a login, not an ID.
        assert_eq!(
            endpoint("user123", SearchMode::Auto).unwrap(),
            "https://api.github.com/users/user123"
        );
    }

    #[test]
    fn id_mode_rejects_non_numeric_input() {
        assert!(matches!(
            endpoint("torvalds", SearchMode::Id),
            Err(LookupError::NonNumericId(_))
        ));
        assert_eq!(
            endpoint("42", SearchMode::Id).unwrap(),
            "https://api.github.com/user/42"
        );
    }

    #[test]
    fn login_mode_never_routes_by_id() {
        assert_eq!(
            endpoint("170270", SearchMode::Login).unwrap(),
            "https://api.github.com/users/170270"
        );
    }

    #[test]
    fn status_codes_map_to_distinct_reasons() {
        assert!(matches!(
            status_to_error(StatusCode::NOT_FOUND, "ghost"),
            LookupError::NotFound(name) if name == "ghost"
        ));
        assert!(matches!(
            status_to_error(StatusCode::FORBIDDEN, "x"),
            LookupError::RateLimited
        ));
        assert!(matches!(
            status_to_error(StatusCode::UNAUTHORIZED, "x"),
            LookupError::Unauthorized
        ));
        assert!(matches!(
            status_to_error(StatusCode::BAD_GATEWAY, "x"),
            LookupError::UnexpectedStatus(502)
        ));
    }

    #[test]
    fn failure_reasons_read_as_sentences() {
        let msg = LookupError::NotFound("ghost".into()).to_string();
        assert!(msg.contains("ghost"));
        assert!(msg.contains("not found"));
        assert!(LookupError::RateLimited.to_string().contains("60"));
    }

    #[test]
    fn repo_summary_deserializes_wire_shape() {
        let raw = r#"{"name":"linux","description":null,"stargazers_count":170000,"language":"C"}"#;
        let repo: RepoSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(repo.name, "linux");
        assert_eq!(repo.stars, 170_000);
        assert_eq!(repo.language.as_deref(), Some("C"));
        assert!(repo.description.is_none());
    }
}
