//! Site configuration loaded once at process start.
//!
//! Social link destinations come from four environment keys. An unset key is
//! not an error: it resolves to an empty string and the corresponding link
//! renders without a destination. Configured values are carried verbatim,
//! with no URL validation.

use serde::Serialize;

const TWITTER_URL: &str = "TWITTER_URL";
const INSTAGRAM_URL: &str = "INSTAGRAM_URL";
const GITHUB_URL: &str = "GITHUB_URL";
const LINKEDIN_URL: &str = "LINKEDIN_URL";

/// A read-only snapshot of the site's social link configuration.
///
/// Populate it once at startup with [`SiteConfig::from_env`] and pass it by
/// reference into the page builder. Every field may be empty.
///
/// ## Examples
///
/// ```
/// use mugshot_lib::SiteConfig;
///
/// let config = SiteConfig {
///     github_url: "https://github.com/pkellar".to_string(),
///     ..SiteConfig::default()
/// };
/// assert!(config.twitter_url.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Destination for the X (Twitter) link, from `TWITTER_URL`.
    pub twitter_url: String,
    /// Destination for the Instagram link, from `INSTAGRAM_URL`.
    pub instagram_url: String,
    /// Destination for the GitHub link, from `GITHUB_URL`.
    pub github_url: String,
    /// Destination for the LinkedIn link, from `LINKEDIN_URL`.
    pub linkedin_url: String,
}

impl SiteConfig {
    /// Reads the configuration snapshot from the process environment.
    ///
    /// Unset or non-unicode values resolve to empty strings.
    pub fn from_env() -> Self {
        let config = Self {
            twitter_url: std::env::var(TWITTER_URL).unwrap_or_default(),
            instagram_url: std::env::var(INSTAGRAM_URL).unwrap_or_default(),
            github_url: std::env::var(GITHUB_URL).unwrap_or_default(),
            linkedin_url: std::env::var(LINKEDIN_URL).unwrap_or_default(),
        };
        tracing::debug!(?config, "loaded site configuration");
        config
    }
}
