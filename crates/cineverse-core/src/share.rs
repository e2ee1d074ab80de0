use cineverse_models::MovieSummary;
use std::fmt;
use std::str::FromStr;
use urlencoding::encode;

/// Plot excerpts in share messages are cut to this many characters
const PLOT_EXCERPT_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Facebook,
    Twitter,
    Whatsapp,
    Telegram,
    Email,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 5] = [
        SharePlatform::Facebook,
        SharePlatform::Twitter,
        SharePlatform::Whatsapp,
        SharePlatform::Telegram,
        SharePlatform::Email,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SharePlatform::Facebook => "facebook",
            SharePlatform::Twitter => "twitter",
            SharePlatform::Whatsapp => "whatsapp",
            SharePlatform::Telegram => "telegram",
            SharePlatform::Email => "email",
        }
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SharePlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SharePlatform::ALL
            .into_iter()
            .find(|p| p.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Invalid platform: {}. Use facebook, twitter, whatsapp, telegram, or email", s))
    }
}

/// Builds share links pointing at a movie's page on the public site.
pub struct ShareLinks {
    base_url: String,
    app_name: String,
}

impl ShareLinks {
    pub fn new(base_url: impl Into<String>, app_name: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            app_name: app_name.into(),
        }
    }

    pub fn page_url(&self, id: &str) -> String {
        format!("{}/movie/{}", self.base_url.trim_end_matches('/'), id)
    }

    fn title(&self, movie: &MovieSummary) -> String {
        format!("Watch {} ({}) on {}", movie.title, movie.year, self.app_name)
    }

    fn text(&self, movie: &MovieSummary, plot: Option<&str>) -> String {
        let excerpt: String = plot.unwrap_or_default().chars().take(PLOT_EXCERPT_CHARS).collect();
        format!("Discover \"{}\" - {}...", movie.title, excerpt)
    }

    pub fn share_url(&self, movie: &MovieSummary, plot: Option<&str>, platform: SharePlatform) -> String {
        let url = self.page_url(&movie.id);
        let title = self.title(movie);

        match platform {
            SharePlatform::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={}", encode(&url)),
            SharePlatform::Twitter => format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                encode(&title),
                encode(&url)
            ),
            SharePlatform::Whatsapp => format!("https://wa.me/?text={}", encode(&format!("{} {}", title, url))),
            SharePlatform::Telegram => format!(
                "https://t.me/share/url?url={}&text={}",
                encode(&url),
                encode(&title)
            ),
            SharePlatform::Email => format!(
                "mailto:?subject={}&body={}",
                encode(&title),
                encode(&format!("{}\n\n{}", self.text(movie, plot), url))
            ),
        }
    }

    /// Plain message for pasting anywhere
    pub fn clipboard_text(&self, movie: &MovieSummary) -> String {
        format!(
            "Watch \"{}\" ({}) on {}: {}",
            movie.title,
            movie.year,
            self.app_name,
            self.page_url(&movie.id)
        )
    }
}
