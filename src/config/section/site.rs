//! `[site]` section configuration.
//!
//! Product constants feeding the head metadata and the `WebSite`
//! structured-data node. Every field defaults to the TypingStories values,
//! so the config file only needs the fields that differ.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "TypingStories"
//! url = "https://typingstories.com/"
//! theme_color = "#6366f1"
//! locale = "en-US"
//! keywords = ["typing stories", "typing games"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::page::DateLocale;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "TypingStories";
pub const DEFAULT_TITLE: &str = "TypingStories | Fun Typing Games & Creative Story Practice";
pub const DEFAULT_DESCRIPTION: &str = "TypingStories turns typing practice into an adventure with interactive stories, speed-building games, and writing prompts for all ages. Improve typing speed while enjoying creative storytelling.";
pub const DEFAULT_SUMMARY: &str = "TypingStories helps students and writers improve typing speed with interactive stories, games, and creative challenges.";
pub const DEFAULT_URL: &str = "https://typingstories.com/";
pub const DEFAULT_KEYWORDS: [&str; 10] = [
    "typing stories",
    "typing games",
    "typing practice online",
    "typing speed test",
    "interactive typing stories",
    "kids typing practice",
    "writing prompts",
    "improve typing speed",
    "touch typing drills",
    "typing lessons",
];

/// Site metadata used by the head builder and the structured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Product name (`WebSite.name`, footer, copy).
    pub name: String,

    /// Document title, also used for `og:title` and `twitter:title`.
    pub title: String,

    /// Meta description, also used for Open Graph and Twitter.
    pub description: String,

    /// Shorter description for the `WebSite` structured-data node.
    pub summary: String,

    /// Canonical base URL. Normalized to end with `/`.
    pub url: String,

    pub keywords: Vec<String>,

    /// Open Graph image, relative to `url` unless absolute.
    pub og_image: String,

    /// `theme-color` meta value (`#rgb` or `#rrggbb`).
    pub theme_color: String,

    /// `<html lang>` value.
    pub language: String,

    /// Locale for the "last updated" date label.
    pub locale: DateLocale,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.into(),
            title: DEFAULT_TITLE.into(),
            description: DEFAULT_DESCRIPTION.into(),
            summary: DEFAULT_SUMMARY.into(),
            url: DEFAULT_URL.into(),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| (*k).to_string()).collect(),
            og_image: "og-image.jpg".into(),
            theme_color: "#6366f1".into(),
            language: "en".into(),
            locale: DateLocale::EnUs,
        }
    }
}

impl SiteInfoConfig {
    const URL: FieldPath = FieldPath::new("site.url");
    const NAME: FieldPath = FieldPath::new("site.name");
    const TITLE: FieldPath = FieldPath::new("site.title");
    const KEYWORDS: FieldPath = FieldPath::new("site.keywords");
    const THEME_COLOR: FieldPath = FieldPath::new("site.theme_color");

    /// Absolute URL of the Open Graph image.
    pub fn og_image_url(&self) -> String {
        if self.og_image.starts_with("http://") || self.og_image.starts_with("https://") {
            return self.og_image.clone();
        }
        format!("{}{}", self.url, self.og_image.trim_start_matches('/'))
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `name` and `title` are not empty
    /// - `url` is an absolute http(s) URL with a host
    /// - `theme_color` is a hex color
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(Self::NAME, "must not be empty");
        }
        if self.title.trim().is_empty() {
            diag.error(Self::TITLE, "must not be empty");
        }

        // URL format check using url crate for strict validation
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://typingstories.com/",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://typingstories.com/",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {}", e),
                    "use format like https://typingstories.com/",
                );
            }
        }

        if !is_hex_color(&self.theme_color) {
            diag.error_with_hint(
                Self::THEME_COLOR,
                format!("'{}' is not a hex color", self.theme_color),
                "use format like #6366f1",
            );
        }

        if self.keywords.is_empty() {
            diag.hint(Self::KEYWORDS, "no keywords configured, meta keywords will be empty");
        }
    }
}

fn is_hex_color(s: &str) -> bool {
    s.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    })
}
