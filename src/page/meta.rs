//! Document head metadata.
//!
//! `build_meta` returns the head tags in emission order, title first.
//! Open Graph and Twitter Card fields reuse the site title and description.

use crate::config::SiteInfoConfig;
use crate::utils::html::{escape, escape_attr};
use serde::{Deserialize, Serialize};

const ROBOTS: &str = "index,follow,max-image-preview:large";

/// One `<head>` tag.
///
/// Serialized untagged, so each entry keeps the shape of the tag it
/// describes (`{"name": "robots", "content": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataEntry {
    Title { title: String },
    Name { name: String, content: String },
    Property { property: String, content: String },
    Link { rel: String, href: String },
}

impl MetadataEntry {
    pub fn title(title: impl Into<String>) -> Self {
        Self::Title {
            title: title.into(),
        }
    }

    pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Name {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Property {
            property: property.into(),
            content: content.into(),
        }
    }

    pub fn link(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            rel: rel.into(),
            href: href.into(),
        }
    }

    /// Render as a single HTML tag.
    pub fn to_html(&self) -> String {
        match self {
            Self::Title { title } => format!("<title>{}</title>", escape(title)),
            Self::Name { name, content } => format!(
                r#"<meta name="{}" content="{}">"#,
                escape_attr(name),
                escape_attr(content)
            ),
            Self::Property { property, content } => format!(
                r#"<meta property="{}" content="{}">"#,
                escape_attr(property),
                escape_attr(content)
            ),
            Self::Link { rel, href } => format!(
                r#"<link rel="{}" href="{}">"#,
                escape_attr(rel),
                escape_attr(href)
            ),
        }
    }
}

/// Build the head metadata for the landing page.
pub fn build_meta(site: &SiteInfoConfig) -> Vec<MetadataEntry> {
    let title = site.title.as_str();
    let description = site.description.as_str();
    let url = site.url.as_str();

    vec![
        MetadataEntry::title(title),
        MetadataEntry::name("description", description),
        MetadataEntry::name("keywords", site.keywords.join(", ")),
        MetadataEntry::name("robots", ROBOTS),
        // Open Graph
        MetadataEntry::property("og:title", title),
        MetadataEntry::property("og:description", description),
        MetadataEntry::property("og:type", "website"),
        MetadataEntry::property("og:url", url),
        MetadataEntry::property("og:image", site.og_image_url()),
        // Twitter Card
        MetadataEntry::name("twitter:card", "summary_large_image"),
        MetadataEntry::name("twitter:title", title),
        MetadataEntry::name("twitter:description", description),
        MetadataEntry::link("canonical", url),
        MetadataEntry::name("theme-color", site.theme_color.as_str()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(entry: &MetadataEntry) -> &str {
        match entry {
            MetadataEntry::Title { .. } => "title",
            MetadataEntry::Name { name, .. } => name,
            MetadataEntry::Property { property, .. } => property,
            MetadataEntry::Link { rel, .. } => rel,
        }
    }

    #[test]
    fn test_title_first() {
        let meta = build_meta(&SiteInfoConfig::default());
        assert_eq!(
            meta[0],
            MetadataEntry::title("TypingStories | Fun Typing Games & Creative Story Practice")
        );
    }

    #[test]
    fn test_entry_order() {
        let meta = build_meta(&SiteInfoConfig::default());
        let keys: Vec<&str> = meta.iter().map(key).collect();
        assert_eq!(
            keys,
            [
                "title",
                "description",
                "keywords",
                "robots",
                "og:title",
                "og:description",
                "og:type",
                "og:url",
                "og:image",
                "twitter:card",
                "twitter:title",
                "twitter:description",
                "canonical",
                "theme-color",
            ]
        );
    }

    #[test]
    fn test_single_canonical_equals_base_url() {
        let site = SiteInfoConfig::default();
        let meta = build_meta(&site);
        let canonical: Vec<_> = meta
            .iter()
            .filter(|e| matches!(e, MetadataEntry::Link { rel, .. } if rel == "canonical"))
            .collect();
        assert_eq!(canonical, [&MetadataEntry::link("canonical", site.url.as_str())]);
    }

    #[test]
    fn test_derived_values() {
        let meta = build_meta(&SiteInfoConfig::default());
        assert!(meta.contains(&MetadataEntry::name(
            "keywords",
            "typing stories, typing games, typing practice online, typing speed test, \
             interactive typing stories, kids typing practice, writing prompts, \
             improve typing speed, touch typing drills, typing lessons"
        )));
        assert!(meta.contains(&MetadataEntry::name("robots", ROBOTS)));
        assert!(meta.contains(&MetadataEntry::property(
            "og:image",
            "https://typingstories.com/og-image.jpg"
        )));
        assert!(meta.contains(&MetadataEntry::name("theme-color", "#6366f1")));
    }

    #[test]
    fn test_to_html_escapes() {
        assert_eq!(
            MetadataEntry::title("Games & Stories").to_html(),
            "<title>Games &amp; Stories</title>"
        );
        assert_eq!(
            MetadataEntry::name("description", r#"say "hi""#).to_html(),
            r#"<meta name="description" content="say &quot;hi&quot;">"#
        );
        assert_eq!(
            MetadataEntry::link("canonical", "https://typingstories.com/").to_html(),
            r#"<link rel="canonical" href="https://typingstories.com/">"#
        );
    }

    #[test]
    fn test_serialize_untagged() {
        let json = serde_json::to_string(&MetadataEntry::property("og:type", "website")).unwrap();
        assert_eq!(json, r#"{"property":"og:type","content":"website"}"#);
    }
}
