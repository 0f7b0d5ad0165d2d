//! Sitemap generation.
//!
//! The site is a single page, so the sitemap lists the base URL with the
//! render date as `lastmod`.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://typingstories.com/</loc>
//!     <lastmod>2024-01-15</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, generator::minify_xml, log, page::PageTimestamp};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Write the sitemap if enabled. Returns the written path.
pub fn build_sitemap(config: &SiteConfig, timestamp: PageTimestamp) -> Result<Option<PathBuf>> {
    if !config.build.sitemap.enable {
        return Ok(None);
    }

    let path = config.sitemap_path();
    let xml = render_sitemap(config, timestamp);

    fs::write(&path, xml.as_bytes())
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

    log!("sitemap"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(Some(path))
}

/// Sitemap XML, minified when `build.minify` is set.
pub fn render_sitemap(config: &SiteConfig, timestamp: PageTimestamp) -> String {
    let sitemap = Sitemap {
        urls: vec![UrlEntry {
            loc: config.site.url.clone(),
            lastmod: Some(timestamp.iso_date()),
        }],
    };
    let xml = sitemap.into_xml();
    if !config.build.minify {
        return xml;
    }
    String::from_utf8_lossy(&minify_xml(xml.as_bytes(), true)).into_owned()
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
}

impl Sitemap {
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn timestamp() -> PageTimestamp {
        PageTimestamp::parse("2024-01-15T08:30:00.000Z").unwrap()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_render_contains_base_url_and_lastmod() {
        let mut config = SiteConfig::default();
        config.build.minify = false;
        let xml = render_sitemap(&config, timestamp());

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("    <loc>https://typingstories.com/</loc>\n"));
        assert!(xml.contains("<lastmod>2024-01-15</lastmod>"));
        assert_eq!(xml.matches("<url>").count(), 1);
    }

    #[test]
    fn test_render_minified() {
        let xml = render_sitemap(&SiteConfig::default(), timestamp());
        assert!(!xml.contains('\n'));
        assert!(xml.contains("<url><loc>https://typingstories.com/</loc><lastmod>2024-01-15</lastmod></url>"));
    }

    #[test]
    fn test_query_string_in_url_is_escaped() {
        let mut config = SiteConfig::default();
        config.site.url = "https://typingstories.com/?a=1&b=2".into();
        let xml = render_sitemap(&config, timestamp());
        assert!(xml.contains("<loc>https://typingstories.com/?a=1&amp;b=2</loc>"));
    }

    #[test]
    fn test_build_sitemap_writes_file() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();

        let path = build_sitemap(&config, timestamp()).unwrap().unwrap();
        assert_eq!(path, dir.path().join("sitemap.xml"));
        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("<lastmod>2024-01-15</lastmod>"));
    }

    #[test]
    fn test_build_sitemap_disabled() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();
        config.build.sitemap.enable = false;

        assert!(build_sitemap(&config, timestamp()).unwrap().is_none());
        assert!(!dir.path().join("sitemap.xml").exists());
    }
}
