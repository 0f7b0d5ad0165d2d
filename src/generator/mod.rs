//! Auxiliary output generators.
//!
//! - **Sitemap**: Search engine indexing (`sitemap.xml`)

pub mod sitemap;

use std::borrow::Cow;

/// Minify XML content if enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if !enabled {
        return Cow::Borrowed(content);
    }
    let minified = String::from_utf8_lossy(content)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<String>();
    Cow::Owned(minified.into_bytes())
}
