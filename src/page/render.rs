//! Full-document rendering.

use super::{
    FAQ_ITEMS, MetadataEntry, PageTimestamp, StructuredData, build_meta, sections,
};
use crate::config::SiteInfoConfig;
use maud::{DOCTYPE, PreEscaped, html};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("malformed timestamp `{0}`, expected ISO-8601 like 2024-01-15T00:00:00.000Z")]
    Timestamp(String),

    #[error("failed to serialize structured data")]
    Serialize(#[from] serde_json::Error),
}

/// Output of one render pass.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub meta: Vec<MetadataEntry>,
    pub schema: StructuredData,
    pub timestamp: PageTimestamp,
    pub html: String,
}

/// Render the landing page stamped with `now_iso`.
///
/// The same timestamp drives the top-bar date and the footer year.
pub fn render_page(site: &SiteInfoConfig, now_iso: &str) -> Result<RenderedPage, RenderError> {
    let timestamp = PageTimestamp::parse(now_iso)?;
    let meta = build_meta(site);
    let schema = StructuredData::build(site, &FAQ_ITEMS);
    let script = schema.to_script_content()?;
    let date_label = timestamp.date_label(site.locale);

    let markup = html! {
        (DOCTYPE)
        html lang=(site.language) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                @for entry in &meta {
                    (PreEscaped(entry.to_html()))
                }
                script type="application/ld+json" { (PreEscaped(script)) }
            }
            body {
                (sections::top_bar(&date_label))
                main {
                    (sections::hero())
                    (sections::stories())
                    (sections::speed_test())
                    (sections::prompts())
                    (sections::longform())
                    (sections::advanced())
                    (sections::faq(&FAQ_ITEMS))
                }
                (sections::footer(timestamp.year()))
            }
        }
    };

    Ok(RenderedPage {
        meta,
        schema,
        timestamp,
        html: markup.into_string(),
    })
}
