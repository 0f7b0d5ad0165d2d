//! schema.org structured data (JSON-LD).
//!
//! ```json
//! { "@context": "https://schema.org",
//!   "@graph": [
//!     { "@type": "WebSite", "name": "...", "url": "...", "description": "..." },
//!     { "@type": "FAQPage", "mainEntity": [
//!         { "@type": "Question", "name": "...",
//!           "acceptedAnswer": { "@type": "Answer", "text": "..." } } ] } ] }
//! ```

use super::FaqItem;
use crate::config::SiteInfoConfig;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Root of the JSON-LD payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredData {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@graph")]
    pub graph: Vec<GraphNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum GraphNode {
    WebSite(WebSite),
    #[serde(rename = "FAQPage")]
    FaqPage(FaqPage),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSite {
    pub name: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqPage {
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub struct Question {
    pub name: String,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub struct Answer {
    pub text: String,
}

impl From<&FaqItem> for Question {
    fn from(item: &FaqItem) -> Self {
        Self {
            name: item.question.to_string(),
            accepted_answer: Answer {
                text: item.answer.to_string(),
            },
        }
    }
}

impl StructuredData {
    /// Site descriptor plus one Question per FAQ item, in input order.
    pub fn build(site: &SiteInfoConfig, faq: &[FaqItem]) -> Self {
        Self {
            context: SCHEMA_CONTEXT.to_string(),
            graph: vec![
                GraphNode::WebSite(WebSite {
                    name: site.name.clone(),
                    url: site.url.clone(),
                    description: site.summary.clone(),
                }),
                GraphNode::FaqPage(FaqPage {
                    main_entity: faq.iter().map(Question::from).collect(),
                }),
            ],
        }
    }

    /// Questions of the first `FAQPage` node.
    pub fn questions(&self) -> &[Question] {
        self.graph
            .iter()
            .find_map(|node| match node {
                GraphNode::FaqPage(page) => Some(page.main_entity.as_slice()),
                GraphNode::WebSite(_) => None,
            })
            .unwrap_or_default()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// JSON safe to place between `<script>` tags.
    ///
    /// `<`, `>` and `&` become `\u003c`, `\u003e` and `\u0026`. They can
    /// only occur inside JSON strings, where the escapes decode to the same
    /// text.
    pub fn to_script_content(&self) -> serde_json::Result<String> {
        let json = self.to_json()?;
        Ok(escape_script(&json))
    }
}

fn escape_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len() + 16);
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(c),
        }
    }
    out
}
