//! Query command implementation.
//!
//! Renders the page once and prints its head metadata and structured data
//! as JSON, for checking what crawlers will see without opening a browser.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::page::{Clock, MetadataEntry, RenderedPage, StructuredData, render_page};

/// Query output. Parts that were not requested are omitted.
#[derive(Debug, Serialize)]
pub struct QueryResult<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<&'a [MetadataEntry]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<&'a StructuredData>,
}

impl<'a> QueryResult<'a> {
    /// Select parts by flag; no flag means both.
    pub fn select(page: &'a RenderedPage, args: &QueryArgs) -> Self {
        let all = !args.meta && !args.schema;
        Self {
            meta: (all || args.meta).then_some(page.meta.as_slice()),
            schema: (all || args.schema).then_some(&page.schema),
        }
    }
}

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig, clock: &dyn Clock) -> Result<()> {
    let page = render_page(&config.site, &clock.now_iso())?;
    let formatted = format_result(&QueryResult::select(&page, args), args.pretty)?;

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

fn format_result(result: &QueryResult<'_>, pretty: bool) -> Result<String> {
    let formatted = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteInfoConfig;
    use crate::page::FixedClock;
    use serde_json::Value;
    use tempfile::TempDir;

    fn args(meta: bool, schema: bool) -> QueryArgs {
        QueryArgs {
            meta,
            schema,
            pretty: false,
            output: None,
            now: None,
            verbose: false,
        }
    }

    fn page() -> RenderedPage {
        render_page(&SiteInfoConfig::default(), "2024-01-15T00:00:00.000Z").unwrap()
    }

    fn to_value(page: &RenderedPage, args: &QueryArgs) -> Value {
        let json = format_result(&QueryResult::select(page, args), false).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_both_by_default() {
        let value = to_value(&page(), &args(false, false));
        assert_eq!(value["meta"][0]["title"], SiteInfoConfig::default().title);
        assert_eq!(value["schema"]["@context"], "https://schema.org");
    }

    #[test]
    fn test_meta_only() {
        let value = to_value(&page(), &args(true, false));
        assert!(value.get("schema").is_none());
        assert_eq!(value["meta"].as_array().unwrap().len(), 14);
    }

    #[test]
    fn test_schema_only() {
        let value = to_value(&page(), &args(false, true));
        assert!(value.get("meta").is_none());
        assert_eq!(value["schema"]["@graph"][1]["mainEntity"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_meta_key_order() {
        let json = format_result(&QueryResult::select(&page(), &args(false, false)), false).unwrap();
        assert!(json.starts_with(r#"{"meta":[{"title":"#));
    }

    #[test]
    fn test_write_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seo.json");
        let mut query = args(false, true);
        query.output = Some(path.clone());
        query.pretty = true;

        run_query(
            &query,
            &SiteConfig::default(),
            &FixedClock::new("2024-01-15T00:00:00.000Z"),
        )
        .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  \"schema\": {"));
        let parsed: Value = serde_json::from_str(&written).unwrap();
        let schema: StructuredData = serde_json::from_value(parsed["schema"].clone()).unwrap();
        assert_eq!(schema, page().schema);
    }
}
