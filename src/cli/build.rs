//! Site building.
//!
//! Phases:
//! - **Init** - Clean (with `--clean`) and create the output directory
//! - **Render** - One render pass with a single timestamp
//! - **Write** - `index.html` and `sitemap.xml` in parallel

use crate::{
    config::SiteConfig,
    debug,
    generator::sitemap::build_sitemap,
    log,
    page::{Clock, render_page},
};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

pub const INDEX_FILE: &str = "index.html";

/// Files written by one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub index: PathBuf,
    pub sitemap: Option<PathBuf>,
    /// Timestamp the page was rendered with.
    pub rendered_at: String,
}

/// Build the site into `build.output`.
pub fn build_site(config: &SiteConfig, clock: &dyn Clock) -> Result<BuildReport> {
    let started = Instant::now();
    init_output(&config.build.output, config.build.clean)?;

    let rendered_at = clock.now_iso();
    let page = render_page(&config.site, &rendered_at)?;
    debug!("build"; "rendered page in {:?}", started.elapsed());

    let index = config.build.output.join(INDEX_FILE);
    let (index_result, sitemap_result) = rayon::join(
        || write_file(&index, page.html.as_bytes()),
        || build_sitemap(config, page.timestamp),
    );
    index_result?;
    let sitemap = sitemap_result?;

    log!("build"; "{}", INDEX_FILE);
    log!("build"; "done in {:?}", started.elapsed());

    Ok(BuildReport {
        index,
        sitemap,
        rendered_at,
    })
}

/// Ensure the output directory exists, clearing it first if requested.
fn init_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
        debug!("build"; "cleared {}", output.display());
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
