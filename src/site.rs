//! Writes rendered pages into an output folder.

use crate::config::SiteConfig;
use crate::error::GlossaryError;
use crate::glossary::Glossary;
use crate::render::{INDEX_FILE, page_file_name, render_index_page, render_term_page};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Files produced by one site write.
#[derive(Debug, Clone, Serialize)]
pub struct SiteSummary {
    pub folder: PathBuf,
    pub index: PathBuf,
    pub pages: Vec<PathBuf>,
}

pub fn write_index_page<'a, I>(
    terms: I,
    folder: &Path,
    config: &SiteConfig,
) -> Result<PathBuf, GlossaryError>
where
    I: IntoIterator<Item = &'a String>,
{
    let html = render_index_page(terms, config)?;
    let path = folder.join(INDEX_FILE);
    fs::write(&path, html)?;
    debug!(path = %path.display(), "Wrote index page");
    Ok(path)
}

pub fn write_term_page(
    term: &str,
    glossary: &Glossary,
    folder: &Path,
    config: &SiteConfig,
) -> Result<PathBuf, GlossaryError> {
    let html = render_term_page(term, glossary, config)?;
    let path = folder.join(page_file_name(term));
    fs::write(&path, html)?;
    debug!(path = %path.display(), "Wrote term page");
    Ok(path)
}

/// Writes `index.html` and one page per term, in `glossary.terms()` order.
///
/// The folder is created if needed. Existing files with the same names are
/// overwritten.
pub fn write_site(
    glossary: &Glossary,
    folder: &Path,
    config: &SiteConfig,
) -> Result<SiteSummary, GlossaryError> {
    fs::create_dir_all(folder)?;
    let index = write_index_page(glossary.terms(), folder, config)?;
    let pages = glossary
        .terms()
        .iter()
        .map(|term| write_term_page(term, glossary, folder, config))
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        folder = %folder.display(),
        pages = pages.len(),
        "Generated glossary site"
    );
    Ok(SiteSummary {
        folder: folder.to_path_buf(),
        index,
        pages,
    })
}

/// Reads `input`, sorts its terms lexicographically and writes the site.
pub fn generate(
    input: &Path,
    folder: &Path,
    config: &SiteConfig,
) -> Result<SiteSummary, GlossaryError> {
    info!(input = %input.display(), "Reading glossary");
    let mut glossary = Glossary::from_path(input)?;
    glossary.sort_terms();
    write_site(&glossary, folder, config)
}
