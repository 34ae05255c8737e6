//! Build a static, cross-linked HTML glossary from a plain-text term list.
//!
//! ```no_run
//! use glossary_rs::{Glossary, SiteConfig, write_site};
//! use std::path::Path;
//!
//! let mut glossary: Glossary = "Apple\na Fruit\n\nFruit\na plant product\n".parse()?;
//! glossary.sort_terms();
//! write_site(&glossary, Path::new("site"), &SiteConfig::default())?;
//! # Ok::<(), glossary_rs::GlossaryError>(())
//! ```

mod config;
mod error;
mod glossary;
mod render;
mod site;
pub mod sort;
pub mod tokenizer;

pub use config::{DEFAULT_TITLE, SiteConfig};
pub use error::GlossaryError;
pub use glossary::{Glossary, TermSequence};
pub use render::{
    INDEX_FILE, IndexEntry, Segment, link_definition, page_file_name, page_href,
    render_index_page, render_term_page,
};
pub use site::{SiteSummary, generate, write_index_page, write_site, write_term_page};
pub use tokenizer::{
    DEFAULT_SEPARATORS, ScanBound, SeparatorSet, Tokens, next_word_or_separator, tokenize,
};
