//! HTML for the index page and the per-term pages.

use crate::config::SiteConfig;
use crate::error::GlossaryError;
use crate::glossary::Glossary;
use crate::tokenizer::tokenize;
use askama::Template;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use tracing::{debug, warn};

/// Characters a term may not carry into a file name. Path separators would
/// leave the output folder; `%` keeps the encoding reversible.
const FILE_NAME_SET: &AsciiSet = &CONTROLS.add(b'/').add(b'\\').add(b'%');

/// Characters escaped when a file name is used as a relative link target.
const HREF_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`');

pub const INDEX_FILE: &str = "index.html";

/// One token of a rendered definition; `href` is set when the token is a
/// glossary term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry<'a> {
    pub term: &'a str,
    pub href: String,
}

#[derive(Template)]
#[template(
    source = "<html><head><title>{{ term }}</title></head><body>\
        <h2><i>{{ term }}</i></h2>\
        <blockquote>\
        {% for segment in segments %}\
        {% match segment.href %}\
        {% when Some with (href) %}<a href=\"{{ href }}\">{{ segment.text }}</a>\
        {% when None %}{{ segment.text }}\
        {% endmatch %}\
        {% endfor %}\
        </blockquote>\
        <hr/><p>Return to <a href=\"index.html\">index</a>.</p></body></html>",
    ext = "html"
)]
struct TermPageTemplate<'a> {
    term: &'a str,
    segments: Vec<Segment<'a>>,
}

#[derive(Template)]
#[template(
    source = "<html><head><title>{{ title }}</title></head><body>\
        <h2>{{ title }}</h2><hr/><h3>Index</h3><ul>\
        {% for entry in entries %}<li><a href=\"{{ entry.href }}\">{{ entry.term }}</a></li>{% endfor %}\
        </ul></body></html>",
    ext = "html"
)]
struct IndexTemplate<'a> {
    title: &'a str,
    entries: Vec<IndexEntry<'a>>,
}

/// File name of the page for `term`, always a single path component.
pub fn page_file_name(term: &str) -> String {
    format!("{}.html", utf8_percent_encode(term, FILE_NAME_SET))
}

/// Relative link to the page for `term`.
pub fn page_href(term: &str) -> String {
    utf8_percent_encode(&page_file_name(term), HREF_SET).to_string()
}

/// Splits `definition` into tokens, attaching a link to every token that is a
/// glossary term. Separator runs never match since terms hold no whitespace
/// and are compared exactly.
pub fn link_definition<'a>(
    definition: &'a str,
    glossary: &Glossary,
    config: &SiteConfig,
) -> Vec<Segment<'a>> {
    tokenize(definition, &config.separators, config.scan_bound)
        .map(|token| Segment {
            text: token,
            href: glossary.contains(token).then(|| page_href(token)),
        })
        .collect()
}

pub fn render_term_page(
    term: &str,
    glossary: &Glossary,
    config: &SiteConfig,
) -> Result<String, GlossaryError> {
    let definition = glossary
        .definition(term)
        .ok_or_else(|| GlossaryError::UnknownTerm(term.to_string()))?;
    let segments = link_definition(definition, glossary, config);
    let links = segments.iter().filter(|s| s.href.is_some()).count();
    if segments.iter().any(|s| s.href.is_some() && s.text == term) {
        warn!(term, "Definition links to its own page");
    }
    debug!(term, links, "Rendering term page");
    Ok(TermPageTemplate { term, segments }.render()?)
}

/// Renders the index page listing `terms` in the order given.
pub fn render_index_page<'a, I>(terms: I, config: &SiteConfig) -> Result<String, GlossaryError>
where
    I: IntoIterator<Item = &'a String>,
{
    let entries = terms
        .into_iter()
        .map(|term| IndexEntry {
            term: term.as_str(),
            href: page_href(term),
        })
        .collect();
    let template = IndexTemplate {
        title: &config.title,
        entries,
    };
    Ok(template.render()?)
}
