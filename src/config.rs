use crate::tokenizer::{ScanBound, SeparatorSet};
use serde::Serialize;

pub const DEFAULT_TITLE: &str = "Glossary";

/// Settings shared by every page of a generated site.
#[derive(Debug, Clone, Serialize)]
pub struct SiteConfig {
    pub separators: SeparatorSet,
    pub scan_bound: ScanBound,
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            separators: SeparatorSet::default(),
            scan_bound: ScanBound::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn with_separators(mut self, separators: SeparatorSet) -> Self {
        self.separators = separators;
        self
    }

    pub fn with_scan_bound(mut self, scan_bound: ScanBound) -> Self {
        self.scan_bound = scan_bound;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
