//! Glossary model and the plain-text input format.
//!
//! The input is a sequence of blocks. Each block is a term on its own line,
//! one or more definition lines, and a blank line (end of input also closes
//! the last block):
//!
//! ```text
//! Apple
//! a Fruit that grows
//! on trees
//!
//! Fruit
//! a plant product
//! ```
//!
//! Definition lines are joined with single spaces.

use crate::error::GlossaryError;
use crate::sort;
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Terms in display order.
pub type TermSequence = VecDeque<String>;

/// Term → definition map plus the order terms are listed in.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    definitions: HashMap<String, String>,
    terms: TermSequence,
}

impl Glossary {
    /// Empty glossary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a term and appends it to the term sequence.
    ///
    /// Rejects empty terms and terms containing whitespace, and terms that
    /// are already present. `line` is only used for error reporting.
    pub fn insert(
        &mut self,
        term: impl Into<String>,
        definition: impl Into<String>,
        line: usize,
    ) -> Result<(), GlossaryError> {
        let term = term.into();
        if term.is_empty() || term.chars().any(char::is_whitespace) {
            return Err(GlossaryError::InvalidTerm { term, line });
        }
        match self.definitions.entry(term) {
            Entry::Occupied(slot) => Err(GlossaryError::DuplicateTerm {
                term: slot.key().clone(),
                line,
            }),
            Entry::Vacant(slot) => {
                self.terms.push_back(slot.key().clone());
                slot.insert(definition.into());
                Ok(())
            }
        }
    }

    /// Definition text of `term`, if it is in the glossary.
    pub fn definition(&self, term: &str) -> Option<&str> {
        self.definitions.get(term).map(String::as_str)
    }

    /// True when `term` matches a glossary term exactly.
    pub fn contains(&self, term: &str) -> bool {
        self.definitions.contains_key(term)
    }

    /// Terms in their current order: declaration order until sorted.
    pub fn terms(&self) -> &TermSequence {
        &self.terms
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when the glossary has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Reorders the term sequence. Definitions are untouched.
    pub fn sort_terms_by<F>(&mut self, order: F)
    where
        F: FnMut(&String, &String) -> Ordering,
    {
        sort::sort_by(&mut self.terms, order);
    }

    pub fn sort_terms(&mut self) {
        self.sort_terms_by(sort::lexicographic);
    }

    pub fn parse<R: BufRead>(reader: R) -> Result<Self, GlossaryError> {
        let mut glossary = Glossary::new();
        let mut pending: Option<(String, usize)> = None;
        let mut definition: Vec<String> = Vec::new();

        for (idx, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line = line.trim();
            match pending.take() {
                None if line.is_empty() => {}
                None => pending = Some((line.to_string(), idx + 1)),
                Some((term, term_line)) if line.is_empty() => {
                    glossary.close_block(term, term_line, &mut definition)?;
                }
                Some(open) => {
                    definition.push(line.to_string());
                    pending = Some(open);
                }
            }
        }
        if let Some((term, term_line)) = pending {
            glossary.close_block(term, term_line, &mut definition)?;
        }

        info!(terms = glossary.len(), "Parsed glossary");
        Ok(glossary)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GlossaryError> {
        let file = File::open(path.as_ref())?;
        Self::parse(BufReader::new(file))
    }

    fn close_block(
        &mut self,
        term: String,
        line: usize,
        definition: &mut Vec<String>,
    ) -> Result<(), GlossaryError> {
        if definition.is_empty() {
            return Err(GlossaryError::MissingDefinition { term, line });
        }
        let text = definition.join(" ");
        definition.clear();
        self.insert(term, text, line)
    }
}

impl std::str::FromStr for Glossary {
    type Err = GlossaryError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input.as_bytes())
    }
}
