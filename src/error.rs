use std::fmt;

#[derive(Debug)]
pub enum GlossaryError {
    Io(std::io::Error),
    MissingDefinition { term: String, line: usize },
    DuplicateTerm { term: String, line: usize },
    InvalidTerm { term: String, line: usize },
    UnknownTerm(String),
    Render(askama::Error),
}

impl fmt::Display for GlossaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlossaryError::Io(err) => write!(f, "io error: {err}"),
            GlossaryError::MissingDefinition { term, line } => {
                write!(f, "term {term:?} on line {line} has no definition")
            }
            GlossaryError::DuplicateTerm { term, line } => {
                write!(f, "term {term:?} on line {line} is already defined")
            }
            GlossaryError::InvalidTerm { term, line } => {
                write!(f, "term {term:?} on line {line} contains whitespace")
            }
            GlossaryError::UnknownTerm(term) => write!(f, "no definition for term {term:?}"),
            GlossaryError::Render(err) => write!(f, "template error: {err}"),
        }
    }
}

impl std::error::Error for GlossaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GlossaryError::Io(err) => Some(err),
            GlossaryError::Render(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GlossaryError {
    fn from(value: std::io::Error) -> Self {
        GlossaryError::Io(value)
    }
}

impl From<askama::Error> for GlossaryError {
    fn from(value: askama::Error) -> Self {
        GlossaryError::Render(value)
    }
}
