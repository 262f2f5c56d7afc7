use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to parse JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("Expected a JSON array of packages, found {found}")]
    NotAnArray { found: &'static str },

    #[error("Invalid package at index {index}{}: {source}", describe_name(.name))]
    InvalidPackage {
        index: usize,
        name: Option<String>,
        #[source]
        source: serde_json::Error,
    },

    #[error("Package at index {index} has no name")]
    MissingName { index: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DecodeError {
    /// Index of the offending array element, for per-package failures
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::InvalidPackage { index, .. } | Self::MissingName { index } => Some(*index),
            _ => None,
        }
    }

    /// 1-based line of a syntax error in the input buffer
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax(err) => Some(err.line()),
            _ => None,
        }
    }

    /// 1-based column of a syntax error in the input buffer
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::Syntax(err) => Some(err.column()),
            _ => None,
        }
    }
}

fn describe_name(name: &Option<String>) -> String {
    match name {
        Some(name) => format!(" ({})", name),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
