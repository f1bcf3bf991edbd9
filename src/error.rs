use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::ContentKind;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{file}: invalid frontmatter: {message}")]
    Frontmatter { file: String, message: String },

    #[error("{file}: {field} is required")]
    MissingField { file: String, field: &'static str },

    #[error("{file}: {field} {constraint}")]
    Constraint {
        file: String,
        field: &'static str,
        constraint: String,
    },

    #[error("{file}: screenshot file not found at {path}")]
    MissingScreenshot { file: String, path: String },

    #[error("{file}: published_at must be valid ISO 8601 date (YYYY-MM-DD) (found \"{value}\")")]
    MalformedDate { file: String, value: String },

    #[error("duplicate slugs found: {}", join(.0))]
    DuplicateSlugs(Vec<DuplicateSlug>),
}

impl ContentError {
    /// Errors scoped to a single file. These are the ones a lenient load
    /// downgrades to a skip.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            Self::Frontmatter { .. }
                | Self::MissingField { .. }
                | Self::Constraint { .. }
                | Self::MissingScreenshot { .. }
                | Self::MalformedDate { .. }
        )
    }

    pub(crate) fn constraint(file: &str, field: &'static str, constraint: impl Into<String>) -> Self {
        Self::Constraint {
            file: file.to_string(),
            field,
            constraint: constraint.into(),
        }
    }

    pub(crate) fn missing(file: &str, field: &'static str) -> Self {
        Self::MissingField {
            file: file.to_string(),
            field,
        }
    }
}

/// One slug shared by more than one record of the same kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSlug {
    pub kind: ContentKind,
    pub slug: String,
    pub files: Vec<String>,
}

impl fmt::Display for DuplicateSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} slug `{}` ({})",
            self.kind.singular(),
            self.slug,
            self.files.join(", ")
        )
    }
}

fn join(duplicates: &[DuplicateSlug]) -> String {
    duplicates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, ContentError>;
