//! Loading and validation for portfolio content.
//!
//! A content root holds `projects/` and `notes/`, each a flat directory of
//! `.md`/`.mdx` files with a YAML header. [`ContentRepository`] reads them
//! into typed [`Project`] and [`Note`] records, checking every header field
//! on the way in.

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod model;
pub mod repository;
pub mod scan;
pub mod validate;
pub mod values;

pub use config::{ContentConfig, Strictness};
pub use error::{ContentError, DuplicateSlug, Result};
pub use model::{Category, ContentKind, Note, Project, Status};
pub use repository::{ContentRepository, ContentSummary};
pub use validate::{validate_note, validate_project, validate_slug_uniqueness};
