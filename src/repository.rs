use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::{ContentConfig, Strictness};
use crate::error::{ContentError, Result};
use crate::frontmatter::{self, Document};
use crate::model::{Category, ContentKind, Note, Project, Status};
use crate::scan;
use crate::validate;

/// Counts reported by a successful [`ContentRepository::validate_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSummary {
    pub projects: usize,
    pub notes: usize,
}

/// Reads projects and notes from a content root.
///
/// Nothing is cached: every call rescans the directory.
#[derive(Debug, Clone)]
pub struct ContentRepository {
    config: ContentConfig,
}

impl ContentRepository {
    pub fn new(config: ContentConfig) -> Self {
        Self { config }
    }

    /// All valid projects, in file name order.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let assets = &self.config.assets;
        self.load(ContentKind::Projects, |doc, file| {
            validate::validate_project(&doc.fields, file, assets)
        })
    }

    /// All valid notes, newest first. Notes published the same day are
    /// ordered by slug.
    pub fn list_notes(&self) -> Result<Vec<Note>> {
        let mut notes = self.load(ContentKind::Notes, |doc, file| {
            validate::validate_note(&doc.fields, &doc.body, file)
        })?;
        notes.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| a.slug.cmp(&b.slug))
        });
        Ok(notes)
    }

    pub fn find_project(&self, slug: &str) -> Result<Option<Project>> {
        Ok(self.list_projects()?.into_iter().find(|p| p.slug == slug))
    }

    pub fn find_note(&self, slug: &str) -> Result<Option<Note>> {
        Ok(self.list_notes()?.into_iter().find(|n| n.slug == slug))
    }

    pub fn projects_by_status(&self, status: Status) -> Result<Vec<Project>> {
        let mut projects = self.list_projects()?;
        projects.retain(|p| p.status == status);
        Ok(projects)
    }

    pub fn notes_by_category(&self, category: Category) -> Result<Vec<Note>> {
        let mut notes = self.list_notes()?;
        notes.retain(|n| n.category == category);
        Ok(notes)
    }

    /// Notes bucketed by category. Buckets appear in the order their first
    /// (newest) note does; notes keep their newest-first order.
    pub fn notes_grouped_by_category(&self) -> Result<Vec<(Category, Vec<Note>)>> {
        let mut groups: Vec<(Category, Vec<Note>)> = Vec::new();
        for note in self.list_notes()? {
            match groups.iter_mut().find(|(category, _)| *category == note.category) {
                Some((_, bucket)) => bucket.push(note),
                None => groups.push((note.category, vec![note])),
            }
        }
        Ok(groups)
    }

    /// Load everything and check slugs are unique per kind.
    pub fn validate_all(&self) -> Result<ContentSummary> {
        let projects = self.list_projects()?;
        let notes = self.list_notes()?;

        validate::validate_slug_uniqueness(&projects, &notes)?;

        let summary = ContentSummary {
            projects: projects.len(),
            notes: notes.len(),
        };
        info!(
            projects = summary.projects,
            notes = summary.notes,
            "content validation passed"
        );
        Ok(summary)
    }

    fn kind_dir(&self, kind: ContentKind) -> PathBuf {
        self.config.root.join(kind.dir_name())
    }

    fn load<T>(
        &self,
        kind: ContentKind,
        build: impl Fn(&Document, &str) -> Result<T>,
    ) -> Result<Vec<T>> {
        let dir = self.kind_dir(kind);
        let files = scan::collect_content_files(&dir)?;
        debug!(dir = %dir.display(), count = files.len(), "scanning {}", kind.dir_name());

        let mut records = Vec::with_capacity(files.len());
        for path in files {
            let file = scan::file_label(&path);
            let outcome =
                frontmatter::read_document(&path, &file).and_then(|doc| build(&doc, &file));

            match outcome {
                Ok(record) => {
                    debug!(file = %file, "loaded {}", kind.singular());
                    records.push(record);
                }
                Err(err) => self.skip_or_fail(err)?,
            }
        }

        Ok(records)
    }

    fn skip_or_fail(&self, err: ContentError) -> Result<()> {
        if !err.is_record_error() || self.config.strictness == Strictness::Strict {
            return Err(err);
        }
        warn!("skipping invalid content: {err}");
        Ok(())
    }
}
