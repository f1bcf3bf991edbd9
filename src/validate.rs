//! Field-by-field checks for project and note headers.
//!
//! Each check runs in field declaration order and the first failure aborts
//! the record. On success the typed record is returned.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde_yaml::Value;
use url::Url;

use crate::error::{ContentError, DuplicateSlug, Result};
use crate::model::{Category, ContentKind, Note, Project, Status};

const PROJECT_TITLE_MAX: usize = 100;
const NOTE_TITLE_MAX: usize = 150;
const DESCRIPTION_MAX: usize = 300;
const INSIGHT_LINE_MAX: usize = 200;
const EXCERPT_MAX: usize = 300;
const YEAR_RANGE: std::ops::RangeInclusive<i64> = 2000..=2100;
const DATE_FORMAT: &str = "%Y-%m-%d";

struct Fields<'a> {
    value: &'a Value,
    file: &'a str,
}

impl<'a> Fields<'a> {
    fn new(value: &'a Value, file: &'a str) -> Self {
        Self { value, file }
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.value.get(field).filter(|v| !v.is_null())
    }

    fn optional_str(&self, field: &'static str) -> Result<Option<&'a str>> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(ContentError::constraint(
                self.file,
                field,
                format!("must be a string (found {})", render(other)),
            )),
        }
    }

    fn required_str(&self, field: &'static str) -> Result<&'a str> {
        self.optional_str(field)?
            .ok_or_else(|| ContentError::missing(self.file, field))
    }

    fn bounded_str(&self, field: &'static str, max: usize) -> Result<&'a str> {
        let s = self.required_str(field)?;
        let len = s.chars().count();
        if len > max {
            return Err(ContentError::constraint(
                self.file,
                field,
                format!("must be ≤{max} chars (found {len})"),
            ));
        }
        Ok(s)
    }

    fn slug(&self, field: &'static str) -> Result<Option<&'a str>> {
        let Some(slug) = self.optional_str(field)? else {
            return Ok(None);
        };
        if !is_slug(slug) {
            return Err(ContentError::constraint(
                self.file,
                field,
                format!("must be lowercase with hyphens only (found \"{slug}\")"),
            ));
        }
        Ok(Some(slug))
    }
}

/// Validate a project header and build the record.
///
/// `assets_dir` is the directory screenshot paths are resolved against.
pub fn validate_project(fields: &Value, file: &str, assets_dir: &Path) -> Result<Project> {
    let fields = Fields::new(fields, file);

    let title = fields.bounded_str("title", PROJECT_TITLE_MAX)?;
    let year = validate_year(&fields)?;
    let slug = fields
        .slug("slug")?
        .ok_or_else(|| ContentError::missing(file, "slug"))?;
    let description = fields.bounded_str("description", DESCRIPTION_MAX)?;
    let why_it_matters = fields.required_str("why_it_matters")?;
    let tech_stack = validate_tech_stack(&fields)?;
    let screenshot = validate_screenshot(&fields, assets_dir)?;
    let external_link = validate_external_link(&fields)?;
    let status = validate_status(&fields)?;

    Ok(Project {
        title: title.to_string(),
        year,
        slug: slug.to_string(),
        description: description.to_string(),
        why_it_matters: why_it_matters.to_string(),
        tech_stack,
        screenshot: screenshot.to_string(),
        external_link,
        status,
        file: file.to_string(),
    })
}

/// Validate a note header and build the record from it and `body`.
///
/// Without a `slug` field the file stem is used.
pub fn validate_note(fields: &Value, body: &str, file: &str) -> Result<Note> {
    let fields = Fields::new(fields, file);

    let title = fields.bounded_str("title", NOTE_TITLE_MAX)?;
    let category = validate_category(&fields)?;
    let insight_line = fields.bounded_str("insight_line", INSIGHT_LINE_MAX)?;
    let excerpt = fields.bounded_str("excerpt", EXCERPT_MAX)?;
    let published_at = validate_published_at(&fields)?;
    let slug = match fields.slug("slug")? {
        Some(slug) => slug.to_string(),
        None => default_slug(file),
    };

    Ok(Note {
        title: title.to_string(),
        category,
        insight_line: insight_line.to_string(),
        excerpt: excerpt.to_string(),
        content: body.trim().to_string(),
        published_at,
        slug,
        file: file.to_string(),
    })
}

/// Fail if any slug repeats within projects or within notes. Every
/// duplicate is reported in the one error.
pub fn validate_slug_uniqueness(projects: &[Project], notes: &[Note]) -> Result<()> {
    let mut duplicates = find_duplicates(
        ContentKind::Projects,
        projects.iter().map(|p| (p.slug.as_str(), p.file.as_str())),
    );
    duplicates.extend(find_duplicates(
        ContentKind::Notes,
        notes.iter().map(|n| (n.slug.as_str(), n.file.as_str())),
    ));

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(ContentError::DuplicateSlugs(duplicates))
    }
}

fn find_duplicates<'a>(
    kind: ContentKind,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) -> Vec<DuplicateSlug> {
    let mut by_slug: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for (slug, file) in entries {
        by_slug.entry(slug).or_default().push(file.to_string());
    }

    by_slug
        .into_iter()
        .filter(|(_, files)| files.len() > 1)
        .map(|(slug, files)| DuplicateSlug {
            kind,
            slug: slug.to_string(),
            files,
        })
        .collect()
}

fn validate_year(fields: &Fields<'_>) -> Result<u16> {
    let value = fields
        .get("year")
        .ok_or_else(|| ContentError::missing(fields.file, "year"))?;
    let year = value.as_i64().ok_or_else(|| {
        ContentError::constraint(
            fields.file,
            "year",
            format!("must be an integer (found {})", render(value)),
        )
    })?;
    if !YEAR_RANGE.contains(&year) {
        return Err(ContentError::constraint(
            fields.file,
            "year",
            format!(
                "must be {}-{} (found {year})",
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            ),
        ));
    }
    // In range, so it fits.
    Ok(year as u16)
}

fn validate_tech_stack(fields: &Fields<'_>) -> Result<Option<Vec<String>>> {
    let Some(value) = fields.get("tech_stack") else {
        return Ok(None);
    };
    let items = value.as_sequence().ok_or_else(|| {
        ContentError::constraint(fields.file, "tech_stack", "must be an array")
    })?;

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                ContentError::constraint(
                    fields.file,
                    "tech_stack",
                    format!("entries must be strings (found {})", render(item)),
                )
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

fn validate_screenshot<'a>(fields: &Fields<'a>, assets_dir: &Path) -> Result<&'a str> {
    let screenshot = fields.required_str("screenshot")?;
    let resolved = assets_dir.join(screenshot.trim_start_matches('/'));
    if !resolved.is_file() {
        return Err(ContentError::MissingScreenshot {
            file: fields.file.to_string(),
            path: screenshot.to_string(),
        });
    }
    Ok(screenshot)
}

fn validate_external_link(fields: &Fields<'_>) -> Result<Option<Url>> {
    let Some(link) = fields.optional_str("external_link")? else {
        return Ok(None);
    };
    Url::parse(link).map(Some).map_err(|_| {
        ContentError::constraint(
            fields.file,
            "external_link",
            format!("must be a valid URL (found \"{link}\")"),
        )
    })
}

fn validate_status(fields: &Fields<'_>) -> Result<Status> {
    let status = fields.required_str("status")?;
    status.parse().map_err(|_| {
        ContentError::constraint(
            fields.file,
            "status",
            format!("must be 'active' or 'archive' (found \"{status}\")"),
        )
    })
}

fn validate_category(fields: &Fields<'_>) -> Result<Category> {
    let category = fields.required_str("category")?;
    category.parse().map_err(|_| {
        ContentError::constraint(
            fields.file,
            "category",
            format!(
                "must be one of {} (found \"{category}\")",
                Category::labels()
            ),
        )
    })
}

fn validate_published_at(fields: &Fields<'_>) -> Result<NaiveDate> {
    let value = fields
        .get("published_at")
        .ok_or_else(|| ContentError::missing(fields.file, "published_at"))?;
    let malformed = || ContentError::MalformedDate {
        file: fields.file.to_string(),
        value: render(value),
    };

    let text = value.as_str().ok_or_else(malformed)?;
    parse_strict_date(text).ok_or_else(malformed)
}

/// Parse `YYYY-MM-DD`, accepting only text that formats back to itself.
pub fn parse_strict_date(text: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(text, DATE_FORMAT).ok()?;
    (date.format(DATE_FORMAT).to_string() == text).then_some(date)
}

pub fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

pub fn default_slug(file: &str) -> String {
    file.strip_suffix(".mdx")
        .or_else(|| file.strip_suffix(".md"))
        .unwrap_or(file)
        .to_string()
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| "<unrenderable>".to_string()),
    }
}
