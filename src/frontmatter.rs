use serde_yaml::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::error::{ContentError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub fields: Value,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontmatterError {
    #[error("missing closing `---`")]
    Unterminated,
    #[error("header must be a key-value mapping")]
    NotAMapping,
    #[error("{0}")]
    Yaml(String),
}

pub fn read_document(path: &Path, file: &str) -> Result<Document> {
    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (fields, body) = split(&content).map_err(|err| ContentError::Frontmatter {
        file: file.to_string(),
        message: err.to_string(),
    })?;

    Ok(Document {
        fields,
        body: body.to_string(),
    })
}

/// Split `content` into header fields and body.
///
/// Text without a leading `---` has no header: the fields are an empty
/// mapping and the whole text is the body.
pub fn split(content: &str) -> std::result::Result<(Value, &str), FrontmatterError> {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    let trimmed = content.trim_start();
    let Some(after_first) = trimmed.strip_prefix("---") else {
        return Ok((empty_mapping(), content));
    };

    let end_idx = after_first
        .find("\n---")
        .ok_or(FrontmatterError::Unterminated)?;
    let yaml_str = &after_first[..end_idx];

    let closing = &after_first[end_idx + "\n---".len()..];
    let body = match closing.find('\n') {
        Some(newline) => &closing[newline + 1..],
        None => "",
    };

    let fields: Value =
        serde_yaml::from_str(yaml_str).map_err(|err| FrontmatterError::Yaml(err.to_string()))?;

    match fields {
        Value::Null => Ok((empty_mapping(), body)),
        Value::Mapping(_) => Ok((fields, body)),
        _ => Err(FrontmatterError::NotAMapping),
    }
}

fn empty_mapping() -> Value {
    Value::Mapping(serde_yaml::Mapping::new())
}
