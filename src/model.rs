use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use url::Url;

/// A portfolio entry loaded from `projects/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub title: String,
    pub year: u16,
    pub slug: String,
    pub description: String,
    pub why_it_matters: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    pub screenshot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_link: Option<Url>,
    pub status: Status,
    #[serde(skip)]
    pub file: String,
}

/// A blog entry loaded from `notes/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub title: String,
    pub category: Category,
    pub insight_line: String,
    pub excerpt: String,
    /// Trimmed markdown body, handed to the renderer untouched.
    pub content: String,
    pub published_at: NaiveDate,
    pub slug: String,
    #[serde(skip)]
    pub file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Archive,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Active, Status::Archive];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Archive => "archive",
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown status \"{s}\" (expected 'active' or 'archive')"))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    #[serde(rename = "AI engineering")]
    AiEngineering,
    #[serde(rename = "Systems design")]
    SystemsDesign,
    #[serde(rename = "Product thinking")]
    ProductThinking,
    #[serde(rename = "Psychology & self-awareness")]
    Psychology,
    #[serde(rename = "Skill acquisition")]
    SkillAcquisition,
    #[serde(rename = "Founder mindset")]
    FounderMindset,
    #[serde(rename = "Mindset")]
    Mindset,
    #[serde(rename = "Performance")]
    Performance,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::AiEngineering,
        Category::SystemsDesign,
        Category::ProductThinking,
        Category::Psychology,
        Category::SkillAcquisition,
        Category::FounderMindset,
        Category::Mindset,
        Category::Performance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::AiEngineering => "AI engineering",
            Category::SystemsDesign => "Systems design",
            Category::ProductThinking => "Product thinking",
            Category::Psychology => "Psychology & self-awareness",
            Category::SkillAcquisition => "Skill acquisition",
            Category::FounderMindset => "Founder mindset",
            Category::Mindset => "Mindset",
            Category::Performance => "Performance",
        }
    }

    pub fn labels() -> String {
        Category::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("unknown category \"{s}\" (expected one of {})", Category::labels()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Projects,
    Notes,
}

impl ContentKind {
    pub fn dir_name(self) -> &'static str {
        match self {
            ContentKind::Projects => "projects",
            ContentKind::Notes => "notes",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            ContentKind::Projects => "project",
            ContentKind::Notes => "note",
        }
    }
}
