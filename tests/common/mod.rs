#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A throwaway site: `<tmp>/content/{projects,notes}` and `<tmp>/public`.
pub struct Site {
    pub dir: TempDir,
}

impl Site {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("public")).unwrap();
        Self { dir }
    }

    pub fn content(&self) -> PathBuf {
        self.dir.path().join("content")
    }

    pub fn public(&self) -> PathBuf {
        self.dir.path().join("public")
    }

    pub fn write(&self, kind: &str, name: &str, text: &str) -> PathBuf {
        let dir = self.content().join(kind);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    pub fn asset(&self, relative: &str) -> PathBuf {
        let path = self.public().join(relative.trim_start_matches('/'));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"png").unwrap();
        path
    }

    pub fn note(&self, name: &str, slug: Option<&str>, published_at: &str, category: &str) {
        let slug_line = slug.map(|s| format!("slug: {s}\n")).unwrap_or_default();
        self.write(
            "notes",
            name,
            &format!(
                "---\ntitle: Note {name}\ncategory: {category}\ninsight_line: Insight\nexcerpt: Excerpt\npublished_at: \"{published_at}\"\n{slug_line}---\n\nBody of {name}.\n"
            ),
        );
    }

    pub fn project(&self, name: &str, slug: &str, status: &str) {
        let screenshot = format!("/images/{slug}.png");
        self.asset(&screenshot);
        self.write("projects", name, &project_text(slug, 2024, &screenshot, status));
    }
}

pub fn project_text(slug: &str, year: i64, screenshot: &str, status: &str) -> String {
    format!(
        "---\ntitle: Project {slug}\nyear: {year}\nslug: {slug}\ndescription: Something useful\nwhy_it_matters: It helped\ntech_stack: [Rust, SQLite]\nscreenshot: {screenshot}\nexternal_link: https://example.com/{slug}\nstatus: {status}\n---\n\nDetails.\n"
    )
}
