use std::path::{Component, Path};
use serde::{Deserialize, Serialize};
use crate::utils::error::{Result, ToolError};

const DEFAULT_TEMPLATE: &str = include_str!("../../templates/default.toml");

/// A starter file and the text it is created with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarterFile {
    /// Path relative to the project root
    pub path: String,
    /// Initial content, often empty
    #[serde(default)]
    pub content: String,
}

/// Everything `create-project` lays down in a new project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTemplate {
    /// Directory skeleton, relative to the project root
    pub directories: Vec<String>,
    /// Starter file set
    #[serde(default)]
    pub files: Vec<StarterFile>,
    /// Documents copied from `<repo root>/<docs_dir>`
    #[serde(default)]
    pub docs: Vec<String>,
    /// Where copied documents land, in both the repository and the project
    pub docs_dir: String,
    /// Where the tree printer is copied to
    pub scripts_dir: String,
}

impl ProjectTemplate {
    /// The built-in layout
    pub fn builtin() -> Result<Self> {
        Self::from_toml(DEFAULT_TEMPLATE)
    }

    /// Parse and validate a template from TOML
    pub fn from_toml(content: &str) -> Result<Self> {
        let template: Self = toml::from_str(content)
            .map_err(|e| ToolError::Template(format!("Invalid TOML syntax: {}", e)))?;
        template.validate()?;
        Ok(template)
    }

    /// Check the layout rules every template must satisfy
    pub fn validate(&self) -> Result<()> {
        for directory in &self.directories {
            validate_relative_path("directory", directory)?;
        }

        for file in &self.files {
            validate_relative_path("file", &file.path)?;

            let parent = Path::new(&file.path).parent().unwrap_or_else(|| Path::new(""));
            if !self.provides_directory(parent) {
                return Err(ToolError::Template(format!(
                    "Parent directory of '{}' is not part of the directory skeleton",
                    file.path
                )));
            }
        }

        for (label, dir) in [("docs_dir", &self.docs_dir), ("scripts_dir", &self.scripts_dir)] {
            validate_relative_path(label, dir)?;
            if !self.directories.iter().any(|d| Path::new(d) == Path::new(dir)) {
                return Err(ToolError::Template(format!(
                    "{} '{}' must be one of the skeleton directories",
                    label, dir
                )));
            }
        }

        for doc in &self.docs {
            validate_relative_path("document", doc)?;
            if Path::new(doc).components().count() != 1 {
                return Err(ToolError::Template(format!(
                    "Document '{}' must be a plain file name",
                    doc
                )));
            }
        }

        Ok(())
    }

    /// True when `dir` exists once the skeleton has been created: the project
    /// root itself, a declared directory, or an intermediate of one
    fn provides_directory(&self, dir: &Path) -> bool {
        dir.as_os_str().is_empty()
            || self.directories.iter().any(|d| Path::new(d).starts_with(dir))
    }
}

fn validate_relative_path(label: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ToolError::Template(format!("Empty {} path", label)));
    }

    // Only plain names: no root, drive prefix, `.` or `..`
    if !Path::new(path).components().all(|c| matches!(c, Component::Normal(_))) {
        return Err(ToolError::Template(format!(
            "{} path '{}' must be relative and stay inside the project root",
            label, path
        )));
    }

    Ok(())
}
