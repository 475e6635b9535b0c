use std::path::{Path, PathBuf};
use serde::Serialize;
use tracing::{debug, info};
use crate::models::template::ProjectTemplate;
use crate::utils::error::Result;
use crate::utils::fs_utils::{copy_into_dir, ensure_directory_exists, write_file};

/// Where a scaffolding run reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSettings {
    /// Repository root: new projects go under it, documents come from its docs directory
    pub repo_root: PathBuf,
    /// Tree printer artifact copied into the new project
    pub tree_printer: PathBuf,
}

/// What a successful run created
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub project_name: String,
    pub project_root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    pub docs: Vec<PathBuf>,
    pub tree_printer: PathBuf,
}

/// Creates new project trees from a template
#[derive(Debug, Clone)]
pub struct Scaffolder {
    template: ProjectTemplate,
    settings: ScaffoldSettings,
}

impl Scaffolder {
    pub fn new(template: ProjectTemplate, settings: ScaffoldSettings) -> Self {
        Self { template, settings }
    }

    /// Path the project called `name` is created at. The name is used as given.
    pub fn project_root(&self, name: &str) -> PathBuf {
        self.settings.repo_root.join(name)
    }

    /// Create the project called `name`.
    ///
    /// Steps run in order: project root, skeleton directories, starter files,
    /// documents, tree printer. The first failure aborts the run and leaves
    /// everything already created in place. Existing directories are reused
    /// and starter files are overwritten; other files are never touched.
    pub fn scaffold(&self, name: &str) -> Result<ScaffoldReport> {
        let project_root = self.project_root(name);
        debug!(path = %project_root.display(), "Creating project root");
        ensure_directory_exists(&project_root)?;

        let directories = self.create_directories(&project_root)?;
        let files = self.write_starter_files(&project_root)?;
        let docs = self.copy_docs(&project_root)?;
        let tree_printer = self.copy_tree_printer(&project_root)?;

        info!(project = name, path = %project_root.display(), "Project scaffolded");

        Ok(ScaffoldReport {
            project_name: name.to_string(),
            project_root,
            directories,
            files,
            docs,
            tree_printer,
        })
    }

    fn create_directories(&self, project_root: &Path) -> Result<Vec<PathBuf>> {
        let mut created = Vec::with_capacity(self.template.directories.len());
        for directory in &self.template.directories {
            let path = project_root.join(directory);
            debug!(path = %path.display(), "Creating directory");
            ensure_directory_exists(&path)?;
            created.push(path);
        }
        Ok(created)
    }

    fn write_starter_files(&self, project_root: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.template.files.len());
        for file in &self.template.files {
            let path = project_root.join(&file.path);
            debug!(path = %path.display(), bytes = file.content.len(), "Writing starter file");
            write_file(&path, &file.content)?;
            written.push(path);
        }
        Ok(written)
    }

    fn copy_docs(&self, project_root: &Path) -> Result<Vec<PathBuf>> {
        let source_dir = self.settings.repo_root.join(&self.template.docs_dir);
        let target_dir = project_root.join(&self.template.docs_dir);

        let mut copied = Vec::with_capacity(self.template.docs.len());
        for doc in &self.template.docs {
            let source = source_dir.join(doc);
            debug!(source = %source.display(), "Copying document");
            copied.push(copy_into_dir(&source, &target_dir)?);
        }
        Ok(copied)
    }

    fn copy_tree_printer(&self, project_root: &Path) -> Result<PathBuf> {
        let target_dir = project_root.join(&self.template.scripts_dir);
        debug!(source = %self.settings.tree_printer.display(), "Copying tree printer");
        copy_into_dir(&self.settings.tree_printer, &target_dir)
    }
}
