use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use crate::models::template::ProjectTemplate;
use crate::services::scaffolder::{ScaffoldReport, ScaffoldSettings, Scaffolder};
use crate::utils::config;
use crate::utils::error::{Result, ToolError};

const PROMPT: &str = "Enter the project name: ";

/// Scaffold a new project directory with starter files and documentation
#[derive(Debug, Parser)]
#[command(name = "create-project")]
#[command(version)]
#[command(long_about = r#"Scaffold a new project under the repository root.

Asks for a project name, then creates <root>/<name> with the standard
directory skeleton and starter files, copies the repository's docs into it,
and copies the directory-tree utility into its scripts directory.

Examples:
  create-project                          Prompt for the name
  create-project --name demo              Skip the prompt
  create-project --root ~/work --json     Custom root, JSON report"#)]
pub struct CreateCommand {
    /// Project name (prompted for when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Repository root (default: parent of the executable's directory)
    #[arg(long, env = "CREATE_PROJECT_ROOT")]
    pub root: Option<PathBuf>,

    /// Tree printer to copy into the new project (default: directory-tree next to this executable)
    #[arg(long, env = "CREATE_PROJECT_TREE_PRINTER")]
    pub tree_printer: Option<PathBuf>,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,

    /// Log each step to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// JSON response format for create-project
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub status: String,
    pub project_name: String,
    pub project_root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    pub docs: Vec<PathBuf>,
    pub tree_printer: PathBuf,
}

impl From<ScaffoldReport> for CreateResponse {
    fn from(report: ScaffoldReport) -> Self {
        Self {
            status: "success".to_string(),
            project_name: report.project_name,
            project_root: report.project_root,
            directories: report.directories,
            files: report.files,
            docs: report.docs,
            tree_printer: report.tree_printer,
        }
    }
}

impl CreateCommand {
    /// Execute against the process's stdin and stdout
    pub fn run(&self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(&mut stdin.lock(), &mut stdout.lock())
    }

    pub fn run_with<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> anyhow::Result<()> {
        let settings = self.settings()?;
        let template = ProjectTemplate::builtin().context("Built-in project template is invalid")?;

        let name = match &self.name {
            Some(name) => name.clone(),
            // Keep stdout pure JSON
            None if self.json => read_project_name(input, &mut io::stderr())?,
            None => read_project_name(input, output)?,
        };

        let scaffolder = Scaffolder::new(template, settings);
        let report = scaffolder
            .scaffold(&name)
            .with_context(|| format!("Failed to create project '{}'", name))?;

        if self.json {
            let response = CreateResponse::from(report);
            let json_output = serde_json::to_string_pretty(&response)
                .context("Failed to serialize JSON response")?;
            writeln!(output, "{}", json_output)?;
        } else {
            writeln!(output, "Project {} created successfully!", name)?;
        }

        Ok(())
    }

    fn settings(&self) -> Result<ScaffoldSettings> {
        let repo_root = match &self.root {
            Some(root) => root.clone(),
            None => config::default_repo_root()?,
        };
        let tree_printer = match &self.tree_printer {
            Some(path) => path.clone(),
            None => config::default_tree_printer()?,
        };
        Ok(ScaffoldSettings { repo_root, tree_printer })
    }
}

/// Prompt for and read one line. Only the line terminator is stripped.
pub fn read_project_name<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> Result<String> {
    write!(prompt, "{}", PROMPT)
        .and_then(|()| prompt.flush())
        .map_err(|e| ToolError::Input(format!("Failed to write prompt: {}", e)))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| ToolError::Input(format!("Failed to read project name: {}", e)))?;
    if read == 0 {
        return Err(ToolError::Input("End of input while reading project name".to_string()));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
