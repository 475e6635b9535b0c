use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use tracing::debug;
use crate::models::tree::{EntryOrder, TreeOptions};
use crate::services::tree_printer::TreePrinter;
use crate::utils::config::{self, MISSING_ROOT_MESSAGE};

/// Print a directory as an indented tree
#[derive(Debug, Parser)]
#[command(name = "directory-tree")]
#[command(version)]
#[command(long_about = r#"Print a directory and everything below it as an indented tree.

Entries named .git, .github, hooks or refs are skipped at every depth.
Symbolic links are listed but never followed, so a linked directory shows
up as a single entry without its contents.
Without a ROOT argument the parent of the executable's directory is printed,
so a copy in <project>/scripts shows the whole project.

Examples:
  directory-tree                        Print the enclosing project
  directory-tree ~/work/demo            Print a specific directory
  directory-tree --order dirs-first     Directories before files
  directory-tree --exclude target       Also skip entries named target"#)]
pub struct TreeCommand {
    /// Directory to print (default: parent of the executable's directory)
    pub root: Option<PathBuf>,

    /// Order of entries within a directory
    #[arg(long, value_enum, default_value_t = EntryOrder::Name)]
    pub order: EntryOrder,

    /// Additional entry names to skip
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Log skipped entries to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl TreeCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let stdout = io::stdout();
        self.run_with(&mut stdout.lock())
    }

    pub fn run_with<W: Write>(&self, output: &mut W) -> anyhow::Result<()> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => config::default_repo_root()?,
        };

        if !root.exists() {
            debug!(path = %root.display(), "Tree root missing");
            writeln!(output, "{}", MISSING_ROOT_MESSAGE)?;
            return Ok(());
        }

        let root = fs::canonicalize(&root)
            .with_context(|| format!("Failed to resolve {}", root.display()))?;

        let options = TreeOptions::with_extra_exclusions(self.exclude.iter().cloned()).order(self.order);
        TreePrinter::new(options).print(&root, output)?;
        output.flush()?;

        Ok(())
    }
}
