use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::models::tree::{EntryOrder, TreeOptions};
use crate::utils::error::{Result, ToolError};

const BRANCH: &str = "|-- ";
const INDENT_WIDTH: usize = 4;

struct Entry {
    name: OsString,
    path: PathBuf,
    is_dir: bool,
}

/// Prints a directory as an indented tree
#[derive(Debug, Clone, Default)]
pub struct TreePrinter {
    options: TreeOptions,
}

impl TreePrinter {
    pub fn new(options: TreeOptions) -> Self {
        Self { options }
    }

    /// Write the tree rooted at `root` to `out`, depth first, each directory
    /// followed by its contents one level deeper.
    pub fn print<W: Write>(&self, root: &Path, out: &mut W) -> Result<()> {
        write_line(out, 0, &root_label(root), root)?;
        self.print_children(root, INDENT_WIDTH, out)
    }

    /// Render to a string
    pub fn render(&self, root: &Path) -> Result<String> {
        let mut buffer = Vec::new();
        self.print(root, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn print_children<W: Write>(&self, dir: &Path, indent: usize, out: &mut W) -> Result<()> {
        for entry in self.list(dir)? {
            let name = entry.name.to_string_lossy();
            write_line(out, indent, &name, &entry.path)?;
            if entry.is_dir {
                self.print_children(&entry.path, indent + INDENT_WIDTH, out)?;
            }
        }
        Ok(())
    }

    /// Entries of `dir` minus exclusions, in the configured order
    fn list(&self, dir: &Path) -> Result<Vec<Entry>> {
        let read_dir = fs::read_dir(dir).map_err(|e| ToolError::io("read directory", dir, e))?;

        let mut entries = Vec::new();
        for item in read_dir {
            let item = item.map_err(|e| ToolError::io("read directory", dir, e))?;
            let name = item.file_name();
            if self.options.is_excluded(&name.to_string_lossy()) {
                debug!(path = %item.path().display(), "Skipping excluded entry");
                continue;
            }
            // Symlinks are not followed
            let file_type = item
                .file_type()
                .map_err(|e| ToolError::io("inspect", &item.path(), e))?;
            entries.push(Entry {
                name,
                path: item.path(),
                is_dir: file_type.is_dir(),
            });
        }

        match self.options.order {
            EntryOrder::Native => {}
            EntryOrder::Name => entries.sort_by(|a, b| a.name.cmp(&b.name)),
            EntryOrder::DirsFirst => {
                entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
            }
        }

        Ok(entries)
    }
}

fn root_label(root: &Path) -> String {
    root.file_name()
        .map_or_else(|| root.display().to_string(), |name| name.to_string_lossy().into_owned())
}

fn write_line<W: Write>(out: &mut W, indent: usize, name: &str, path: &Path) -> Result<()> {
    writeln!(out, "{:indent$}{}{}", "", BRANCH, name, indent = indent)
        .map_err(|e| ToolError::io("print entry", path, e))
}
