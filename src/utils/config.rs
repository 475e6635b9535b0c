// Configuration utilities: default locations derived from the running executable

use std::path::{Path, PathBuf};
use crate::utils::error::{Result, ToolError};

/// File name of the tree printer binary, without platform suffix
pub const TREE_PRINTER_BIN: &str = "directory-tree";

/// Message printed when the tree root is missing
pub const MISSING_ROOT_MESSAGE: &str = "The directory does not exist.";

/// Directory holding the running executable
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| ToolError::io("locate", Path::new("current executable"), e))?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| ToolError::Input(format!("Executable {} has no parent directory", exe.display())))
}

/// Parent of the executable's directory, the "repository root" when the
/// binaries live in `<root>/scripts`
pub fn default_repo_root() -> Result<PathBuf> {
    let dir = executable_dir()?;
    Ok(parent_or_self(&dir))
}

/// The `directory-tree` executable sitting next to the running one
pub fn default_tree_printer() -> Result<PathBuf> {
    Ok(executable_dir()?.join(tree_printer_file_name()))
}

pub fn tree_printer_file_name() -> String {
    format!("{}{}", TREE_PRINTER_BIN, std::env::consts::EXE_SUFFIX)
}

fn parent_or_self(dir: &Path) -> PathBuf {
    dir.parent().map_or_else(|| dir.to_path_buf(), Path::to_path_buf)
}
