// File system utilities

use std::fs;
use std::path::{Path, PathBuf};
use crate::utils::error::{Result, ToolError};

/// Create `path` and any missing parents; an existing directory is not an error
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| ToolError::io("create directory", path, e))
}

/// Write `content` to `path`, replacing whatever was there
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| ToolError::io("write", path, e))
}

/// Copy `source` into `target_dir` under its own file name, keeping permissions.
/// Returns the destination path.
pub fn copy_into_dir(source: &Path, target_dir: &Path) -> Result<PathBuf> {
    let file_name = source.file_name().ok_or_else(|| {
        ToolError::io(
            "copy",
            source,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let destination = target_dir.join(file_name);

    // fs::copy truncates the destination first, which would empty a source
    // that is the destination
    if destination.exists() {
        let source_real = fs::canonicalize(source).map_err(|e| ToolError::io("copy", source, e))?;
        let destination_real =
            fs::canonicalize(&destination).map_err(|e| ToolError::io("copy", &destination, e))?;
        if source_real == destination_real {
            return Err(ToolError::io(
                "copy",
                source,
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("source and destination {} are the same file", destination.display()),
                ),
            ));
        }
    }

    fs::copy(source, &destination).map_err(|e| ToolError::io("copy", source, e))?;

    Ok(destination)
}
