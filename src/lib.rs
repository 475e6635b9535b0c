// projkit - project scaffolding and directory tree printing
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::template::{ProjectTemplate, StarterFile};
pub use models::tree::{EntryOrder, TreeOptions, DEFAULT_EXCLUSIONS};
pub use services::scaffolder::{ScaffoldReport, ScaffoldSettings, Scaffolder};
pub use services::tree_printer::TreePrinter;
pub use utils::error::{Result, ToolError};
