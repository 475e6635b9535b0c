use std::collections::BTreeSet;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Entry names skipped by the tree printer.
///
/// `hooks` and `refs` are matched anywhere in the tree, not only under `.git`.
pub const DEFAULT_EXCLUSIONS: [&str; 4] = [".git", ".github", "hooks", "refs"];

/// Order in which the entries of one directory are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EntryOrder {
    /// Whatever the OS returns; differs between platforms and filesystems
    Native,
    /// Byte-wise by entry name
    #[default]
    Name,
    /// Directories first, each group by name
    DirsFirst,
}

/// Settings for a tree printing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeOptions {
    pub exclude: BTreeSet<String>,
    pub order: EntryOrder,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_EXCLUSIONS.iter().map(ToString::to_string).collect(),
            order: EntryOrder::default(),
        }
    }
}

impl TreeOptions {
    /// Default exclusions plus `extra`
    pub fn with_extra_exclusions<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Self::default();
        options.exclude.extend(extra.into_iter().map(Into::into));
        options
    }

    pub fn order(mut self, order: EntryOrder) -> Self {
        self.order = order;
        self
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.contains(name)
    }
}
