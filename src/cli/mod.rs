// CLI module: argument parsing and entry points for both binaries

pub mod create;
pub mod tree;

pub use self::create::CreateCommand;
pub use self::tree::TreeCommand;
