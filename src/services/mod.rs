pub mod scaffolder;
pub mod tree_printer;
