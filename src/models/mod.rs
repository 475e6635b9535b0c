pub mod template;
pub mod tree;
