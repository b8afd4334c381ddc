//! Data model shared by every stage of the tool.
//!
//! - [`Node`]: the generic tree every input format is parsed into.
//! - [`DiffNode`]: the diff tree the engine produces and reporters render.

mod diff_node;
mod node;

pub use diff_node::{DiffKind, DiffNode};
pub use node::{Mapping, Node};
