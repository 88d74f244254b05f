//! Layered configuration loading, traversal, and snapshotting.
//!
//! Precedence is strictly: workflow-defined config files, then user config
//! files in invocation order, then explicit overrides. A later source
//! fully replaces an earlier value at the same top-level key; nested
//! mappings are never deep-merged.

pub mod loader;
pub mod traverse;
pub mod writer;

pub use loader::load_merged_config;
pub use traverse::{resolve_config_paths, KeyPath, KeyStep};
pub use writer::write_config;
