//! In-memory taxonomy: the sense hierarchy every engine reads from.

pub mod builder;
pub mod taxonomy;
pub mod traversal;

pub use builder::TaxonomyBuilder;
pub use taxonomy::Taxonomy;
pub use traversal::{bfs_ancestors, find_cycle};
