//! Data model for label-only Newick trees.
//!
//! Trees are represented by the recursive sum type [Tree]: a vertex is
//! either a `Leaf` with a label or a `Branch` owning its ordered
//! children. There is exactly one representation; no arena, indices, or
//! shared references are involved, since the structure is a pure tree
//! with no back-edges.

pub mod tree;

pub use tree::Tree;
