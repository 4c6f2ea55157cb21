//! Graph algorithms which are shared by propagators reasoning over graph structures.
mod lowest_common_ancestor;

pub use lowest_common_ancestor::LowestCommonAncestor;
