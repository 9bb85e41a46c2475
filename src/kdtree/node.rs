//! Stem and leaf node storage for [`super::KdTree`].
//!
//! Grounded on `float/kdtree.rs`'s `StemNode`/`LeafNode` pair and the
//! leaf-offset tagging scheme used throughout the teacher crate to pack a
//! stem/leaf discriminant into a single node-id integer.

/// Node ids are plain `u32`s. The top bit tags a leaf; clearing it gives the
/// leaf's index into `KdTree::leaves`. This is the teacher's
/// `IDX::leaf_offset()` trick, specialized to a single concrete index type
/// since this crate has no need for the teacher's `u16`/`u32` generic
/// `Index` trait (there's exactly one node-id width here).
pub(crate) const LEAF_OFFSET: u32 = u32::MAX >> 1;

#[inline]
pub(crate) fn is_stem(node_id: u32) -> bool {
    node_id < LEAF_OFFSET
}

#[inline]
pub(crate) fn leaf_id_of(node_id: u32) -> usize {
    debug_assert!(!is_stem(node_id));
    (node_id - LEAF_OFFSET) as usize
}

#[inline]
pub(crate) fn node_id_of_leaf(leaf_idx: usize) -> u32 {
    LEAF_OFFSET + leaf_idx as u32
}

/// An internal split node: a bounding box over its whole subtree plus the
/// two child node ids.
#[derive(Clone, Debug)]
pub(crate) struct StemNode {
    pub(crate) min_bound: Vec<f32>,
    pub(crate) max_bound: Vec<f32>,
    pub(crate) left: u32,
    pub(crate) right: u32,
}

/// A leaf: a contiguous run of `len` point ids inside `KdTree::order`,
/// starting at `start`, plus the bounding box over just those points.
#[derive(Clone, Debug)]
pub(crate) struct LeafNode {
    pub(crate) min_bound: Vec<f32>,
    pub(crate) max_bound: Vec<f32>,
    pub(crate) start: u32,
    pub(crate) len: u32,
}
