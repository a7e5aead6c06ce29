//! This crate exposes an ordered map backed by a Left-Leaning Red-Black
//! (LLRB) tree, mostly for educational purposes.
//!
//! ## Left-Leaning Red-Black Tree
//!
//! An LLRB tree is a Binary Search Tree whose links are colored either
//! red or black so that the tree is an encoding of a 2-3 tree: a red link
//! binds two nodes into a single conceptual 3-node. The most important
//! invariants of an LLRB tree are:
//!
//! 1. For every node, all the keys in its left subtree are less than its
//!    own key and all the keys in its right subtree are greater.
//! 2. No node has a red right child (red links lean left).
//! 3. No red node has a red left child (no 4-nodes left lying around).
//! 4. Every path from the root to a missing child passes through the same
//!    number of black links.
//! 5. The root is black.
//!
//! > Note that a missing child counts as a black link.
//!
//! The benefit of these invariants is that the height of the tree is
//! bounded by `2 lg N` where `N` is the number of nodes, no matter what
//! order keys are inserted or deleted in. Lookups, insertions, and
//! deletions are all `O(height)`, and the per-node subtree counts give
//! `O(height)` order statistics (rank and select) for free.
//!
//! The price is deletion: keeping the invariants intact while removing an
//! arbitrary key requires temporarily "borrowing" a red link on the way
//! down the tree and repairing the damage on the way back up. This is by
//! far the trickiest code in the crate.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod map;
