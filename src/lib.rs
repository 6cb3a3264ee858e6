//! An ordered collection based on a binary search tree.
//!
//! [`LinkedBst`](struct.LinkedBst.html) keeps its items in a plain, unbalanced binary search
//! tree: every node owns its two children and nothing points back up. Adding an item always
//! creates a new leaf, so the shape of the tree depends on insertion order, and inserting items
//! in sorted order degenerates into a chain. Balance is restored only on request, by
//! [`rebalance`](struct.LinkedBst.html#method.rebalance), which rebuilds the tree with minimum
//! height.
//!
//! Every traversal, search and mutation walks the tree with a loop or an explicit stack, so
//! degenerate trees of any height are safe to use and to drop.
//!
//! # Examples
//!
//! ```
//! use linked_bst::LinkedBst;
//!
//! let mut bst: LinkedBst<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(bst.inorder(), [1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(bst.height(), 2);
//! assert_eq!(bst.successor(&5), Some(&7));
//! assert_eq!(bst.predecessor(&5), Some(&4));
//!
//! assert_eq!(bst.remove(&5), Ok(5));
//! assert_eq!(bst.inorder(), [1, 3, 4, 7, 8, 9]);
//! ```

#![deny(missing_docs)]

pub use bst::LinkedBst;
pub use error::Error;

pub mod bst;
mod error;
mod node;
#[cfg(feature = "ordered_iter")] mod ordered_iter;
#[cfg(feature = "quickcheck")] mod quickcheck;
