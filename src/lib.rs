//! An ordered set backed by a red black tree.
//!
//! Nodes are stored in an index-addressed [`arena`](arena/index.html) and link to their parents
//! through handles, so the tree rebalances bottom-up without reference counting or unsafe code.
//!
//! # Examples
//!
//! ```
//! use rbtree_set::red_black_tree::RedBlackSet;
//!
//! let mut set = RedBlackSet::new();
//! for key in &[10, 20, 30, 15, 25, 5, 1] {
//!     set.insert(*key);
//! }
//! set.remove(&20);
//! set.remove(&1);
//!
//! assert_eq!(set.len(), 5);
//! assert_eq!(set.min(), Some(&5));
//! assert!(set.validate().is_ok());
//! ```

pub mod arena;
pub mod red_black_tree;
