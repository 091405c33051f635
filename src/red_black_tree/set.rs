use crate::red_black_tree::error::Result;
use crate::red_black_tree::tree::Tree;
use std::borrow::Borrow;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors each node red or black.
/// No red node has a red child and every path from a node down to an absent child crosses the
/// same number of black nodes, which bounds the height by `2 * log2(n + 1)`. Nodes are stored in
/// an arena and keep a link to their parent, so rebalancing after an insertion or removal walks
/// up from the modified position instead of recursing down from the root.
///
/// # Examples
///
/// ```
/// use rbtree_set::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// assert!(set.insert(0));
/// assert!(set.insert(3));
/// assert!(!set.insert(3));
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub struct RedBlackSet<T> {
    tree: Tree<T>,
}

impl<T> RedBlackSet<T> {
    /// Constructs a new, empty `RedBlackSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet { tree: Tree::new() }
    }

    /// Constructs a new, empty `RedBlackSet<T>` with room for `capacity` keys before its node
    /// storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::with_capacity(1024);
    /// assert!(set.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        RedBlackSet {
            tree: Tree::with_capacity(capacity),
        }
    }

    /// Inserts a key into the set. Returns `true` if the key was inserted and `false` if an equal
    /// key already exists, in which case the set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        self.tree.insert(key)
    }

    /// Removes a key from the set. Returns `true` if the key was present and `false` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.remove(key).is_some()
    }

    /// Removes a key from the set and returns the stored key. Returns `None` if the key does not
    /// exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(String::from("a"));
    /// assert_eq!(set.take("a"), Some(String::from("a")));
    /// assert_eq!(set.take("a"), None);
    /// ```
    pub fn take<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.remove(key)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.contains(key)
    }

    /// Returns a reference to the key in the set that is equal to a particular key. Returns
    /// `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.get(&1), Some(&1));
    /// assert_eq!(set.get(&2), None);
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.get(key)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.floor(key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.ceil(key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.tree.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.tree.max()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty set has
    /// a height of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// for key in 0..3 {
    ///     set.insert(key);
    /// }
    /// assert_eq!(set.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Walks the whole tree and checks the ordering, coloring and parent link invariants. Returns
    /// the black height of the root, counting absent children as one black node.
    ///
    /// A correctly used set always validates; this is meant for tests and debugging.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.validate(), Ok(2));
    /// ```
    pub fn validate(&self) -> Result<usize>
    where
        T: Ord,
    {
        self.tree.validate()
    }
}

impl<T> Default for RedBlackSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
