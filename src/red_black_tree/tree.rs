use crate::arena::{Arena, Handle};
use crate::red_black_tree::error::{InvariantError, Result};
use crate::red_black_tree::node::{Color, Node};
use log::{debug, trace};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

type Link = Option<Handle>;

/// A red black tree whose nodes live in an arena and carry parent links.
///
/// Every helper that reads a node takes a `Link` so that absent nodes are handled uniformly: an
/// absent node has no relatives and is black.
pub struct Tree<T> {
    arena: Arena<Node<T>>,
    root: Link,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Tree {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn clear(&mut self) {
        debug!("Clearing red black tree with {} nodes.", self.arena.len());
        self.arena.clear();
        self.root = None;
    }

    fn parent_of(&self, link: Link) -> Link {
        link.and_then(|handle| self.arena[handle].parent)
    }

    fn left_of(&self, link: Link) -> Link {
        link.and_then(|handle| self.arena[handle].left)
    }

    fn right_of(&self, link: Link) -> Link {
        link.and_then(|handle| self.arena[handle].right)
    }

    fn color_of(&self, link: Link) -> Color {
        link.map_or(Color::Black, |handle| self.arena[handle].color)
    }

    fn set_color(&mut self, link: Link, color: Color) {
        if let Some(handle) = link {
            self.arena[handle].color = color;
        }
    }

    // Points the child link of `parent` that currently holds `old` at `new`. An absent parent
    // means `old` is the root.
    fn replace_child(&mut self, parent: Link, old: Handle, new: Link) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                if self.arena[parent].left == Some(old) {
                    self.arena[parent].left = new;
                } else {
                    self.arena[parent].right = new;
                }
            },
        }
    }

    //       p               p
    //       |               |
    //       x               y
    //      / \     ==>     / \
    //     a   y           x   c
    //        / \         / \
    //       b   c       a   b
    fn rotate_left(&mut self, x: Link) {
        let x = match x {
            Some(x) => x,
            None => return,
        };
        let y = match self.arena[x].right {
            Some(y) => y,
            None => return,
        };

        let inner = self.arena[y].left;
        self.arena[x].right = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(x);
        }

        let parent = self.arena[x].parent;
        self.arena[y].parent = parent;
        self.replace_child(parent, x, Some(y));

        self.arena[y].left = Some(x);
        self.arena[x].parent = Some(y);
    }

    //         p           p
    //         |           |
    //         x           y
    //        / \   ==>   / \
    //       y   c       a   x
    //      / \             / \
    //     a   b           b   c
    fn rotate_right(&mut self, x: Link) {
        let x = match x {
            Some(x) => x,
            None => return,
        };
        let y = match self.arena[x].left {
            Some(y) => y,
            None => return,
        };

        let inner = self.arena[y].right;
        self.arena[x].left = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(x);
        }

        let parent = self.arena[x].parent;
        self.arena[y].parent = parent;
        self.replace_child(parent, x, Some(y));

        self.arena[y].right = Some(x);
        self.arena[x].parent = Some(y);
    }

    /// Returns the leftmost node of the right subtree of `handle`.
    fn successor(&self, handle: Handle) -> Link {
        let mut ret = self.arena[handle].right;
        while let Some(left) = self.left_of(ret) {
            ret = Some(left);
        }
        ret
    }

    fn find<V>(&self, key: &V) -> Link
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return curr,
            };
        }
        None
    }

    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let mut parent = None;
        let mut curr = self.root;
        let mut ordering = Ordering::Equal;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            ordering = key.cmp(&node.key);
            parent = curr;
            curr = match ordering {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return false,
            };
        }

        let new_node = self.arena.allocate(Node::new(key, parent));
        match parent {
            None => {
                self.arena[new_node].color = Color::Black;
                self.root = Some(new_node);
                return true;
            },
            Some(parent) => {
                if ordering == Ordering::Less {
                    self.arena[parent].left = Some(new_node);
                } else {
                    self.arena[parent].right = Some(new_node);
                }
            },
        }

        self.fix_after_insert(new_node);
        true
    }

    fn fix_after_insert(&mut self, handle: Handle) {
        let mut x = Some(handle);
        self.set_color(x, Color::Red);

        // the root is black, so a red parent always has a parent of its own
        while self.color_of(self.parent_of(x)) == Color::Red {
            let parent = self.parent_of(x);
            let grandparent = self.parent_of(parent);

            if parent == self.left_of(grandparent) {
                let uncle = self.right_of(grandparent);
                if self.color_of(uncle) == Color::Red {
                    trace!("Insert fix-up: red uncle on the right, recoloring.");
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    x = grandparent;
                } else {
                    if x == self.right_of(parent) {
                        trace!("Insert fix-up: inner left-right grandchild, rotating parent left.");
                        x = parent;
                        self.rotate_left(x);
                    }
                    trace!("Insert fix-up: outer left-left grandchild, rotating grandparent right.");
                    let parent = self.parent_of(x);
                    let grandparent = self.parent_of(parent);
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.left_of(grandparent);
                if self.color_of(uncle) == Color::Red {
                    trace!("Insert fix-up: red uncle on the left, recoloring.");
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    x = grandparent;
                } else {
                    if x == self.left_of(parent) {
                        trace!("Insert fix-up: inner right-left grandchild, rotating parent right.");
                        x = parent;
                        self.rotate_right(x);
                    }
                    trace!("Insert fix-up: outer right-right grandchild, rotating grandparent left.");
                    let parent = self.parent_of(x);
                    let grandparent = self.parent_of(parent);
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_left(grandparent);
                }
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    pub fn remove<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut target = self.find(key)?;

        if self.arena[target].left.is_some() && self.arena[target].right.is_some() {
            if let Some(successor) = self.successor(target) {
                let (target_node, successor_node) = self
                    .arena
                    .get_pair_mut(&target, &successor)
                    .expect("Expected successor to be a distinct node.");
                mem::swap(&mut target_node.key, &mut successor_node.key);
                target = successor;
            }
        }

        let replace = self.arena[target].left.or(self.arena[target].right);
        let parent = self.arena[target].parent;

        match replace {
            Some(replace) => {
                self.arena[replace].parent = parent;
                self.replace_child(parent, target, Some(replace));
                let node = self.arena.free(&target);
                if node.color == Color::Black {
                    self.fix_after_remove(Some(replace));
                }
                Some(node.key)
            },
            None if parent.is_none() => {
                self.root = None;
                Some(self.arena.free(&target).key)
            },
            None => {
                // the fix-up locates the sibling through the leaf, so it runs before detaching
                if self.arena[target].color == Color::Black {
                    self.fix_after_remove(Some(target));
                }
                if let Some(parent) = self.arena[target].parent {
                    self.replace_child(Some(parent), target, None);
                }
                Some(self.arena.free(&target).key)
            },
        }
    }

    fn fix_after_remove(&mut self, link: Link) {
        let mut node = link;

        while node != self.root && self.color_of(node) == Color::Black {
            let parent = self.parent_of(node);

            if node == self.left_of(parent) {
                let mut sibling = self.right_of(parent);
                if self.color_of(sibling) == Color::Red {
                    trace!("Remove fix-up: red sibling on the right, rotating parent left.");
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_left(parent);
                    sibling = self.right_of(self.parent_of(node));
                }

                if self.color_of(self.left_of(sibling)) == Color::Black
                    && self.color_of(self.right_of(sibling)) == Color::Black
                {
                    trace!("Remove fix-up: black nephews, pushing deficiency up.");
                    self.set_color(sibling, Color::Red);
                    node = self.parent_of(node);
                } else {
                    if self.color_of(self.right_of(sibling)) == Color::Black {
                        trace!("Remove fix-up: red near nephew, rotating sibling right.");
                        let near = self.left_of(sibling);
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate_right(sibling);
                        sibling = self.right_of(self.parent_of(node));
                    }
                    trace!("Remove fix-up: red far nephew, rotating parent left.");
                    let parent = self.parent_of(node);
                    let parent_color = self.color_of(parent);
                    let far = self.right_of(sibling);
                    self.set_color(sibling, parent_color);
                    self.set_color(parent, Color::Black);
                    self.set_color(far, Color::Black);
                    self.rotate_left(parent);
                    node = self.root;
                }
            } else {
                let mut sibling = self.left_of(parent);
                if self.color_of(sibling) == Color::Red {
                    trace!("Remove fix-up: red sibling on the left, rotating parent right.");
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_right(parent);
                    sibling = self.left_of(self.parent_of(node));
                }

                if self.color_of(self.left_of(sibling)) == Color::Black
                    && self.color_of(self.right_of(sibling)) == Color::Black
                {
                    trace!("Remove fix-up: black nephews, pushing deficiency up.");
                    self.set_color(sibling, Color::Red);
                    node = self.parent_of(node);
                } else {
                    if self.color_of(self.left_of(sibling)) == Color::Black {
                        trace!("Remove fix-up: red near nephew, rotating sibling left.");
                        let near = self.right_of(sibling);
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate_left(sibling);
                        sibling = self.left_of(self.parent_of(node));
                    }
                    trace!("Remove fix-up: red far nephew, rotating parent right.");
                    let parent = self.parent_of(node);
                    let parent_color = self.color_of(parent);
                    let far = self.left_of(sibling);
                    self.set_color(sibling, parent_color);
                    self.set_color(parent, Color::Black);
                    self.set_color(far, Color::Black);
                    self.rotate_right(parent);
                    node = self.root;
                }
            }
        }

        self.set_color(node, Color::Black);
    }

    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    pub fn get<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.find(key).map(|handle| &self.arena[handle].key)
    }

    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut ret = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            match key.cmp(node.key.borrow()) {
                Ordering::Greater => curr = node.right,
                Ordering::Less => {
                    ret = Some(&node.key);
                    curr = node.left;
                },
                Ordering::Equal => return Some(&node.key),
            }
        }
        ret
    }

    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut ret = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            match key.cmp(node.key.borrow()) {
                Ordering::Less => curr = node.left,
                Ordering::Greater => {
                    ret = Some(&node.key);
                    curr = node.right;
                },
                Ordering::Equal => return Some(&node.key),
            }
        }
        ret
    }

    pub fn min(&self) -> Option<&T> {
        let mut curr = self.root?;
        while let Some(left) = self.arena[curr].left {
            curr = left;
        }
        Some(&self.arena[curr].key)
    }

    pub fn max(&self) -> Option<&T> {
        let mut curr = self.root?;
        while let Some(right) = self.arena[curr].right {
            curr = right;
        }
        Some(&self.arena[curr].key)
    }

    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    fn subtree_height(&self, link: Link) -> usize {
        match link {
            None => 0,
            Some(handle) => {
                let node = &self.arena[handle];
                1 + self.subtree_height(node.left).max(self.subtree_height(node.right))
            },
        }
    }

    /// Checks every structural invariant and returns the black height of the root, counting
    /// absent children as one black node.
    pub fn validate(&self) -> Result<usize>
    where
        T: Ord,
    {
        let mut count = 0;
        let black_height = self.validate_subtree(self.root, None, None, None, &mut count)?;

        if let Some(root) = self.root {
            if self.arena[root].parent.is_some() {
                return Err(InvariantError::RootHasParent);
            }
            if self.arena[root].color == Color::Red {
                return Err(InvariantError::RedRoot);
            }
        }

        if count != self.len() {
            return Err(InvariantError::LengthMismatch {
                expected: self.len(),
                actual: count,
            });
        }

        Ok(black_height)
    }

    fn validate_subtree<'a>(
        &'a self,
        link: Link,
        parent: Link,
        lower: Option<&'a T>,
        upper: Option<&'a T>,
        count: &mut usize,
    ) -> Result<usize>
    where
        T: Ord,
    {
        let handle = match link {
            None => return Ok(1),
            Some(handle) => handle,
        };
        let node = &self.arena[handle];
        *count += 1;

        if node.parent != parent {
            return Err(InvariantError::ParentMismatch);
        }
        if lower.map_or(false, |lower| node.key <= *lower)
            || upper.map_or(false, |upper| node.key >= *upper)
        {
            return Err(InvariantError::KeyOrder);
        }
        if node.color == Color::Red
            && (self.color_of(node.left) == Color::Red || self.color_of(node.right) == Color::Red)
        {
            return Err(InvariantError::ConsecutiveRed);
        }

        let left = self.validate_subtree(node.left, link, lower, Some(&node.key), count)?;
        let right = self.validate_subtree(node.right, link, Some(&node.key), upper, count)?;
        if left != right {
            return Err(InvariantError::BlackHeightMismatch { left, right });
        }

        match node.color {
            Color::Black => Ok(left + 1),
            Color::Red => Ok(left),
        }
    }

    #[cfg(test)]
    pub fn keys(&self) -> Vec<&T> {
        fn walk<'a, T>(tree: &'a Tree<T>, link: Link, ret: &mut Vec<&'a T>) {
            if let Some(handle) = link {
                let node = &tree.arena[handle];
                walk(tree, node.left, ret);
                ret.push(&node.key);
                walk(tree, node.right, ret);
            }
        }

        let mut ret = Vec::new();
        walk(self, self.root, &mut ret);
        ret
    }

    // Pre-order keys with colors, enough to pin down the exact structure of a tree.
    #[cfg(test)]
    pub fn shape(&self) -> Vec<(&T, Color)> {
        fn walk<'a, T>(tree: &'a Tree<T>, link: Link, ret: &mut Vec<(&'a T, Color)>) {
            if let Some(handle) = link {
                let node = &tree.arena[handle];
                ret.push((&node.key, node.color));
                walk(tree, node.left, ret);
                walk(tree, node.right, ret);
            }
        }

        let mut ret = Vec::new();
        walk(self, self.root, &mut ret);
        ret
    }
}
