//! Index-addressed slab that owns the nodes of a tree.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A handle to an object stored in an `Arena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    index: usize,
}

enum Block<T> {
    Occupied(T),
    Vacant(Option<usize>),
}

/// A slab allocator for a single type of object, addressed by `Handle`.
///
/// Objects live in one contiguous `Vec`. Freed slots are threaded into a free list and reused
/// before the vector grows, so handles stay small and the structure needs no unsafe code.
/// Links between objects are expressed as handles, which lets a node graph carry back-references
/// without shared ownership.
///
/// # Examples
///
/// ```
/// use rbtree_set::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(&x), 2);
/// assert!(arena.is_empty());
/// ```
pub struct Arena<T> {
    head: Option<usize>,
    blocks: Vec<Block<T>>,
    len: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::new();
    /// ```
    pub fn new() -> Self {
        Arena {
            head: None,
            blocks: Vec::new(),
            len: 0,
        }
    }

    /// Constructs a new, empty `Arena<T>` that can hold `capacity` objects without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::with_capacity(1024);
    /// assert!(arena.capacity() >= 1024);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            head: None,
            blocks: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Stores an object in the arena and returns its handle. Vacant slots are reused before new
    /// ones are appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;
        match self.head.take() {
            None => {
                self.blocks.push(Block::Occupied(value));
                Handle {
                    index: self.blocks.len() - 1,
                }
            },
            Some(index) => {
                match mem::replace(&mut self.blocks[index], Block::Occupied(value)) {
                    Block::Vacant(next) => self.head = next,
                    Block::Occupied(_) => panic!("Error: free list points at an occupied block."),
                }
                Handle { index }
            },
        }
    }

    /// Releases the slot of a handle and returns the object it held.
    ///
    /// # Panics
    ///
    /// Panics if the handle is out of bounds or refers to a vacant slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(&x), 0);
    /// ```
    pub fn free(&mut self, handle: &Handle) -> T {
        if handle.index >= self.blocks.len() {
            panic!("Error: attempting to free invalid block.");
        }
        if let Block::Vacant(_) = self.blocks[handle.index] {
            panic!("Error: attempting to free vacant block.");
        }
        let old_block = mem::replace(&mut self.blocks[handle.index], Block::Vacant(self.head));
        self.head = Some(handle.index);
        self.len -= 1;
        match old_block {
            Block::Occupied(value) => value,
            Block::Vacant(_) => unreachable!(),
        }
    }

    /// Returns an immutable reference to an object in the arena. Returns `None` if the handle
    /// does not correspond to an occupied slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn get(&self, handle: &Handle) -> Option<&T> {
        match self.blocks.get(handle.index) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to an object in the arena. Returns `None` if the handle does
    /// not correspond to an occupied slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get_mut(&x), Some(&mut 0));
    /// ```
    pub fn get_mut(&mut self, handle: &Handle) -> Option<&mut T> {
        match self.blocks.get_mut(handle.index) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns mutable references to the objects of two distinct handles, in argument order.
    /// Returns `None` if the handles are equal or either slot is not occupied.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::arena::Arena;
    /// use std::mem;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// let y = arena.allocate(1);
    /// if let Some((a, b)) = arena.get_pair_mut(&x, &y) {
    ///     mem::swap(a, b);
    /// }
    /// assert_eq!(arena[x], 1);
    /// assert_eq!(arena[y], 0);
    /// ```
    pub fn get_pair_mut(&mut self, a: &Handle, b: &Handle) -> Option<(&mut T, &mut T)> {
        if a.index == b.index || a.index.max(b.index) >= self.blocks.len() {
            return None;
        }
        let (low, high) = if a.index < b.index {
            (a.index, b.index)
        } else {
            (b.index, a.index)
        };
        let (head, tail) = self.blocks.split_at_mut(high);
        match (&mut head[low], &mut tail[0]) {
            (Block::Occupied(first), Block::Occupied(second)) => {
                if a.index < b.index {
                    Some((first, second))
                } else {
                    Some((second, first))
                }
            },
            _ => None,
        }
    }

    /// Returns the number of occupied slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// arena.allocate(0);
    /// assert_eq!(arena.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of objects the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.blocks.capacity()
    }

    /// Drops every object in the arena. Previously issued handles become invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// arena.clear();
    /// assert_eq!(arena.get(&x), None);
    /// ```
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(&handle).expect("Error: handle out of bounds.")
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(&handle).expect("Error: handle out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::Arena;
    use super::Handle;

    #[test]
    #[should_panic]
    fn test_free_invalid_block() {
        let mut arena: Arena<u32> = Arena::new();
        arena.free(&Handle { index: 0 });
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_block() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        arena.free(&x);
        arena.free(&x);
    }

    #[test]
    fn test_allocate() {
        let mut arena = Arena::new();
        assert_eq!(arena.allocate(0), Handle { index: 0 });
        assert_eq!(arena.allocate(0), Handle { index: 1 });
        assert_eq!(arena.allocate(0), Handle { index: 2 });
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_free_reuses_slots() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        let y = arena.allocate(1);
        let z = arena.allocate(2);

        assert_eq!(arena.free(&x), 0);
        assert_eq!(arena.free(&z), 2);
        assert_eq!(arena.len(), 1);

        // most recently freed slot comes back first
        assert_eq!(arena.allocate(3), z);
        assert_eq!(arena.allocate(4), x);
        assert_eq!(arena.allocate(5), Handle { index: 3 });
        assert_eq!(arena[y], 1);
    }

    #[test]
    fn test_get_invalid_block() {
        let arena: Arena<u32> = Arena::new();
        assert_eq!(arena.get(&Handle { index: 0 }), None);
    }

    #[test]
    fn test_get_vacant_block() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        arena.free(&x);
        assert_eq!(arena.get(&x), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        *arena.get_mut(&x).unwrap() = 1;
        assert_eq!(arena.get(&x), Some(&1));
    }

    #[test]
    fn test_get_mut_vacant_block() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        arena.free(&x);
        assert_eq!(arena.get_mut(&x), None);
    }

    #[test]
    fn test_get_pair_mut() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        let y = arena.allocate(1);

        {
            let (a, b) = arena.get_pair_mut(&y, &x).unwrap();
            assert_eq!((*a, *b), (1, 0));
            *a = 10;
        }
        assert_eq!(arena[y], 10);
        assert!(arena.get_pair_mut(&x, &x).is_none());

        arena.free(&y);
        assert!(arena.get_pair_mut(&x, &y).is_none());
        assert!(arena.get_pair_mut(&x, &Handle { index: 7 }).is_none());
    }

    #[test]
    #[should_panic]
    fn test_index_vacant_block() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        arena.free(&x);
        arena[x] += 1;
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::with_capacity(16);
        let x = arena.allocate(0);
        arena.allocate(1);
        arena.clear();

        assert!(arena.is_empty());
        assert_eq!(arena.get(&x), None);
        assert_eq!(arena.allocate(2), Handle { index: 0 });
    }
}
