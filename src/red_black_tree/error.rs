use std::error;
use std::fmt;
use std::result;

/// A broken red black tree invariant reported by `RedBlackSet::validate`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvariantError {
    /// The root node is red.
    RedRoot,
    /// The root node has a parent link.
    RootHasParent,
    /// A red node has a red child.
    ConsecutiveRed,
    /// Two sibling subtrees have a different number of black nodes on their paths.
    BlackHeightMismatch { left: usize, right: usize },
    /// A key is out of order relative to its ancestors.
    KeyOrder,
    /// A parent link does not point at the node that holds the child link.
    ParentMismatch,
    /// The number of reachable nodes differs from the number of stored keys.
    LengthMismatch { expected: usize, actual: usize },
}

impl error::Error for InvariantError {}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::RedRoot => write!(f, "root node is red"),
            InvariantError::RootHasParent => write!(f, "root node has a parent"),
            InvariantError::ConsecutiveRed => write!(f, "red node has a red child"),
            InvariantError::BlackHeightMismatch { left, right } => {
                write!(f, "black height mismatch: left is {}, right is {}", left, right)
            },
            InvariantError::KeyOrder => write!(f, "keys are out of order"),
            InvariantError::ParentMismatch => write!(f, "parent link is inconsistent"),
            InvariantError::LengthMismatch { expected, actual } => {
                write!(f, "expected {} reachable nodes, found {}", expected, actual)
            },
        }
    }
}

pub type Result<T> = result::Result<T, InvariantError>;

#[cfg(test)]
mod tests {
    use super::InvariantError;

    #[test]
    fn test_display() {
        assert_eq!(
            InvariantError::BlackHeightMismatch { left: 2, right: 3 }.to_string(),
            "black height mismatch: left is 2, right is 3",
        );
        assert_eq!(InvariantError::RedRoot.to_string(), "root node is red");
    }
}
