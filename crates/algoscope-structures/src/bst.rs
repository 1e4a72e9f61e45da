//! Binary search tree with owned children.
//!
//! Values smaller than a node go left; everything else, duplicates included,
//! goes right.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BstNode<T> {
    pub value: T,
    pub left: Option<Box<BstNode<T>>>,
    pub right: Option<Box<BstNode<T>>>,
}

impl<T> BstNode<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Values of this subtree in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        fn walk<'a, T>(node: Option<&'a BstNode<T>>, out: &mut Vec<&'a T>) {
            if let Some(node) = node {
                walk(node.left.as_deref(), out);
                out.push(&node.value);
                walk(node.right.as_deref(), out);
            }
        }
        let mut out = Vec::new();
        walk(Some(self), &mut out);
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bst<T> {
    root: Option<Box<BstNode<T>>>,
    len: usize,
}

impl<T> Default for Bst<T> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<T: Ord> Bst<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: T) {
        fn descend<T: Ord>(slot: &mut Option<Box<BstNode<T>>>, value: T) {
            match slot {
                None => *slot = Some(Box::new(BstNode::leaf(value))),
                Some(node) if value < node.value => descend(&mut node.left, value),
                Some(node) => descend(&mut node.right, value),
            }
        }
        descend(&mut self.root, value);
        self.len += 1;
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if *value == node.value {
                return true;
            }
            current = if *value < node.value {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    pub fn root(&self) -> Option<&BstNode<T>> {
        self.root.as_deref()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Values in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        self.root().map_or_else(Vec::new, BstNode::in_order)
    }

    /// Number of levels; an empty tree has height 0.
    pub fn height(&self) -> usize {
        fn depth<T>(node: Option<&BstNode<T>>) -> usize {
            node.map_or(0, |n| 1 + depth(n.left.as_deref()).max(depth(n.right.as_deref())))
        }
        depth(self.root.as_deref())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<T: Copy>(node: &Option<Box<BstNode<T>>>) -> Option<T> {
        node.as_ref().map(|n| n.value)
    }

    #[test]
    fn insert_builds_expected_shape() {
        let mut bst = Bst::new();
        for v in [5, 3, 8, 1, 4] {
            bst.insert(v);
        }

        let root = bst.root().unwrap();
        assert_eq!(root.value, 5);
        let left = root.left.as_ref().unwrap();
        assert_eq!(left.value, 3);
        assert_eq!(value_of(&left.left), Some(1));
        assert_eq!(value_of(&left.right), Some(4));
        let right = root.right.as_ref().unwrap();
        assert_eq!(right.value, 8);
        assert!(right.left.is_none() && right.right.is_none());
        assert_eq!(bst.height(), 3);
    }

    #[test]
    fn duplicates_go_right() {
        let mut bst = Bst::new();
        bst.insert(5);
        bst.insert(5);
        let root = bst.root().unwrap();
        assert!(root.left.is_none());
        assert_eq!(value_of(&root.right), Some(5));
        assert_eq!(bst.len(), 2);
    }

    #[test]
    fn in_order_is_sorted() {
        let mut bst = Bst::new();
        for v in [7, 2, 9, 2, 1, 8] {
            bst.insert(v);
        }
        assert_eq!(bst.in_order(), vec![&1, &2, &2, &7, &8, &9]);
        assert!(bst.contains(&8));
        assert!(!bst.contains(&3));
    }

    #[test]
    fn clear_empties_tree() {
        let mut bst = Bst::new();
        bst.insert(1);
        bst.clear();
        assert!(bst.is_empty());
        assert_eq!(bst.height(), 0);
        assert!(bst.in_order().is_empty());
    }
}
