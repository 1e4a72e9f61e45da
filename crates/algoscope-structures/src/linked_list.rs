//! Singly linked list with stable node ids.
//!
//! Nodes are stored head-to-tail; each carries the id of its successor so a
//! host can draw the arrows. Ids are never reused within one list.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of a list node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListNode<T> {
    pub id: NodeId,
    pub value: T,
    pub next: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedList<T> {
    nodes: VecDeque<ListNode<T>>,
    next_id: u64,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self {
            nodes: VecDeque::new(),
            next_id: 0,
        }
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn insert_head(&mut self, value: T) -> NodeId {
        let id = self.allocate_id();
        let next = self.nodes.front().map(|n| n.id);
        self.nodes.push_front(ListNode { id, value, next });
        id
    }

    pub fn insert_tail(&mut self, value: T) -> NodeId {
        let id = self.allocate_id();
        if let Some(tail) = self.nodes.back_mut() {
            tail.next = Some(id);
        }
        self.nodes.push_back(ListNode { id, value, next: None });
        id
    }

    pub fn delete_head(&mut self) -> Result<T> {
        self.nodes
            .pop_front()
            .map(|n| n.value)
            .ok_or(Error::EmptyStructure("linked list"))
    }

    pub fn delete_tail(&mut self) -> Result<T> {
        let removed = self
            .nodes
            .pop_back()
            .ok_or(Error::EmptyStructure("linked list"))?;
        if let Some(tail) = self.nodes.back_mut() {
            tail.next = None;
        }
        Ok(removed.value)
    }

    /// Head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &ListNode<T>> {
        self.nodes.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter().map(|n| &n.value)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
