//! Algoscope Mutable Structures
//!
//! Stack, queue, singly linked list and binary search tree, mutated
//! synchronously in response to user commands. Operations are O(1) or
//! O(log n) on the sizes a user types in by hand, so there is no step
//! recording or replay: each command mutates and returns the new view.
//!
//! Operations on an empty structure report [`Error::EmptyStructure`] and
//! leave it untouched; non-numeric BST input is silently ignored.

mod bst;
mod error;
mod lab;
mod linked_list;
mod queue;
mod stack;

pub use bst::{Bst, BstNode};
pub use error::{Error, Result};
pub use lab::{Applied, Effect, StructureCommand, StructureLab, StructureView};
pub use linked_list::{LinkedList, ListNode, NodeId};
pub use queue::Queue;
pub use stack::Stack;
