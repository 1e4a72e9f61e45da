//! Command layer over the four structures.
//!
//! Hosts send raw text input; the lab validates it, applies the mutation
//! synchronously and hands back a view of every structure for rendering.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bst::{Bst, BstNode};
use crate::error::{Error, Result};
use crate::linked_list::{LinkedList, ListNode};
use crate::queue::Queue;
use crate::stack::Stack;

/// A user command against one of the structures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StructureCommand {
    Push { value: String },
    Pop,
    Peek,
    Enqueue { value: String },
    Dequeue,
    InsertHead { value: String },
    InsertTail { value: String },
    DeleteHead,
    DeleteTail,
    /// The whole trimmed input must parse as an `i64`; anything else, such
    /// as "12abc" or "3.7", is ignored without error.
    BstInsert { value: String },
    BstReset,
}

/// What a successful command did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Effect {
    Inserted,
    Removed(String),
    Peeked(String),
    Cleared,
    Ignored,
}

/// Render-ready snapshot of every structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureView {
    /// Bottom to top
    pub stack: Vec<String>,
    /// Front to back
    pub queue: Vec<String>,
    pub list: Vec<ListNode<String>>,
    pub bst: Option<BstNode<i64>>,
}

/// The result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applied {
    pub effect: Effect,
    pub view: StructureView,
}

/// Holds one instance of each structure.
#[derive(Debug, Clone, Default)]
pub struct StructureLab {
    stack: Stack<String>,
    queue: Queue<String>,
    list: LinkedList<String>,
    bst: Bst<i64>,
}

impl StructureLab {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command. Errors are user-visible no-ops; nothing was mutated.
    pub fn apply(&mut self, cmd: StructureCommand) -> Result<Applied> {
        let effect = match cmd {
            StructureCommand::Push { value } => {
                self.stack.push(non_empty(value)?);
                Effect::Inserted
            }
            StructureCommand::Pop => Effect::Removed(self.report(|lab| lab.stack.pop())?),
            StructureCommand::Peek => {
                Effect::Peeked(self.report(|lab| lab.stack.peek().cloned())?)
            }
            StructureCommand::Enqueue { value } => {
                self.queue.enqueue(non_empty(value)?);
                Effect::Inserted
            }
            StructureCommand::Dequeue => {
                Effect::Removed(self.report(|lab| lab.queue.dequeue())?)
            }
            StructureCommand::InsertHead { value } => {
                self.list.insert_head(non_empty(value)?);
                Effect::Inserted
            }
            StructureCommand::InsertTail { value } => {
                self.list.insert_tail(non_empty(value)?);
                Effect::Inserted
            }
            StructureCommand::DeleteHead => {
                Effect::Removed(self.report(|lab| lab.list.delete_head())?)
            }
            StructureCommand::DeleteTail => {
                Effect::Removed(self.report(|lab| lab.list.delete_tail())?)
            }
            StructureCommand::BstInsert { value } => match value.trim().parse::<i64>() {
                Ok(number) => {
                    self.bst.insert(number);
                    Effect::Inserted
                }
                Err(_) => {
                    debug!(input = %value, "ignoring non-numeric BST input");
                    Effect::Ignored
                }
            },
            StructureCommand::BstReset => {
                self.bst.clear();
                Effect::Cleared
            }
        };

        Ok(Applied {
            effect,
            view: self.view(),
        })
    }

    fn report<F>(&mut self, op: F) -> Result<String>
    where
        F: FnOnce(&mut Self) -> Result<String>,
    {
        op(self).inspect_err(|e| debug!("structure operation skipped: {}", e))
    }

    pub fn view(&self) -> StructureView {
        StructureView {
            stack: self.stack.items().to_vec(),
            queue: self.queue.iter().cloned().collect(),
            list: self.list.iter().cloned().collect(),
            bst: self.bst.root().cloned(),
        }
    }

    pub fn stack(&self) -> &Stack<String> {
        &self.stack
    }

    pub fn queue(&self) -> &Queue<String> {
        &self.queue
    }

    pub fn list(&self) -> &LinkedList<String> {
        &self.list
    }

    pub fn bst(&self) -> &Bst<i64> {
        &self.bst
    }
}

fn non_empty(value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(value)
}
