//! Task data structure.
//!
//! This module defines the core `Task` struct representing a single to-do
//! item with its completion state.

use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// `text` is fixed at creation time; only the completion flag changes
/// afterwards. The on-disk layout is a plain `{id, text, completed}`
/// object so existing task files stay readable across versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create an open task with the given id and text.
    pub fn new(id: u64, text: String) -> Self {
        Task {
            id,
            text,
            completed: false,
        }
    }
}
