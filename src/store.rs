//! Task list storage and mutation.
//!
//! This module provides the `TaskList` struct holding the ordered,
//! in-memory task sequence, along with JSON file persistence and the
//! three mutating operations (add, delete, toggle).

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Ordered in-memory list of tasks, persisted as a plain JSON array.
///
/// Insertion order is significant: it defines render order everywhere.
/// Task ids are unique within the list; new ids come from `next_id`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

impl TaskList {
    /// Load the task list from a JSON file, starting empty if the file
    /// doesn't exist or can't be parsed.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return TaskList::default();
        }
        let mut buf = String::new();
        match File::open(path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) => match serde_json::from_str(&buf) {
                Ok(list) => list,
                Err(e) => {
                    eprintln!("Error parsing task file, starting fresh: {e}");
                    TaskList::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading task file, starting fresh: {e}");
                TaskList::default()
            }
        }
    }

    /// Save the task list to a JSON file using atomic write (temp file + rename).
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        // Atomic-ish write via temp + rename.
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(self).unwrap();
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    /// Generate the next available task ID.
    pub fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Validate and add a new task from raw input text.
    ///
    /// The text is trimmed; whitespace-only input is rejected and `None`
    /// is returned with the list unchanged. On success the new task is
    /// appended (open, not completed) and its id returned. This is the
    /// only creation path.
    pub fn add_task(&mut self, raw: &str) -> Option<u64> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id();
        self.tasks.push(Task::new(id, text.to_string()));
        Some(id)
    }

    /// Remove the task with the given ID.
    ///
    /// Returns whether a task was removed; an unknown id is a silent no-op.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Flip the completion flag of the task with the given ID.
    ///
    /// Returns the new completion state, or `None` if the id is unknown
    /// (in which case nothing changes).
    pub fn toggle(&mut self, id: u64) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_add_task_appends_open_task() {
        let mut list = TaskList::default();
        let id = list.add_task("Buy milk").expect("non-empty text accepted");
        assert_eq!(list.tasks.len(), 1);
        assert_eq!(list.tasks[0].id, id);
        assert_eq!(list.tasks[0].text, "Buy milk");
        assert!(!list.tasks[0].completed);
    }

    #[test]
    fn test_add_task_trims_text() {
        let mut list = TaskList::default();
        list.add_task("  padded  ").unwrap();
        assert_eq!(list.tasks[0].text, "padded");
    }

    #[test]
    fn test_add_task_rejects_empty_input() {
        let mut list = TaskList::default();
        assert_eq!(list.add_task(""), None);
        assert_eq!(list.add_task("   \t "), None);
        assert!(list.tasks.is_empty());
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut list = TaskList::default();
        let a = list.add_task("one").unwrap();
        let b = list.add_task("two").unwrap();
        let c = list.add_task("three").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut list = TaskList::default();
        list.add_task("keep me").unwrap();
        let snapshot = list.tasks.clone();
        assert!(!list.delete(999));
        assert_eq!(list.tasks, snapshot);
    }

    #[test]
    fn test_delete_removes_matching_task() {
        let mut list = TaskList::default();
        let a = list.add_task("first").unwrap();
        let b = list.add_task("second").unwrap();
        assert!(list.delete(a));
        assert_eq!(list.tasks.len(), 1);
        assert_eq!(list.tasks[0].id, b);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut list = TaskList::default();
        let id = list.add_task("flip me").unwrap();
        assert_eq!(list.toggle(id), Some(true));
        assert_eq!(list.toggle(id), Some(false));
        assert!(!list.tasks[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = TaskList::default();
        list.add_task("untouched").unwrap();
        assert_eq!(list.toggle(42), None);
        assert!(!list.tasks[0].completed);
    }

    #[test]
    fn test_save_load_round_trip_preserves_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");

        let mut list = TaskList::default();
        list.add_task("one").unwrap();
        let id = list.add_task("two").unwrap();
        list.add_task("three").unwrap();
        list.toggle(id);
        list.save(&path).unwrap();

        let reloaded = TaskList::load(&path);
        assert_eq!(reloaded.tasks, list.tasks);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let list = TaskList::load(&dir.path().join("nope.json"));
        assert!(list.tasks.is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "{not json").unwrap();
        let list = TaskList::load(&path);
        assert!(list.tasks.is_empty());
    }

    #[test]
    fn test_create_toggle_delete_scenario() {
        let mut list = TaskList::default();
        let id = list.add_task("Buy milk").unwrap();
        assert_eq!(list.tasks.len(), 1);
        assert!(!list.tasks[0].completed);

        list.toggle(id);
        assert!(list.tasks[0].completed);

        list.delete(id);
        assert!(list.tasks.is_empty());
    }

    #[test]
    fn test_next_id_after_reload_does_not_collide() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");

        let mut list = TaskList::default();
        list.add_task("one").unwrap();
        list.add_task("two").unwrap();
        list.save(&path).unwrap();

        let mut reloaded = TaskList::load(&path);
        let id = reloaded.add_task("three").unwrap();
        let mut ids: Vec<u64> = reloaded.tasks.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), reloaded.tasks.len());
        assert_eq!(id, 3);
    }
}
