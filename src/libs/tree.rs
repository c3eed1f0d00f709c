//! Arena-backed task hierarchy for subtask nesting.
//!
//! Tasks reference their parent by id; the tree keeps a flat arena of tasks
//! and resolves children by map lookup, so there are no pointer cycles to
//! manage. Tasks whose parent id does not resolve (deleted parent, stale
//! reference) surface as roots instead of disappearing.

use super::task::Task;
use std::collections::{HashMap, HashSet};

pub struct TaskTree {
    arena: Vec<Task>,
    roots: Vec<usize>,
    children: HashMap<i64, Vec<usize>>,
}

impl TaskTree {
    /// Builds the hierarchy from a task list. The input order is preserved
    /// among siblings, so callers sort for display before building.
    pub fn build(tasks: Vec<Task>) -> Self {
        let known_ids: HashSet<i64> = tasks.iter().filter_map(|t| t.id).collect();
        let mut roots = Vec::new();
        let mut children: HashMap<i64, Vec<usize>> = HashMap::new();

        for (idx, task) in tasks.iter().enumerate() {
            match task.parent_task_id {
                Some(parent_id) if known_ids.contains(&parent_id) && task.id != Some(parent_id) => {
                    children.entry(parent_id).or_default().push(idx);
                }
                _ => roots.push(idx),
            }
        }

        TaskTree {
            arena: tasks,
            roots,
            children,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn roots(&self) -> impl Iterator<Item = &Task> {
        self.roots.iter().map(|&idx| &self.arena[idx])
    }

    pub fn children_of(&self, id: i64) -> impl Iterator<Item = &Task> {
        self.children
            .get(&id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|&idx| &self.arena[idx])
    }

    /// Depth-first traversal yielding each task with its nesting depth.
    ///
    /// Uses an explicit stack and a visited set, so malformed parent chains
    /// in the database cannot loop or recurse unboundedly.
    pub fn walk(&self) -> Vec<(&Task, usize)> {
        let mut out = Vec::with_capacity(self.arena.len());
        let mut visited = HashSet::new();
        let mut stack: Vec<(usize, usize)> = self.roots.iter().rev().map(|&idx| (idx, 0)).collect();

        while let Some((idx, depth)) = stack.pop() {
            if !visited.insert(idx) {
                continue;
            }
            let task = &self.arena[idx];
            out.push((task, depth));
            if let Some(id) = task.id {
                if let Some(kids) = self.children.get(&id) {
                    for &kid in kids.iter().rev() {
                        stack.push((kid, depth + 1));
                    }
                }
            }
        }
        out
    }
}
