//! Drag-and-drop task reordering.
//!
//! `task_order` is a numeric sort key among sibling tasks, not necessarily
//! contiguous. Dropping a task onto a target assigns it the target's order
//! plus a fixed step, which appends it directly after the target. Repeated
//! drops onto the same target can produce equal order values; the display
//! comparator breaks those ties by task id, which is immutable and follows
//! insertion order.

use super::task::Task;
use std::cmp::Ordering;
use thiserror::Error;

/// Offset added to the target's order when a task is dropped onto it.
pub const REORDER_STEP: i64 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReorderError {
    /// The dragged or target id does not resolve to an existing task.
    /// The caller must not reorder anything in this case.
    #[error("Task with id {0} not found")]
    TargetNotFound(i64),
}

/// Computes the new order value for a dragged task dropped onto a target.
///
/// Dropping a task onto itself is a no-op and returns its unchanged order.
/// The returned value is written back through the store's update operation;
/// no collection is mutated here.
pub fn compute_reorder(dragged_id: i64, target_id: i64, tasks: &[Task]) -> Result<i64, ReorderError> {
    let dragged = find(tasks, dragged_id).ok_or(ReorderError::TargetNotFound(dragged_id))?;
    if dragged_id == target_id {
        return Ok(dragged.task_order);
    }
    let target = find(tasks, target_id).ok_or(ReorderError::TargetNotFound(target_id))?;
    Ok(target.task_order + REORDER_STEP)
}

/// Display ordering: completed tasks sink to the bottom, the rest sort by
/// `task_order` with ties broken by id (insertion order).
pub fn compare_for_display(a: &Task, b: &Task) -> Ordering {
    match (a.is_completed(), b.is_completed()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => a
            .task_order
            .cmp(&b.task_order)
            .then(a.id.unwrap_or(0).cmp(&b.id.unwrap_or(0))),
    }
}

pub fn sort_for_display(tasks: &mut [Task]) {
    tasks.sort_by(compare_for_display);
}

fn find(tasks: &[Task], id: i64) -> Option<&Task> {
    tasks.iter().find(|t| t.id == Some(id))
}
