//! Recurring-task due-date advancement and occurrence generation.
//!
//! When a recurring task is completed, the engine computes the next
//! occurrence's due date and decides whether to materialize it. The functions
//! here are pure: "now" is injected by the caller, no I/O happens, and the
//! store persists whatever candidate task is returned.
//!
//! ## Day-of-month policy
//!
//! Monthly and yearly advancement clamps to the last valid day of the target
//! month: a task due on 2024-01-31 advances to 2024-02-29, and a Feb 29 task
//! advances to Feb 28 in non-leap years. This is the behavior of
//! [`chrono::Months`] addition and is asserted by the test suite.

use super::task::{RecurrencePattern, Status, Task};
use chrono::{Days, Months, NaiveDateTime};

/// Advances a due date by exactly one recurrence period.
///
/// Returns `None` only when the result would overflow chrono's representable
/// date range; callers treat that the same as an exhausted series.
pub fn advance(base: NaiveDateTime, pattern: RecurrencePattern) -> Option<NaiveDateTime> {
    match pattern {
        RecurrencePattern::Daily => base.checked_add_days(Days::new(1)),
        RecurrencePattern::Weekly => base.checked_add_days(Days::new(7)),
        RecurrencePattern::Monthly => base.checked_add_months(Months::new(1)),
        RecurrencePattern::Yearly => base.checked_add_months(Months::new(12)),
    }
}

/// Computes the next occurrence of a just-completed recurring task.
///
/// The base date is the completed task's due date, or `now` when it never
/// had one. Returns `None` when the task has no (recognized) recurrence
/// pattern, or when the advanced date falls strictly after
/// `recurrence_end_date` — both are normal termination, not errors.
///
/// The returned candidate copies title, description, priority, recurrence
/// fields, tags, and complexity; it gets a fresh identity (`id = None`,
/// order assigned by the store on creation) and `status = pending`. The
/// caller is responsible for persisting it.
pub fn maybe_regenerate(completed: &Task, now: NaiveDateTime) -> Option<Task> {
    let pattern = completed.recurrence_pattern?;
    let base = completed.due_date.unwrap_or(now);
    let next_due = advance(base, pattern)?;

    // End-date comparison is by calendar date: an occurrence landing on the
    // end date itself is still created.
    if let Some(end) = completed.recurrence_end_date {
        if next_due.date() > end {
            return None;
        }
    }

    Some(Task {
        id: None,
        title: completed.title.clone(),
        description: completed.description.clone(),
        priority: completed.priority,
        status: Status::Pending,
        due_date: Some(next_due),
        recurrence_pattern: Some(pattern),
        recurrence_end_date: completed.recurrence_end_date,
        task_order: 0,
        parent_task_id: None,
        tags: completed.tags.clone(),
        complexity: completed.complexity,
        created_at: None,
        completed_at: None,
    })
}
