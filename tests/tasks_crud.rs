#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate};
    use mindmesh::db::tasks::Tasks;
    use mindmesh::libs::task::{Priority, RecurrencePattern, Status, Task, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_assigns_identity_and_order(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let first = tasks.create(&Task::new("First", "", Priority::Medium)).unwrap();
        let second = tasks.create(&Task::new("Second", "", Priority::High)).unwrap();

        assert!(first.id.is_some());
        assert!(second.id.is_some());
        assert_eq!(first.task_order, 0);
        assert_eq!(second.task_order, 1);
        assert_eq!(second.priority, Priority::High);
        assert_eq!(second.status, Status::Pending);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_task(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let mut task = tasks.create(&Task::new("Original", "Original comment", Priority::Low)).unwrap();
        task.title = "Updated".to_string();
        task.description = "Updated comment".to_string();
        task.tags = vec!["focus".to_string()];
        task.complexity = 5;
        tasks.update(&task).unwrap();

        let updated = tasks.get_by_id(task.id.unwrap()).unwrap().unwrap();
        assert_eq!(updated.title, "Updated");
        assert_eq!(updated.description, "Updated comment");
        assert_eq!(updated.tags, vec!["focus".to_string()]);
        assert_eq!(updated.complexity, 5);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_status_stamps_completed_at(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let task = tasks.create(&Task::new("Finish report", "", Priority::Medium)).unwrap();
        let now = Local::now().naive_local();

        let completed = tasks.set_status(task.id.unwrap(), Status::Completed, now).unwrap();
        assert_eq!(completed.status, Status::Completed);
        assert!(completed.completed_at.is_some());

        // Reopening clears the stamp again
        let reopened = tasks.set_status(task.id.unwrap(), Status::Pending, now).unwrap();
        assert_eq!(reopened.status, Status::Pending);
        assert_eq!(reopened.completed_at, None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_order_persists(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let task = tasks.create(&Task::new("Movable", "", Priority::Medium)).unwrap();

        tasks.set_order(task.id.unwrap(), 6).unwrap();
        let moved = tasks.get_by_id(task.id.unwrap()).unwrap().unwrap();
        assert_eq!(moved.task_order, 6);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_status_unknown_id_fails(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        assert!(tasks.set_status(12345, Status::Completed, Local::now().naive_local()).is_err());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_recurrence_fields_round_trip(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let mut task = Task::new("Stand-up", "", Priority::Medium);
        task.recurrence_pattern = Some(RecurrencePattern::Weekly);
        task.recurrence_end_date = NaiveDate::from_ymd_opt(2026, 12, 31);
        let created = tasks.create(&task).unwrap();

        let fetched = tasks.get_by_id(created.id.unwrap()).unwrap().unwrap();
        assert_eq!(fetched.recurrence_pattern, Some(RecurrencePattern::Weekly));
        assert_eq!(fetched.recurrence_end_date, NaiveDate::from_ymd_opt(2026, 12, 31));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_unknown_recurrence_pattern_reads_as_none(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let created = tasks.create(&Task::new("Odd schedule", "", Priority::Medium)).unwrap();

        // Simulate stale data written by another client
        tasks
            .conn
            .execute(
                "UPDATE tasks SET recurrence_pattern = 'fortnightly' WHERE id = ?1",
                [created.id.unwrap()],
            )
            .unwrap();

        let fetched = tasks.get_by_id(created.id.unwrap()).unwrap().unwrap();
        assert_eq!(fetched.recurrence_pattern, None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_by_tag(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let mut tagged = Task::new("Tagged", "", Priority::Medium);
        tagged.tags = vec!["deep-work".to_string()];
        tasks.create(&tagged).unwrap();
        tasks.create(&Task::new("Untagged", "", Priority::Medium)).unwrap();

        let found = tasks.fetch(TaskFilter::ByTag("deep-work".to_string())).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Tagged");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_tag_counts(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        for title in ["A", "B"] {
            let mut task = Task::new(title, "", Priority::Medium);
            task.tags = vec!["home".to_string()];
            tasks.create(&task).unwrap();
        }
        let mut other = Task::new("C", "", Priority::Medium);
        other.tags = vec!["errand".to_string(), "home".to_string()];
        tasks.create(&other).unwrap();

        let counts = tasks.tag_counts().unwrap();
        assert_eq!(counts, vec![("errand".to_string(), 1), ("home".to_string(), 3)]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_single(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let doomed = tasks.create(&Task::new("Doomed", "", Priority::Medium)).unwrap();
        let kept = tasks.create(&Task::new("Kept", "", Priority::Medium)).unwrap();

        assert_eq!(tasks.delete(doomed.id.unwrap()).unwrap(), 1);
        assert_eq!(tasks.get_by_id(doomed.id.unwrap()).unwrap(), None);
        assert!(tasks.get_by_id(kept.id.unwrap()).unwrap().is_some());

        // Deleting an id that no longer exists affects nothing
        assert_eq!(tasks.delete(doomed.id.unwrap()).unwrap(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_many(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        for i in 1..=5 {
            tasks.create(&Task::new(&format!("Task {}", i), "", Priority::Medium)).unwrap();
        }
        let all = tasks.fetch(TaskFilter::All).unwrap();
        let ids: Vec<i64> = all.iter().filter_map(|t| t.id).collect();

        let deleted = tasks.delete_many(&ids[..3]).unwrap();
        assert_eq!(deleted, 3);
        assert_eq!(tasks.fetch(TaskFilter::All).unwrap().len(), 2);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_completed(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let now = Local::now().naive_local();

        let done = tasks.create(&Task::new("Done", "", Priority::Medium)).unwrap();
        tasks.set_status(done.id.unwrap(), Status::Completed, now).unwrap();
        tasks.create(&Task::new("Open", "", Priority::Medium)).unwrap();

        assert_eq!(tasks.delete_completed().unwrap(), 1);
        let remaining = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Open");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_open_and_completed_filters(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let now = Local::now().naive_local();

        let a = tasks.create(&Task::new("A", "", Priority::Medium)).unwrap();
        let b = tasks.create(&Task::new("B", "", Priority::Medium)).unwrap();
        tasks.set_status(a.id.unwrap(), Status::InProgress, now).unwrap();
        tasks.set_status(b.id.unwrap(), Status::Completed, now).unwrap();

        assert_eq!(tasks.fetch(TaskFilter::Open).unwrap().len(), 1);
        assert_eq!(tasks.fetch(TaskFilter::Completed).unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_children_of_filter(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let parent = tasks.create(&Task::new("Parent", "", Priority::Medium)).unwrap();
        let mut child = Task::new("Child", "", Priority::Medium);
        child.parent_task_id = parent.id;
        tasks.create(&child).unwrap();

        let children = tasks.fetch(TaskFilter::ChildrenOf(parent.id.unwrap())).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].title, "Child");
    }
}
