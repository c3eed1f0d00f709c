#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use mindmesh::libs::recurrence::{advance, maybe_regenerate};
    use mindmesh::libs::task::{Priority, RecurrencePattern, Status, Task};

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn recurring_task(pattern: RecurrencePattern, due: NaiveDateTime) -> Task {
        let mut task = Task::new("Water the plants", "All of them", Priority::High);
        task.id = Some(7);
        task.status = Status::Completed;
        task.due_date = Some(due);
        task.recurrence_pattern = Some(pattern);
        task.tags = vec!["home".to_string(), "recurring".to_string()];
        task.complexity = 2;
        task
    }

    #[test]
    fn test_daily_advances_exactly_one_day() {
        let due = dt(2024, 6, 1, 9, 30);
        let task = recurring_task(RecurrencePattern::Daily, due);

        let next = maybe_regenerate(&task, dt(2024, 6, 1, 12, 0)).unwrap();
        assert_eq!(next.due_date, Some(dt(2024, 6, 2, 9, 30)));
        assert_eq!(next.title, task.title);
        assert_eq!(next.priority, task.priority);
        assert_eq!(next.tags, task.tags);
        assert_eq!(next.complexity, task.complexity);
        assert_eq!(next.status, Status::Pending);
        assert_eq!(next.id, None);
        assert_eq!(next.completed_at, None);
    }

    #[test]
    fn test_weekly_advances_seven_days() {
        let task = recurring_task(RecurrencePattern::Weekly, dt(2024, 6, 1, 0, 0));
        let next = maybe_regenerate(&task, dt(2024, 6, 1, 0, 0)).unwrap();
        assert_eq!(next.due_date, Some(dt(2024, 6, 8, 0, 0)));
    }

    #[test]
    fn test_monthly_clamps_to_last_valid_day() {
        // Jan 31 advancing into February clamps to Feb 29 (2024 is a leap year)
        let task = recurring_task(RecurrencePattern::Monthly, dt(2024, 1, 31, 8, 0));
        let next = maybe_regenerate(&task, dt(2024, 1, 31, 8, 0)).unwrap();
        assert_eq!(next.due_date, Some(dt(2024, 2, 29, 8, 0)));
    }

    #[test]
    fn test_monthly_clamp_non_leap_year() {
        let task = recurring_task(RecurrencePattern::Monthly, dt(2025, 1, 31, 8, 0));
        let next = maybe_regenerate(&task, dt(2025, 1, 31, 8, 0)).unwrap();
        assert_eq!(next.due_date, Some(dt(2025, 2, 28, 8, 0)));
    }

    #[test]
    fn test_yearly_clamps_leap_day() {
        let task = recurring_task(RecurrencePattern::Yearly, dt(2024, 2, 29, 10, 0));
        let next = maybe_regenerate(&task, dt(2024, 2, 29, 10, 0)).unwrap();
        assert_eq!(next.due_date, Some(dt(2025, 2, 28, 10, 0)));
    }

    #[test]
    fn test_end_date_terminates_series() {
        // Weekly due 2024-06-01 with end date 2024-06-05: next occurrence
        // 2024-06-08 falls after the end date, so the series is done
        let mut task = recurring_task(RecurrencePattern::Weekly, dt(2024, 6, 1, 0, 0));
        task.recurrence_end_date = NaiveDate::from_ymd_opt(2024, 6, 5);
        assert_eq!(maybe_regenerate(&task, dt(2024, 6, 1, 0, 0)), None);
    }

    #[test]
    fn test_occurrence_on_end_date_is_created() {
        let mut task = recurring_task(RecurrencePattern::Daily, dt(2024, 6, 4, 15, 0));
        task.recurrence_end_date = NaiveDate::from_ymd_opt(2024, 6, 5);
        let next = maybe_regenerate(&task, dt(2024, 6, 4, 15, 0)).unwrap();
        assert_eq!(next.due_date, Some(dt(2024, 6, 5, 15, 0)));
    }

    #[test]
    fn test_no_pattern_yields_none() {
        let mut task = recurring_task(RecurrencePattern::Daily, dt(2024, 6, 1, 0, 0));
        task.recurrence_pattern = None;
        assert_eq!(maybe_regenerate(&task, dt(2024, 6, 1, 0, 0)), None);
    }

    #[test]
    fn test_missing_due_date_uses_now() {
        let mut task = recurring_task(RecurrencePattern::Daily, dt(2024, 6, 1, 0, 0));
        task.due_date = None;
        let now = dt(2024, 7, 15, 18, 45);
        let next = maybe_regenerate(&task, now).unwrap();
        assert_eq!(next.due_date, Some(dt(2024, 7, 16, 18, 45)));
    }

    #[test]
    fn test_regeneration_is_deterministic() {
        let task = recurring_task(RecurrencePattern::Monthly, dt(2024, 1, 31, 8, 0));
        let now = dt(2024, 2, 1, 0, 0);
        let first = maybe_regenerate(&task, now).unwrap();
        let second = maybe_regenerate(&task, now).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_regenerated_occurrence_is_root_level() {
        let mut task = recurring_task(RecurrencePattern::Daily, dt(2024, 6, 1, 0, 0));
        task.parent_task_id = Some(3);
        let next = maybe_regenerate(&task, dt(2024, 6, 1, 0, 0)).unwrap();
        assert_eq!(next.parent_task_id, None);
    }

    #[test]
    fn test_advance_month_end_sequence() {
        // Advancing from the 31st twice: Jan 31 -> Feb 29 -> Mar 29.
        // The clamp does not restore the original day-of-month.
        let feb = advance(dt(2024, 1, 31, 0, 0), RecurrencePattern::Monthly).unwrap();
        assert_eq!(feb, dt(2024, 2, 29, 0, 0));
        let mar = advance(feb, RecurrencePattern::Monthly).unwrap();
        assert_eq!(mar, dt(2024, 3, 29, 0, 0));
    }
}
