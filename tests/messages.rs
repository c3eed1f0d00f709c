#[cfg(test)]
mod tests {
    use mindmesh::libs::messages::Message;

    #[test]
    fn test_delete_messages() {
        assert_eq!(Message::TaskDeleted(4).to_string(), "Task 4 deleted");
        assert_eq!(Message::TasksDeletedCount(3).to_string(), "3 task(s) deleted");
    }

    #[test]
    fn test_list_header() {
        assert_eq!(Message::TaskListHeader.to_string(), "Your tasks");
    }

    #[test]
    fn test_breakdown_messages() {
        assert_eq!(Message::SubtasksCreated(2).to_string(), "2 subtask(s) created");
        assert_eq!(Message::BreakdownCreated(5).to_string(), "5 task(s) created from breakdown");
    }

    #[test]
    fn test_recurrence_messages() {
        assert_eq!(
            Message::RecurrenceScheduled("Water the plants".to_string(), "2024-06-02".to_string()).to_string(),
            "Next occurrence of 'Water the plants' scheduled for 2024-06-02"
        );
        assert_eq!(
            Message::RecurrenceSeriesEnded("Stand-up".to_string()).to_string(),
            "Recurring series for 'Stand-up' has ended"
        );
    }
}
