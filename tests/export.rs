#[cfg(test)]
mod tests {
    use mindmesh::db::tasks::Tasks;
    use mindmesh::libs::export::{ExportFormat, Exporter};
    use mindmesh::libs::task::{Priority, Task};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext { temp_dir }
        }
    }

    fn seed_tasks() {
        let mut tasks = Tasks::new().unwrap();
        let mut a = Task::new("Pay rent", "Before the 3rd", Priority::High);
        a.tags = vec!["money".to_string()];
        tasks.create(&a).unwrap();
        tasks.create(&Task::new("Read a chapter", "", Priority::Low)).unwrap();
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_export_writes_all_tasks(ctx: &mut ExportTestContext) {
        seed_tasks();
        let output = ctx.temp_dir.path().join("tasks.csv");

        Exporter::new(ExportFormat::Csv, Some(output.clone())).export().unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let mut reader = csv::Reader::from_reader(content.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert!(content.contains("Pay rent"));
        assert!(content.contains("money"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_export_is_structured(ctx: &mut ExportTestContext) {
        seed_tasks();
        let output = ctx.temp_dir.path().join("tasks.json");

        Exporter::new(ExportFormat::Json, Some(output.clone())).export().unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["title"], "Pay rent");
        assert_eq!(rows[0]["priority"], "high");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_empty_database_writes_nothing(ctx: &mut ExportTestContext) {
        let output = ctx.temp_dir.path().join("tasks.csv");
        Exporter::new(ExportFormat::Csv, Some(output.clone())).export().unwrap();
        assert!(!output.exists());
    }
}
