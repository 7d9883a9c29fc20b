//! Integration tests for `todo_list`.

use todo_list::config::SortOrder;
use todo_list::{Completion, Error, JsonFileTaskStore, Priority, Task, TaskList, TaskStore};
use tempfile::TempDir;

fn task(name: &str, completed: bool, priority: Priority) -> Task {
    Task { name: name.to_string(), completed, priority }
}

#[test]
fn test_version_exists() {
    assert!(!todo_list::VERSION.is_empty());
}

#[test]
fn test_reads_file_written_by_hand() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(
        &path,
        r#"[
  {"task": "Buy milk", "completed": false, "priority": "Medium"},
  {"task": "Pay bills", "completed": false, "priority": "High"},
  {"task": "Walk dog", "completed": true, "priority": "Low"}
]"#,
    )
    .unwrap();

    let list = TaskList::open(JsonFileTaskStore::new(&path), SortOrder::Label).unwrap();
    let names: Vec<&str> = list.list_sorted().iter().map(|e| e.task.name.as_str()).collect();
    assert_eq!(names, ["Pay bills", "Buy milk", "Walk dog"]);
}

#[test]
fn test_full_session_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");

    {
        let mut list = TaskList::open(JsonFileTaskStore::new(&path), SortOrder::Label).unwrap();
        assert!(list.is_empty());
        list.add_task("Buy milk", Priority::Medium).unwrap();
        list.add_task("Pay bills", Priority::High).unwrap();
        list.add_task("Walk dog", Priority::Low).unwrap();
        // Sorted: Pay bills (High), Walk dog (Low), Buy milk (Medium).
        let done = list.complete_task(2).unwrap();
        assert_eq!(done, Completion::Completed(task("Walk dog", true, Priority::Low)));
    }

    let mut list = TaskList::open(JsonFileTaskStore::new(&path), SortOrder::Label).unwrap();
    assert_eq!(
        list.tasks(),
        [
            task("Buy milk", false, Priority::Medium),
            task("Pay bills", false, Priority::High),
            task("Walk dog", true, Priority::Low),
        ]
        .as_slice()
    );

    let removed = list.remove_task(3).unwrap();
    assert_eq!(removed.name, "Walk dog");
    assert!(matches!(list.remove_task(3), Err(Error::IndexOutOfRange { index: 3, count: 2 })));

    let stored = JsonFileTaskStore::new(&path).load().unwrap();
    assert_eq!(stored, list.tasks());
}

#[test]
fn test_malformed_file_is_fatal_and_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, "[{\"task\": \"half").unwrap();

    let result = TaskList::open(JsonFileTaskStore::new(&path), SortOrder::Label);
    assert!(matches!(result, Err(Error::MalformedTasksFile { .. })));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[{\"task\": \"half");
}
