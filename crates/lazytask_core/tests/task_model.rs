use lazytask_core::{Priority, Task, TaskId, TaskValidationError};

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("hello", 2_000, 1_000);

    assert!(!task.id.as_str().is_empty());
    assert_eq!(task.title, "hello");
    assert_eq!(task.description, None);
    assert_eq!(task.priority, Priority::Medium);
    assert!(!task.is_completed);
    assert_eq!(task.scheduled_at, 1_000);
    assert_eq!(task.created_at, 1_000);
    assert_eq!(task.updated_at, 1_000);
    assert!(task.validate().is_ok());
}

#[test]
fn generated_ids_are_unique() {
    assert_ne!(TaskId::generate(), TaskId::generate());
}

#[test]
fn core_serialization_uses_snake_case_fields() {
    let mut task = Task::with_id(TaskId::parse("t-1").unwrap(), "ship", 2_000, 1_000);
    task.priority = Priority::Low;
    task.complete();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "t-1");
    assert_eq!(json["priority"], "low");
    assert_eq!(json["is_completed"], true);
    assert_eq!(json["created_at"], 1_000);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_rejects_blank_id_and_unknown_priority() {
    let blank_id = serde_json::json!({
        "id": "  ",
        "title": "x",
        "description": null,
        "scheduled_at": 0,
        "deadline": 0,
        "priority": "high",
        "is_completed": false,
        "created_at": 0,
        "updated_at": 0
    });
    let err = serde_json::from_value::<Task>(blank_id).unwrap_err();
    assert!(
        err.to_string().contains("task id must not be empty"),
        "unexpected error: {err}"
    );

    let bad_priority = serde_json::json!({
        "id": "t",
        "title": "x",
        "description": null,
        "scheduled_at": 0,
        "deadline": 0,
        "priority": "urgent",
        "is_completed": false,
        "created_at": 0,
        "updated_at": 0
    });
    assert!(serde_json::from_value::<Task>(bad_priority).is_err());
}

#[test]
fn validate_rejects_blank_title() {
    let task = Task::new("\t", 2_000, 1_000);
    assert_eq!(
        task.validate().unwrap_err(),
        TaskValidationError::EmptyTitle
    );
}
