use lazytask_core::{
    order_tasks, tasks_from_records, Priority, Task, TaskRecord, TaskValidationError,
};
use serde_json::json;

fn record_json(id: &str, priority: &str, deadline: &str, created_at: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "title": format!("task {id}"),
        "description": "from api",
        "dateTime": "2026-03-01T08:00:00.000Z",
        "deadline": deadline,
        "priority": priority,
        "isCompleted": false,
        "createdAt": created_at,
        "updatedAt": created_at
    })
}

#[test]
fn api_record_converts_into_task() {
    let record: TaskRecord = serde_json::from_value(record_json(
        "65f1c0ffee",
        "high",
        "2026-03-02T10:00:00.000Z",
        "2026-02-28T09:00:00.000Z",
    ))
    .unwrap();

    let task = Task::try_from(record).unwrap();
    assert_eq!(task.id.as_str(), "65f1c0ffee");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.description.as_deref(), Some("from api"));
    assert_eq!(task.deadline, 1_772_445_600_000);
    assert_eq!(task.created_at, task.updated_at);
    assert!(!task.is_completed);
}

#[test]
fn task_serializes_back_to_api_field_names() {
    let record: TaskRecord = serde_json::from_value(record_json(
        "abc",
        "low",
        "2026-03-02T10:00:00.000Z",
        "2026-02-28T09:00:00.000Z",
    ))
    .unwrap();
    let task = Task::try_from(record).unwrap();

    let json = serde_json::to_value(TaskRecord::try_from(&task).unwrap()).unwrap();
    assert_eq!(json["_id"], "abc");
    assert_eq!(json["priority"], "low");
    assert_eq!(json["isCompleted"], false);
    assert_eq!(json["dateTime"], "2026-03-01T08:00:00.000Z");
    assert_eq!(json["deadline"], "2026-03-02T10:00:00.000Z");
    assert_eq!(json["createdAt"], "2026-02-28T09:00:00.000Z");
}

#[test]
fn missing_optional_fields_use_defaults() {
    let record: TaskRecord = serde_json::from_value(json!({
        "_id": "minimal",
        "title": "minimal",
        "dateTime": "2026-03-01T08:00:00Z",
        "deadline": "2026-03-01T09:00:00Z",
        "priority": "medium",
        "createdAt": "2026-03-01T07:00:00Z"
    }))
    .unwrap();

    let task = Task::try_from(record).unwrap();
    assert!(!task.is_completed);
    assert_eq!(task.description, None);
    assert_eq!(task.updated_at, task.created_at);
}

#[test]
fn unknown_priority_fails_fast_naming_the_field() {
    let record: TaskRecord = serde_json::from_value(record_json(
        "x",
        "urgent",
        "2026-03-02T10:00:00Z",
        "2026-02-28T09:00:00Z",
    ))
    .unwrap();

    let err = Task::try_from(record).unwrap_err();
    assert_eq!(
        err,
        TaskValidationError::InvalidTaskData {
            field: "priority",
            value: "urgent".to_string(),
        }
    );
    assert!(err.to_string().contains("priority"));
}

#[test]
fn malformed_timestamp_names_the_wire_field() {
    let record: TaskRecord = serde_json::from_value(record_json(
        "x",
        "high",
        "2026-03-02T10:00:00Z",
        "yesterday",
    ))
    .unwrap();

    match Task::try_from(record).unwrap_err() {
        TaskValidationError::InvalidTaskData { field, value } => {
            assert_eq!(field, "createdAt");
            assert_eq!(value, "yesterday");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn batch_conversion_stops_at_first_invalid_record() {
    let created = "2026-02-28T09:00:00Z";
    let records: Vec<TaskRecord> = serde_json::from_value(json!([
        record_json("ok", "low", "2026-03-02T10:00:00Z", created),
        record_json("bad", "critical", "2026-03-02T10:00:00Z", created),
    ]))
    .unwrap();

    assert!(matches!(
        tasks_from_records(records),
        Err(TaskValidationError::InvalidTaskData { field: "priority", .. })
    ));
}

#[test]
fn deadlines_compare_as_instants_across_offsets() {
    // 11:30+02:00 is 09:30Z, earlier than 10:00Z.
    let created = "2026-02-28T09:00:00Z";
    let records: Vec<TaskRecord> = serde_json::from_value(json!([
        record_json("utc", "high", "2026-03-02T10:00:00Z", created),
        record_json("cest", "high", "2026-03-02T11:30:00+02:00", created),
    ]))
    .unwrap();
    let tasks = tasks_from_records(records).unwrap();

    let ordered: Vec<&str> = order_tasks(&tasks)
        .into_iter()
        .map(|task| task.id.as_str())
        .collect();
    assert_eq!(ordered, vec!["cest", "utc"]);
}
