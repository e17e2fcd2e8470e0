use quickdo_core::{Task, TaskId, TaskValidationError};

#[test]
fn new_task_sets_defaults() {
    let task = Task::new("buy milk");

    assert!(!task.id.as_str().is_empty());
    assert_eq!(task.text, "buy milk");
    assert!(!task.is_completed);
}

#[test]
fn generated_ids_are_unique() {
    let first = Task::new("a");
    let second = Task::new("a");

    assert_ne!(first.id, second.id);
}

#[test]
fn with_id_accepts_opaque_non_uuid_ids() {
    let task = Task::with_id("1", "x").unwrap();
    assert_eq!(task.id, TaskId::from("1"));
}

#[test]
fn with_id_rejects_empty_id() {
    let err = Task::with_id("", "x").unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyId);
}

#[test]
fn toggle_flips_completion_both_ways() {
    let mut task = Task::new("flip me");

    task.toggle();
    assert!(task.is_completed);

    task.toggle();
    assert!(!task.is_completed);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let mut task = Task::with_id("11111111-2222-4333-8444-555555555555", "water plants").unwrap();
    task.is_completed = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["text"], "water plants");
    assert_eq!(json["isCompleted"], true);
    assert_eq!(json.as_object().unwrap().len(), 3);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialization_rejects_missing_wire_fields() {
    let missing_completed = serde_json::json!({ "id": "1", "text": "x" });
    assert!(serde_json::from_value::<Task>(missing_completed).is_err());

    let missing_text = serde_json::json!({ "id": "1", "isCompleted": false });
    assert!(serde_json::from_value::<Task>(missing_text).is_err());

    let snake_case_completed = serde_json::json!({
        "id": "1",
        "text": "x",
        "is_completed": true
    });
    assert!(serde_json::from_value::<Task>(snake_case_completed).is_err());
}
