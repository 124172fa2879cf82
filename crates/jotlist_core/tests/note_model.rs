use jotlist_core::Note;
use uuid::Uuid;

#[test]
fn note_new_sets_defaults() {
    let note = Note::new("Buy milk", "2 liters");

    assert!(!note.id.is_nil());
    assert_eq!(note.title, "Buy milk");
    assert_eq!(note.content, "2 liters");
    assert!(!note.is_completed);
}

#[test]
fn note_new_generates_unique_ids() {
    let first = Note::new("a", "");
    let second = Note::new("b", "");

    assert_ne!(first.id, second.id);
}

#[test]
fn toggle_completion_twice_restores_original_state() {
    let mut note = Note::new("task", "");

    note.toggle_completion();
    assert!(note.is_completed);

    note.toggle_completion();
    assert!(!note.is_completed);
}

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let note_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut note = Note::with_id(note_id, "Call Bob", "about the invoice");
    note.is_completed = true;

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], note_id.to_string());
    assert_eq!(json["title"], "Call Bob");
    assert_eq!(json["content"], "about the invoice");
    assert_eq!(json["isCompleted"], true);

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn note_serialization_keeps_storage_field_order() {
    let note_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let note = Note::with_id(note_id, "t", "c");

    let json = serde_json::to_string(&note).unwrap();
    assert_eq!(
        json,
        format!(r#"{{"id":"{note_id}","title":"t","content":"c","isCompleted":false}}"#)
    );
}
