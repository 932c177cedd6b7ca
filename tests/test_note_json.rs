use anyhow::Result;
use notewire::domain::Note;

#[test]
fn given_literal_record_when_round_tripping_then_fields_are_unchanged() -> Result<()> {
    // Arrange
    let json = r#"{"id": "1", "body": "hi", "keywords": null, "reference": null}"#;

    // Act
    let note: Note = serde_json::from_str(json)?;

    // Assert
    assert_eq!(note.id.as_deref(), Some("1"));
    assert_eq!(note.body, "hi");
    assert_eq!(note.keywords, None);
    assert_eq!(note.reference, None);
    Ok(())
}

#[test]
fn given_server_json_with_missing_fields_when_deserializing_then_defaults_apply() -> Result<()> {
    // Arrange
    let json = r#"{"id": "9"}"#;

    // Act
    let note: Note = serde_json::from_str(json)?;

    // Assert
    assert_eq!(note.id.as_deref(), Some("9"));
    assert_eq!(note.title, "");
    assert_eq!(note.body, "");
    assert_eq!(note.keywords, None);
    assert_eq!(note.reference, None);
    Ok(())
}

#[test]
fn given_empty_string_keywords_when_deserializing_then_normalized_to_null() -> Result<()> {
    // Arrange
    let json = r#"{"body": "hi", "keywords": "", "reference": ""}"#;

    // Act
    let note: Note = serde_json::from_str(json)?;

    // Assert
    assert_eq!(note.keywords, None);
    assert_eq!(note.reference, None);
    Ok(())
}

#[test]
fn given_unsaved_note_when_serializing_then_id_key_is_absent() -> Result<()> {
    // Arrange
    let note = Note::new();

    // Act
    let json = serde_json::to_string(&note)?;

    // Assert
    assert!(!json.contains(r#""id""#));
    assert!(json.contains(r#""title":"""#));
    assert!(json.contains(r#""keywords":null"#));
    Ok(())
}

#[test]
fn given_saved_note_when_serializing_then_id_is_present() -> Result<()> {
    // Arrange
    let mut note = Note::new();
    note.assign_id("abc")?;

    // Act
    let json = serde_json::to_string(&note)?;

    // Assert
    assert!(json.contains(r#""id":"abc""#));
    Ok(())
}
