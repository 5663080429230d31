//! Tests for the Suggestion record

use super::*;

#[test]
fn test_deserializes_name_and_app_id() {
    let json = r#"[{"name":"Half-Life","app_id":70}]"#;
    let suggestions: Vec<Suggestion> = serde_json::from_str(json).unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].name, "Half-Life");
    assert_eq!(suggestions[0].app_id, 70);
}

#[test]
fn test_extra_fields_are_ignored() {
    // The endpoint promises at least name and app_id; more is fine
    let json = r#"[{"name":"Portal","app_id":400,"review_count":12345}]"#;
    let suggestions: Vec<Suggestion> = serde_json::from_str(json).unwrap();

    assert_eq!(suggestions[0].name, "Portal");
    assert_eq!(suggestions[0].app_id, 400);
}

#[test]
fn test_missing_app_id_is_an_error() {
    let json = r#"[{"name":"Portal"}]"#;
    let result: Result<Vec<Suggestion>, _> = serde_json::from_str(json);

    assert!(result.is_err());
}

#[test]
fn test_label_format() {
    let suggestion = Suggestion {
        name: "Half-Life".to_string(),
        app_id: 70,
    };

    assert_eq!(suggestion.label(), "Half-Life (App ID: 70)");
}

#[test]
fn test_order_is_preserved() {
    let json = r#"[
        {"name":"Half-Life 2","app_id":220},
        {"name":"Half-Life","app_id":70},
        {"name":"Half-Life: Alyx","app_id":546560}
    ]"#;
    let suggestions: Vec<Suggestion> = serde_json::from_str(json).unwrap();

    let ids: Vec<u64> = suggestions.iter().map(|s| s.app_id).collect();
    assert_eq!(ids, vec![220, 70, 546560]);
}
