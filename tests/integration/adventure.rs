//! Loading and exporting adventure documents

use terminus_foundation::{ErrorKind, Limits, ScreenId};
use terminus_runtime::{export_adventure, load_adventure, parse_adventure};

use crate::GYM;

#[test]
fn prose_bodies_are_wrapped_to_width() {
    let graph = parse_adventure(GYM, &Limits::default().with_body_line_width(40)).unwrap();
    let gym = graph.screen(&ScreenId::new("gym")).unwrap();
    assert!(gym.body.len() > 1);
    assert!(gym.body.iter().all(|line| line.chars().count() <= 40));
}

#[test]
fn export_round_trips_through_files() {
    let graph = parse_adventure(GYM, &Limits::default()).unwrap();
    let path = std::env::temp_dir().join("terminus_integration_gym.json");
    std::fs::write(&path, export_adventure(&graph).unwrap()).unwrap();

    let loaded = load_adventure(&path, &Limits::default()).unwrap();
    assert_eq!(loaded, graph);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn load_errors_name_the_file() {
    let path = std::env::temp_dir().join("terminus_integration_broken.json");
    std::fs::write(&path, r#"{ "screens": [ { "id": "a" } ] }"#).unwrap();

    let err = load_adventure(&path, &Limits::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SerializationError(_)));
    let context = err.context_display().unwrap();
    assert!(context.contains("terminus_integration_broken.json"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn bad_item_names_are_rejected_on_load() {
    let json = r#"{ "screens": [ { "id": "a", "body": ["A."], "commands": [
        { "command": "grab", "type": "printMessage", "printMessage": ["Ok."],
          "itemsGiven": ["   "] } ] } ] }"#;
    let err = parse_adventure(json, &Limits::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidItemName { .. }));
}
