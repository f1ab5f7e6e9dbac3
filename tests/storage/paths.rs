//! Integration tests for path authoring

use terminus_foundation::{CommandAction, ErrorKind, Limits, ScreenId};
use terminus_storage::{NewPath, ScreenGraph};

fn body(text: &str) -> Vec<String> {
    vec![text.to_string()]
}

fn start() -> (ScreenGraph, ScreenId) {
    ScreenGraph::new()
        .add_screen(body("You stand at a crossroads."))
        .unwrap()
}

// =============================================================================
// Targets
// =============================================================================

#[test]
fn new_screen_target_creates_screen() {
    let (graph, from) = start();
    let (graph, added) = graph
        .add_path(&from, NewPath::to_new_screen("go east", body("A river.")))
        .unwrap();

    let created = added.screen.unwrap();
    assert_eq!(graph.screen(&created).unwrap().body, body("A river."));

    let command = graph.screen(&from).unwrap().command(&added.command).unwrap();
    assert_eq!(command.target(), Some(&created));
}

#[test]
fn existing_target_links_back() {
    let (graph, from) = start();
    let (graph, added) = graph
        .add_path(&from, NewPath::to_new_screen("go east", body("A river.")))
        .unwrap();
    let river = added.screen.unwrap();

    let (graph, back) = graph
        .add_path(&river, NewPath::to_existing("go west", from.clone()))
        .unwrap();
    assert!(back.screen.is_none());
    assert_eq!(graph.len(), 2);
    assert!(graph.validate_links().is_ok());
}

#[test]
fn missing_existing_target_is_rejected() {
    let (graph, from) = start();
    let err = graph
        .add_path(&from, NewPath::to_existing("go up", ScreenId::new("sky")))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ScreenNotFound(_)));
}

#[test]
fn message_target_prints() {
    let (graph, from) = start();
    let (graph, added) = graph
        .add_path(&from, NewPath::message("read sign", body("West: river.")))
        .unwrap();
    let command = graph.screen(&from).unwrap().command(&added.command).unwrap();
    assert!(matches!(
        &command.action,
        CommandAction::PrintMessage { lines } if lines == &body("West: river.")
    ));
}

// =============================================================================
// Item Rules
// =============================================================================

#[test]
fn item_rules_are_stored() {
    let (graph, from) = start();
    let (graph, added) = graph
        .add_path(
            &from,
            NewPath::message("trade", body("Done."))
                .requiring(["Ticket"])
                .taking(["Coin"])
                .giving(["Map"])
                .limit_given(true),
        )
        .unwrap();
    let command = graph.screen(&from).unwrap().command(&added.command).unwrap();
    assert_eq!(command.items_required, vec!["Ticket"]);
    assert_eq!(command.items_taken, vec!["Coin"]);
    assert_eq!(command.items_given, vec!["Map"]);
    assert!(command.limit_items_given);
}

#[test]
fn too_many_items_are_rejected() {
    let (graph, from) = start();
    let graph = graph.with_limits(Limits::default().with_items_per_list(2));
    let err = graph
        .add_path(
            &from,
            NewPath::message("loot", body("So much.")).giving(["a", "b", "c"]),
        )
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidItemName { .. }));
}

// =============================================================================
// Duplicates
// =============================================================================

#[test]
fn equivalent_command_is_rejected() {
    let (graph, from) = start();
    let (graph, _) = graph
        .add_path(&from, NewPath::message("read sign", body("West: river.")))
        .unwrap();
    let err = graph
        .add_path(&from, NewPath::message("READ   Sign", body("Again.")))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateCommand { .. }));
}

#[test]
fn failed_path_creates_nothing() {
    let (graph, from) = start();
    let err = graph.add_path(
        &from,
        NewPath::to_new_screen("", body("A river.")),
    );
    assert!(err.is_err());
    assert_eq!(graph.len(), 1);
    assert!(graph.screen(&from).unwrap().commands.is_empty());
}
