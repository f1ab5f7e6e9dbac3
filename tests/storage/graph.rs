//! Integration tests for screen graph state management
//!
//! Tests graph immutability, start screens, inserts, and link validation.

use terminus_foundation::{Command, ErrorKind, Limits, Screen, ScreenId};
use terminus_storage::{ScreenGraph, ScreenLookup};

fn body(text: &str) -> Vec<String> {
    vec![text.to_string()]
}

// =============================================================================
// Graph Creation
// =============================================================================

#[test]
fn graph_starts_empty() {
    let graph = ScreenGraph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.start(), None);
}

#[test]
fn first_screen_becomes_start() {
    let (graph, first) = ScreenGraph::new().add_screen(body("First.")).unwrap();
    let (graph, _) = graph.add_screen(body("Second.")).unwrap();
    assert_eq!(graph.start(), Some(&first));
    assert_eq!(graph.len(), 2);
}

#[test]
fn start_can_be_moved() {
    let (graph, _) = ScreenGraph::new().add_screen(body("First.")).unwrap();
    let (graph, second) = graph.add_screen(body("Second.")).unwrap();
    let graph = graph.set_start(second.clone()).unwrap();
    assert_eq!(graph.start(), Some(&second));
}

#[test]
fn start_must_exist() {
    let err = ScreenGraph::new()
        .set_start(ScreenId::new("nowhere"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ScreenNotFound(_)));
}

// =============================================================================
// Immutability
// =============================================================================

#[test]
fn add_screen_returns_new_graph() {
    let graph1 = ScreenGraph::new();
    let (graph2, id) = graph1.add_screen(body("A cave.")).unwrap();

    assert!(graph1.screen(&id).is_none());
    assert!(graph2.screen(&id).is_some());
}

#[test]
fn failed_insert_leaves_graph_unchanged() {
    let (graph, id) = ScreenGraph::new().add_screen(body("A cave.")).unwrap();
    let err = graph
        .insert_screen(Screen::new(id.clone(), body("Another cave.")))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateScreen(_)));
    assert_eq!(graph.screen(&id).unwrap().body, body("A cave."));
}

// =============================================================================
// Insert Validation
// =============================================================================

#[test]
fn insert_rejects_equivalent_commands() {
    let mut screen = Screen::new(ScreenId::new("hall"), body("A hall."));
    screen
        .commands
        .push(Command::navigate("go north", ScreenId::new("hall")));
    screen
        .commands
        .push(Command::navigate("GO  NORTH", ScreenId::new("hall")));

    let err = ScreenGraph::new().insert_screen(screen).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateCommand { .. }));
}

#[test]
fn insert_rejects_wide_body() {
    let graph = ScreenGraph::new().with_limits(Limits::default().with_body_line_width(8));
    let screen = Screen::new(ScreenId::new("hall"), body("A very long hall."));
    let err = graph.insert_screen(screen).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::BodyLineTooWide { .. }));
    assert!(err.context.is_some());
}

#[test]
fn insert_rejects_bad_item_names() {
    let mut screen = Screen::new(ScreenId::new("hall"), body("A hall."));
    screen.commands.push(
        Command::print_message("search", body("Dust.")).giving(["rope, lamp"]),
    );
    let err = ScreenGraph::new().insert_screen(screen).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidItemName { .. }));
}

// =============================================================================
// Links
// =============================================================================

#[test]
fn forward_references_resolve_once_inserted() {
    let mut hall = Screen::new(ScreenId::new("hall"), body("A hall."));
    hall.commands
        .push(Command::navigate("enter", ScreenId::new("vault")));

    let graph = ScreenGraph::new().insert_screen(hall).unwrap();
    assert_eq!(
        graph.dangling_targets(),
        vec![(ScreenId::new("hall"), ScreenId::new("vault"))]
    );
    assert!(graph.validate_links().is_err());

    let graph = graph
        .insert_screen(Screen::new(ScreenId::new("vault"), body("Gold.")))
        .unwrap();
    assert!(graph.dangling_targets().is_empty());
    assert!(graph.validate_links().is_ok());
}

#[test]
fn graph_is_a_screen_lookup() {
    let (graph, id) = ScreenGraph::new().add_screen(body("A cave.")).unwrap();
    let lookup: &dyn ScreenLookup = &graph;
    assert_eq!(lookup.get_screen(&id).unwrap().body, body("A cave."));
    assert!(lookup.get_screen(&ScreenId::new("missing")).is_none());
}
