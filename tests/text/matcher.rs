//! Integration tests for command matching

use terminus_foundation::{Command, Screen, ScreenId};
use terminus_text::{commands_equivalent, find_equivalent_command};

fn kennel() -> Screen {
    let mut screen = Screen::new(
        ScreenId::new("kennel"),
        vec!["A dog sleeps next to a bone.".to_string()],
    );
    screen.commands.push(Command::print_message(
        "look bone",
        vec!["It has been chewed.".to_string()],
    ));
    screen.commands.push(Command::navigate("leave", ScreenId::new("yard")));
    screen
}

// =============================================================================
// Equivalence
// =============================================================================

#[test]
fn extra_spacing_and_case_match() {
    assert!(commands_equivalent("LOOK   BONE", "look bone"));
}

#[test]
fn joined_words_do_not_match() {
    assert!(!commands_equivalent("lookbone", "look bone"));
}

#[test]
fn word_order_matters() {
    assert!(!commands_equivalent("bone look", "look bone"));
}

#[test]
fn blank_never_matches() {
    assert!(!commands_equivalent("", ""));
    assert!(!commands_equivalent("   ", " "));
}

// =============================================================================
// Lookup on a screen
// =============================================================================

#[test]
fn finds_command_by_raw_input() {
    let screen = kennel();
    let command = find_equivalent_command(&screen, "LOOK   BONE").unwrap();
    assert_eq!(command.text, "look bone");
}

#[test]
fn unknown_input_finds_nothing() {
    let screen = kennel();
    assert!(find_equivalent_command(&screen, "lookbone").is_none());
    assert!(find_equivalent_command(&screen, "").is_none());
    assert!(find_equivalent_command(&screen, "pet dog").is_none());
}

#[test]
fn returns_command_as_stored() {
    let screen = kennel();
    let command = find_equivalent_command(&screen, "Leave").unwrap();
    assert_eq!(command.target(), Some(&ScreenId::new("yard")));
}

#[test]
fn full_case_folding_matches() {
    let mut screen = Screen::new(ScreenId::new("gate"), vec!["A gate.".to_string()]);
    screen
        .commands
        .push(Command::navigate("follow the straße", ScreenId::new("road")));
    assert!(find_equivalent_command(&screen, "FOLLOW THE STRASSE").is_some());
}
