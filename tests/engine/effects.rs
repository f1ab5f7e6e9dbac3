//! Integration tests for command effects
//!
//! Tests the required/take/give rules, the give limit, and atomic failure.

use proptest::prelude::*;
use terminus_engine::{EffectError, apply_command, apply_effects, decode, encode};
use terminus_foundation::{ClientGameState, Command, ScreenId};

fn token(items: &[&str]) -> String {
    encode(&ClientGameState::with_items(items.iter().copied()))
}

fn items(token: &str) -> Vec<String> {
    decode(token).unwrap().items().map(String::from).collect()
}

fn walk() -> Command {
    Command::navigate("walk on", ScreenId::new("road"))
}

// =============================================================================
// Required Items
// =============================================================================

#[test]
fn required_item_missing_fails() {
    let command = walk().requiring(["Golden Staff"]);
    let err = apply_command(&token(&[]), &command).unwrap_err();
    assert!(matches!(err, EffectError::MissingRequiredItem { .. }));
    assert!(!err.is_client_error());
}

#[test]
fn failed_command_leaves_state_as_decoded() {
    let original = token(&["Torch"]);
    let state = decode(&original).unwrap();
    let command = walk().requiring(["Golden Staff"]).giving(["Gem"]);

    assert!(apply_effects(&state, &command).is_err());
    assert_eq!(encode(&state), original);
}

#[test]
fn required_items_are_not_consumed() {
    let command = walk().requiring(["golden staff"]);
    let effect = apply_command(&token(&["Golden Staff"]), &command).unwrap();
    assert_eq!(items(&effect.updated_state), vec!["Golden Staff"]);
    assert!(effect.items_added.is_empty());
    assert!(effect.items_removed.is_empty());
}

// =============================================================================
// Taking and Giving
// =============================================================================

#[test]
fn taken_item_is_removed() {
    let command = walk().taking(["Thunder Badge"]);
    let effect = apply_command(&token(&["Thunder Badge"]), &command).unwrap();
    assert!(items(&effect.updated_state).is_empty());
    assert_eq!(effect.items_removed, vec!["Thunder Badge"]);
}

#[test]
fn take_removes_one_copy_and_reports_held_spelling() {
    let command = walk().taking(["COIN"]);
    let effect = apply_command(&token(&["Rope", "coin", "Coin"]), &command).unwrap();
    assert_eq!(items(&effect.updated_state), vec!["Rope", "Coin"]);
    assert_eq!(effect.items_removed, vec!["coin"]);
}

#[test]
fn taking_missing_item_fails_whole_command() {
    let command = walk().taking(["Coin", "Ticket"]).giving(["Map"]);
    let err = apply_command(&token(&["Coin"]), &command).unwrap_err();
    assert!(matches!(
        err,
        EffectError::MissingRequiredItem { item } if item == "Ticket"
    ));
}

#[test]
fn given_items_append_in_order() {
    let command = walk().giving(["Map", "Compass"]);
    let effect = apply_command(&token(&["Rope"]), &command).unwrap();
    assert_eq!(items(&effect.updated_state), vec!["Rope", "Map", "Compass"]);
    assert_eq!(effect.items_added, vec!["Map", "Compass"]);
}

#[test]
fn unlimited_give_allows_duplicates() {
    let command = walk().giving(["Coin"]);
    let effect = apply_command(&token(&["Coin"]), &command).unwrap();
    assert_eq!(items(&effect.updated_state), vec!["Coin", "Coin"]);
}

#[test]
fn take_happens_before_give() {
    let command = walk().taking(["Key"]).giving(["Key"]).limit_given(true);
    let effect = apply_command(&token(&["Key"]), &command).unwrap();
    assert_eq!(items(&effect.updated_state), vec!["Key"]);
    assert_eq!(effect.items_removed, vec!["Key"]);
    assert_eq!(effect.items_added, vec!["Key"]);
}

// =============================================================================
// Limited Giving
// =============================================================================

#[test]
fn limited_give_skips_duplicates_in_list() {
    let command = walk()
        .giving(["Key of Goldenrod", "Key of Goldenrod"])
        .limit_given(true);
    let effect = apply_command(&token(&[]), &command).unwrap();
    assert_eq!(items(&effect.updated_state), vec!["Key of Goldenrod"]);
    assert_eq!(effect.items_added, vec!["Key of Goldenrod"]);
}

#[test]
fn limited_give_skips_equivalent_held_item() {
    let command = walk().giving(["key of goldenrod"]).limit_given(true);
    let effect = apply_command(&token(&["Key of Goldenrod"]), &command).unwrap();
    assert_eq!(items(&effect.updated_state), vec!["Key of Goldenrod"]);
    assert!(effect.items_added.is_empty());
}

// =============================================================================
// Bad Tokens
// =============================================================================

#[test]
fn bad_token_is_a_client_error() {
    let err = apply_command("not a token!", &walk()).unwrap_err();
    assert!(matches!(err, EffectError::StateDecode(_)));
    assert!(err.is_client_error());
}

proptest! {
    #[test]
    fn limited_give_is_idempotent(
        held in prop::collection::vec("[a-c]{1,2}", 0..6),
        given in prop::collection::vec("[a-c]{1,2}", 0..4),
    ) {
        let command = walk().giving(given).limit_given(true);
        let once = apply_command(&encode(&ClientGameState::with_items(held)), &command).unwrap();
        let twice = apply_command(&once.updated_state, &command).unwrap();
        prop_assert_eq!(&twice.updated_state, &once.updated_state);
        prop_assert!(twice.items_added.is_empty());
    }

    #[test]
    fn inventory_size_follows_reported_changes(
        held in prop::collection::vec("[a-c]", 0..6),
        taken in prop::collection::vec("[a-c]", 0..3),
        given in prop::collection::vec("[a-c]", 0..3),
    ) {
        let state = ClientGameState::with_items(held);
        let command = walk().taking(taken).giving(given);
        if let Ok(applied) = apply_effects(&state, &command) {
            prop_assert_eq!(
                applied.state.inventory.len(),
                state.inventory.len() + applied.items_added.len() - applied.items_removed.len()
            );
        }
    }
}
