//! Integration tests for item equivalence

use terminus_foundation::Inventory;
use terminus_text::{contains_equivalent, items_equivalent, position_of_equivalent};

fn inventory(items: &[&str]) -> Inventory {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn case_and_outer_spacing_are_ignored() {
    assert!(items_equivalent("Golden Staff", "golden staff"));
    assert!(items_equivalent(" Key of Goldenrod ", "KEY OF GOLDENROD"));
}

#[test]
fn different_items_differ() {
    assert!(!items_equivalent("Thunder Badge", "Cascade Badge"));
    assert!(!items_equivalent("Key", "Keys"));
}

#[test]
fn equivalence_is_symmetric() {
    for (a, b) in [("Lamp", "LAMP"), ("ﬁre opal", "Fire Opal"), ("rope", "Rope ")] {
        assert_eq!(items_equivalent(a, b), items_equivalent(b, a));
    }
}

#[test]
fn position_finds_first_holder() {
    let held = inventory(&["Rope", "Lamp", "lamp"]);
    assert_eq!(position_of_equivalent(&held, "LAMP"), Some(1));
    assert_eq!(position_of_equivalent(&held, "Torch"), None);
}

#[test]
fn contains_uses_equivalence() {
    let held = inventory(&["Thunder Badge"]);
    assert!(contains_equivalent(&held, "thunder badge"));
    assert!(!contains_equivalent(&held, "badge"));
    assert!(!contains_equivalent(&Inventory::new(), "thunder badge"));
}
