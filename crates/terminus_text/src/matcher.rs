//! Matching typed input against a screen's commands.

use terminus_foundation::{Command, Screen};

use crate::normalize::normalize_for_comparison;

/// Returns true if two command texts are equivalent.
///
/// Equivalent texts have the same number of tokens and every token pair has
/// the same collation key. Extra whitespace between tokens does not matter,
/// but whitespace inside a word does: `"h e l l o"` is five tokens.
#[must_use]
pub fn commands_equivalent(a: &str, b: &str) -> bool {
    let a = normalize_for_comparison(a);
    !a.is_empty() && a == normalize_for_comparison(b)
}

/// Finds the command on `screen` equivalent to the raw input.
///
/// Returns the first match in creation order. Blank input never matches.
#[must_use]
pub fn find_equivalent_command<'a>(screen: &'a Screen, raw_input: &str) -> Option<&'a Command> {
    let input = normalize_for_comparison(raw_input);
    if input.is_empty() {
        return None;
    }
    screen
        .commands
        .iter()
        .find(|command| normalize_for_comparison(&command.text) == input)
}
