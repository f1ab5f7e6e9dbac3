//! The player's client-held game state.
//!
//! The server never stores this value. It arrives encoded with every
//! request and leaves re-encoded with every response.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered list of held item names. Duplicates are allowed.
///
/// Persistent so that a working copy can be mutated and discarded cheaply.
pub type Inventory = im::Vector<String>;

/// Everything the player carries between requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClientGameState {
    /// Held items, in the order they were acquired.
    pub inventory: Inventory,
}

impl ClientGameState {
    /// Creates an empty state for a new game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state holding the given items.
    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inventory: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    /// Iterates over held item names.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.inventory.iter().map(String::as_str)
    }
}
