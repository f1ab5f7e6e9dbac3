//! Applying a command's item rules to the player's state.
//!
//! The rules run in a fixed order, and any failure aborts the whole command:
//!
//! 1. Every required item must be held.
//! 2. Every taken item is removed, one occurrence each.
//! 3. Every given item is added, unless limited and already held.
//!
//! Work happens on a copy of the inventory, so a failed command leaves the
//! caller's state exactly as it was.

use terminus_foundation::{ClientGameState, Command};
use terminus_text::{contains_equivalent, position_of_equivalent};
use tracing::{debug, warn};

use crate::codec::{decode, encode};
use crate::error::EffectError;

/// Result of applying a command to a decoded state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedEffects {
    /// The state after the command.
    pub state: ClientGameState,
    /// Items added, spelled as the command spells them.
    pub items_added: Vec<String>,
    /// Items removed, spelled as the inventory held them.
    pub items_removed: Vec<String>,
}

/// Result of applying a command to a state token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandEffect {
    /// The re-encoded state token.
    pub updated_state: String,
    /// Items added, in processing order.
    pub items_added: Vec<String>,
    /// Items removed, in processing order.
    pub items_removed: Vec<String>,
}

/// Applies a command's item rules to a decoded state.
///
/// # Errors
///
/// Returns [`EffectError::MissingRequiredItem`] if a required or taken item is
/// not held. `state` is never modified.
pub fn apply_effects(
    state: &ClientGameState,
    command: &Command,
) -> Result<AppliedEffects, EffectError> {
    if let Some(missing) = command
        .items_required
        .iter()
        .find(|item| !contains_equivalent(&state.inventory, item))
    {
        debug!(command = %command.id, item = %missing, "required item not held");
        return Err(EffectError::MissingRequiredItem {
            item: missing.clone(),
        });
    }

    let mut inventory = state.inventory.clone();

    let mut items_removed = Vec::with_capacity(command.items_taken.len());
    for item in &command.items_taken {
        let Some(index) = position_of_equivalent(&inventory, item) else {
            debug!(command = %command.id, item = %item, "taken item not held");
            return Err(EffectError::MissingRequiredItem { item: item.clone() });
        };
        items_removed.push(inventory.remove(index));
    }

    let mut items_added = Vec::with_capacity(command.items_given.len());
    for item in &command.items_given {
        if command.limit_items_given && contains_equivalent(&inventory, item) {
            continue;
        }
        inventory.push_back(item.clone());
        items_added.push(item.clone());
    }

    debug!(
        command = %command.id,
        added = items_added.len(),
        removed = items_removed.len(),
        "applied command effects"
    );

    Ok(AppliedEffects {
        state: ClientGameState { inventory },
        items_added,
        items_removed,
    })
}

/// Decodes a state token, applies the command, and re-encodes the result.
///
/// # Errors
///
/// Returns [`EffectError::StateDecode`] for a malformed token, and
/// [`EffectError::MissingRequiredItem`] if the command's item rules fail.
pub fn apply_command(encoded_state: &str, command: &Command) -> Result<CommandEffect, EffectError> {
    let state = decode(encoded_state).inspect_err(|e| {
        warn!(command = %command.id, error = %e, "rejected state token");
    })?;

    effect_on(&state, command)
}

/// Applies a command to a decoded state and encodes the result.
///
/// # Errors
///
/// Returns [`EffectError::MissingRequiredItem`] if the command's item rules
/// fail.
pub fn effect_on(
    state: &ClientGameState,
    command: &Command,
) -> Result<CommandEffect, EffectError> {
    let applied = apply_effects(state, command)?;

    Ok(CommandEffect {
        updated_state: encode(&applied.state),
        items_added: applied.items_added,
        items_removed: applied.items_removed,
    })
}
