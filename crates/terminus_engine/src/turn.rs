//! Turn resolution: typed input on a screen, against a state token.
//!
//! This is the whole request path minus transport. The screen is looked up,
//! the input is matched against its commands, and the matched command's item
//! rules are applied to the decoded state.
//!
//! Gameplay outcomes (no such command, a missing item) are ordinary
//! [`TurnOutcome`] values. Only a bad request is a [`TurnError`].

use terminus_foundation::{ClientGameState, CommandAction, ScreenId};
use terminus_storage::ScreenLookup;
use terminus_text::find_equivalent_command;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::codec::{decode, encode};
use crate::effect::{CommandEffect, effect_on};
use crate::error::{EffectError, StateDecodeError};

/// Message shown when no command matches.
pub const UNKNOWN_COMMAND_MESSAGE: &str = "Invalid or unknown command.";

/// Message shown when a required or taken item is not held.
pub const MISSING_ITEM_MESSAGE: &str = "You lack a required item.";

/// Player-facing messages for gameplay failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Messages {
    /// Shown when no command on the screen matches the input.
    pub unknown_command: String,
    /// Shown when the command's item rules are not met.
    pub missing_item: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            unknown_command: UNKNOWN_COMMAND_MESSAGE.to_string(),
            missing_item: MISSING_ITEM_MESSAGE.to_string(),
        }
    }
}

/// A request that could not be served.
#[derive(Debug, Error)]
pub enum TurnError {
    /// The current screen does not exist.
    #[error("screen not found: {0}")]
    ScreenNotFound(ScreenId),

    /// The state token is malformed.
    #[error("invalid state: {0}")]
    BadState(#[from] StateDecodeError),
}

/// What happened on a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The command moved the player to another screen.
    Navigated {
        /// The destination screen.
        screen: ScreenId,
        /// The command's effect on the inventory.
        effect: CommandEffect,
    },
    /// The command printed a message.
    Printed {
        /// Message lines.
        lines: Vec<String>,
        /// The command's effect on the inventory.
        effect: CommandEffect,
    },
    /// No command on the screen matches the input.
    UnknownCommand {
        /// The caller's token, returned as received.
        state: String,
    },
    /// The command's item rules were not met; nothing changed.
    MissingItem {
        /// The caller's state, re-encoded.
        state: String,
    },
}

impl TurnOutcome {
    /// Returns true if a command ran.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Navigated { .. } | Self::Printed { .. })
    }

    /// Returns the state token the caller should keep.
    #[must_use]
    pub fn state(&self) -> &str {
        match self {
            Self::Navigated { effect, .. } | Self::Printed { effect, .. } => &effect.updated_state,
            Self::UnknownCommand { state } | Self::MissingItem { state } => state,
        }
    }

    /// Returns the inventory effect, if a command ran.
    #[must_use]
    pub fn effect(&self) -> Option<&CommandEffect> {
        match self {
            Self::Navigated { effect, .. } | Self::Printed { effect, .. } => Some(effect),
            Self::UnknownCommand { .. } | Self::MissingItem { .. } => None,
        }
    }

    /// Returns the failure message for gameplay failures.
    #[must_use]
    pub fn message<'a>(&self, messages: &'a Messages) -> Option<&'a str> {
        match self {
            Self::UnknownCommand { .. } => Some(&messages.unknown_command),
            Self::MissingItem { .. } => Some(&messages.missing_item),
            Self::Navigated { .. } | Self::Printed { .. } => None,
        }
    }
}

/// Returns the token for a player with an empty inventory.
#[must_use]
pub fn new_game_token() -> String {
    encode(&ClientGameState::new())
}

/// Resolves one turn of play.
///
/// # Errors
///
/// Returns [`TurnError::ScreenNotFound`] if `screen_id` is unknown and
/// [`TurnError::BadState`] if a matched command meets a malformed token.
#[instrument(skip(lookup, token), fields(screen = %screen_id))]
pub fn resolve_turn<L>(
    lookup: &L,
    screen_id: &ScreenId,
    raw_input: &str,
    token: &str,
) -> Result<TurnOutcome, TurnError>
where
    L: ScreenLookup + ?Sized,
{
    let screen = lookup
        .get_screen(screen_id)
        .ok_or_else(|| TurnError::ScreenNotFound(screen_id.clone()))?;

    let Some(command) = find_equivalent_command(screen, raw_input) else {
        debug!("no matching command");
        return Ok(TurnOutcome::UnknownCommand {
            state: token.to_string(),
        });
    };

    let state = decode(token)?;
    let effect = match effect_on(&state, command) {
        Ok(effect) => effect,
        Err(EffectError::MissingRequiredItem { item }) => {
            debug!(command = %command.id, item = %item, "command blocked");
            return Ok(TurnOutcome::MissingItem {
                state: encode(&state),
            });
        }
        Err(EffectError::StateDecode(e)) => return Err(TurnError::BadState(e)),
    };

    debug!(command = %command.id, "command applied");

    Ok(match &command.action {
        CommandAction::Navigate { target } => TurnOutcome::Navigated {
            screen: target.clone(),
            effect,
        },
        CommandAction::PrintMessage { lines } => TurnOutcome::Printed {
            lines: lines.clone(),
            effect,
        },
    })
}
