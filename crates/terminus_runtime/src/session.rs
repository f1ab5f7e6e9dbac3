//! Play session state.
//!
//! A session is the client side of the game: it remembers which screen the
//! player is on and the latest state token, and feeds both back into
//! [`resolve_turn`] on every command.

use terminus_engine::{Messages, TurnError, TurnOutcome, decode, new_game_token, resolve_turn};
use terminus_foundation::{ClientGameState, Error, ErrorKind, Result, Screen, ScreenId};
use terminus_storage::ScreenGraph;

/// What the player sees after a command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    /// Lines to display: a screen body, a message, or a failure message.
    pub lines: Vec<String>,
    /// Items gained.
    pub items_added: Vec<String>,
    /// Items lost.
    pub items_removed: Vec<String>,
    /// Whether the player moved to another screen.
    pub moved: bool,
}

/// Session state for one player.
pub struct Session {
    /// The adventure being played.
    graph: ScreenGraph,

    /// The screen the player is on.
    screen: ScreenId,

    /// The latest state token.
    token: String,

    /// Failure messages.
    messages: Messages,
}

fn from_turn_error(err: TurnError) -> Error {
    match err {
        TurnError::ScreenNotFound(id) => Error::screen_not_found(id),
        TurnError::BadState(e) => Error::serialization(format!("invalid state token: {e}")),
    }
}

impl Session {
    /// Starts a new game at the graph's start screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph has no start screen.
    pub fn new(graph: ScreenGraph) -> Result<Self> {
        let screen = graph.start().cloned().ok_or_else(Error::no_start_screen)?;
        Ok(Self {
            graph,
            screen,
            token: new_game_token(),
            messages: Messages::default(),
        })
    }

    /// Builder method to set failure messages.
    #[must_use]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Resumes from a previously issued state token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token does not decode.
    pub fn with_state(mut self, token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        decode(&token).map_err(|e| Error::serialization(format!("invalid state token: {e}")))?;
        self.token = token;
        Ok(self)
    }

    /// Moves the player to a given screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the screen does not exist.
    pub fn at_screen(mut self, id: ScreenId) -> Result<Self> {
        if self.graph.screen(&id).is_none() {
            return Err(Error::screen_not_found(id));
        }
        self.screen = id;
        Ok(self)
    }

    /// Returns the adventure graph.
    #[must_use]
    pub fn graph(&self) -> &ScreenGraph {
        &self.graph
    }

    /// Returns the id of the current screen.
    #[must_use]
    pub fn screen_id(&self) -> &ScreenId {
        &self.screen
    }

    /// Returns the current screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the current screen is missing from the graph.
    pub fn current_screen(&self) -> Result<&Screen> {
        self.graph
            .screen(&self.screen)
            .ok_or_else(|| Error::screen_not_found(self.screen.clone()))
    }

    /// Returns the latest state token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Decodes the latest state.
    ///
    /// # Errors
    ///
    /// Returns an error if the token does not decode.
    pub fn state(&self) -> Result<ClientGameState> {
        decode(&self.token).map_err(|e| Error::serialization(format!("invalid state token: {e}")))
    }

    /// Returns the command texts of the current screen.
    #[must_use]
    pub fn command_texts(&self) -> Vec<String> {
        self.graph
            .screen(&self.screen)
            .map(|screen| screen.commands.iter().map(|c| c.text.clone()).collect())
            .unwrap_or_default()
    }

    /// Submits one command.
    ///
    /// Gameplay failures are reported in the returned lines and leave the
    /// session unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the current screen is gone or the token is bad.
    pub fn submit(&mut self, input: &str) -> Result<TurnReport> {
        let outcome =
            resolve_turn(&self.graph, &self.screen, input, &self.token).map_err(from_turn_error)?;

        if let Some(message) = outcome.message(&self.messages) {
            return Ok(TurnReport {
                lines: vec![message.to_string()],
                ..TurnReport::default()
            });
        }

        self.token = outcome.state().to_string();
        let (lines, moved, effect) = match outcome {
            TurnOutcome::Navigated { screen, effect } => {
                self.screen = screen;
                (self.current_screen()?.body.clone(), true, effect)
            }
            TurnOutcome::Printed { lines, effect } => (lines, false, effect),
            TurnOutcome::UnknownCommand { .. } | TurnOutcome::MissingItem { .. } => {
                return Err(Error::new(ErrorKind::Internal(
                    "gameplay failure without a message".to_string(),
                )));
            }
        };

        Ok(TurnReport {
            lines,
            items_added: effect.items_added,
            items_removed: effect.items_removed,
            moved,
        })
    }
}
