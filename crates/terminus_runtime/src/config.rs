//! Configuration for a play session.

use terminus_engine::Messages;
use terminus_foundation::Limits;

/// Environment variable holding the default log filter.
pub const LOG_ENV_VAR: &str = "TERMINUS_LOG";

/// Configuration for loading and playing an adventure.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Player-facing failure messages.
    pub messages: Messages,

    /// Authoring limits applied when loading adventures.
    pub limits: Limits,

    /// `tracing` filter directive (e.g. `"warn"`, `"terminus_engine=debug"`).
    pub log_filter: String,

    /// Prompt shown before each command.
    pub prompt: String,

    /// Whether to print inventory changes after each command.
    pub show_item_changes: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            messages: Messages::default(),
            limits: Limits::default(),
            log_filter: "warn".to_string(),
            prompt: "> ".to_string(),
            show_item_changes: true,
        }
    }
}

impl GameConfig {
    /// Creates the default configuration, taking the log filter from
    /// `TERMINUS_LOG` when it is set.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(LOG_ENV_VAR) {
            Ok(filter) if !filter.trim().is_empty() => config.with_log_filter(filter.trim()),
            _ => config,
        }
    }

    /// Builder method to set the unknown-command message.
    #[must_use]
    pub fn with_unknown_command_message(mut self, message: impl Into<String>) -> Self {
        self.messages.unknown_command = message.into();
        self
    }

    /// Builder method to set the missing-item message.
    #[must_use]
    pub fn with_missing_item_message(mut self, message: impl Into<String>) -> Self {
        self.messages.missing_item = message.into();
        self
    }

    /// Builder method to set authoring limits.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Builder method to set the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to show or hide inventory changes.
    #[must_use]
    pub fn with_item_changes(mut self, show: bool) -> Self {
        self.show_item_changes = show;
        self
    }
}
