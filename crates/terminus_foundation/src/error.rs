//! Error types for the Terminus system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::id::ScreenId;

/// Result type alias using the Terminus error type.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Terminus operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a screen not found error.
    #[must_use]
    pub fn screen_not_found(id: ScreenId) -> Self {
        Self::new(ErrorKind::ScreenNotFound(id))
    }

    /// Creates an error for an adventure with no start screen.
    #[must_use]
    pub fn no_start_screen() -> Self {
        Self::new(ErrorKind::NoStartScreen)
    }

    /// Creates an error for a command text that duplicates an existing one.
    #[must_use]
    pub fn duplicate_command(screen: ScreenId, command: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateCommand {
            screen,
            command: command.into(),
        })
    }

    /// Creates an invalid item name error.
    #[must_use]
    pub fn invalid_item_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidItemName {
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Creates an invalid command text error.
    #[must_use]
    pub fn invalid_command_text(text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCommandText {
            text: text.into(),
            reason: reason.into(),
        })
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationError(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoError(message.into()))
    }

    /// Returns the context frames formatted for display, if any.
    #[must_use]
    pub fn context_display(&self) -> Option<String> {
        self.context.as_ref().map(ToString::to_string)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No screen with this id exists.
    #[error("screen not found: {0}")]
    ScreenNotFound(ScreenId),

    /// The adventure has no start screen to play from.
    #[error("adventure has no start screen")]
    NoStartScreen,

    /// A screen with this id already exists.
    #[error("duplicate screen: {0}")]
    DuplicateScreen(ScreenId),

    /// The screen already has an equivalent command.
    #[error("screen {screen} already has a command equivalent to '{command}'")]
    DuplicateCommand {
        /// The screen the command was added to.
        screen: ScreenId,
        /// The rejected command text.
        command: String,
    },

    /// An item name failed validation.
    #[error("invalid item name '{name}': {reason}")]
    InvalidItemName {
        /// The rejected item name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A command text failed validation.
    #[error("invalid command '{text}': {reason}")]
    InvalidCommandText {
        /// The rejected command text.
        text: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A body or message line is wider than the display allows.
    #[error("line {line} is {width} columns wide (max {max})")]
    BodyLineTooWide {
        /// Zero-based line index.
        line: usize,
        /// Width of the offending line.
        width: usize,
        /// Configured maximum width.
        max: usize,
    },

    /// A screen body or message is structurally invalid.
    #[error("invalid screen body: {0}")]
    InvalidScreenBody(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// File or terminal I/O failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file the data came from.
    pub source: Option<String>,
    /// Screen being processed.
    pub screen: Option<ScreenId>,
    /// Trail of operations leading to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the screen being processed.
    #[must_use]
    pub fn with_screen(mut self, screen: ScreenId) -> Self {
        self.screen = Some(screen);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if let Some(screen) = &self.screen {
            if self.source.is_some() {
                write!(f, ", ")?;
            }
            write!(f, "screen {screen}")?;
        }
        for frame in &self.stack {
            write!(f, "\n  in {frame}")?;
        }
        Ok(())
    }
}
