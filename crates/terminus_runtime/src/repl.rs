//! The play REPL.

use crate::config::GameConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::{Session, TurnReport};
use terminus_foundation::{Error, Result};
use std::io::{self, Write};

/// The interactive play loop.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (screen, token).
    session: Session,

    /// Prompt and display settings.
    config: GameConfig,

    /// Whether to show the opening screen.
    show_banner: bool,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session, config: GameConfig) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, session: Session, config: GameConfig) -> Self {
        editor.set_completions(session.command_texts());
        Self {
            editor,
            session: session.with_messages(config.messages.clone()),
            config,
            show_banner: true,
        }
    }

    /// Disables the opening screen.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.config.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }
        if matches!(trimmed, ":quit" | ":q") {
            return Ok(false);
        }

        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
            }
            Err(e) => self.print_error(&e),
        }

        Ok(true)
    }

    /// Evaluates one line of input and returns the lines to print.
    ///
    /// Lines starting with `:` are REPL commands; everything else is a game
    /// command for the current screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot resolve the turn.
    pub fn eval(&mut self, input: &str) -> Result<Vec<String>> {
        let trimmed = input.trim();
        match trimmed {
            ":look" | ":l" => return Ok(self.session.current_screen()?.body.clone()),
            ":inventory" | ":i" => return self.inventory_lines(),
            ":state" => return Ok(vec![self.session.token().to_string()]),
            ":help" | ":h" => return Ok(help_lines()),
            _ => {}
        }

        let report = self.session.submit(input)?;
        if report.moved {
            self.editor.set_completions(self.session.command_texts());
        }
        Ok(self.format_report(report))
    }

    fn inventory_lines(&self) -> Result<Vec<String>> {
        let state = self.session.state()?;
        if state.is_empty() {
            return Ok(vec!["You are carrying nothing.".to_string()]);
        }
        Ok(state.items().map(|item| format!("  {item}")).collect())
    }

    fn format_report(&self, report: TurnReport) -> Vec<String> {
        let mut lines = report.lines;
        if self.config.show_item_changes {
            lines.extend(report.items_removed.iter().map(|item| format!("- {item}")));
            lines.extend(report.items_added.iter().map(|item| format!("+ {item}")));
        }
        lines
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the opening screen.
    fn print_banner(&self) {
        println!("Terminus v{}", env!("CARGO_PKG_VERSION"));
        println!("Type :help for REPL commands. Use Ctrl+D to exit.\n");
        if let Ok(screen) = self.session.current_screen() {
            for line in &screen.body {
                println!("{line}");
            }
        }

        let _ = io::stdout().flush();
    }
}

fn help_lines() -> Vec<String> {
    [
        ":look, :l        Show the current screen again",
        ":inventory, :i   List carried items",
        ":state           Print the current state token",
        ":help, :h        Show this help",
        ":quit, :q        Leave the game",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}
