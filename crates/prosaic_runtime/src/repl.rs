//! The interactive REPL.
//!
//! Each complete input is parsed as a program and echoed back in the current
//! [`OutputFormat`]. Lines starting with `.` are REPL commands; a period can
//! never begin a statement, so they cannot clash with source text.

use std::fmt::Write as _;
use std::io::{self, Write};

use prosaic_foundation::{Error, Result};
use prosaic_language::{FrontendConfig, Parser};
use tracing::debug;

use crate::editor::{
    LineEditor, ReadResult, RustylineEditor, default_keywords, is_complete_with,
};
use crate::render::{OutputFormat, render};

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Parser shared by every input.
    parser: Parser,

    /// How parsed input is echoed.
    format: OutputFormat,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for multi-line input).
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E) -> Self {
        editor.set_keywords(default_keywords());
        Self {
            editor,
            parser: Parser::with_config(FrontendConfig::for_file("<repl>")),
            format: OutputFormat::default(),
            show_banner: true,
            prompt: "prose> ".to_string(),
            continuation_prompt: "  ...> ".to_string(),
        }
    }

    /// Replaces the parser configuration.
    #[must_use]
    pub fn with_config(mut self, config: FrontendConfig) -> Self {
        self.parser = Parser::with_config(config);
        self
    }

    /// Sets the initial output format.
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the current output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the line editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while let Some(input) = self.read_input()? {
            let trimmed = input.trim();
            if trimmed.is_empty() {
                continue;
            }
            self.editor.add_history(&input);

            match self.eval(trimmed) {
                Ok(output) => print!("{output}"),
                Err(e) => Self::print_error(&e),
            }
            let _ = io::stdout().flush();
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Reads a potentially multi-line input. Returns `None` at end of input.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let read = if first_line {
                self.editor.read_line(&self.prompt)?
            } else {
                self.editor.read_continuation(&self.continuation_prompt)?
            };

            match read {
                ReadResult::Line(line) => {
                    if !first_line {
                        input.push('\n');
                    }
                    input.push_str(&line);

                    if is_complete_with(&self.parser.config().classifier, &input) {
                        return Ok(Some(input));
                    }
                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("Input cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof if first_line => return Ok(None),
                ReadResult::Eof => {
                    return Err(Error::internal("unexpected end of input inside a statement"));
                }
            }
        }
    }

    /// Evaluates one complete input and returns what to print.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown command or input that does not parse.
    pub fn eval(&mut self, input: &str) -> Result<String> {
        if let Some(command) = input.strip_prefix('.') {
            return self.command(command.trim());
        }
        debug!(format = self.format.name(), "evaluating input");
        render(&self.parser, input, self.format)
    }

    fn command(&mut self, command: &str) -> Result<String> {
        match command {
            "help" => Ok(Self::help()),
            name => {
                self.format = name.parse()?;
                Ok(format!("output format: {}\n", self.format.name()))
            }
        }
    }

    fn help() -> String {
        let mut text = String::from("Enter statements to see them parsed. Commands:\n");
        for format in OutputFormat::ALL {
            let _ = writeln!(
                text,
                "  .{:<10} echo input as {}",
                format.name(),
                format.name()
            );
        }
        text.push_str("  .help       show this message\n");
        text
    }

    /// Prints an error to stderr.
    fn print_error(error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mProsaic\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type statements to parse them. Use .help for commands and Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}
