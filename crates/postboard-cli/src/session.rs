#![forbid(unsafe_code)]

//! Line-oriented session over a mounted board.
//!
//! Each line is one command. Positions are zero-based display positions of
//! the current render and are resolved to post ids before dispatch, so a
//! command always targets what the last render showed.
//!
//! ```text
//! title <text>    set the title field
//! body <text>     set the body field
//! submit          click the new-post control
//! menu <pos>      click the actions control of a post
//! delete <pos>    click "delete" in a post's menu
//! edit <pos>      click "edit" in a post's menu
//! click           click outside every menu
//! cancel          drop the edit mark and clear the form
//! show            print the document
//! quit            stop reading
//! ```

use std::io::{BufRead, Write};

use postboard_core::{
    Board, ClickTarget, Clock, Field, IgnoreReason, Outcome, PostId, Submission, UiEvent,
    render_text,
};

use crate::error::{CliError, CommandError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Title(String),
    Body(String),
    Submit,
    Menu(usize),
    Delete(usize),
    Edit(usize),
    Click,
    Cancel,
    Show,
    Quit,
}

impl Command {
    /// Parse one line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            return Ok(None);
        }

        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, Some(rest)),
            None => (line, None),
        };

        let command = match word {
            "title" => Self::Title(rest.unwrap_or_default().to_string()),
            "body" => Self::Body(rest.unwrap_or_default().to_string()),
            "menu" => Self::Menu(parse_position("menu", rest)?),
            "delete" => Self::Delete(parse_position("delete", rest)?),
            "edit" => Self::Edit(parse_position("edit", rest)?),
            "submit" => no_argument("submit", rest, Self::Submit)?,
            "click" => no_argument("click", rest, Self::Click)?,
            "cancel" => no_argument("cancel", rest, Self::Cancel)?,
            "show" => no_argument("show", rest, Self::Show)?,
            "quit" | "exit" => no_argument("quit", rest, Self::Quit)?,
            other => {
                return Err(CommandError::Unknown {
                    command: other.to_string(),
                });
            }
        };
        Ok(Some(command))
    }
}

fn parse_position(
    command: &'static str,
    rest: Option<&str>,
) -> std::result::Result<usize, CommandError> {
    let raw = rest.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(CommandError::MissingPosition { command });
    }
    raw.parse::<usize>()
        .map_err(|_| CommandError::InvalidPosition {
            raw: raw.to_string(),
        })
}

fn no_argument(
    command: &'static str,
    rest: Option<&str>,
    parsed: Command,
) -> std::result::Result<Command, CommandError> {
    if rest.is_some_and(|rest| !rest.trim().is_empty()) {
        return Err(CommandError::UnexpectedArgument { command });
    }
    Ok(parsed)
}

/// How `show` prints the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// What to do when a command fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    Stop,
    Report,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<C: Clock> {
    board: Board<C>,
    width: u16,
    format: OutputFormat,
    echo: bool,
    line: usize,
}

impl<C: Clock> Session<C> {
    #[must_use]
    pub fn new(board: Board<C>, width: u16, format: OutputFormat) -> Self {
        Self {
            board,
            width,
            format,
            echo: false,
            line: 0,
        }
    }

    /// Print a one-line note after every command.
    #[must_use]
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    #[must_use]
    pub const fn board(&self) -> &Board<C> {
        &self.board
    }

    /// Read commands until end of input or `quit`.
    pub fn drive<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        policy: ErrorPolicy,
    ) -> Result<()> {
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            self.line = index + 1;
            let step = Command::parse(&line)
                .map_err(|source| self.script_error(source))
                .and_then(|command| match command {
                    Some(command) => self.execute(command, out),
                    None => Ok(Flow::Continue),
                });
            match step {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(error @ CliError::Script { .. }) => Self::fail(error, out, policy)?,
                Err(other) => return Err(other),
            }
        }
        out.flush()?;
        Ok(())
    }

    fn script_error(&self, source: CommandError) -> CliError {
        CliError::Script {
            line: self.line,
            source,
        }
    }

    fn fail<W: Write>(error: CliError, out: &mut W, policy: ErrorPolicy) -> Result<()> {
        match policy {
            ErrorPolicy::Stop => Err(error),
            ErrorPolicy::Report => {
                tracing::warn!(message = "session.command_failed", %error);
                writeln!(out, "error: {error}")?;
                Ok(())
            }
        }
    }

    /// Run one command against the board.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        let outcome = match command {
            Command::Title(value) => self.board.dispatch(UiEvent::input(Field::Title, value)),
            Command::Body(value) => self.board.dispatch(UiEvent::input(Field::Body, value)),
            Command::Submit => self.board.dispatch(UiEvent::click(ClickTarget::NewPost)),
            Command::Menu(position) => {
                let id = self.resolve(position)?;
                self.board.dispatch(UiEvent::click(ClickTarget::Actions(id)))
            }
            Command::Delete(position) => {
                let id = self.resolve(position)?;
                self.menu_item(position, ClickTarget::Delete(id))?
            }
            Command::Edit(position) => {
                let id = self.resolve(position)?;
                self.menu_item(position, ClickTarget::Edit(id))?
            }
            Command::Click => self.board.dispatch(UiEvent::click(ClickTarget::Outside)),
            Command::Cancel => {
                let cancelled = self.board.cancel_edit();
                if self.echo {
                    let note = if cancelled {
                        "edit cancelled"
                    } else {
                        "nothing to cancel"
                    };
                    writeln!(out, "{note}")?;
                }
                return Ok(Flow::Continue);
            }
            Command::Show => {
                self.show(out)?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        };

        if self.echo {
            writeln!(out, "{}", self.describe(outcome))?;
        }
        Ok(Flow::Continue)
    }

    /// Print the document in the session's format.
    pub fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.format {
            OutputFormat::Text => write!(out, "{}", render_text(self.board.document(), self.width))?,
            OutputFormat::Json => writeln!(out, "{}", self.board.document().to_json()?)?,
        }
        Ok(())
    }

    /// Click a menu item; a click on a closed menu is a script error.
    fn menu_item(&mut self, position: usize, target: ClickTarget) -> Result<Outcome> {
        match self.board.dispatch(UiEvent::click(target)) {
            Outcome::Ignored(IgnoreReason::MenuClosed(_)) => {
                Err(self.script_error(CommandError::MenuClosed { position }))
            }
            outcome => Ok(outcome),
        }
    }

    fn resolve(&self, position: usize) -> Result<PostId> {
        let document = self.board.document();
        document.post_at(position).map(|view| view.id).ok_or_else(|| {
            self.script_error(CommandError::OutOfRange {
                position,
                len: document.posts().len(),
            })
        })
    }

    fn position_of(&self, id: PostId) -> String {
        self.board
            .store()
            .position_of(id)
            .map_or_else(|| id.to_string(), |position| format!("#{position}"))
    }

    fn describe(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Validated(verdict) => verdict.message().unwrap_or_else(|| "ok".to_string()),
            Outcome::Submitted(Submission::Created(id)) => {
                format!("created {}", self.position_of(id))
            }
            Outcome::Submitted(Submission::Updated(id)) => {
                format!("updated {}", self.position_of(id))
            }
            Outcome::Aborted => "nothing to submit".to_string(),
            Outcome::Deleted(id) => format!("deleted {id}"),
            Outcome::EditStarted(id) => format!("editing {}", self.position_of(id)),
            Outcome::MenuToggled { id, open } => {
                let state = if open { "opened" } else { "closed" };
                format!("menu {} {state}", self.position_of(id))
            }
            Outcome::Focused(field) => format!("focus {field:?}").to_lowercase(),
            Outcome::MenusClosed(count) => format!("closed {count} menus"),
            Outcome::Ignored(IgnoreReason::SubmitDisabled) => "ignored: submit is disabled".to_string(),
            Outcome::Ignored(IgnoreReason::MenuClosed(id)) => {
                format!("ignored: menu {} is closed", self.position_of(id))
            }
            Outcome::Ignored(IgnoreReason::UnknownPost(id)) => format!("ignored: unknown {id}"),
        }
    }
}
