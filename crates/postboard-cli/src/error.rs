use postboard_core::BoardError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Failure of a single session command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command: {command}")]
    Unknown { command: String },

    #[error("{command} needs a position")]
    MissingPosition { command: &'static str },

    #[error("invalid position: {raw}")]
    InvalidPosition { raw: String },

    #[error("no post at position {position} ({len} rendered)")]
    OutOfRange { position: usize, len: usize },

    #[error("menu of post {position} is closed")]
    MenuClosed { position: usize },

    #[error("{command} takes no argument")]
    UnexpectedArgument { command: &'static str },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: CommandError,
    },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Board(BoardError::MissingElement { .. }) => 3,
            Self::Script { .. } | Self::InvalidArgument { .. } => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
