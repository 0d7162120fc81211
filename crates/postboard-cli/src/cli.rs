use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use postboard_core::{Board, BoardConfig, Markup};

use crate::error::{CliError, Result};
use crate::logging::init_tracing;
use crate::session::{ErrorPolicy, OutputFormat, Session};

#[derive(Debug, Parser)]
#[command(
    name = "postboard",
    about = "In-memory posts board driven from the terminal",
    version
)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read commands from stdin and report each outcome.
    Run(RunArgs),

    /// Execute a command script.
    Replay(ReplayArgs),

    /// Print the effective field limits as JSON.
    Limits(BoardArgs),
}

#[derive(Debug, Clone, Args)]
pub struct BoardArgs {
    /// JSON file with `title_limit` / `body_limit`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON array of the element roles the page provides.
    #[arg(long)]
    pub markup: Option<PathBuf>,

    #[arg(long = "title-limit")]
    pub title_limit: Option<usize>,

    #[arg(long = "body-limit")]
    pub body_limit: Option<usize>,
}

impl BoardArgs {
    /// Defaults, then the config file, then per-flag overrides.
    pub fn config(&self) -> Result<BoardConfig> {
        let mut config = match &self.config {
            Some(path) => BoardConfig::from_path(path)?,
            None => BoardConfig::default(),
        };
        if let Some(limit) = self.title_limit {
            config = config.with_title_limit(limit);
        }
        if let Some(limit) = self.body_limit {
            config = config.with_body_limit(limit);
        }
        config.check().map_err(CliError::invalid)?;
        Ok(config)
    }

    pub fn markup(&self) -> Result<Markup> {
        match &self.markup {
            Some(path) => Ok(Markup::from_path(path)?),
            None => Ok(Markup::standard()),
        }
    }

    pub fn mount(&self) -> Result<Board> {
        let config = self.config()?;
        let markup = self.markup()?;
        Ok(Board::mount(&markup, config)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ViewArgs {
    /// Terminal width used to wrap post bodies.
    #[arg(long, default_value_t = 60)]
    pub width: u16,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    #[command(flatten)]
    pub view: ViewArgs,

    /// Do not print a note after each command.
    #[arg(long)]
    pub quiet: bool,
}

impl RunArgs {
    /// Outcome notes are plain text, so JSON output never carries them.
    #[must_use]
    pub fn echo(&self) -> bool {
        !self.quiet && self.view.format == Format::Text
    }
}

#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    /// Script with one command per line.
    pub script: PathBuf,

    #[command(flatten)]
    pub board: BoardArgs,

    #[command(flatten)]
    pub view: ViewArgs,

    /// Report failing commands and continue instead of stopping.
    #[arg(long = "keep-going")]
    pub keep_going: bool,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Run(args) => run_interactive(&args),
        Commands::Replay(args) => run_replay(&args, &mut io::stdout().lock()),
        Commands::Limits(args) => print_limits(&args, &mut io::stdout().lock()),
    }
}

fn run_interactive(args: &RunArgs) -> Result<()> {
    let board = args.board.mount()?;
    let mut session =
        Session::new(board, args.view.width, args.view.format.into()).with_echo(args.echo());
    let mut out = io::stdout().lock();
    session.show(&mut out)?;
    session.drive(io::stdin().lock(), &mut out, ErrorPolicy::Report)
}

pub fn run_replay<W: Write>(args: &ReplayArgs, out: &mut W) -> Result<()> {
    let board = args.board.mount()?;
    let script = BufReader::new(File::open(&args.script)?);
    let policy = if args.keep_going {
        ErrorPolicy::Report
    } else {
        ErrorPolicy::Stop
    };
    tracing::info!(message = "replay.start", script = %args.script.display(), ?policy);
    Session::new(board, args.view.width, args.view.format.into()).drive(script, out, policy)
}

pub fn print_limits<W: Write>(args: &BoardArgs, out: &mut W) -> Result<()> {
    let config = args.config()?;
    writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
    Ok(())
}
