//! Script replay through the parsed command line.

use std::path::Path;

use clap::Parser;
use postboard_cli::cli::{Cli, Commands, print_limits, run_replay};
use postboard_cli::{CliError, CommandError};
use postboard_core::BoardError;
use pretty_assertions::assert_eq;

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path.display().to_string()
}

fn replay(args: &[&str]) -> (String, Result<(), CliError>) {
    let cli = Cli::try_parse_from(args).expect("valid command line");
    let Commands::Replay(replay_args) = cli.command else {
        panic!("expected replay subcommand");
    };
    let mut out = Vec::<u8>::new();
    let result = run_replay(&replay_args, &mut out);
    (String::from_utf8(out).expect("utf8"), result)
}

#[test]
fn replay_two_posts_then_delete_first() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = write(
        dir.path(),
        "board.txt",
        "\
# two posts, then drop the first
title first
body one
submit
title second
body two
submit
menu 0
delete 0
show
",
    );

    let (out, result) = replay(&["postboard", "replay", &script, "--width", "30"]);
    assert!(result.is_ok(), "{result:?}");
    assert!(out.contains("    second\n    two\n"), "{out}");
    assert!(!out.contains("first"), "{out}");
    assert!(out.starts_with("> Заголовок:\n"), "{out}");
}

#[test]
fn replay_stops_on_first_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = write(dir.path(), "bad.txt", "title a\nmenu 3\nshow\n");

    let (out, result) = replay(&["postboard", "replay", &script]);
    assert!(out.is_empty());
    let err = result.expect_err("menu 3 has no post");
    assert!(matches!(
        err,
        CliError::Script {
            line: 2,
            source: CommandError::OutOfRange { position: 3, len: 0 }
        }
    ));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn replay_keep_going_reports_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = write(dir.path(), "bad.txt", "menu 3\nshow\n");

    let (out, result) = replay(&["postboard", "replay", &script, "--keep-going"]);
    assert!(result.is_ok());
    assert!(out.starts_with("error: line 1: no post at position 3 (0 rendered)\n"));
    assert!(out.contains("(нет постов)"));
}

#[test]
fn replay_json_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = write(dir.path(), "json.txt", "title Hello\nbody World\nsubmit\nshow\n");

    let (out, result) = replay(&["postboard", "replay", &script, "--format", "json"]);
    assert!(result.is_ok());
    let value: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(value["posts"][0]["title"], "Hello");
    assert_eq!(value["posts"][0]["body"], "World");
    assert_eq!(value["posts"][0]["menu_open"], false);
    assert_eq!(value["focus"], "title");
}

#[test]
fn missing_markup_role_fails_mount() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = write(dir.path(), "s.txt", "show\n");
    let markup = write(
        dir.path(),
        "page.json",
        r#"["title-input", "body-input", "new-post-button", "validation-message"]"#,
    );

    let (out, result) = replay(&["postboard", "replay", &script, "--markup", &markup]);
    assert!(out.is_empty());
    let err = result.expect_err("posts container is missing");
    assert_eq!(err.to_string(), "failed to find required element: posts container");
    assert!(matches!(err, CliError::Board(BoardError::MissingElement { .. })));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn limits_merge_file_and_flags() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write(dir.path(), "board.json", r#"{"title_limit": 50, "body_limit": 80}"#);

    let cli = Cli::try_parse_from(["postboard", "limits", "--config", config.as_str(), "--body-limit", "90"])
        .expect("valid command line");
    let Commands::Limits(args) = cli.command else {
        panic!("expected limits subcommand");
    };
    let mut out = Vec::<u8>::new();
    print_limits(&args, &mut out).expect("limits");
    let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
    assert_eq!(value["title_limit"], 50);
    assert_eq!(value["body_limit"], 90);
}

#[test]
fn zero_limit_flag_is_rejected() {
    let cli = Cli::try_parse_from(["postboard", "limits", "--title-limit", "0"])
        .expect("valid command line");
    let Commands::Limits(args) = cli.command else {
        panic!("expected limits subcommand");
    };
    let err = print_limits(&args, &mut Vec::<u8>::new()).expect_err("zero limit");
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn replay_rejects_click_on_closed_menu() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = write(dir.path(), "closed.txt", "title a\nbody b\nsubmit\nedit 0\nshow\n");

    let (out, result) = replay(&["postboard", "replay", &script]);
    assert!(out.is_empty());
    let err = result.expect_err("menu 0 is closed");
    assert!(matches!(
        err,
        CliError::Script {
            line: 4,
            source: CommandError::MenuClosed { position: 0 }
        }
    ));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn run_echo_is_text_only() {
    let echo = |args: &[&str]| {
        let cli = Cli::try_parse_from(args).expect("valid command line");
        let Commands::Run(run_args) = cli.command else {
            panic!("expected run subcommand");
        };
        run_args.echo()
    };
    assert!(echo(&["postboard", "run"]));
    assert!(!echo(&["postboard", "run", "--quiet"]));
    assert!(!echo(&["postboard", "run", "--format", "json"]));
}

#[test]
fn verbosity_is_global() {
    let cli = Cli::try_parse_from(["postboard", "limits", "-vv"]).expect("valid command line");
    assert_eq!(cli.verbose, 2);
}
