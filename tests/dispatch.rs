//! Dispatch tests: resolution, flag parsing, exit status and diagnostics.

use clap::{Arg, ArgAction};
use cmdhost::{App, CmdResult, Command, CommandContext, Exit, FlagSet, Settings, Status, Topic};

/// Runnable command that echoes what it received.
struct Build;

impl Command for Build {
    fn name(&self) -> &str {
        "build"
    }

    fn synopsis(&self) -> &str {
        "[-release] [<packages>...]"
    }

    fn short(&self) -> &str {
        "compiles sources"
    }

    fn long(&self) -> &str {
        "Build compiles the named packages."
    }

    fn register_flags(&self, flags: FlagSet) -> FlagSet {
        flags
            .arg(
                Arg::new("release")
                    .long("release")
                    .action(ArgAction::SetTrue)
                    .help("optimized build"),
            )
            .arg(Arg::new("jobs").long("jobs").short('j').value_name("N"))
    }

    fn run(&self, ctx: &mut CommandContext<'_>) -> CmdResult<()> {
        let release = ctx.flags.get_flag("release");
        let jobs = ctx.flags.get_one::<String>("jobs").map(String::as_str);
        writeln!(
            ctx.out,
            "{} {} release={release} jobs={} args={:?}",
            ctx.program,
            ctx.command,
            jobs.unwrap_or("-"),
            ctx.args.as_slice()
        )?;
        Ok(())
    }
}

struct Broken;

impl Command for Broken {
    fn name(&self) -> &str {
        "broken"
    }

    fn short(&self) -> &str {
        "always fails"
    }

    fn run(&self, _ctx: &mut CommandContext<'_>) -> CmdResult<()> {
        anyhow::bail!("nothing to build")
    }
}

struct Quit;

impl Command for Quit {
    fn name(&self) -> &str {
        "quit"
    }

    fn short(&self) -> &str {
        "exits with the given code"
    }

    fn run(&self, ctx: &mut CommandContext<'_>) -> CmdResult<()> {
        let code: u8 = ctx.args.get(0).unwrap_or("0").parse()?;
        Err(Exit(code).into())
    }
}

fn app() -> App {
    let app = App::new(Settings::new("forge", "forge builds things"));
    app.add(Build).unwrap();
    app.add(Broken).unwrap();
    app.add(Quit).unwrap();
    app.add(Topic::new(
        "workflow",
        "describes the build workflow",
        "Edit, then build, then test.",
    ))
    .unwrap();
    app
}

/// Dispatches and returns (status, stdout, stderr).
fn dispatch(app: &App, args: &[&str]) -> (Status, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = app.dispatch(args.iter().copied(), &mut out, &mut err);
    (
        status,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_empty_args_is_usage_error_on_stderr() {
    let (status, out, err) = dispatch(&app(), &[]);
    assert_eq!(status, Status::Usage);
    assert_eq!(status.code(), 2);
    assert!(out.is_empty());
    assert!(err.contains("Usage:"));
    assert!(err.contains("forge [help] <command> [<args>...]"));
}

#[test]
fn test_unknown_command() {
    let (status, out, err) = dispatch(&app(), &["frobnicate"]);
    assert_eq!(status, Status::Usage);
    assert!(out.is_empty());
    assert!(err.contains("unknown subcommand frobnicate"));
}

#[test]
fn test_topic_is_not_dispatchable() {
    let (status, _, err) = dispatch(&app(), &["workflow"]);
    assert_eq!(status, Status::Usage);
    assert!(err.contains("unknown subcommand workflow"));
}

#[test]
fn test_runs_command_with_flags_and_remainder() {
    let (status, out, err) = dispatch(&app(), &["build", "--release", "-j", "4", "core", "--keep"]);
    assert_eq!(status, Status::Success);
    assert!(err.is_empty());
    assert_eq!(
        out,
        "forge build release=true jobs=4 args=[\"core\", \"--keep\"]\n"
    );
}

#[test]
fn test_runs_command_without_arguments() {
    let (status, out, _) = dispatch(&app(), &["build"]);
    assert_eq!(status, Status::Success);
    assert_eq!(out, "forge build release=false jobs=- args=[]\n");
}

#[test]
fn test_double_dash_ends_flags() {
    let (status, out, _) = dispatch(&app(), &["build", "--", "--release"]);
    assert_eq!(status, Status::Success);
    assert_eq!(out, "forge build release=false jobs=- args=[\"--release\"]\n");
}

#[test]
fn test_lookup_ignores_case() {
    let (status, out, _) = dispatch(&app(), &["BUILD"]);
    assert_eq!(status, Status::Success);
    assert!(out.starts_with("forge build "));
}

#[test]
fn test_no_prefix_matching() {
    let (status, _, err) = dispatch(&app(), &["bui"]);
    assert_eq!(status, Status::Usage);
    assert!(err.contains("unknown subcommand bui"));
}

#[test]
fn test_invalid_flag_is_usage_error() {
    let (status, out, err) = dispatch(&app(), &["build", "--bogus"]);
    assert_eq!(status, Status::Usage);
    assert!(out.is_empty());
    assert_eq!(
        err,
        "forge build: unexpected argument '--bogus' found\n\
         Usage: forge build [-release] [<packages>...]\n\
         Type 'forge help build' for more information.\n"
    );
}

#[test]
fn test_missing_flag_value_is_usage_error() {
    let (status, _, err) = dispatch(&app(), &["build", "--jobs"]);
    assert_eq!(status, Status::Usage);
    assert_eq!(err.matches("Usage:").count(), 1);
    assert!(err.starts_with("forge build: "));
    assert!(err.contains("--jobs"));
    assert!(err.ends_with("Type 'forge help build' for more information.\n"));
}

#[test]
fn test_runtime_error_is_reported_with_prefix() {
    let (status, out, err) = dispatch(&app(), &["broken"]);
    assert_eq!(status, Status::Failure);
    assert_eq!(status.code(), 1);
    assert!(out.is_empty());
    assert_eq!(err, "forge broken: nothing to build\n");
}

#[test]
fn test_explicit_exit_code() {
    let (status, _, err) = dispatch(&app(), &["quit", "7"]);
    assert_eq!(status, Status::Code(7));
    assert!(err.is_empty());

    let (status, _, _) = dispatch(&app(), &["quit"]);
    assert!(status.is_success());
}

#[test]
fn test_builtin_help_wins_over_registered_help() {
    struct Impostor;

    impl Command for Impostor {
        fn name(&self) -> &str {
            "help"
        }

        fn short(&self) -> &str {
            "not the real help"
        }

        fn run(&self, ctx: &mut CommandContext<'_>) -> CmdResult<()> {
            writeln!(ctx.out, "impostor")?;
            Ok(())
        }
    }

    let app = app();
    app.add(Impostor).unwrap();
    let (status, out, _) = dispatch(&app, &["help"]);
    assert_eq!(status, Status::Success);
    assert!(!out.contains("impostor"));
    assert!(!out.contains("not the real help"));
    assert!(out.contains("displays help information about forge"));
}

#[test]
fn test_builtin_help_wins_in_any_case() {
    struct Impostor;

    impl Command for Impostor {
        fn name(&self) -> &str {
            "Help"
        }

        fn short(&self) -> &str {
            "not the real help"
        }

        fn run(&self, ctx: &mut CommandContext<'_>) -> CmdResult<()> {
            writeln!(ctx.out, "impostor")?;
            Ok(())
        }
    }

    let app = app();
    app.add(Impostor).unwrap();

    let (status, out, _) = dispatch(&app, &["HELP"]);
    assert_eq!(status, Status::Success);
    assert!(!out.contains("impostor"));
    assert!(out.contains("The commands are:"));

    let (status, out, _) = dispatch(&app, &["help", "HELP"]);
    assert_eq!(status, Status::Success);
    assert!(!out.contains("Not the real help"));
    assert!(out.starts_with("Displays help information about forge\n"));
}

#[test]
fn test_try_dispatch_returns_errors() {
    let app = app();
    let mut out = Vec::new();
    let err = app
        .try_dispatch(&["frobnicate".to_owned()], &mut out)
        .unwrap_err();
    assert!(matches!(err, cmdhost::DispatchError::UnknownCommand(ref name) if name == "frobnicate"));
    assert_eq!(err.status(), Status::Usage);
}
