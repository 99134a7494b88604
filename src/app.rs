//! Application - dispatch from raw arguments to one command run.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Arg, ArgAction};

use crate::command::{Args, Command, CommandContext, FlagSet};
use crate::config::Settings;
use crate::error::{ConfigError, DispatchError, Status};
use crate::help;
use crate::registry::{Registry, normalize};

/// Id of the positional that collects the unparsed remainder.
const REMAINDER: &str = "cmdhost-remainder";

/// A command line application hosting a set of commands.
pub struct App {
    settings: Settings,
    registry: Registry,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            registry: Registry::new(),
        }
    }

    /// Program name used in usage lines and diagnostics.
    pub fn name(&self) -> &str {
        &self.settings.name
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registers a command, see [`Registry::add`].
    pub fn add<C: Command + 'static>(&self, command: C) -> Result<(), ConfigError> {
        self.registry.add(command)
    }

    /// Dispatches the process arguments and returns the exit code.
    ///
    /// This is the only place that reads the process environment.
    pub fn run(&self) -> ExitCode {
        let args: Vec<String> = std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.dispatch(args, &mut stdout.lock(), &mut stderr.lock())
            .into()
    }

    /// Dispatches `args`, reporting any error to `err`.
    ///
    /// `args` excludes the program name.
    pub fn dispatch<I, T>(&self, args: I, out: &mut dyn Write, err: &mut dyn Write) -> Status
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        match self.try_dispatch(&args, out) {
            Ok(()) => Status::Success,
            Err(e) => {
                if let Err(report_err) = self.report(&e, err) {
                    error!("failed to report {e}: {report_err}");
                }
                e.status()
            }
        }
    }

    /// Resolves `args` to the help renderer or a command and runs it.
    pub fn try_dispatch(&self, args: &[String], out: &mut dyn Write) -> Result<(), DispatchError> {
        let Some((first, rest)) = args.split_first() else {
            return Err(DispatchError::MissingCommand);
        };

        if normalize(first) == help::HELP {
            debug!("dispatching help with {} argument(s)", rest.len());
            return help::run(self, rest, out);
        }

        let command = self
            .registry
            .lookup(first)
            .filter(|c| c.runnable())
            .ok_or_else(|| DispatchError::UnknownCommand(first.clone()))?;
        let name = command.name();

        let flags = self
            .flag_set(command.as_ref())
            .try_get_matches_from(rest)
            .map_err(|source| DispatchError::InvalidFlags {
                command: name.to_owned(),
                source,
            })?;
        let remainder: Vec<String> = flags
            .get_many::<String>(REMAINDER)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        debug!("running {name} with {} unparsed argument(s)", remainder.len());

        let mut ctx = CommandContext {
            program: self.name(),
            command: name,
            flags,
            args: Args::new(remainder),
            out,
        };
        command
            .run(&mut ctx)
            .map_err(|source| DispatchError::from_run(name, source))
    }

    /// Builds a fresh flag set for one invocation of `command`.
    ///
    /// Parsing stops at the first argument that is not a flag; it and
    /// everything after it land in the remainder.
    fn flag_set(&self, command: &dyn Command) -> FlagSet {
        let flags = FlagSet::new(command.name().to_owned())
            .bin_name(format!("{} {}", self.name(), command.name()))
            .override_usage(help::usage_line(self.name(), command))
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true);
        command.register_flags(flags).arg(
            Arg::new(REMAINDER)
                .value_name("ARGS")
                .num_args(1..)
                .action(ArgAction::Append)
                .trailing_var_arg(true)
                .hide(true),
        )
    }

    /// Writes the diagnostic for `error` to `err`.
    fn report(&self, error: &DispatchError, err: &mut dyn Write) -> io::Result<()> {
        let program = self.name();
        match error {
            DispatchError::MissingCommand => help::print_usage(self, err),
            DispatchError::UnknownCommand(name) => {
                writeln!(err, "{program}: unknown subcommand {name}")?;
                writeln!(err, "Run '{program} help' for usage.")
            }
            DispatchError::InvalidFlags { command, source } => {
                writeln!(err, "{program} {command}: {}", flag_error_summary(source))?;
                match self.registry.lookup(command) {
                    Some(found) => help::print_command_usage(self, err, found.as_ref()),
                    None => Ok(()),
                }
            }
            DispatchError::UnknownTopic(_) | DispatchError::TooManyArguments => {
                writeln!(err, "{program} {}: {error}", help::HELP)
            }
            DispatchError::Failed { command, .. } => writeln!(err, "{program} {command}: {error}"),
            DispatchError::Exit(_) => Ok(()),
            DispatchError::Io(_) => writeln!(err, "{program}: {error}"),
        }
    }
}

/// First line of a flag parsing error, without clap's "error: " prefix.
///
/// The rest of clap's rendering (tips, its own usage line) is replaced by
/// [`help::print_command_usage`].
fn flag_error_summary(source: &clap::Error) -> String {
    let rendered = source.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_owned()
}
