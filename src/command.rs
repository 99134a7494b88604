//! Command trait and context definitions.

use std::io::Write;

use clap::ArgMatches;

use crate::error::CmdResult;

/// Flag set a command registers its flags on.
///
/// A fresh one is built for every invocation, so registration never sees
/// the flags of another command.
pub type FlagSet = clap::Command;

/// Arguments left unparsed after the command's flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    args: Vec<String>,
}

impl Args {
    /// Wraps the arguments left after flag parsing.
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// Get argument at index (0 is the first argument after the flags).
    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Iterate over the arguments.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.args.iter().map(String::as_str)
    }

    /// All arguments, for passing on unchanged.
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }
}

/// Command execution context.
pub struct CommandContext<'a> {
    /// Name of the hosting program.
    pub program: &'a str,
    /// The command name that was invoked, as registered.
    pub command: &'a str,
    /// Flags parsed against the command's flag set.
    pub flags: ArgMatches,
    /// Unparsed remainder.
    pub args: Args,
    /// Where the command writes its normal output.
    pub out: &'a mut dyn Write,
}

/// Trait for implementing commands.
///
/// Commands are added to a [`Registry`](crate::Registry) at start-up and
/// looked up by name. A command whose [`runnable`](Command::runnable)
/// returns `false` is a help topic: it shows up under `help` but cannot be
/// dispatched.
pub trait Command: Send + Sync {
    /// Command name, unique within a registry.
    fn name(&self) -> &str;

    /// Argument synopsis printed after `<program> <name>` in usage lines.
    fn synopsis(&self) -> &str {
        ""
    }

    /// Short, single line description (shown in the command list).
    fn short(&self) -> &str;

    /// Long description (shown by `help <name>`).
    fn long(&self) -> &str {
        ""
    }

    fn runnable(&self) -> bool {
        true
    }

    /// Adds the command's flags to `flags`.
    fn register_flags(&self, flags: FlagSet) -> FlagSet {
        flags
    }

    /// Runs the command.
    fn run(&self, _ctx: &mut CommandContext<'_>) -> CmdResult<()> {
        Ok(())
    }
}

/// A help topic: documentation reachable through `help <name>` only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    name: String,
    short: String,
    long: String,
}

impl Topic {
    pub fn new(name: impl Into<String>, short: impl Into<String>, long: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: short.into(),
            long: long.into(),
        }
    }
}

impl Command for Topic {
    fn name(&self) -> &str {
        &self.name
    }

    fn short(&self) -> &str {
        &self.short
    }

    fn long(&self) -> &str {
        &self.long
    }

    fn runnable(&self) -> bool {
        false
    }
}
