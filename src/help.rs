//! Help command - usage listing, per-command help and the documentation file.

use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use crate::app::App;
use crate::command::{Command, FlagSet};
use crate::error::{CmdResult, DispatchError};
use crate::registry::normalize;

/// Name of the help pseudo-command.
pub const HELP: &str = "help";

/// `help` argument that writes the documentation file.
pub const DOCUMENTATION: &str = "documentation";

/// Column the short descriptions line up at in command lists.
const NAME_WIDTH: usize = 16;

const HELP_LONG: &str = "
With no arguments, help prints the list of available commands and help
topics to the standard output.

Given the name of a command or topic, help prints its detailed help.

Given 'documentation', help writes the usage listing and the help of every
command into the documentation file, as a Rust inner doc comment.
";

/// The built-in help command, as it is listed and documented.
///
/// Dispatch never reaches its `run`: the dispatcher routes `help` to
/// [`run`] before consulting the registry.
pub struct HelpCommand {
    short: String,
}

impl HelpCommand {
    pub fn new(program: &str) -> Self {
        Self {
            short: format!("displays help information about {program}"),
        }
    }
}

impl Command for HelpCommand {
    fn name(&self) -> &str {
        HELP
    }

    fn synopsis(&self) -> &str {
        "[<command>|<topic>|documentation]"
    }

    fn short(&self) -> &str {
        &self.short
    }

    fn long(&self) -> &str {
        HELP_LONG
    }
}

/// Runs the `help` pseudo-command with the arguments that follow it.
pub fn run(app: &App, args: &[String], out: &mut dyn Write) -> Result<(), DispatchError> {
    match args {
        [] => print_usage(app, out)?,
        [topic] => show(app, topic, out)?,
        _ => return Err(DispatchError::TooManyArguments),
    }
    Ok(())
}

fn show(app: &App, topic: &str, out: &mut dyn Write) -> Result<(), DispatchError> {
    let key = normalize(topic);
    if key == DOCUMENTATION {
        generate_documentation(app).map_err(|source| DispatchError::from_run(HELP, source))?;
        return Ok(());
    }
    if key == HELP {
        print_command_help(app, out, &HelpCommand::new(app.name()))?;
        return Ok(());
    }
    if key == normalize(app.name()) {
        print_app_help(app, out)?;
        return Ok(());
    }
    match app.registry().lookup(topic) {
        Some(command) => print_command_help(app, out, command.as_ref())?,
        None => return Err(DispatchError::UnknownTopic(topic.to_owned())),
    }
    Ok(())
}

/// Writes the application usage: synopsis, commands and help topics.
pub fn print_usage(app: &App, w: &mut dyn Write) -> io::Result<()> {
    let name = app.name();
    let short = app.settings().short.trim();
    if !short.is_empty() {
        writeln!(w, "{short}\n")?;
    }
    writeln!(w, "Usage:\n\n    {}\n", synopsis(name))?;

    let commands = listed_commands(app);
    writeln!(w, "The commands are:\n")?;
    for command in commands.iter().filter(|c| c.runnable()) {
        write_entry(w, command.as_ref())?;
    }
    writeln!(w, "\nUse '{name} help <command>' for more information about a command.")?;

    let mut topics = commands.iter().filter(|c| !c.runnable()).peekable();
    if topics.peek().is_none() {
        return Ok(());
    }
    writeln!(w, "\nAdditional help topics:\n")?;
    for topic in topics {
        write_entry(w, topic.as_ref())?;
    }
    writeln!(w, "\nUse '{name} help <topic>' for more information about that topic.")
}

/// Writes the detailed help of one command or topic.
pub fn print_command_help(app: &App, w: &mut dyn Write, command: &dyn Command) -> io::Result<()> {
    let mut sections = vec![capitalize(command.short().trim()).into_owned()];
    if command.runnable() {
        sections.push(format!("Usage:\n\n    {}", usage_line(app.name(), command)));
    }
    let long = command.long().trim();
    if !long.is_empty() {
        sections.push(long.to_owned());
    }
    if command.runnable() {
        let flags = flag_lines(command);
        if !flags.is_empty() {
            sections.push(format!("Flags:\n\n{}", flags.join("\n")));
        }
    }
    writeln!(w, "{}", sections.join("\n\n"))
}

/// Writes the application's own help, shown by `help <program>`.
pub fn print_app_help(app: &App, w: &mut dyn Write) -> io::Result<()> {
    let name = app.name();
    let settings = app.settings();
    let short = settings.short.trim();
    let mut sections = vec![if short.is_empty() {
        name.to_owned()
    } else {
        format!("{name} - {short}")
    }];
    sections.push(format!("Usage:\n\n    {}", synopsis(name)));
    let long = settings.long.trim();
    if !long.is_empty() {
        sections.push(long.to_owned());
    }
    writeln!(w, "{}", sections.join("\n\n"))
}

/// Short usage block printed after a flag parsing error.
pub fn print_command_usage(app: &App, w: &mut dyn Write, command: &dyn Command) -> io::Result<()> {
    let name = app.name();
    writeln!(w, "Usage: {}", usage_line(name, command))?;
    writeln!(w, "Type '{name} help {}' for more information.", command.name())
}

/// Writes the documentation block: the usage listing and the help of every
/// command, framed as a Rust inner doc comment.
pub fn write_documentation(app: &App, w: &mut dyn Write) -> io::Result<()> {
    let mut body = Vec::new();
    print_usage(app, &mut body)?;
    for command in listed_commands(app) {
        writeln!(body)?;
        print_command_help(app, &mut body, command.as_ref())?;
    }

    writeln!(
        w,
        "// Code generated by \"{} help {DOCUMENTATION}\"; DO NOT EDIT.\n",
        app.name()
    )?;
    writeln!(w, "/*!")?;
    w.write_all(escape_block_comment(&String::from_utf8_lossy(&body)).as_bytes())?;
    writeln!(w, "*/")
}

/// Writes the documentation file named in the settings and returns its path.
pub fn generate_documentation(app: &App) -> CmdResult<PathBuf> {
    let path = app.settings().doc_file.clone();
    let mut text = Vec::new();
    write_documentation(app, &mut text)?;
    fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    info!("wrote documentation to {}", path.display());
    Ok(path)
}

/// Renders the first visible character of `s` in title case.
pub fn capitalize(s: &str) -> Cow<'_, str> {
    let Some((index, first)) = s.char_indices().find(|(_, c)| !c.is_whitespace()) else {
        return Cow::Borrowed(s);
    };
    let title = titlecase(first);
    if title.chars().eq(std::iter::once(first)) {
        return Cow::Borrowed(s);
    }
    let rest = &s[index + first.len_utf8()..];
    Cow::Owned(format!("{}{title}{rest}", &s[..index]))
}

/// Title case differs from upper case for the Latin digraphs, Georgian
/// letters and characters that upper-case to more than one letter.
fn titlecase(c: char) -> String {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ".to_owned(),
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ".to_owned(),
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ".to_owned(),
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ".to_owned(),
        '\u{10D0}'..='\u{10FA}' | '\u{10FD}'..='\u{10FF}' => c.to_string(),
        _ => {
            let mut upper = c.to_uppercase();
            let mut title: String = upper.next().into_iter().collect();
            title.extend(upper.flat_map(char::to_lowercase));
            title
        }
    }
}

/// Runnable commands and topics in listing order, with the built-in help
/// in place of any registered command it shadows.
fn listed_commands(app: &App) -> Vec<Arc<dyn Command>> {
    let mut commands: Vec<Arc<dyn Command>> = app
        .registry()
        .commands()
        .into_iter()
        .filter(|c| normalize(c.name()) != HELP)
        .collect();
    commands.push(Arc::new(HelpCommand::new(app.name())));
    commands.sort_by_key(|c| c.name().to_lowercase());
    commands
}

fn write_entry(w: &mut dyn Write, command: &dyn Command) -> io::Result<()> {
    writeln!(
        w,
        "    {:<width$} {}",
        command.name(),
        command.short().trim(),
        width = NAME_WIDTH
    )
}

fn synopsis(program: &str) -> String {
    format!("{program} [{HELP}] <command> [<args>...]")
}

pub(crate) fn usage_line(program: &str, command: &dyn Command) -> String {
    let synopsis = command.synopsis().trim();
    if synopsis.is_empty() {
        format!("{program} {}", command.name())
    } else {
        format!("{program} {} {synopsis}", command.name())
    }
}

/// One entry per option the command registers, in registration order.
fn flag_lines(command: &dyn Command) -> Vec<String> {
    let flags = command.register_flags(FlagSet::new(command.name().to_owned()));
    flags
        .get_arguments()
        .filter(|arg| !arg.is_positional())
        .map(|arg| {
            let mut names = Vec::new();
            if let Some(short) = arg.get_short() {
                names.push(format!("-{short}"));
            }
            if let Some(long) = arg.get_long() {
                names.push(format!("--{long}"));
            }
            let mut label = names.join(", ");
            if arg.get_action().takes_values() {
                let value = arg
                    .get_value_names()
                    .and_then(|names| names.first())
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| arg.get_id().as_str().to_uppercase());
                label.push_str(&format!(" <{value}>"));
            }
            match arg.get_help() {
                Some(help) => format!("    {label}\n        {help}"),
                None => format!("    {label}"),
            }
        })
        .collect()
}

// Block comments nest: both "/*" and "*/" in the rendered text would
// unbalance the doc comment.
fn escape_block_comment(text: &str) -> Cow<'_, str> {
    if !text.contains("*/") && !text.contains("/*") {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    let mut prev = None;
    for c in text.chars() {
        if matches!((prev, c), (Some('*'), '/') | (Some('/'), '*')) {
            escaped.push(' ');
        }
        escaped.push(c);
        prev = Some(c);
    }
    Cow::Owned(escaped)
}
