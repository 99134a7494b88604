//! cmdhost - host a set of named subcommands in one program.
//!
//! A host registers its commands on an [`App`], then hands the process
//! arguments to [`App::run`]. The first free argument selects the command,
//! the rest is parsed against the flags that command registers.
//!
//! # Architecture
//!
//! - `command.rs` - The `Command` trait, help topics and the execution context
//! - `registry.rs` - Name to command table and lookup
//! - `app.rs` - Dispatch from raw arguments to a command run
//! - `help.rs` - Usage listing, per-command help and the `help` pseudo-command
//! - `config.rs` - Application settings
//! - `error.rs` - Error taxonomy and exit status
//!
//! # Adding a New Command
//!
//! 1. Define a struct and implement the `Command` trait
//! 2. Register flags in `register_flags` and read them back in `run`
//!    through `ctx.flags`
//! 3. Add it at start-up: `app.add(MyCommand)?;`
//!
//! ```no_run
//! use cmdhost::{App, CmdResult, Command, CommandContext, Settings};
//!
//! struct Hello;
//!
//! impl Command for Hello {
//!     fn name(&self) -> &str {
//!         "hello"
//!     }
//!
//!     fn short(&self) -> &str {
//!         "prints a greeting"
//!     }
//!
//!     fn run(&self, ctx: &mut CommandContext<'_>) -> CmdResult<()> {
//!         writeln!(ctx.out, "hello from {}", ctx.program)?;
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> std::process::ExitCode {
//!     let app = App::new(Settings::new("greeter", "greets people"));
//!     if let Err(e) = app.add(Hello) {
//!         eprintln!("{e}");
//!         return std::process::ExitCode::from(2);
//!     }
//!     app.run()
//! }
//! ```

#[macro_use]
extern crate log;

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod help;
pub mod registry;

pub use app::App;
pub use command::{Args, Command, CommandContext, FlagSet, Topic};
pub use config::Settings;
pub use error::{CmdResult, ConfigError, DispatchError, Exit, Status};
pub use registry::Registry;
