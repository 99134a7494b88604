use clap::{Arg, ArgAction};
use cmdhost::{CmdResult, Command, CommandContext, FlagSet};
use figment::providers::{Format, Toml};
use figment::Figment;
use serde::Deserialize;
use xshell::cmd;

use crate::utils::{config_path, project_shell, split_list};

/// `[build]` section of xtask.toml.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BuildConfig {
    pub release: bool,
    pub features: Vec<String>,
}

impl BuildConfig {
    pub fn load() -> CmdResult<Self> {
        let config = Figment::new()
            .merge(Toml::file(config_path()))
            .focus("build")
            .extract()?;
        Ok(config)
    }

    /// Cargo arguments, with the command line taking precedence over the file.
    pub fn cargo_args(&self, ctx: &CommandContext<'_>) -> Vec<String> {
        let mut args = vec!["--workspace".to_string()];
        if self.release || ctx.flags.get_flag("release") {
            args.push("--release".to_string());
        }

        let features = match ctx.flags.get_one::<String>("features") {
            Some(list) => split_list(list),
            None => self.features.clone(),
        };
        if !features.is_empty() {
            args.push("--features".to_string());
            args.push(features.join(","));
        }
        args
    }
}

pub struct BuildTask;

impl Command for BuildTask {
    fn name(&self) -> &str {
        "build"
    }

    fn synopsis(&self) -> &str {
        "[--release] [--features <list>] [<cargo args>...]"
    }

    fn short(&self) -> &str {
        "builds the workspace"
    }

    fn long(&self) -> &str {
        "
Build runs 'cargo build --workspace' from the project root.

Defaults come from the [build] section of xtask.toml; the flags below
override them. Arguments after the flags are passed to cargo unchanged.
"
    }

    fn register_flags(&self, flags: FlagSet) -> FlagSet {
        flags
            .arg(
                Arg::new("release")
                    .long("release")
                    .action(ArgAction::SetTrue)
                    .help("build with the release profile"),
            )
            .arg(
                Arg::new("features")
                    .long("features")
                    .value_name("LIST")
                    .help("comma separated features to enable"),
            )
    }

    fn run(&self, ctx: &mut CommandContext<'_>) -> CmdResult<()> {
        let config = BuildConfig::load()?;
        let args = config.cargo_args(ctx);
        let extra = ctx.args.as_slice();

        let sh = project_shell()?;
        info!("==> Execute build command");
        info!("    cargo build {} {}", args.join(" "), extra.join(" "));
        cmd!(sh, "cargo build {args...} {extra...}").run()?;
        info!("==> Build succeeded!");
        Ok(())
    }
}
