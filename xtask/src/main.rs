use std::process::ExitCode;

use cmdhost::{App, ConfigError, Settings, Status};

mod doc;
mod tasks;
mod utils;

#[macro_use]
extern crate log;

const LONG: &str = "
xtask runs the auxiliary tasks of the cmdhost workspace: building, testing
and regenerating its own documentation with 'cargo xtask help documentation'.

Settings are read from xtask.toml at the project root.
";

fn main() -> ExitCode {
    // 初始化 env_logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    match setup() {
        Ok(app) => app.run(),
        Err(e) => {
            error!("{}", e);
            Status::Usage.into()
        }
    }
}

fn setup() -> Result<App, ConfigError> {
    let base = Settings::new("xtask", "project auxiliary tasks")
        .with_long(LONG)
        .with_doc_file(utils::xtask_root().join("src").join("doc.rs"));
    let settings = Settings::load_over(base, utils::config_path())?;

    let app = App::new(settings);
    tasks::register(&app)?;
    Ok(app)
}
