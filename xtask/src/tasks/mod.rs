//! Task commands hosted by xtask.
//!
//! Each task is defined in its own module file and added in [`register`].

use cmdhost::{App, ConfigError};

pub mod build;
pub mod workflow;

/// Adds every task and help topic to `app`.
pub fn register(app: &App) -> Result<(), ConfigError> {
    app.add(build::BuildTask)?;
    app.add(test::TestTask)?;
    app.add(workflow::topic())?;
    Ok(())
}
