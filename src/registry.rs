//! Command registry - command registration and lookup.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::command::Command;
use crate::error::ConfigError;

/// Names the dispatcher and the `help` command handle before the registry.
pub(crate) const BUILTIN_NAMES: &[&str] = &["help", "documentation"];

/// Table of registered commands, keyed by lowercase name.
///
/// The lock is held for a single insert, lookup or snapshot and never
/// while a command runs.
#[derive(Default)]
pub struct Registry {
    commands: Mutex<BTreeMap<String, Arc<dyn Command>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command.
    ///
    /// Fails when the name is empty or already taken, compared case
    /// insensitively.
    pub fn add<C: Command + 'static>(&self, command: C) -> Result<(), ConfigError> {
        self.add_shared(Arc::new(command))
    }

    /// Add a command that is shared with other owners.
    pub fn add_shared(&self, command: Arc<dyn Command>) -> Result<(), ConfigError> {
        let key = normalize(command.name());
        if key.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if BUILTIN_NAMES.contains(&key.as_str()) {
            warn!("command {:?} is shadowed by the built-in of the same name", command.name());
        }

        let mut commands = self.commands.lock();
        if commands.contains_key(&key) {
            return Err(ConfigError::Duplicate(command.name().to_owned()));
        }
        debug!("registered command {:?} (runnable: {})", key, command.runnable());
        commands.insert(key, command);
        Ok(())
    }

    /// Find a command by name.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Command>> {
        let found = self.commands.lock().get(&normalize(name)).cloned();
        trace!("lookup {:?}: {}", name, if found.is_some() { "found" } else { "not found" });
        found
    }

    /// Snapshot of all registered commands, sorted by name.
    pub fn commands(&self) -> Vec<Arc<dyn Command>> {
        self.commands.lock().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.commands.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.lock().is_empty()
    }
}

/// Key under which `name` is stored and looked up.
pub(crate) fn normalize(name: &str) -> String {
    name.to_lowercase()
}
