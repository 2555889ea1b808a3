//! Plugin runner: starts a set of plugins and stops them together

use tracing::{debug, info, warn};

use super::teardown::Teardown;
use crate::environment::Environment;

/// Errors a plugin can report from setup
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("plugin {plugin} failed to start: {reason}")]
    Setup { plugin: String, reason: String },
}

impl PluginError {
    pub fn setup(plugin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Setup {
            plugin: plugin.into(),
            reason: reason.into(),
        }
    }
}

/// A keyboard behavior that attaches itself to an environment
pub trait Plugin {
    /// Attach to `env` and return the handle that detaches again
    fn setup(&self, env: &Environment) -> Result<Teardown, PluginError>;

    /// Name used in logs and errors
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> Plugin for F
where
    F: Fn(&Environment) -> Teardown,
{
    fn setup(&self, env: &Environment) -> Result<Teardown, PluginError> {
        Ok(self(env))
    }
}

/// Aggregate teardown for every plugin started by [`start_key_ux`]
#[must_use = "dropping StopAll leaves every plugin attached"]
#[derive(Debug)]
pub struct StopAll {
    teardowns: Vec<Teardown>,
}

impl StopAll {
    /// Run every teardown in the order the plugins were started
    pub fn stop(self) {
        let count = self.teardowns.len();
        run_in_order(self.teardowns);
        info!(count, "key ux plugins stopped");
    }

    pub fn len(&self) -> usize {
        self.teardowns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teardowns.is_empty()
    }
}

/// Start every plugin against `env`, in order.
///
/// Startup is all-or-nothing: if a plugin fails, the plugins already
/// started are torn down before the error is returned.
pub fn start_key_ux(
    env: &Environment,
    plugins: &[Box<dyn Plugin>],
) -> Result<StopAll, PluginError> {
    let mut teardowns = Vec::with_capacity(plugins.len());

    for plugin in plugins {
        match plugin.setup(env) {
            Ok(teardown) => {
                debug!(plugin = plugin.name(), "plugin started");
                teardowns.push(teardown);
            }
            Err(e) => {
                warn!(
                    plugin = plugin.name(),
                    started = teardowns.len(),
                    error = %e,
                    "plugin setup failed, rolling back"
                );
                run_in_order(teardowns);
                return Err(e);
            }
        }
    }

    info!(count = teardowns.len(), "key ux plugins started");
    Ok(StopAll { teardowns })
}

fn run_in_order(teardowns: Vec<Teardown>) {
    for teardown in teardowns {
        teardown.run();
    }
}
