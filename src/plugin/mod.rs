//! Plugin module for composing keyboard behaviors
//!
//! Each plugin attaches to an environment and hands back a teardown;
//! the runner starts a list of plugins and stops them with one call.

mod echo;
mod runner;
mod teardown;

pub use echo::{Hint, HintEcho};
pub use runner::{start_key_ux, Plugin, PluginError, StopAll};
pub use teardown::Teardown;
