/// Embedding glue for running scripts against brazier bot sessions
///
/// An embedding script engine asks this crate for a [`ScriptContext`] when a
/// script context is initialized; the context carries the root
/// [`BotApi`](brazier_scripting_api::BotApi) facade (the entire reachable
/// surface for guest code) plus the script's configuration section. The
/// engine itself — parsing, executing, sandboxing — lives elsewhere and is
/// not this crate's concern.
pub mod config;
pub mod context;
pub mod logging;

pub use config::ScriptingConfig;
pub use context::{context_from_config, ScriptContext};
pub use logging::init_logging;
