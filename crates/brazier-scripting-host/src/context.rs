use std::sync::Arc;

use brazier_client::BotConnection;
use brazier_scripting_api::BotApi;

use crate::config::ScriptingConfig;

/// Context provided to a script for interacting with its bot
///
/// Created once per script when its context is initialized; the embedded
/// engine exposes [`bot`](ScriptContext::bot) (and whatever the facade tree
/// exports) to guest code. The context never owns the connection — the host
/// keeps the `Arc` and ends the session whenever it decides to.
pub struct ScriptContext {
    script_id: String,
    bot: BotApi,
    config: Option<toml::Value>,
}

impl ScriptContext {
    /// Create a context for one script over one bot session
    pub fn new(script_id: impl Into<String>, connection: &Arc<BotConnection>) -> Self {
        Self {
            script_id: script_id.into(),
            bot: BotApi::new(connection),
            config: None,
        }
    }

    /// Attach per-script configuration values
    pub fn with_config(mut self, config: toml::Value) -> Self {
        self.config = Some(config);
        self
    }

    pub fn script_id(&self) -> &str {
        &self.script_id
    }

    /// Root facade of the bot this script may drive
    pub fn bot(&self) -> &BotApi {
        &self.bot
    }

    /// Per-script configuration, if the host provided any
    pub fn config(&self) -> Option<&toml::Value> {
        self.config.as_ref()
    }

    /// Log a message on behalf of the script
    pub fn log(&self, message: &str) {
        tracing::info!(target: "scripting", script = %self.script_id, "{message}");
    }
}

/// Create a script context from config
///
/// Returns None when scripting is disabled; otherwise wires the per-script
/// config section (if any) into the context.
pub fn context_from_config(
    script_id: &str,
    connection: &Arc<BotConnection>,
    config: &ScriptingConfig,
) -> Option<ScriptContext> {
    if !config.enabled {
        tracing::debug!(target: "scripting", "Scripting disabled, no context for {script_id}");
        return None;
    }

    tracing::debug!(target: "scripting", "Creating script context for {script_id}");
    let mut context = ScriptContext::new(script_id, connection);
    if let Some(script_config) = config.script_config(script_id) {
        context = context.with_config(script_config.clone());
    }
    Some(context)
}
