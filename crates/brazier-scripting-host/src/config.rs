use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptingConfig {
    /// Whether scripting is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Per-script configuration (script ID -> config values)
    #[serde(default)]
    pub config: HashMap<String, toml::Value>,
}

fn default_enabled() -> bool {
    true
}

impl Default for ScriptingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            config: HashMap::new(),
        }
    }
}

impl ScriptingConfig {
    /// Get the configuration for a specific script, if any
    pub fn script_config(&self, script_id: &str) -> Option<&toml::Value> {
        self.config.get(script_id)
    }
}
