use brazier_client::MetadataValue;

use crate::error::ApiError;
use crate::exports::{check_arity, text_arg, CallResult, ExportDecl, ScriptApi};
use crate::session::SessionRef;
use crate::value::ScriptValue;

const METADATA_EXPORTS: &[ExportDecl] = &[
    ExportDecl {
        name: "get",
        arity: 1,
    },
    ExportDecl {
        name: "set",
        arity: 2,
    },
    ExportDecl {
        name: "remove",
        arity: 1,
    },
    ExportDecl {
        name: "contains",
        arity: 1,
    },
    ExportDecl {
        name: "keys",
        arity: 0,
    },
];

/// Metadata facade for one bot session
///
/// Typed accessors over the session's shared key-value state. Reads return
/// the value current at call time or an explicit not-present result — never
/// a substituted default. Writes land in the shared store directly and are
/// visible to every other facade and host-side reader immediately.
pub struct MetadataApi {
    session: SessionRef,
}

impl MetadataApi {
    pub(crate) fn new(session: SessionRef) -> Self {
        Self { session }
    }

    /// Current value for a key, or None if not present
    pub fn get(&self, key: &str) -> Result<Option<MetadataValue>, ApiError> {
        Ok(self.session.live()?.metadata().get(key))
    }

    /// Set a value, replacing any previous value for the key
    pub fn set(
        &self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Result<(), ApiError> {
        self.session.live()?.metadata().set(key, value);
        Ok(())
    }

    /// Remove a key, returning the value it held
    pub fn remove(&self, key: &str) -> Result<Option<MetadataValue>, ApiError> {
        Ok(self.session.live()?.metadata().remove(key))
    }

    /// Whether a key is present
    pub fn contains(&self, key: &str) -> Result<bool, ApiError> {
        Ok(self.session.live()?.metadata().contains(key))
    }

    /// All keys currently in the store
    pub fn keys(&self) -> Result<Vec<String>, ApiError> {
        Ok(self.session.live()?.metadata().keys())
    }
}

impl ScriptApi for MetadataApi {
    fn api_name(&self) -> &'static str {
        "metadata"
    }

    fn exports(&self) -> &'static [ExportDecl] {
        METADATA_EXPORTS
    }

    fn call(&self, export: &str, args: &[ScriptValue]) -> Result<CallResult, ApiError> {
        match export {
            "get" => {
                check_arity("metadata", "get", 1, args)?;
                let key = text_arg("metadata", "get", args, 0)?;
                let value = match self.get(key)? {
                    Some(value) => value.into(),
                    None => ScriptValue::Unit,
                };
                Ok(CallResult::Value(value))
            }
            "set" => {
                check_arity("metadata", "set", 2, args)?;
                let key = text_arg("metadata", "set", args, 0)?;
                let value = args[1].as_metadata().ok_or(ApiError::ArgType {
                    api: "metadata",
                    export: "set",
                    index: 1,
                    expected: "a bool, int, float, or text value",
                })?;
                self.set(key, value)?;
                Ok(CallResult::Value(ScriptValue::Unit))
            }
            "remove" => {
                check_arity("metadata", "remove", 1, args)?;
                let key = text_arg("metadata", "remove", args, 0)?;
                let value = match self.remove(key)? {
                    Some(value) => value.into(),
                    None => ScriptValue::Unit,
                };
                Ok(CallResult::Value(value))
            }
            "contains" => {
                check_arity("metadata", "contains", 1, args)?;
                let key = text_arg("metadata", "contains", args, 0)?;
                Ok(CallResult::Value(self.contains(key)?.into()))
            }
            "keys" => {
                check_arity("metadata", "keys", 0, args)?;
                let keys = self
                    .keys()?
                    .into_iter()
                    .map(ScriptValue::Text)
                    .collect::<Vec<_>>();
                Ok(CallResult::Value(ScriptValue::List(keys)))
            }
            _ => Err(ApiError::UnknownExport {
                api: "metadata",
                export: export.to_string(),
            }),
        }
    }
}
