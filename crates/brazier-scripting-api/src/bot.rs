use std::sync::Arc;

use brazier_client::BotConnection;

use crate::error::ApiError;
use crate::exports::{check_arity, CallResult, ExportDecl, ScriptApi};
use crate::metadata::MetadataApi;
use crate::movement::MovementApi;
use crate::session::SessionRef;
use crate::value::ScriptValue;

const BOT_EXPORTS: &[ExportDecl] = &[
    ExportDecl {
        name: "id",
        arity: 0,
    },
    ExportDecl {
        name: "name",
        arity: 0,
    },
    ExportDecl {
        name: "movement",
        arity: 0,
    },
    ExportDecl {
        name: "metadata",
        arity: 0,
    },
];

/// Root facade for one bot session
///
/// Handed to a script when its context is initialized. Exposes the account
/// identity and factories for the movement and metadata facades; everything
/// else on the underlying session is out of reach. The facade holds no state
/// beyond the session reference, so it is safe to call repeatedly while the
/// host mutates the session from its own threads.
pub struct BotApi {
    session: SessionRef,
}

impl BotApi {
    pub fn new(connection: &Arc<BotConnection>) -> Self {
        Self {
            session: SessionRef::new(connection),
        }
    }

    /// Canonical string form of the account's unique identifier
    pub fn id(&self) -> Result<String, ApiError> {
        Ok(self.session.live()?.account_profile_id().to_string())
    }

    /// Display name of the account as currently known to the host
    pub fn name(&self) -> Result<String, ApiError> {
        Ok(self.session.live()?.account_name())
    }

    /// A fresh movement facade bound to this bot's session
    ///
    /// Pure object creation; construction never fails, even for an ended
    /// session (calls through the returned facade will).
    pub fn movement(&self) -> MovementApi {
        MovementApi::new(self.session.clone())
    }

    /// A fresh metadata facade bound to this bot's session
    pub fn metadata(&self) -> MetadataApi {
        MetadataApi::new(self.session.clone())
    }
}

impl ScriptApi for BotApi {
    fn api_name(&self) -> &'static str {
        "bot"
    }

    fn exports(&self) -> &'static [ExportDecl] {
        BOT_EXPORTS
    }

    fn call(&self, export: &str, args: &[ScriptValue]) -> Result<CallResult, ApiError> {
        match export {
            "id" => {
                check_arity("bot", "id", 0, args)?;
                Ok(CallResult::Value(self.id()?.into()))
            }
            "name" => {
                check_arity("bot", "name", 0, args)?;
                Ok(CallResult::Value(self.name()?.into()))
            }
            "movement" => {
                check_arity("bot", "movement", 0, args)?;
                Ok(CallResult::Api(Box::new(self.movement())))
            }
            "metadata" => {
                check_arity("bot", "metadata", 0, args)?;
                Ok(CallResult::Api(Box::new(self.metadata())))
            }
            _ => Err(ApiError::UnknownExport {
                api: "bot",
                export: export.to_string(),
            }),
        }
    }
}
