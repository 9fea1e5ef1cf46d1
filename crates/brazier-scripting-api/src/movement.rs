use brazier_client::Position;

use crate::error::ApiError;
use crate::exports::{check_arity, float_arg, CallResult, ExportDecl, ScriptApi};
use crate::session::SessionRef;
use crate::value::ScriptValue;

const MOVEMENT_EXPORTS: &[ExportDecl] = &[
    ExportDecl {
        name: "position",
        arity: 0,
    },
    ExportDecl {
        name: "is_moving",
        arity: 0,
    },
    ExportDecl {
        name: "move_to",
        arity: 3,
    },
    ExportDecl {
        name: "look_at",
        arity: 3,
    },
    ExportDecl {
        name: "jump",
        arity: 0,
    },
    ExportDecl {
        name: "stop",
        arity: 0,
    },
];

/// Movement facade for one bot session
///
/// Every operation checks session liveness, then forwards verbatim to the
/// session's movement controller; rejections from the controller ("not
/// currently in world", invalid targets) come back unchanged. Commands
/// return once queued — completion belongs to the movement subsystem.
pub struct MovementApi {
    session: SessionRef,
}

impl MovementApi {
    pub(crate) fn new(session: SessionRef) -> Self {
        Self { session }
    }

    /// Current position of the bot's character
    pub fn position(&self) -> Result<Position, ApiError> {
        Ok(self.session.live()?.movement().position()?)
    }

    /// Whether a movement target is currently being executed
    pub fn is_moving(&self) -> Result<bool, ApiError> {
        Ok(self.session.live()?.movement().is_moving()?)
    }

    /// Walk towards a world position
    pub fn move_to(&self, x: f64, y: f64, z: f64) -> Result<(), ApiError> {
        Ok(self.session.live()?.movement().move_to(x, y, z)?)
    }

    /// Turn to face a world position
    pub fn look_at(&self, x: f64, y: f64, z: f64) -> Result<(), ApiError> {
        Ok(self.session.live()?.movement().look_at(x, y, z)?)
    }

    /// Jump
    pub fn jump(&self) -> Result<(), ApiError> {
        Ok(self.session.live()?.movement().jump()?)
    }

    /// Cancel the current movement target
    pub fn stop(&self) -> Result<(), ApiError> {
        Ok(self.session.live()?.movement().stop()?)
    }
}

impl ScriptApi for MovementApi {
    fn api_name(&self) -> &'static str {
        "movement"
    }

    fn exports(&self) -> &'static [ExportDecl] {
        MOVEMENT_EXPORTS
    }

    fn call(&self, export: &str, args: &[ScriptValue]) -> Result<CallResult, ApiError> {
        match export {
            "position" => {
                check_arity("movement", "position", 0, args)?;
                Ok(CallResult::Value(self.position()?.into()))
            }
            "is_moving" => {
                check_arity("movement", "is_moving", 0, args)?;
                Ok(CallResult::Value(self.is_moving()?.into()))
            }
            "move_to" => {
                check_arity("movement", "move_to", 3, args)?;
                let x = float_arg("movement", "move_to", args, 0)?;
                let y = float_arg("movement", "move_to", args, 1)?;
                let z = float_arg("movement", "move_to", args, 2)?;
                self.move_to(x, y, z)?;
                Ok(CallResult::Value(ScriptValue::Unit))
            }
            "look_at" => {
                check_arity("movement", "look_at", 3, args)?;
                let x = float_arg("movement", "look_at", args, 0)?;
                let y = float_arg("movement", "look_at", args, 1)?;
                let z = float_arg("movement", "look_at", args, 2)?;
                self.look_at(x, y, z)?;
                Ok(CallResult::Value(ScriptValue::Unit))
            }
            "jump" => {
                check_arity("movement", "jump", 0, args)?;
                self.jump()?;
                Ok(CallResult::Value(ScriptValue::Unit))
            }
            "stop" => {
                check_arity("movement", "stop", 0, args)?;
                self.stop()?;
                Ok(CallResult::Value(ScriptValue::Unit))
            }
            _ => Err(ApiError::UnknownExport {
                api: "movement",
                export: export.to_string(),
            }),
        }
    }
}
