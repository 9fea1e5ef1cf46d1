use parking_lot::RwLock;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// World position of the bot's character
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Commands accepted by the movement subsystem
///
/// Commands are queued for the host's movement loop; issuing one returns as
/// soon as it is on the queue, not when the movement completes.
#[derive(Debug, Clone, PartialEq)]
pub enum MovementCommand {
    /// Walk towards a world position
    MoveTo { x: f64, y: f64, z: f64 },
    /// Turn to face a world position
    LookAt { x: f64, y: f64, z: f64 },
    /// Jump in place (or mid-path)
    Jump,
    /// Cancel the current movement target
    Stop,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MovementError {
    #[error("not currently in world")]
    NotInWorld,
    #[error("invalid target: {0}")]
    InvalidTarget(String),
    #[error("movement controller has stopped")]
    ControllerStopped,
}

/// Pose state maintained by the host's movement loop
#[derive(Debug, Clone)]
struct PoseState {
    position: Position,
    in_world: bool,
    moving: bool,
}

/// Command/query surface over one bot session's movement subsystem
///
/// Owned by the session's [`BotConnection`](crate::BotConnection). Commands
/// are forwarded verbatim onto an unbounded channel consumed by the host's
/// movement loop; queries read the pose state that loop maintains. The
/// controller validates only what must hold at the boundary (in-world, finite
/// coordinates) and never retries.
pub struct MovementController {
    command_tx: UnboundedSender<MovementCommand>,
    pose: RwLock<PoseState>,
}

impl MovementController {
    /// Create a controller and the receiver the host's movement loop drains
    pub fn channel() -> (Self, UnboundedReceiver<MovementCommand>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let controller = Self {
            command_tx,
            pose: RwLock::new(PoseState {
                position: Position::new(0.0, 0.0, 0.0),
                in_world: false,
                moving: false,
            }),
        };
        (controller, command_rx)
    }

    // ===== Queries =====

    /// Current position of the character
    pub fn position(&self) -> Result<Position, MovementError> {
        let pose = self.pose.read();
        if !pose.in_world {
            return Err(MovementError::NotInWorld);
        }
        Ok(pose.position)
    }

    /// Whether a movement target is currently being executed
    pub fn is_moving(&self) -> Result<bool, MovementError> {
        let pose = self.pose.read();
        if !pose.in_world {
            return Err(MovementError::NotInWorld);
        }
        Ok(pose.moving)
    }

    // ===== Commands =====

    /// Queue a walk towards a world position
    pub fn move_to(&self, x: f64, y: f64, z: f64) -> Result<(), MovementError> {
        self.check_target(x, y, z)?;
        self.send(MovementCommand::MoveTo { x, y, z })
    }

    /// Queue a turn to face a world position
    pub fn look_at(&self, x: f64, y: f64, z: f64) -> Result<(), MovementError> {
        self.check_target(x, y, z)?;
        self.send(MovementCommand::LookAt { x, y, z })
    }

    /// Queue a jump
    pub fn jump(&self) -> Result<(), MovementError> {
        self.ensure_in_world()?;
        self.send(MovementCommand::Jump)
    }

    /// Cancel the current movement target
    pub fn stop(&self) -> Result<(), MovementError> {
        self.ensure_in_world()?;
        self.send(MovementCommand::Stop)
    }

    // ===== Host-side state updates =====

    /// Mark the character as in or out of the game world
    pub fn set_in_world(&self, in_world: bool) {
        let mut pose = self.pose.write();
        pose.in_world = in_world;
        if !in_world {
            pose.moving = false;
        }
    }

    /// Update the character position (called by the host movement loop)
    pub fn set_position(&self, position: Position) {
        self.pose.write().position = position;
    }

    /// Update the moving flag (called by the host movement loop)
    pub fn set_moving(&self, moving: bool) {
        self.pose.write().moving = moving;
    }

    fn ensure_in_world(&self) -> Result<(), MovementError> {
        if self.pose.read().in_world {
            Ok(())
        } else {
            Err(MovementError::NotInWorld)
        }
    }

    fn check_target(&self, x: f64, y: f64, z: f64) -> Result<(), MovementError> {
        self.ensure_in_world()?;
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(MovementError::InvalidTarget(format!(
                "non-finite coordinates ({x}, {y}, {z})"
            )));
        }
        Ok(())
    }

    fn send(&self, command: MovementCommand) -> Result<(), MovementError> {
        self.command_tx
            .send(command)
            .map_err(|_| MovementError::ControllerStopped)
    }
}
