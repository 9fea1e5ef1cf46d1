use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use tokio::sync::mpsc::UnboundedReceiver;
use uuid::Uuid;

use crate::metadata::MetadataStore;
use crate::movement::{MovementCommand, MovementController};

/// One running bot session
///
/// Holds the account identity plus the subsystems host game logic mutates as
/// the session progresses (metadata store, movement controller). The host
/// owns the `Arc<BotConnection>` and decides its lifetime; views over the
/// session hold non-owning references and must treat a closed connection as
/// gone. The bridge layer never creates or destroys connections.
pub struct BotConnection {
    profile_id: Uuid,
    account_name: RwLock<String>,
    metadata: MetadataStore,
    movement: MovementController,
    closed: AtomicBool,
}

impl BotConnection {
    /// Create a connection for a new session
    ///
    /// Returns the connection plus the movement command receiver the host's
    /// movement loop drains.
    pub fn new(
        profile_id: Uuid,
        account_name: impl Into<String>,
    ) -> (Self, UnboundedReceiver<MovementCommand>) {
        let (movement, command_rx) = MovementController::channel();
        let connection = Self {
            profile_id,
            account_name: RwLock::new(account_name.into()),
            metadata: MetadataStore::new(),
            movement,
            closed: AtomicBool::new(false),
        };
        (connection, command_rx)
    }

    /// Opaque unique identifier of the account, fixed for the session
    pub fn account_profile_id(&self) -> Uuid {
        self.profile_id
    }

    /// Display name of the account as currently known
    pub fn account_name(&self) -> String {
        self.account_name.read().clone()
    }

    /// Apply a server-driven rename (host use only)
    pub fn set_account_name(&self, name: impl Into<String>) {
        *self.account_name.write() = name.into();
    }

    pub fn metadata(&self) -> &MetadataStore {
        &self.metadata
    }

    pub fn movement(&self) -> &MovementController {
        &self.movement
    }

    /// Mark the session as ended
    ///
    /// Idempotent. The host calls this during teardown; any view consulting
    /// the connection afterwards must fail rather than read session state.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            tracing::debug!(target: "session", "Bot session {} closed", self.profile_id);
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}
