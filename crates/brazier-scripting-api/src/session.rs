use std::sync::{Arc, Weak};

use brazier_client::BotConnection;

use crate::error::ApiError;

/// Non-owning reference to a bot session, checked on every forwarded call
///
/// The host owns the `Arc<BotConnection>`; every facade derived from one root
/// shares a clone of this reference. A call is allowed through only while the
/// handle is both still allocated and not marked closed — otherwise the call
/// fails with [`ApiError::SessionEnded`] instead of touching session state.
#[derive(Clone)]
pub(crate) struct SessionRef {
    connection: Weak<BotConnection>,
}

impl SessionRef {
    pub(crate) fn new(connection: &Arc<BotConnection>) -> Self {
        Self {
            connection: Arc::downgrade(connection),
        }
    }

    /// Upgrade to the live connection, or fail if the session has ended
    pub(crate) fn live(&self) -> Result<Arc<BotConnection>, ApiError> {
        match self.connection.upgrade() {
            Some(connection) if !connection.is_closed() => Ok(connection),
            _ => Err(ApiError::SessionEnded),
        }
    }
}
