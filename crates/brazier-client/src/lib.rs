pub mod connection;
pub mod metadata;
pub mod movement;

pub use connection::BotConnection;
pub use metadata::{MetadataStore, MetadataValue};
pub use movement::{MovementCommand, MovementController, MovementError, Position};
