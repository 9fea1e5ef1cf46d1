/// Script-visible facades over brazier bot sessions
///
/// This crate is the narrow surface handed to an embedded script engine. A
/// script receives a [`BotApi`] for each bot it may drive and can reach
/// exactly the members those facades export; the underlying
/// [`BotConnection`](brazier_client::BotConnection), its network internals,
/// and host-facing mutators stay unreachable. Engines that bind host objects
/// by name dispatch through the [`ScriptApi`] trait instead of the typed
/// methods; both layers expose the same member set.
///
/// Facades are live views: nothing is cached, every accessor re-reads the
/// session at call time, and every call fails with
/// [`ApiError::SessionEnded`] once the session is gone.
pub mod bot;
pub mod error;
pub mod exports;
pub mod metadata;
pub mod movement;
pub mod value;

mod session;

pub use bot::BotApi;
pub use error::ApiError;
pub use exports::{CallResult, ExportDecl, ScriptApi};
pub use metadata::MetadataApi;
pub use movement::MovementApi;
pub use value::ScriptValue;
