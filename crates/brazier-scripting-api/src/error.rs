use brazier_client::MovementError;

/// Failures observable through the script-facing facades
///
/// Nothing here is retried or swallowed: underlying failures cross the
/// export boundary unchanged in meaning, and a dead session is reported as
/// [`ApiError::SessionEnded`] rather than answered with stale data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The bot session backing this facade has ended
    #[error("bot session has ended")]
    SessionEnded,

    /// The movement subsystem rejected or could not take the operation
    #[error(transparent)]
    Movement(#[from] MovementError),

    /// By-name dispatch of a member that is not exported
    #[error("no export `{export}` on {api}")]
    UnknownExport { api: &'static str, export: String },

    /// By-name dispatch with the wrong number of arguments
    #[error("{api}.{export} expects {expected} argument(s), got {got}")]
    Arity {
        api: &'static str,
        export: &'static str,
        expected: usize,
        got: usize,
    },

    /// By-name dispatch with an argument of the wrong type
    #[error("{api}.{export}: argument {index} must be {expected}")]
    ArgType {
        api: &'static str,
        export: &'static str,
        index: usize,
        expected: &'static str,
    },
}
