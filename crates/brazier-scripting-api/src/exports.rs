use crate::error::ApiError;
use crate::value::ScriptValue;

/// One exported member of a script-visible API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportDecl {
    pub name: &'static str,
    pub arity: usize,
}

/// Result of a by-name call: a plain value, or a sub-facade
///
/// Factory exports (`bot.movement`, `bot.metadata`) hand back a fresh facade
/// bound to the same underlying session; everything else returns a value.
pub enum CallResult {
    Value(ScriptValue),
    Api(Box<dyn ScriptApi>),
}

impl std::fmt::Debug for CallResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallResult::Value(value) => f.debug_tuple("Value").field(value).finish(),
            CallResult::Api(api) => f.debug_tuple("Api").field(&api.api_name()).finish(),
        }
    }
}

impl PartialEq for CallResult {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CallResult::Value(a), CallResult::Value(b)) => a == b,
            (CallResult::Api(a), CallResult::Api(b)) => a.api_name() == b.api_name(),
            _ => false,
        }
    }
}

impl CallResult {
    pub fn into_value(self) -> Option<ScriptValue> {
        match self {
            CallResult::Value(value) => Some(value),
            CallResult::Api(_) => None,
        }
    }

    pub fn into_api(self) -> Option<Box<dyn ScriptApi>> {
        match self {
            CallResult::Api(api) => Some(api),
            CallResult::Value(_) => None,
        }
    }
}

/// By-name dispatch surface of a facade
///
/// An engine binding host objects by member lookup sees exactly the members
/// in [`exports`](ScriptApi::exports); [`call`](ScriptApi::call) answers
/// those names and nothing else. The export table of each facade is a
/// `const` allow-list, so the reachable surface is fixed at compile time and
/// enumerable at run time.
pub trait ScriptApi: Send + Sync {
    /// Name of this API as scripts see it (e.g. in error messages)
    fn api_name(&self) -> &'static str;

    /// The complete set of members reachable from script code
    fn exports(&self) -> &'static [ExportDecl];

    /// Invoke an exported member by name
    fn call(&self, export: &str, args: &[ScriptValue]) -> Result<CallResult, ApiError>;
}

pub(crate) fn check_arity(
    api: &'static str,
    export: &'static str,
    expected: usize,
    args: &[ScriptValue],
) -> Result<(), ApiError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ApiError::Arity {
            api,
            export,
            expected,
            got: args.len(),
        })
    }
}

pub(crate) fn float_arg(
    api: &'static str,
    export: &'static str,
    args: &[ScriptValue],
    index: usize,
) -> Result<f64, ApiError> {
    args[index].as_f64().ok_or(ApiError::ArgType {
        api,
        export,
        index,
        expected: "a number",
    })
}

pub(crate) fn text_arg<'a>(
    api: &'static str,
    export: &'static str,
    args: &'a [ScriptValue],
    index: usize,
) -> Result<&'a str, ApiError> {
    args[index].as_text().ok_or(ApiError::ArgType {
        api,
        export,
        index,
        expected: "text",
    })
}
