use thiserror::Error;

/**
    The failure surface of plugin operations.

    The host framework maps every variant to its single *invalid-argument*
    status; the variants only refine the diagnostic. No other failure kinds
    exist at the plugin boundary — allocation and transport errors belong to
    the host, not the plugin.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
    #[error("session not found")]
    SessionNotFound,

    #[error("empty license response")]
    EmptyResponse,

    #[error("no property for '{0}'")]
    PropertyNotFound(String),
}

/**
    Type alias for results that may return a [`PluginError`].
*/
pub type PluginResult<T> = std::result::Result<T, PluginError>;

/**
    Error returned by `FromStr` implementations on enum types.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}
