use thiserror::Error;

/// Canonical result for plansel.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the optimizer and cursor builder.
///
/// Selection policies never produce these: every policy method is total.
/// The variants describe what happens when a policy's answers cannot be
/// satisfied by the collaborators that consult it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("unknown plan selection policy '{0}'")]
    UnknownPolicy(String),

    #[error("no query plan for '{namespace}' is permitted by policy '{policy}'")]
    NoViablePlan { namespace: String, policy: String },

    #[error("bad hint for '{namespace}': no candidate plan matches {hint}")]
    BadHint { namespace: String, hint: String },

    #[error("counting cursor unsupported for plan {plan}: {reason}")]
    CountingCursorUnsupported { plan: String, reason: &'static str },
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
