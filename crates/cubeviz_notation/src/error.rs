use thiserror::Error;

/// Error produced when parsing a move token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The token does not match any known move grammar.
    #[error("unrecognized move {token:?}: {reason}")]
    Grammar {
        /// Token that failed to parse.
        token: String,
        /// Description of what went wrong.
        reason: String,
    },
    /// The token is well-formed but refers to layers, counts, or sizes that
    /// do not exist on the puzzle.
    #[error("move {token:?} is out of range: {reason}")]
    Range {
        /// Token that failed to parse.
        token: String,
        /// Description of what went wrong.
        reason: String,
    },
}

impl NotationError {
    pub(crate) fn grammar(token: &str, reason: impl ToString) -> Self {
        Self::Grammar {
            token: token.to_owned(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn range(token: &str, reason: impl ToString) -> Self {
        Self::Range {
            token: token.to_owned(),
            reason: reason.to_string(),
        }
    }

    /// Returns the token that failed to parse.
    pub fn token(&self) -> &str {
        match self {
            Self::Grammar { token, .. } | Self::Range { token, .. } => token,
        }
    }
}
