//! Resolver Errors

/// Failure raised while rewriting a source unit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// An alias target cannot be expressed relative to the source file.
    #[error("cannot compute a path from `{from}` to `{to}`: {reason}")]
    PathComputation {
        from: String,
        to: String,
        reason: String,
    },
}

impl ResolveError {
    pub fn path_computation(
        from: impl Into<String>,
        to: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ResolveError::PathComputation {
            from: from.into(),
            to: to.into(),
            reason: reason.into(),
        }
    }
}
