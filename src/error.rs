/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, IntegrateError>;

/// Errors produced by the integration routines.
///
/// All failure modes here are immediate input-validation failures; nothing in
/// this crate retries or partially succeeds.
#[derive(Clone, PartialEq, Eq)]
pub enum IntegrateError {
    /// A caller-supplied argument was out of range (zero step counts,
    /// inverted or non-finite bounds, non-positive bounding-box height).
    InvalidArgument { context: String },
}

impl IntegrateError {
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }
}

impl std::fmt::Display for IntegrateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { context } => write!(f, "invalid argument: {context}"),
        }
    }
}

impl std::fmt::Debug for IntegrateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { context } => f
                .debug_struct("InvalidArgument")
                .field("context", context)
                .finish(),
        }
    }
}

impl std::error::Error for IntegrateError {}
