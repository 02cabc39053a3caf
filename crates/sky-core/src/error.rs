use thiserror::Error;

/// Error taxonomy for the sphere engine.
///
/// Hit-test misses are not errors; they surface as `None`. Nothing in this
/// crate is fatal to a host process: the worst failure mode is a stale
/// render.
#[derive(Debug, Error)]
pub enum SkyError {
    /// A deterministic computation was handed an argument outside its
    /// domain (non-positive radius or zoom factor, non-finite angle,
    /// out-of-range catalog index).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The target surface or its context is missing or not ready.
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),
}
