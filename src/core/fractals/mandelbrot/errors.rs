use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MandelbrotError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("unknown iteration strategy '{0}' (expected incremental or naive)")]
    UnknownStrategy(String),
}
