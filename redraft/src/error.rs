//! Refinement error types.
//!
//! Used by node construction (`DraftState::new`) and by every `Node::run`.

use thiserror::Error;

/// Refinement loop error.
///
/// `InvalidConfiguration` is the only failure the built-in nodes produce, and
/// only at construction time; the heuristics themselves are total.
/// `ExecutionFailed` is the failure channel the `Node` contract carries for
/// external runners whose nodes can fail mid-run.
#[derive(Debug, Error)]
pub enum RefineError {
    /// Caller misconfiguration rejected at construction (e.g. a zero iteration cap).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A step failed with a message. Not produced by the built-in nodes.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}
