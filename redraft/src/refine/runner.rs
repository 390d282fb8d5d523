//! Refinement loop driver: build, step, and run to completion.
//!
//! Loop: evaluate → \[should_continue\] → improve → evaluate, halting when the
//! decision is a stop. The driver is a plain loop; a graph runner with
//! conditional edges can drive the same nodes through
//! [`refine_condition`](super::refine_condition) instead.

use crate::error::RefineError;
use crate::graph::Node;
use crate::state::DraftState;

use super::evaluate_node::EvaluateNode;
use super::improve_node::ImproveNode;
use super::{should_continue, Decision};

/// Phase of the refinement loop.
///
/// Transitions: `Evaluating` → `Stopped` on a stop decision, `Evaluating` →
/// `Improving` on continue, `Improving` → `Evaluating` unconditionally.
/// `Stopped` is terminal and reachable only from `Evaluating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// About to score the draft.
    Evaluating,
    /// About to rewrite the draft.
    Improving,
    /// The loop has halted; the state is final.
    Stopped,
}

/// Refinement loop driver: owns the two nodes and steps them in order.
///
/// One step at a time, single writer: each node consumes the state and
/// returns the updated one. The stop reason is recorded on the state via
/// [`DraftState::finish`] the moment the loop halts.
pub struct RefineRunner {
    evaluate: EvaluateNode,
    improve: ImproveNode,
}

impl RefineRunner {
    /// Creates a runner with the default Evaluate and Improve nodes.
    pub fn new() -> Self {
        Self {
            evaluate: EvaluateNode::new(),
            improve: ImproveNode::new(),
        }
    }

    /// Runs the loop to completion and returns the final state.
    ///
    /// The returned state has `quality_score` and `stop_reason` populated and
    /// at most `max_iterations` improve steps applied.
    pub async fn invoke(&self, state: DraftState) -> Result<DraftState, RefineError> {
        tracing::info!(
            max_iterations = state.max_iterations,
            draft_len = state.draft.len(),
            "refinement loop started"
        );
        let mut state = state;
        let mut phase = Phase::Evaluating;
        loop {
            match phase {
                Phase::Evaluating => {
                    let (next_state, _) = self.evaluate.run(state).await?;
                    state = next_state;
                    phase = match should_continue(&state) {
                        Decision::Continue => Phase::Improving,
                        Decision::Stop(reason) => {
                            state.finish(reason);
                            Phase::Stopped
                        }
                    };
                }
                Phase::Improving => {
                    let (next_state, _) = self.improve.run(state).await?;
                    state = next_state;
                    phase = Phase::Evaluating;
                }
                Phase::Stopped => {
                    tracing::info!(
                        score = state.quality_score,
                        iteration = state.iteration,
                        reason = state.stop_reason.map(|r| r.as_str()),
                        "refinement loop finished"
                    );
                    return Ok(state);
                }
            }
        }
    }
}

impl Default for RefineRunner {
    fn default() -> Self {
        Self::new()
    }
}
