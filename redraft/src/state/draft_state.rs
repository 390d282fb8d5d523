//! DraftState and StopReason: the record the refinement loop reads and writes.
//!
//! DraftState holds the draft text plus scoring and loop-control fields;
//! Evaluate writes `quality_score`, Improve writes `draft`, `history` and
//! `iteration`, and the driver records `stop_reason` when it halts.

use serde::{Deserialize, Serialize};

use crate::error::RefineError;

/// Why the refinement loop stopped.
///
/// Recorded exactly once, by the driver, at the moment
/// [`should_continue`](crate::refine::should_continue) yields a stop decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The quality score reached the quality threshold.
    GoodQuality,
    /// The iteration cap was reached before the score did.
    MaxIterationsReached,
}

impl StopReason {
    /// Returns the wire name for this reason (`"good_quality"` / `"max_iterations_reached"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoodQuality => "good_quality",
            Self::MaxIterationsReached => "max_iterations_reached",
        }
    }
}

/// State for the refinement loop: evaluate → (condition) → improve → evaluate.
///
/// Satisfies `Clone + Send + Sync + Debug + 'static` for use with
/// [`Node<DraftState>`](crate::graph::Node). Serde derives let an external
/// checkpointer persist the state between steps; this crate persists nothing.
///
/// **Interaction**: Consumed and produced by
/// [`EvaluateNode`](crate::refine::EvaluateNode) and
/// [`ImproveNode`](crate::refine::ImproveNode); read by
/// [`should_continue`](crate::refine::should_continue).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftState {
    /// Current draft text. Rewritten by Improve; read by Evaluate.
    pub draft: String,
    /// Heuristic quality score in [0, 100]. None until the first Evaluate;
    /// recomputed on every Evaluate.
    #[serde(default)]
    pub quality_score: Option<u8>,
    /// Number of completed improve steps; incremented by Improve.
    #[serde(default)]
    pub iteration: u32,
    /// Iteration cap fixed at construction. Positive; never mutated.
    pub max_iterations: u32,
    /// Prior drafts, oldest first; Improve appends the pre-improve draft.
    #[serde(default)]
    pub history: Vec<String>,
    /// Why the loop stopped. None while looping; set once by the driver.
    #[serde(default)]
    pub stop_reason: Option<StopReason>,
}

impl DraftState {
    /// Creates the initial state for a run: empty history, iteration 0, no score.
    ///
    /// Rejects `max_iterations == 0` with
    /// [`RefineError::InvalidConfiguration`]: a zero cap makes the loop
    /// either a no-op or ill-defined.
    pub fn new(draft: impl Into<String>, max_iterations: u32) -> Result<Self, RefineError> {
        if max_iterations == 0 {
            return Err(RefineError::InvalidConfiguration(
                "max_iterations must be positive".to_string(),
            ));
        }
        Ok(Self {
            draft: draft.into(),
            quality_score: None,
            iteration: 0,
            max_iterations,
            history: Vec::new(),
            stop_reason: None,
        })
    }

    /// Records why the loop stopped. Later calls are ignored; the first
    /// recorded reason stands.
    pub fn finish(&mut self, reason: StopReason) {
        if self.stop_reason.is_none() {
            self.stop_reason = Some(reason);
        }
    }

    /// True once a stop reason has been recorded; the state is final.
    pub fn is_stopped(&self) -> bool {
        self.stop_reason.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: A zero iteration cap is rejected at construction.
    #[test]
    fn new_rejects_zero_max_iterations() {
        match DraftState::new("hello", 0) {
            Err(RefineError::InvalidConfiguration(msg)) => {
                assert!(msg.contains("max_iterations"), "message names the field: {}", msg)
            }
            other => panic!("expected InvalidConfiguration, got {:?}", other),
        }
    }

    /// **Scenario**: A fresh state has no score, no history, no stop reason.
    #[test]
    fn new_state_is_unscored_and_running() {
        let state = DraftState::new("hello", 3).unwrap();
        assert_eq!(state.quality_score, None);
        assert_eq!(state.iteration, 0);
        assert!(state.history.is_empty());
        assert!(!state.is_stopped());
    }

    /// **Scenario**: finish records the first reason and ignores later ones.
    #[test]
    fn finish_records_reason_once() {
        let mut state = DraftState::new("hello", 3).unwrap();
        state.finish(StopReason::GoodQuality);
        state.finish(StopReason::MaxIterationsReached);
        assert_eq!(state.stop_reason, Some(StopReason::GoodQuality));
    }
}
