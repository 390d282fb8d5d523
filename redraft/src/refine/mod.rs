//! Refinement loop nodes: Evaluate, Improve, and routing utilities.
//!
//! This module provides the two nodes and the driver for the minimal
//! refinement chain evaluate → improve. Each node implements
//! [`Node`](crate::graph::Node) with state type [`DraftState`].
//!
//! # Main types
//!
//! - **[`EvaluateNode`]**: Scores the current draft with an additive keyword
//!   heuristic and writes `quality_score`. Runs first and after every improve.
//! - **[`ImproveNode`]**: Captures the draft into `history`, appends the
//!   supplementary sentences a weak draft is missing, and increments
//!   `iteration`. Jumps back with `Next::Node("evaluate")`.
//! - **[`should_continue`]**: Branching predicate, evaluated after each
//!   evaluate: stop on a good score, stop at the iteration cap, else continue.
//! - **[`refine_condition`]**: String-keyed form of the same decision for
//!   runners that route on node ids (`"improve"` or [`END`](crate::graph::END)).
//! - **[`RefineRunner`]**: Minimal driver that steps the loop in the
//!   prescribed order: evaluate, decide, improve, repeat.
//!
//! # Routing
//!
//! An external runner wires the loop as
//! START → evaluate → \[refine_condition\] → improve | END, with improve
//! returning `Next::Node("evaluate")` to close the cycle.

mod evaluate_node;
mod improve_node;
mod runner;

pub use evaluate_node::{
    EvaluateNode, CALL_TO_ACTION_BONUS, QUALITY_BASELINE, SHORT_DRAFT_PENALTY, TOPIC_KEYWORD_BONUS,
};
pub use improve_node::{ImproveNode, CALL_TO_ACTION_SENTENCE, ELABORATION_SENTENCE};
pub use runner::{Phase, RefineRunner};

use crate::graph::END;
use crate::state::{DraftState, StopReason};

/// Drafts shorter than this (trimmed, in bytes) take the short-draft penalty
/// and get the elaboration supplement.
pub const MIN_DRAFT_LEN: usize = 50;

/// A draft scoring at or above this stops the loop with `GoodQuality`.
pub const QUALITY_THRESHOLD: u8 = 70;

/// Call-to-action phrases worth the CTA bonus. Matched case-insensitively.
///
/// Bare questions ("any tips?") do not count; a call to action here means an
/// explicit ask for reader engagement.
const CALL_TO_ACTION_PHRASES: &[&str] = &["let me know", "what do you think", "comment below"];

/// Learning/sharing keywords worth the topic bonus. Matched case-insensitively,
/// as substrings, so "learn" also covers "learning" and "learned".
const TOPIC_KEYWORDS: &[&str] = &["learn", "share", "grow"];

/// True when the trimmed draft is below [`MIN_DRAFT_LEN`].
pub fn is_short(draft: &str) -> bool {
    draft.trim().len() < MIN_DRAFT_LEN
}

/// True when the draft contains any of the call-to-action phrases.
pub fn contains_call_to_action(draft: &str) -> bool {
    let lower = draft.to_lowercase();
    CALL_TO_ACTION_PHRASES.iter().any(|p| lower.contains(p))
}

/// True when the draft mentions any of the learning/sharing keywords.
pub fn mentions_topic_keyword(draft: &str) -> bool {
    let lower = draft.to_lowercase();
    TOPIC_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Outcome of [`should_continue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Keep looping: route to the improve node.
    Continue,
    /// Halt with the given reason.
    Stop(StopReason),
}

/// Branching predicate for the refinement loop, evaluated after each evaluate.
///
/// Stops with [`StopReason::GoodQuality`] when the score has reached
/// [`QUALITY_THRESHOLD`]; otherwise stops with
/// [`StopReason::MaxIterationsReached`] once `iteration` has reached the cap;
/// otherwise continues. A missing score counts as 0, so an unevaluated state
/// continues rather than erroring.
///
/// The predicate is pure; the driver records the reason on the state via
/// [`DraftState::finish`] when it halts.
pub fn should_continue(state: &DraftState) -> Decision {
    if state.quality_score.unwrap_or(0) >= QUALITY_THRESHOLD {
        return Decision::Stop(StopReason::GoodQuality);
    }
    if state.iteration >= state.max_iterations {
        return Decision::Stop(StopReason::MaxIterationsReached);
    }
    Decision::Continue
}

/// Conditional routing for runners that dispatch on node ids.
///
/// Returns `"improve"` to keep looping or [`END`](crate::graph::END) to halt;
/// use from the evaluate node's conditional edges.
pub fn refine_condition(state: &DraftState) -> &'static str {
    match should_continue(state) {
        Decision::Continue => "improve",
        Decision::Stop(_) => END,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Phrase matching is case-insensitive and substring-based.
    #[test]
    fn call_to_action_matching_is_case_insensitive() {
        assert!(contains_call_to_action("Curious now? Let Me Know below."));
        assert!(!contains_call_to_action("Learning AI. Any tips?"));
    }

    /// **Scenario**: "learn" covers its inflections.
    #[test]
    fn topic_keyword_matches_inflections() {
        assert!(mentions_topic_keyword("Learning AI. Any tips?"));
        assert!(mentions_topic_keyword("I learned a lot"));
        assert!(!mentions_topic_keyword("Shipping a parser today"));
    }

    /// **Scenario**: An unevaluated state continues; the missing score counts as 0.
    #[test]
    fn should_continue_treats_missing_score_as_zero() {
        let state = DraftState::new("hello", 3).unwrap();
        assert_eq!(should_continue(&state), Decision::Continue);
    }

    /// **Scenario**: The quality check wins over the cap check.
    #[test]
    fn good_quality_checked_before_iteration_cap() {
        let mut state = DraftState::new("hello", 1).unwrap();
        state.quality_score = Some(QUALITY_THRESHOLD);
        state.iteration = 1;
        assert_eq!(
            should_continue(&state),
            Decision::Stop(StopReason::GoodQuality)
        );
    }

    /// **Scenario**: Routing keys are the improve node id and the END sentinel.
    #[test]
    fn refine_condition_maps_decisions_to_node_ids() {
        let mut state = DraftState::new("hello", 3).unwrap();
        state.quality_score = Some(10);
        assert_eq!(refine_condition(&state), "improve");
        state.quality_score = Some(90);
        assert_eq!(refine_condition(&state), END);
    }
}
