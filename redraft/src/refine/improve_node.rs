//! Improve node: capture the draft into history and patch its weak spots.
//!
//! Appends the pre-improvement draft to `state.history`, then rewrites
//! `state.draft` by appending the supplements it is missing: an elaboration
//! sentence when the draft is short, a call-to-action sentence when it has
//! none. Increments `state.iteration` and jumps back to evaluate with
//! `Next::Node("evaluate")`.

use async_trait::async_trait;

use crate::error::RefineError;
use crate::graph::{Next, Node};
use crate::state::DraftState;

use super::{contains_call_to_action, is_short};

/// Appended to short drafts. Mentions learning, so an elaborated draft also
/// earns the topic bonus on the next evaluate.
pub const ELABORATION_SENTENCE: &str =
    " I have been exploring this in depth and learning something new every day.";

/// Appended to drafts without a call to action. Contains "let me know".
pub const CALL_TO_ACTION_SENTENCE: &str = " What do you think? Let me know in the comments.";

/// Improve node: grows `history`, supplements the draft, bumps `iteration`.
///
/// Content no-op on a draft that is already long and already carries a call
/// to action; the iteration count still increments, so the loop always makes
/// progress toward the cap.
pub struct ImproveNode;

impl ImproveNode {
    /// Creates an Improve node.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImproveNode {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Node<DraftState> for ImproveNode {
    fn id(&self) -> &str {
        "improve"
    }

    async fn run(&self, state: DraftState) -> Result<(DraftState, Next), RefineError> {
        let mut history = state.history;
        history.push(state.draft.clone());

        let mut draft = state.draft;
        let was_short = is_short(&draft);
        if was_short {
            draft.push_str(ELABORATION_SENTENCE);
        }
        let added_cta = !contains_call_to_action(&draft);
        if added_cta {
            draft.push_str(CALL_TO_ACTION_SENTENCE);
        }

        let iteration = state.iteration + 1;
        tracing::debug!(
            iteration,
            elaborated = was_short,
            added_cta,
            draft_len = draft.len(),
            "draft improved"
        );

        let out = DraftState {
            draft,
            quality_score: state.quality_score,
            iteration,
            max_iterations: state.max_iterations,
            history,
            stop_reason: state.stop_reason,
        };
        Ok((out, Next::Node("evaluate".to_string())))
    }
}
