//! Evaluate node: score the current draft and record it on the state.
//!
//! Reads `state.draft`, assigns a score (rule-based: draft length,
//! call-to-action presence, learning/sharing keywords) and writes only
//! `state.quality_score`. Routing after evaluate belongs to
//! [`refine_condition`](super::refine_condition), so the node itself returns
//! `Next::Continue`.

use async_trait::async_trait;

use crate::error::RefineError;
use crate::graph::{Next, Node};
use crate::state::DraftState;

use super::{contains_call_to_action, is_short, mentions_topic_keyword};

/// Every draft starts from this score before penalties and bonuses.
pub const QUALITY_BASELINE: i32 = 50;

/// Penalty for a draft below [`MIN_DRAFT_LEN`](super::MIN_DRAFT_LEN).
pub const SHORT_DRAFT_PENALTY: i32 = 20;

/// Bonus for containing a call-to-action phrase.
pub const CALL_TO_ACTION_BONUS: i32 = 15;

/// Bonus for mentioning a learning/sharing keyword.
pub const TOPIC_KEYWORD_BONUS: i32 = 10;

/// Evaluate node: scores the draft with an additive heuristic.
///
/// Baseline [`QUALITY_BASELINE`], minus [`SHORT_DRAFT_PENALTY`] for a short
/// draft, plus [`CALL_TO_ACTION_BONUS`] and [`TOPIC_KEYWORD_BONUS`] for the
/// respective keyword hits, clamped to [0, 100]. Pure: same draft, same score.
pub struct EvaluateNode;

impl EvaluateNode {
    /// Creates an Evaluate node.
    pub fn new() -> Self {
        Self
    }

    /// Scores one draft. Total over all inputs; the clamp keeps the result in [0, 100].
    fn score_draft(draft: &str) -> u8 {
        let mut score = QUALITY_BASELINE;
        if is_short(draft) {
            score -= SHORT_DRAFT_PENALTY;
        }
        if contains_call_to_action(draft) {
            score += CALL_TO_ACTION_BONUS;
        }
        if mentions_topic_keyword(draft) {
            score += TOPIC_KEYWORD_BONUS;
        }
        score.clamp(0, 100) as u8
    }
}

impl Default for EvaluateNode {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Node<DraftState> for EvaluateNode {
    fn id(&self) -> &str {
        "evaluate"
    }

    async fn run(&self, state: DraftState) -> Result<(DraftState, Next), RefineError> {
        let score = Self::score_draft(&state.draft);
        tracing::debug!(
            score,
            draft_len = state.draft.len(),
            iteration = state.iteration,
            "draft evaluated"
        );
        let out = DraftState {
            quality_score: Some(score),
            ..state
        };
        Ok((out, Next::Continue))
    }
}
