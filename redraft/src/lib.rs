//! # Redraft
//!
//! A minimal draft-refinement loop in Rust. A single record, [`DraftState`],
//! flows through an evaluate node and an improve node with a simple
//! **state-in, state-out** design until the draft scores well enough or the
//! iteration cap is reached.
//!
//! ## Design principles
//!
//! - **Single state type**: The whole loop reads and writes one [`DraftState`];
//!   each node consumes the previous state and returns the next one, so there
//!   is exactly one writer at any moment.
//! - **Pure steps**: [`EvaluateNode`] writes only the score; [`ImproveNode`]
//!   only grows the history and supplements the draft. No I/O, nothing to retry.
//! - **Runner-agnostic**: The graph engine is not part of this crate. Nodes
//!   implement [`Node<DraftState>`](Node) and routing is exposed as
//!   [`should_continue`] / [`refine_condition`], so a compiled state graph, an
//!   event loop, or the built-in [`RefineRunner`] can all drive the same loop.
//!
//! ## Main modules
//!
//! - [`refine`]: [`EvaluateNode`], [`ImproveNode`], [`RefineRunner`],
//!   [`should_continue`], [`refine_condition`]; the refinement loop itself.
//! - [`state`]: [`DraftState`], [`StopReason`].
//! - [`graph`]: [`Node`], [`Next`], [`START`], [`END`]; the contract an
//!   external runner drives.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use redraft::{DraftState, RefineRunner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), redraft::RefineError> {
//!     let state = DraftState::new("Learning AI. Any tips?", 3)?;
//!     let done = RefineRunner::new().invoke(state).await?;
//!     println!(
//!         "{} (score {:?}, stopped: {:?})",
//!         done.draft, done.quality_score, done.stop_reason
//!     );
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod graph;
pub mod refine;
pub mod state;

pub use error::RefineError;
pub use graph::{Next, Node, END, START};
pub use refine::{
    refine_condition, should_continue, Decision, EvaluateNode, ImproveNode, Phase, RefineRunner,
    MIN_DRAFT_LEN, QUALITY_THRESHOLD,
};
pub use state::{DraftState, StopReason};
