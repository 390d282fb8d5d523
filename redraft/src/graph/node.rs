//! Graph node trait: one step over a shared state type.
//!
//! Receives state `S`, returns updated `S` and `Next` (continue, jump, or end).
//! Implemented by [`EvaluateNode`](crate::refine::EvaluateNode) and
//! [`ImproveNode`](crate::refine::ImproveNode); driven by an external runner
//! or by [`RefineRunner`](crate::refine::RefineRunner).

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::RefineError;

use super::Next;

/// One step in a graph: state in, (state out, next step).
///
/// The runner uses `Next` to choose the next node (Continue = follow the edge
/// order, Node(id) = jump, End = stop). A node must be the only writer of the
/// state while it runs; the runner passes ownership in and takes it back out.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Node id (e.g. `"evaluate"`, `"improve"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// One step: state in, (state out, next step).
    ///
    /// Return `Next::Continue` to follow the runner's edge order;
    /// `Next::Node(id)` to jump to a node; `Next::End` to stop. Runners that
    /// attach conditional edges to this node ignore the returned `Next` and
    /// route from state instead.
    async fn run(&self, state: S) -> Result<(S, Next), RefineError>;
}
