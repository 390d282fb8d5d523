//! Next-step result from a graph node: continue the chain, jump to a node, or end.

/// Next step after running a node.
///
/// - **Continue**: follow the runner's edge order (next node in chain, or END if last).
/// - **Node(id)**: jump to the given node (e.g. improve → evaluate for the refinement loop).
/// - **End**: stop; return current state as final result.
///
/// **Interaction**: Returned by [`Node::run`](super::Node::run); consumed by the runner.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Next {
    /// Follow the runner's edge order; if the current node is last, equivalent to End.
    Continue,
    /// Run the node with the given id next.
    Node(String),
    /// Stop and return the current state.
    End,
}
