//! Runner-facing graph contract: `Node`, `Next`, and the `START`/`END` sentinels.
//!
//! Redraft does not ship a graph engine. An external runner (a compiled state
//! graph, an event loop, or a plain thread loop) owns node registration and
//! edge dispatch; this module is the seam it drives. Nodes are
//! state-in/state-out; routing after a node is either the node's own [`Next`]
//! or, for nodes with conditional edges, a predicate over state such as
//! [`refine_condition`](crate::refine::refine_condition).

mod next;
mod node;

pub use next::Next;
pub use node::Node;

/// Sentinel for graph entry: the runner's edge from `START` names the first node.
pub const START: &str = "__start__";

/// Sentinel for graph exit: routing predicates return `END` to halt the run.
pub const END: &str = "__end__";
