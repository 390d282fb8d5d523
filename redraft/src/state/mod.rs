//! Draft state for the refinement loop.
//!
//! One state type flows through the evaluate and improve nodes; see
//! [`DraftState`] for the fields and which node writes each of them.

mod draft_state;

pub use draft_state::{DraftState, StopReason};
