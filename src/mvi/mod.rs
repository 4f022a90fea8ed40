//! Model-View-Intent (MVI) architecture primitives.
//!
//! Base traits for the unidirectional data flow between the screens and the
//! state they render.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of a store slice or a screen's form
//! - **Intent**: User actions or collaborator completion events
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
