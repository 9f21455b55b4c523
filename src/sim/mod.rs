//! Deterministic puzzle core
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Seeded RNG only
//! - One update per `tick` call, no background work
//! - No rendering or platform dependencies

pub mod boat;
pub mod point;
pub mod pointer;
pub mod state;
pub mod tick;

pub use boat::Boat;
pub use point::{is_close_to, reflect_across_line, scale, translate};
pub use pointer::PointerState;
pub use state::{DragAnchors, Session};
pub use tick::{GuideLine, PointerSample, SessionView, tick};
