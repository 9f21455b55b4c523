//! Sailboat - a mirror-axis puzzle
//!
//! The player drags out axes to reflect a boat until it lands on its target.
//!
//! Core modules:
//! - `sim`: Deterministic puzzle core (reflection math, boats, pointer state, session)
//! - `settings`: Session configuration and presentation styles

pub mod settings;
pub mod sim;

pub use settings::{Color, ConfigError, GameConfig, Stroke};
pub use sim::{Boat, PointerSample, Session, SessionView, tick};

/// Default game constants
pub mod consts {
    use crate::settings::Color;

    /// Boat outline, in drawing order
    pub const BOAT_TEMPLATE: [(f64, f64); 10] = [
        (50.0, 0.0),
        (83.0, 36.0),
        (96.0, 76.0),
        (50.0, 76.0),
        (50.0, 83.0),
        (98.0, 85.0),
        (88.0, 98.0),
        (20.0, 98.0),
        (1.0, 79.0),
        (42.0, 80.0),
    ];
    pub const BOAT_SCALE_FACTOR: f64 = 1.5;
    pub const BOAT_STARTING_POS: (f64, f64) = (800.0, 400.0);
    pub const BOAT_FINAL_POS: (f64, f64) = (100.0, 100.0);
    /// +- per-axis distance accepted as a match
    pub const WIN_THRESHOLD: f64 = 10.0;

    pub const MAIN_BOAT_THICKNESS: f32 = 5.0;
    pub const FINAL_BOAT_THICKNESS: f32 = 2.0;
    pub const GHOST_BOAT_THICKNESS: f32 = 1.0;
    pub const LINE_THICKNESS: f32 = 2.0;

    pub const MAIN_BOAT_COLOR: Color = Color::rgb(0, 0, 0);
    pub const FINAL_BOAT_COLOR: Color = Color::rgb(71, 71, 71);
    pub const GHOST_BOAT_COLOR: Color = Color::rgb(255, 0, 0);
    pub const LINE_COLOR: Color = Color::rgb(70, 199, 156);
}
