//! Pointer button state machine
//!
//! Turns one button sample per tick into press / drag / release phases.
//! The transition is a pure function; the session decides what each phase
//! does to the boats.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerState {
    /// Button up, nothing in progress
    #[default]
    Idle,
    /// First tick with the button down
    JustPressed,
    /// Button held for two or more ticks
    Dragged,
    /// Button released; lasts until the next sample
    LetOff,
}

impl PointerState {
    /// Next state given this tick's button sample
    pub fn next(self, button_down: bool) -> Self {
        use PointerState::*;
        match (self, button_down) {
            (Idle | LetOff, true) => JustPressed,
            (JustPressed | Dragged, true) => Dragged,
            (JustPressed | Dragged, false) => LetOff,
            (Idle | LetOff, false) => Idle,
        }
    }

    /// True only on the edge into `LetOff`, never while staying there
    pub fn commits(from: Self, to: Self) -> bool {
        to == PointerState::LetOff && from != PointerState::LetOff
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PointerState::Idle => "Idle",
            PointerState::JustPressed => "JustPressed",
            PointerState::Dragged => "Dragged",
            PointerState::LetOff => "LetOff",
        }
    }
}
