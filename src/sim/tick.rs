//! Per-frame session update
//!
//! The presentation layer calls `tick` once per rendered frame with the
//! current pointer sample and draws whatever `SessionView` it gets back.

use glam::DVec2;

use super::boat::Boat;
use super::pointer::PointerState;
use super::state::Session;
use crate::settings::Stroke;

/// Pointer sample for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Pointer position in world coordinates
    pub pos: DVec2,
    /// Primary button held
    pub button_down: bool,
}

impl PointerSample {
    pub fn new(pos: DVec2, button_down: bool) -> Self {
        Self { pos, button_down }
    }
}

/// Guide line drawn between the drag anchors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    pub start: DVec2,
    pub end: DVec2,
    pub stroke: Stroke,
}

/// What the presentation layer should draw this frame
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub player: &'a Boat,
    pub target: &'a Boat,
    /// Present while dragging with hints on
    pub preview: Option<&'a Boat>,
    /// Present while dragging
    pub guide: Option<GuideLine>,
    pub won: bool,
}

impl Session {
    /// Current view without advancing
    pub fn view(&self) -> SessionView<'_> {
        let dragging = self.pointer == PointerState::Dragged;
        SessionView {
            player: &self.player,
            target: &self.target,
            preview: (dragging && self.hints_on).then_some(&self.preview),
            guide: dragging.then_some(GuideLine {
                start: self.anchors.start,
                end: self.anchors.end,
                stroke: self.config.guide_stroke,
            }),
            won: self.won,
        }
    }
}

/// Advance the session by one frame.
///
/// Once the player boat matches the target, geometry is frozen and pointer
/// samples are ignored until `Session::reset`.
pub fn tick<'a>(session: &'a mut Session, input: &PointerSample) -> SessionView<'a> {
    session.ticks += 1;

    let was_won = session.won;
    session.won = session
        .player
        .overlaps(&session.target, session.config.win_threshold);
    if session.won {
        if !was_won {
            log::info!("Boat matched after {} ticks", session.ticks);
        }
        return session.view();
    }

    let prev = session.pointer;
    let next = prev.next(input.button_down);
    if prev != next {
        log::trace!("Pointer {} -> {}", prev.as_str(), next.as_str());
    }
    session.pointer = next;

    match next {
        PointerState::JustPressed => {
            // End anchor keeps the last drag; a bare click commits across it
            session.anchors.start = input.pos;
        }
        PointerState::Dragged => {
            session.anchors.end = input.pos;
            session.preview.copy_points_from(&session.player);
            session
                .preview
                .reflect_all(session.anchors.start, session.anchors.end);
        }
        PointerState::LetOff => {
            if PointerState::commits(prev, next) {
                let (a, b) = (session.anchors.start, session.anchors.end);
                log::debug!("Commit reflection across {} -> {}", a, b);
                session.player.reflect_all(a, b);
            }
        }
        PointerState::Idle => {}
    }

    session.view()
}
