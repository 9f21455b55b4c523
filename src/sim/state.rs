//! Session state
//!
//! The session owns the three boats, the pointer machine and the RNG.
//! It is only ever mutated from `tick`, `reset` and `toggle_hints`.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::boat::Boat;
use super::pointer::PointerState;
use crate::settings::GameConfig;

/// Drag anchors, updated by the pointer phases
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragAnchors {
    pub start: DVec2,
    pub end: DVec2,
}

/// One running puzzle
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) config: GameConfig,
    pub(crate) rng: Pcg32,
    pub(crate) player: Boat,
    pub(crate) target: Boat,
    pub(crate) preview: Boat,
    pub(crate) pointer: PointerState,
    pub(crate) anchors: DragAnchors,
    pub(crate) hints_on: bool,
    pub(crate) won: bool,
    pub(crate) scramble_axis: (DVec2, DVec2),
    pub(crate) ticks: u64,
}

impl Session {
    /// Build a session and scramble the player boat.
    ///
    /// Panics if `config` does not validate; a bad config here is a
    /// construction defect, not something player input can cause.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        if let Err(e) = config.validate() {
            panic!("invalid game config: {e}");
        }

        let mut session = Self {
            rng: Pcg32::seed_from_u64(seed),
            player: Boat::new(
                &config.template,
                config.scale_factor,
                config.player_start,
                config.player_stroke,
            ),
            target: Boat::new(
                &config.template,
                config.scale_factor,
                config.target_position,
                config.target_stroke,
            ),
            preview: Boat::new(
                &config.template,
                config.scale_factor,
                config.player_start,
                config.preview_stroke,
            ),
            pointer: PointerState::Idle,
            anchors: DragAnchors::default(),
            hints_on: true,
            won: false,
            scramble_axis: (DVec2::ZERO, DVec2::ZERO),
            ticks: 0,
            config,
        };

        session.scramble_axis = session.player.random_axis_flip(&mut session.rng);
        session.won = session.player.overlaps(&session.target, session.config.win_threshold);

        log::info!(
            "Session started with seed {}: {} points, target at {}",
            seed,
            session.player.len(),
            session.config.target_position
        );
        log::debug!(
            "Scrambled across {} -> {}",
            session.scramble_axis.0,
            session.scramble_axis.1
        );

        session
    }

    /// Rebuild all boats from the template with a fresh scramble.
    /// The RNG stream continues, so each reset scrambles differently.
    pub fn reset(&mut self) {
        let config = &self.config;
        self.player = Boat::new(
            &config.template,
            config.scale_factor,
            config.player_start,
            config.player_stroke,
        );
        self.target = Boat::new(
            &config.template,
            config.scale_factor,
            config.target_position,
            config.target_stroke,
        );
        self.preview = Boat::new(
            &config.template,
            config.scale_factor,
            config.player_start,
            config.preview_stroke,
        );
        self.scramble_axis = self.player.random_axis_flip(&mut self.rng);
        self.pointer = PointerState::Idle;
        self.anchors = DragAnchors::default();
        self.won = self.player.overlaps(&self.target, self.config.win_threshold);

        log::info!(
            "Session reset, scrambled across {} -> {}",
            self.scramble_axis.0,
            self.scramble_axis.1
        );
    }

    /// Flip whether the preview boat is shown while dragging
    pub fn toggle_hints(&mut self) {
        self.hints_on = !self.hints_on;
        log::info!("Hints: {}", if self.hints_on { "on" } else { "off" });
    }

    pub fn hints_enabled(&self) -> bool {
        self.hints_on
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Boat {
        &self.player
    }

    pub fn target(&self) -> &Boat {
        &self.target
    }

    pub fn preview(&self) -> &Boat {
        &self.preview
    }

    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    pub fn anchors(&self) -> DragAnchors {
        self.anchors
    }

    /// Axis of the most recent scramble. Reflecting the player boat across
    /// it again restores the unscrambled orientation.
    pub fn scramble_axis(&self) -> (DVec2, DVec2) {
        self.scramble_axis
    }

    /// Number of ticks processed, frozen ones included
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
