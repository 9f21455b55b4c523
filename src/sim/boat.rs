//! Boat polygon and its transforms
//!
//! A boat is an ordered ring of points: each point connects to its
//! predecessor, the first wrapping around to the last. The number of points
//! is fixed at construction and never reordered; transforms only move them.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::point::{is_close_to, reflect_across_line, scale, translate};
use crate::settings::Stroke;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boat {
    points: Vec<DVec2>,
    pub stroke: Stroke,
}

impl Boat {
    /// Scale the template about the origin, then move it by `offset`.
    /// The template is copied, never borrowed.
    pub fn new(template: &[DVec2], scale_factor: f64, offset: DVec2, stroke: Stroke) -> Self {
        let points = template
            .iter()
            .map(|&p| translate(scale(p, scale_factor), offset))
            .collect();
        Self { points, stroke }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Outline segments as `(point, predecessor)` pairs, closing the ring
    pub fn edges(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + n - 1) % n]))
    }

    pub fn translate_all(&mut self, delta: DVec2) {
        for p in &mut self.points {
            *p = translate(*p, delta);
        }
    }

    pub fn scale_all(&mut self, factor: f64) {
        for p in &mut self.points {
            *p = scale(*p, factor);
        }
    }

    /// Mirror every point across the line through `a` and `b`
    pub fn reflect_all(&mut self, a: DVec2, b: DVec2) {
        for p in &mut self.points {
            *p = reflect_across_line(*p, a, b);
        }
    }

    /// Overwrite our points with a copy of `other`'s current points
    pub fn copy_points_from(&mut self, other: &Boat) {
        assert_eq!(
            self.points.len(),
            other.points.len(),
            "boats built from different templates"
        );
        self.points.copy_from_slice(&other.points);
    }

    /// Index-paired match: point `i` must be within `threshold` of the other
    /// boat's point `i` on both axes. A congruent boat whose ring starts at a
    /// different index does not match.
    pub fn overlaps(&self, other: &Boat, threshold: f64) -> bool {
        assert_eq!(
            self.points.len(),
            other.points.len(),
            "boats built from different templates"
        );
        self.points
            .iter()
            .zip(&other.points)
            .all(|(&p, &q)| is_close_to(p, q, threshold))
    }

    /// Reflect across an axis through two of our own points, picked at
    /// random. The second pick is redrawn until it differs in value from the
    /// first. Returns the axis used.
    pub fn random_axis_flip<R: Rng>(&mut self, rng: &mut R) -> (DVec2, DVec2) {
        let first = self.points[0];
        assert!(
            self.points.iter().any(|&p| p != first),
            "cannot pick an axis from a boat without two distinct points"
        );

        let start = self.points[rng.random_range(0..self.points.len())];
        let end = loop {
            let candidate = self.points[rng.random_range(0..self.points.len())];
            if candidate != start {
                break candidate;
            }
        };

        self.reflect_all(start, end);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Color, GameConfig};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn stroke() -> Stroke {
        Stroke::new(Color::rgb(0, 0, 0), 1.0)
    }

    fn square() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_new_scales_then_translates() {
        let boat = Boat::new(&square(), 2.0, DVec2::new(100.0, 50.0), stroke());
        assert_eq!(
            boat.points(),
            &[
                DVec2::new(100.0, 50.0),
                DVec2::new(120.0, 50.0),
                DVec2::new(120.0, 70.0),
                DVec2::new(100.0, 70.0),
            ]
        );
    }

    #[test]
    fn test_instances_do_not_alias_template() {
        let template = square();
        let mut a = Boat::new(&template, 1.0, DVec2::ZERO, stroke());
        let b = Boat::new(&template, 1.0, DVec2::ZERO, stroke());
        a.translate_all(DVec2::new(5.0, 5.0));
        assert_eq!(b.points(), template.as_slice());
        assert_eq!(a.points()[0], DVec2::new(5.0, 5.0));
    }

    #[test]
    fn test_scale_all_and_translate_all() {
        let mut boat = Boat::new(&square(), 1.0, DVec2::ZERO, stroke());
        boat.scale_all(0.5);
        boat.translate_all(DVec2::new(1.0, -1.0));
        assert_eq!(boat.points()[2], DVec2::new(6.0, 4.0));
        assert_eq!(boat.len(), 4);
    }

    #[test]
    fn test_edges_close_the_ring() {
        let boat = Boat::new(&square(), 1.0, DVec2::ZERO, stroke());
        let edges: Vec<_> = boat.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], (DVec2::new(0.0, 0.0), DVec2::new(0.0, 10.0)));
        assert_eq!(edges[1], (DVec2::new(10.0, 0.0), DVec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_reflect_all_preserves_order_and_count() {
        let mut boat = Boat::new(&square(), 1.0, DVec2::ZERO, stroke());
        // Mirror across x = 20
        boat.reflect_all(DVec2::new(20.0, 0.0), DVec2::new(20.0, 1.0));
        assert_eq!(
            boat.points(),
            &[
                DVec2::new(40.0, 0.0),
                DVec2::new(30.0, 0.0),
                DVec2::new(30.0, 10.0),
                DVec2::new(40.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_copy_points_from_is_a_snapshot() {
        let mut player = Boat::new(&square(), 1.0, DVec2::new(3.0, 3.0), stroke());
        let mut preview = Boat::new(&square(), 1.0, DVec2::ZERO, stroke());
        preview.copy_points_from(&player);
        assert_eq!(preview.points(), player.points());

        player.translate_all(DVec2::new(1.0, 0.0));
        assert_ne!(preview.points(), player.points());
    }

    #[test]
    #[should_panic(expected = "different templates")]
    fn test_copy_points_from_rejects_mismatched_lengths() {
        let mut a = Boat::new(&square(), 1.0, DVec2::ZERO, stroke());
        let b = Boat::new(&square()[..3], 1.0, DVec2::ZERO, stroke());
        a.copy_points_from(&b);
    }

    #[test]
    fn test_overlaps_is_reflexive() {
        let boat = Boat::new(&square(), 1.5, DVec2::new(7.0, 9.0), stroke());
        assert!(boat.overlaps(&boat, 0.0));
    }

    #[test]
    fn test_identical_boats_match_without_moves() {
        let config = GameConfig::default();
        let player = Boat::new(&config.template, 1.5, DVec2::new(100.0, 100.0), stroke());
        let target = Boat::new(&config.template, 1.5, DVec2::new(100.0, 100.0), stroke());
        assert!(player.overlaps(&target, 0.0));
    }

    #[test]
    fn test_overlaps_threshold_is_inclusive() {
        let boat = Boat::new(&square(), 1.0, DVec2::ZERO, stroke());
        let mut shifted = boat.clone();
        shifted.translate_all(DVec2::new(10.0, -10.0));
        assert!(boat.overlaps(&shifted, 10.0));

        let mut too_far = boat.clone();
        too_far.translate_all(DVec2::new(0.0, 10.5));
        assert!(!boat.overlaps(&too_far, 10.0));
    }

    #[test]
    fn test_overlaps_is_index_paired() {
        // Same square, ring starting one vertex later
        let boat = Boat::new(&square(), 1.0, DVec2::ZERO, stroke());
        let mut rotated = square();
        rotated.rotate_left(1);
        let relabeled = Boat::new(&rotated, 1.0, DVec2::ZERO, stroke());
        assert!(!boat.overlaps(&relabeled, 0.5));
    }

    #[test]
    fn test_random_axis_flip_uses_own_points() {
        let original = Boat::new(&square(), 1.0, DVec2::ZERO, stroke());
        let mut boat = original.clone();
        let mut rng = Pcg32::seed_from_u64(7);

        let (a, b) = boat.random_axis_flip(&mut rng);
        assert_ne!(a, b);
        assert!(original.points().contains(&a));
        assert!(original.points().contains(&b));
        assert_eq!(boat.len(), original.len());

        // Undo with the same axis
        boat.reflect_all(a, b);
        assert!(boat.overlaps(&original, 1e-9));
    }

    #[test]
    fn test_random_axis_flip_is_deterministic_per_seed() {
        let mut a = Boat::new(&square(), 1.0, DVec2::ZERO, stroke());
        let mut b = a.clone();
        let axis_a = a.random_axis_flip(&mut Pcg32::seed_from_u64(42));
        let axis_b = b.random_axis_flip(&mut Pcg32::seed_from_u64(42));
        assert_eq!(axis_a, axis_b);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "two distinct points")]
    fn test_random_axis_flip_rejects_collapsed_boat() {
        let mut boat = Boat::new(&[DVec2::ONE; 3], 1.0, DVec2::ZERO, stroke());
        boat.random_axis_flip(&mut Pcg32::seed_from_u64(1));
    }
}
