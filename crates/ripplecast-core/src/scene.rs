//! Radial propagation scene: concentric generation rings plus scattered
//! terminal nodes on a fixed-height 2D surface.
//!
//! Scene generation is geometry only — painting belongs to the frontend.
//! Node placement is the single nondeterministic step in the whole
//! pipeline, so the RNG is injected rather than ambient: the estimator
//! stays pure and tests seed a [`rand_chacha::ChaCha8Rng`].

use std::f64::consts::TAU;

use rand::Rng;

use crate::model::SimulationResult;

// ── Scene constants ─────────────────────────────────────────────────

/// Drawing surface height in scene units; width follows the container.
pub const SURFACE_HEIGHT: f64 = 300.0;

/// Gap between the outermost ring and the surface edge.
pub const EDGE_MARGIN: f64 = 20.0;

/// Radius of the central origin point.
pub const CENTER_RADIUS: f64 = 8.0;

/// Radius of each terminal node.
pub const NODE_RADIUS: f64 = 4.0;

/// At most this many terminal nodes, however many shares the cascade
/// produced.
pub const NODE_CAP: u64 = 50;

/// Ring fill / stroke alpha, as fractions of the ring's base opacity.
pub const RING_FILL_FACTOR: f64 = 0.3;
pub const RING_STROKE_FACTOR: f64 = 0.6;

/// Alpha of the faint radial connector from each node to the center.
pub const CONNECTOR_OPACITY: f64 = 0.2;

/// Fixed two-line label at the scene origin.
pub const CENTER_LABEL: [&str; 2] = ["Initial", "Content"];

// ── Scene types ─────────────────────────────────────────────────────

/// One propagation ring. `fill_opacity` and `stroke_opacity` are already
/// scaled by the fill/stroke factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub radius: f64,
    pub fill_opacity: f64,
    pub stroke_opacity: f64,
}

/// One terminal node. Every node carries an implicit radial connector
/// back to the scene center at [`CONNECTOR_OPACITY`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// A fully laid-out propagation scene. Regenerated on every recompute,
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PropagationScene {
    pub width: f64,
    pub height: f64,
    pub center: (f64, f64),
    pub max_radius: f64,
    /// Outer to inner; empty for a zero-generation run.
    pub rings: Vec<Ring>,
    pub nodes: Vec<Node>,
}

impl PropagationScene {
    /// Lay out the scene for a result on a surface of the given width.
    ///
    /// A zero-generation result renders the central point only — no
    /// rings, no nodes (the ring radius formula divides by the
    /// generation count, so the guard is explicit).
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::as_conversions
    )]
    pub fn generate(result: &SimulationResult, width: f64, rng: &mut impl Rng) -> Self {
        let center_x = width / 2.0;
        let center_y = SURFACE_HEIGHT / 2.0;
        let max_radius = (center_x.min(center_y) - EDGE_MARGIN).max(0.0);

        let mut rings = Vec::new();
        let mut nodes = Vec::new();

        if result.generations > 0 {
            let generations = f64::from(result.generations);
            for i in (0..=result.generations).rev() {
                let base_opacity = 1.0 - f64::from(i) / (generations + 1.0);
                rings.push(Ring {
                    radius: max_radius * f64::from(i) / generations,
                    fill_opacity: base_opacity * RING_FILL_FACTOR,
                    stroke_opacity: base_opacity * RING_STROKE_FACTOR,
                });
            }

            let node_count = result.total_shares.min(NODE_CAP);
            nodes.reserve(node_count as usize);
            for k in 0..node_count {
                let angle = TAU * k as f64 / node_count as f64;
                let distance = max_radius * rng.random_range(0.5..1.0);
                nodes.push(Node {
                    x: center_x + angle.cos() * distance,
                    y: center_y + angle.sin() * distance,
                    radius: NODE_RADIUS,
                });
            }
        }

        Self {
            width,
            height: SURFACE_HEIGHT,
            center: (center_x, center_y),
            max_radius,
            rings,
            nodes,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::estimator::estimate;
    use crate::model::{ProfileTable, SimulationParameters};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn default_result() -> crate::model::SimulationResult {
        estimate(&SimulationParameters::default(), &ProfileTable::default())
    }

    #[test]
    fn ring_count_is_generations_plus_one() {
        let result = default_result();
        let scene = PropagationScene::generate(&result, 400.0, &mut rng());
        assert_eq!(scene.rings.len(), 17);
    }

    #[test]
    fn rings_run_outer_to_inner() {
        let result = default_result();
        let scene = PropagationScene::generate(&result, 400.0, &mut rng());

        let outer = scene.rings.first().unwrap();
        let inner = scene.rings.last().unwrap();
        assert!((outer.radius - scene.max_radius).abs() < f64::EPSILON);
        assert!(inner.radius.abs() < f64::EPSILON);

        // Opacity rises toward the center: 1 − i/(generations+1).
        assert!((outer.fill_opacity - (1.0 - 16.0 / 17.0) * RING_FILL_FACTOR).abs() < 1e-12);
        assert!((inner.stroke_opacity - RING_STROKE_FACTOR).abs() < 1e-12);
    }

    #[test]
    fn node_count_tracks_total_shares_below_cap() {
        // Default scenario produces 12 total shares.
        let result = default_result();
        let scene = PropagationScene::generate(&result, 400.0, &mut rng());
        assert_eq!(scene.nodes.len(), 12);
    }

    #[test]
    fn node_count_caps_at_fifty() {
        let mut result = default_result();
        result.total_shares = 4_000;
        let scene = PropagationScene::generate(&result, 400.0, &mut rng());
        assert_eq!(scene.nodes.len(), 50);
    }

    #[test]
    fn node_count_deterministic_across_seeds() {
        let result = default_result();
        let a = PropagationScene::generate(&result, 400.0, &mut ChaCha8Rng::seed_from_u64(1));
        let b = PropagationScene::generate(&result, 400.0, &mut ChaCha8Rng::seed_from_u64(2));
        assert_eq!(a.nodes.len(), b.nodes.len());
    }

    #[test]
    fn nodes_sit_in_the_outer_half() {
        let mut result = default_result();
        result.total_shares = 4_000;
        let scene = PropagationScene::generate(&result, 400.0, &mut rng());

        let (cx, cy) = scene.center;
        for node in &scene.nodes {
            let distance = ((node.x - cx).powi(2) + (node.y - cy).powi(2)).sqrt();
            assert!(
                distance >= scene.max_radius * 0.5 - 1e-9 && distance <= scene.max_radius + 1e-9,
                "node at distance {distance}, max radius {}",
                scene.max_radius
            );
        }
    }

    #[test]
    fn same_seed_reproduces_node_positions() {
        let result = default_result();
        let a = PropagationScene::generate(&result, 400.0, &mut ChaCha8Rng::seed_from_u64(9));
        let b = PropagationScene::generate(&result, 400.0, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_generations_renders_center_only() {
        let mut params = SimulationParameters::default();
        params.time_horizon_hours = 1;
        let result = estimate(&params, &ProfileTable::default());

        let scene = PropagationScene::generate(&result, 400.0, &mut rng());
        assert!(scene.rings.is_empty());
        assert!(scene.nodes.is_empty());
        assert_eq!(scene.center, (200.0, 150.0));
    }

    #[test]
    fn narrow_surface_clamps_radius_to_zero() {
        let result = default_result();
        let scene = PropagationScene::generate(&result, 30.0, &mut rng());
        assert!(scene.max_radius.abs() < f64::EPSILON);
    }
}
