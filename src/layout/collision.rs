// Collision resolver.
//
// A small velocity-Verlet style simulation with a single force: circles that overlap push
// each other apart. The solver itself knows nothing about wedges, so every step ends by
// clamping each entry back into its segment. The clamped point is also cached as the
// entry's stable position.
//
// Per step:
// 1. alpha decays toward zero
// 2. the collision constraint runs `iterations` times, adjusting velocities so predicted
//    positions stop overlapping (lighter circles move more)
// 3. velocities are damped and integrated into positions
// 4. positions are clamped into their segments
//
// Each constraint pass only looks at neighbours found through a spatial grid rebuilt from
// the predicted positions, so a step is linear in the number of entries for bounded
// density. The pass is deterministic: pairs are visited in index order and coincident
// circles are separated with a tiny offset drawn from the caller's sampler.

use super::spatial_grid::SpatialGrid;
use super::Entry;
use crate::geometry::{Point, Segment};
use crate::rng::UniformSampler;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CollisionParams {
    /// Fraction of velocity lost per step.
    pub velocity_decay: f64,
    pub alpha_decay: f64,
    pub alpha_min: f64,
    pub strength: f64,
    /// Constraint passes per step.
    pub iterations: usize,
    /// Steps performed by [`Simulation::run`].
    pub steps: usize,
}

impl Default for CollisionParams {
    fn default() -> Self {
        Self {
            velocity_decay: 0.15,
            alpha_decay: 0.008,
            alpha_min: 0.00005,
            strength: 1.0,
            iterations: 6,
            steps: 400,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Simulation {
    params: CollisionParams,
    alpha: f64,
    velocities: Vec<(f64, f64)>,
    steps_taken: usize,
}

impl Simulation {
    pub fn new(params: CollisionParams, entry_count: usize) -> Self {
        Self {
            params,
            alpha: 1.0,
            velocities: vec![(0.0, 0.0); entry_count],
            steps_taken: 0,
        }
    }

    pub fn params(&self) -> &CollisionParams {
        &self.params
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Whether the energy has dropped below the floor. Renderers stepping the simulation
    /// themselves can stop there; [`Simulation::run`] always performs its full budget.
    pub fn is_settled(&self) -> bool {
        self.alpha < self.params.alpha_min
    }

    /// Run the full step budget.
    pub fn run(&mut self, entries: &mut [Entry], segments: &[Segment], sampler: &mut impl UniformSampler) {
        for _ in 0..self.params.steps {
            self.tick(entries, segments, sampler);
        }
        log::debug!(
            "Simulation::run(): {} entries, {} steps, alpha {:.5}",
            entries.len(),
            self.params.steps,
            self.alpha
        );
    }

    pub fn tick(&mut self, entries: &mut [Entry], segments: &[Segment], sampler: &mut impl UniformSampler) {
        if self.velocities.len() != entries.len() {
            self.velocities.resize(entries.len(), (0.0, 0.0));
        }

        self.alpha += (0.0 - self.alpha) * self.params.alpha_decay;

        for _ in 0..self.params.iterations {
            self.collide(entries, sampler);
        }

        let keep = 1.0 - self.params.velocity_decay;
        for (entry, v) in entries.iter_mut().zip(self.velocities.iter_mut()) {
            v.0 *= keep;
            v.1 *= keep;
            let moved = Point::new(entry.x + v.0, entry.y + v.1);
            let clamped = segments[entry.segment.0].clamp(moved);
            entry.x = clamped.x;
            entry.y = clamped.y;
            entry.stable_x = clamped.x;
            entry.stable_y = clamped.y;
        }

        self.steps_taken += 1;
    }

    /// One pass of the circle collision constraint.
    ///
    /// Candidate pairs come from a spatial grid over the predicted positions at the start
    /// of the pass; pairs are still visited in index order.
    fn collide(&mut self, entries: &[Entry], sampler: &mut impl UniformSampler) {
        let strength = self.params.strength;
        let v = &mut self.velocities;

        let max_radius = entries.iter().map(|e| e.collision_radius).fold(0.0, f64::max);
        let mut grid = SpatialGrid::new(2.0 * max_radius);
        for (i, e) in entries.iter().enumerate() {
            grid.insert(i, Point::new(e.x + v[i].0, e.y + v[i].1));
        }

        for i in 0..entries.len() {
            let ri = entries[i].collision_radius;
            let ri2 = ri * ri;
            // Predicted position from the velocity at the start of this visit.
            let xi = entries[i].x + v[i].0;
            let yi = entries[i].y + v[i].1;

            for j in grid.query(Point::new(xi, yi)) {
                if j <= i {
                    continue;
                }
                let rj = entries[j].collision_radius;
                let r = ri + rj;
                let mut dx = xi - entries[j].x - v[j].0;
                let mut dy = yi - entries[j].y - v[j].1;
                let mut l = dx * dx + dy * dy;
                if l >= r * r {
                    continue;
                }

                if dx == 0.0 {
                    dx = jiggle(sampler);
                    l += dx * dx;
                }
                if dy == 0.0 {
                    dy = jiggle(sampler);
                    l += dy * dy;
                }

                let len = l.sqrt();
                if len == 0.0 {
                    continue;
                }
                let k = (r - len) / len * strength;
                dx *= k;
                dy *= k;

                let rj2 = rj * rj;
                let share = rj2 / (ri2 + rj2);
                v[i].0 += dx * share;
                v[i].1 += dy * share;
                v[j].0 -= dx * (1.0 - share);
                v[j].1 -= dy * (1.0 - share);
            }
        }
    }
}

/// Tiny non-zero offset for separating coincident circles.
fn jiggle(sampler: &mut impl UniformSampler) -> f64 {
    (sampler.sample() - 0.5) * 1e-6
}
