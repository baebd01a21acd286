use crate::constants::*;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

// Ambient particle simulation. Kept free of browser APIs so it can be
// exercised on the host; `field.rs` draws it onto a 2D canvas.

/// One ambient dot. Radius and opacity are fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    /// Uniformly random particle inside `[0, bounds]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        let half = PARTICLE_SPEED_SPAN * 0.5;
        Self {
            pos: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
            vel: Vec2::new(rng.gen_range(-half..half), rng.gen_range(-half..half)),
            radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
            opacity: PARTICLE_OPACITY_MIN + rng.gen::<f32>() * PARTICLE_OPACITY_SPAN,
        }
    }
}

/// Advance a particle by one frame of velocity, reflecting off the edges of
/// `[0, bounds.x] x [0, bounds.y]`.
///
/// An axis whose candidate coordinate leaves the range gets its velocity
/// negated and the coordinate mirrored back across the crossed edge; the
/// other axis is left alone.
pub fn step(p: &mut Particle, bounds: Vec2) {
    let (x, flip_x) = reflect_axis(p.pos.x + p.vel.x, bounds.x);
    let (y, flip_y) = reflect_axis(p.pos.y + p.vel.y, bounds.y);
    if flip_x {
        p.vel.x = -p.vel.x;
    }
    if flip_y {
        p.vel.y = -p.vel.y;
    }
    p.pos = Vec2::new(x, y);
}

#[inline]
fn reflect_axis(candidate: f32, extent: f32) -> (f32, bool) {
    let extent = extent.max(0.0);
    if candidate < 0.0 {
        ((-candidate).min(extent), true)
    } else if candidate > extent {
        // clamp covers velocities larger than the extent and shrunken canvases
        ((2.0 * extent - candidate).clamp(0.0, extent), true)
    } else {
        (candidate, false)
    }
}

/// Stroke alpha for a link between two particles `distance` apart, or `None`
/// when they are too far apart to be linked.
#[inline]
pub fn link_alpha(distance: f32, max_distance: f32, max_alpha: f32) -> Option<f32> {
    (distance < max_distance).then(|| max_alpha * (max_distance - distance) / max_distance)
}

/// A proximity connection to draw this frame. `pair` is `(i, j)` with `i < j`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub pair: (usize, usize),
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub link_distance: f32,
    pub link_alpha: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            link_distance: LINK_DISTANCE,
            link_alpha: LINK_ALPHA_MAX,
        }
    }
}

/// Fixed population of particles over a resizable surface.
pub struct Field {
    pub params: FieldParams,
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl Field {
    pub fn new(params: FieldParams, width: f32, height: f32) -> Self {
        Self {
            params,
            particles: Vec::new(),
            bounds: Vec2::new(width, height),
        }
    }

    /// Build a field around a hand-placed population.
    pub fn with_particles(params: FieldParams, bounds: Vec2, particles: Vec<Particle>) -> Self {
        Self {
            params,
            particles,
            bounds,
        }
    }

    /// Discard any existing particles and seed `params.count` new ones over
    /// the current bounds.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let bounds = self.bounds;
        self.particles = (0..self.params.count)
            .map(|_| Particle::random(&mut *rng, bounds))
            .collect();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Update the surface size. Particles are not moved; anything left outside
    /// is reflected back in by the next `step`. Returns whether the size changed.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let next = Vec2::new(width, height);
        if next == self.bounds {
            return false;
        }
        self.bounds = next;
        true
    }

    pub fn step(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            step(p, bounds);
        }
    }

    /// Visit every linked pair once. Small populations use the full pair scan;
    /// large ones bucket particles into a grid of link-distance cells first.
    pub fn for_each_link(&self, mut f: impl FnMut(Link)) {
        if self.particles.len() < GRID_MIN_PARTICLES {
            self.links_by_scan(&mut f);
        } else {
            self.links_by_grid(&mut f);
        }
    }

    pub fn links_by_scan(&self, f: &mut impl FnMut(Link)) {
        let n = self.particles.len();
        for i in 0..n {
            for j in (i + 1)..n {
                self.emit_link(i, j, f);
            }
        }
    }

    pub fn links_by_grid(&self, f: &mut impl FnMut(Link)) {
        let cell = self.params.link_distance.max(1.0);
        let key = |p: Vec2| ((p.x / cell).floor() as i32, (p.y / cell).floor() as i32);

        let mut grid: FnvHashMap<(i32, i32), SmallVec<[usize; 8]>> = FnvHashMap::default();
        for (i, p) in self.particles.iter().enumerate() {
            grid.entry(key(p.pos)).or_default().push(i);
        }

        for (i, p) in self.particles.iter().enumerate() {
            let (cx, cy) = key(p.pos);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    let Some(bucket) = grid.get(&(cx + dx, cy + dy)) else {
                        continue;
                    };
                    for &j in bucket.iter().filter(|&&j| j > i) {
                        self.emit_link(i, j, f);
                    }
                }
            }
        }
    }

    #[inline]
    fn emit_link(&self, i: usize, j: usize, f: &mut impl FnMut(Link)) {
        let a = self.particles[i].pos;
        let b = self.particles[j].pos;
        if let Some(alpha) =
            link_alpha(a.distance(b), self.params.link_distance, self.params.link_alpha)
        {
            f(Link {
                pair: (i, j),
                from: a,
                to: b,
                alpha,
            });
        }
    }
}
