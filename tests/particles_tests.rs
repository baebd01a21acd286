// Host-side tests for the particle simulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod particles {
    include!("../src/particles.rs");
}

use glam::Vec2;
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn dot(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
    Particle {
        pos: Vec2::new(x, y),
        vel: Vec2::new(vx, vy),
        radius: 2.0,
        opacity: 0.5,
    }
}

fn in_bounds(p: &Particle, bounds: Vec2) -> bool {
    p.pos.x >= 0.0 && p.pos.x <= bounds.x && p.pos.y >= 0.0 && p.pos.y <= bounds.y
}

fn sorted_links(links: Vec<Link>) -> Vec<Link> {
    let mut links = links;
    links.sort_by_key(|l| l.pair);
    links
}

#[test]
fn initialize_seeds_population_within_ranges() {
    let mut field = Field::new(FieldParams::default(), 800.0, 600.0);
    field.initialize(&mut StdRng::seed_from_u64(7));

    assert_eq!(field.particles().len(), 50);
    for p in field.particles() {
        assert!(in_bounds(p, field.bounds()));
        assert!(p.vel.x >= -0.25 && p.vel.x < 0.25);
        assert!(p.vel.y >= -0.25 && p.vel.y < 0.25);
        assert!(p.radius >= 1.0 && p.radius < 3.0);
        assert!(p.opacity >= 0.2 && p.opacity < 0.7);
    }
}

#[test]
fn initialize_reseeds_instead_of_appending() {
    let mut field = Field::new(FieldParams::default(), 800.0, 600.0);
    let mut rng = StdRng::seed_from_u64(1);
    field.initialize(&mut rng);
    let first = field.particles().to_vec();
    field.initialize(&mut rng);

    assert_eq!(field.particles().len(), 50);
    assert_ne!(first, field.particles());
}

#[test]
fn particles_stay_in_bounds_over_many_frames() {
    let mut field = Field::new(FieldParams::default(), 40.0, 30.0);
    field.initialize(&mut StdRng::seed_from_u64(99));

    for _ in 0..10_000 {
        field.step();
        for p in field.particles() {
            assert!(in_bounds(p, field.bounds()), "escaped: {:?}", p.pos);
        }
    }
}

#[test]
fn crossing_right_edge_flips_only_x() {
    let mut p = dot(799.9, 300.0, 0.5, 0.2);
    step(&mut p, Vec2::new(800.0, 600.0));

    assert_eq!(p.vel, Vec2::new(-0.5, 0.2));
    assert!((p.pos.x - 799.6).abs() < 1e-3);
    assert!((p.pos.y - 300.2).abs() < 1e-3);
}

#[test]
fn crossing_top_left_corner_flips_both() {
    let mut p = dot(0.1, 0.05, -0.3, -0.1);
    step(&mut p, Vec2::new(800.0, 600.0));

    assert_eq!(p.vel, Vec2::new(0.3, 0.1));
    assert!((p.pos.x - 0.2).abs() < 1e-5);
    assert!((p.pos.y - 0.05).abs() < 1e-5);
}

#[test]
fn interior_motion_keeps_velocity() {
    let mut p = dot(400.0, 300.0, 1.0, -1.0);
    step(&mut p, Vec2::new(800.0, 600.0));

    assert_eq!(p.vel, Vec2::new(1.0, -1.0));
    assert_eq!(p.pos, Vec2::new(401.0, 299.0));
}

#[test]
fn landing_exactly_on_edge_is_not_a_crossing() {
    let mut p = dot(799.5, 0.5, 0.5, -0.5);
    step(&mut p, Vec2::new(800.0, 600.0));

    assert_eq!(p.pos, Vec2::new(800.0, 0.0));
    assert_eq!(p.vel, Vec2::new(0.5, -0.5));
}

#[test]
fn extreme_velocity_still_ends_in_range() {
    let bounds = Vec2::new(100.0, 100.0);
    let mut p = dot(10.0, 10.0, 5000.0, -5000.0);
    step(&mut p, bounds);

    assert!(in_bounds(&p, bounds));
    assert_eq!(p.vel, Vec2::new(-5000.0, 5000.0));
}

#[test]
fn shrinking_does_not_move_particles_until_next_step() {
    let params = FieldParams::default();
    let mut field = Field::with_particles(
        params,
        Vec2::new(800.0, 600.0),
        vec![dot(700.0, 500.0, 0.1, 0.1)],
    );

    assert!(field.resize(100.0, 100.0));
    assert_eq!(field.particles()[0].pos, Vec2::new(700.0, 500.0));

    field.step();
    assert!(in_bounds(&field.particles()[0], field.bounds()));
}

#[test]
fn resize_to_same_dimensions_is_idempotent() {
    let mut field = Field::new(FieldParams::default(), 800.0, 600.0);
    field.initialize(&mut StdRng::seed_from_u64(3));
    let before = field.particles().to_vec();

    assert!(field.resize(1024.0, 768.0));
    assert!(!field.resize(1024.0, 768.0));
    assert_eq!(field.bounds(), Vec2::new(1024.0, 768.0));
    assert_eq!(field.particles(), before.as_slice());
}

#[test]
fn link_alpha_fades_to_zero_at_threshold() {
    let touching = link_alpha(0.0, 150.0, 0.1).unwrap();
    assert!((touching - 0.1).abs() < 1e-7);
    assert_eq!(link_alpha(150.0, 150.0, 0.1), None);
    assert_eq!(link_alpha(220.0, 150.0, 0.1), None);

    let near_edge = link_alpha(149.999, 150.0, 0.1).unwrap();
    assert!(near_edge > 0.0 && near_edge < 1e-4);

    let mut prev = f32::MAX;
    for d in (0..150).map(|d| d as f32) {
        let a = link_alpha(d, 150.0, 0.1).unwrap();
        assert!(a < prev, "alpha not decreasing at d={}", d);
        prev = a;
    }
}

#[test]
fn links_only_join_close_pairs() {
    let field = Field::with_particles(
        FieldParams::default(),
        Vec2::new(800.0, 600.0),
        vec![
            dot(0.0, 0.0, 0.0, 0.0),
            dot(100.0, 0.0, 0.0, 0.0),
            dot(300.0, 0.0, 0.0, 0.0),
            dot(450.0, 0.0, 0.0, 0.0),
        ],
    );
    let mut links = Vec::new();
    field.for_each_link(|l| links.push(l));

    // (2, 3) sit exactly 150 apart and must not link
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].pair, (0, 1));
    assert!((links[0].alpha - 0.1 * 50.0 / 150.0).abs() < 1e-6);
    assert_eq!(links[0].from, Vec2::new(0.0, 0.0));
    assert_eq!(links[0].to, Vec2::new(100.0, 0.0));
}

#[test]
fn dense_default_population_checks_every_pair() {
    let mut field = Field::new(FieldParams::default(), 10.0, 10.0);
    field.initialize(&mut StdRng::seed_from_u64(5));

    let mut count = 0;
    field.for_each_link(|_| count += 1);
    assert_eq!(count, 50 * 49 / 2);
}

#[test]
fn grid_and_scan_produce_the_same_links() {
    let params = FieldParams {
        count: 400,
        ..FieldParams::default()
    };
    let mut field = Field::new(params, 1200.0, 900.0);
    field.initialize(&mut StdRng::seed_from_u64(42));

    let mut scanned = Vec::new();
    field.links_by_scan(&mut |l| scanned.push(l));
    let mut gridded = Vec::new();
    field.links_by_grid(&mut |l| gridded.push(l));
    let mut dispatched = Vec::new();
    field.for_each_link(|l| dispatched.push(l));

    assert!(!scanned.is_empty());
    let scanned = sorted_links(scanned);
    assert_eq!(scanned, sorted_links(gridded));
    assert_eq!(scanned, sorted_links(dispatched));
}
