// Host-side tests for the cursor trail state: gating, throttle, bubble pool
// and marker transitions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod trail {
    include!("../src/trail.rs");
}

use glam::Vec2;
use instant::{Duration, Instant};
use trail::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn cursor_gated_off_on_narrow_or_touch_devices() {
    assert!(!cursor_enabled(500.0, false));
    assert!(!cursor_enabled(768.0, false));
    assert!(cursor_enabled(769.0, false));
    assert!(cursor_enabled(1920.0, false));
    assert!(!cursor_enabled(1920.0, true));
}

#[test]
fn throttle_admits_one_attempt_per_interval() {
    let t0 = Instant::now();
    let mut throttle = SpawnThrottle::new(ms(150));

    assert!(throttle.try_acquire(t0));
    assert!(!throttle.try_acquire(t0 + ms(100)));
    assert!(!throttle.try_acquire(t0 + ms(149)));
    assert!(throttle.try_acquire(t0 + ms(150)));
    assert!(!throttle.try_acquire(t0 + ms(299)));
    assert!(throttle.try_acquire(t0 + ms(300)));
}

#[test]
fn rapid_moves_spawn_at_most_once_per_window() {
    let t0 = Instant::now();
    let mut trail = Trail::default();

    let spawns = (0..15)
        .filter_map(|i| trail.on_move(Vec2::new(i as f32, 0.0), t0 + ms(i * 10)).spawned)
        .count();
    assert_eq!(spawns, 1);
    assert_eq!(trail.pool().active_count(), 1);
}

#[test]
fn spaced_moves_each_spawn_while_slots_are_free() {
    let t0 = Instant::now();
    let mut trail = Trail::default();

    for i in 0..6u64 {
        let pos = Vec2::new(10.0 * i as f32, 20.0);
        let outcome = trail.on_move(pos, t0 + ms(150 * i));
        assert_eq!(outcome.spawned, Some((i as usize, pos)));
    }
    assert_eq!(trail.pool().active_count(), 6);
}

#[test]
fn pool_never_exceeds_capacity() {
    let t0 = Instant::now();
    let mut trail = Trail::new(Duration::ZERO, ms(10_000));

    let mut spawned = 0;
    for i in 0..100u64 {
        if trail.on_move(Vec2::ZERO, t0 + ms(i)).spawned.is_some() {
            spawned += 1;
        }
        assert!(trail.pool().active_count() <= constants::BUBBLE_CAPACITY);
    }
    assert_eq!(spawned, 8);
    assert_eq!(trail.pool().active_count(), 8);
}

#[test]
fn full_pool_drops_spawns_until_lifetime_ends() {
    let t0 = Instant::now();
    let mut trail = Trail::new(Duration::ZERO, ms(1000));
    for _ in 0..8 {
        assert!(trail.on_move(Vec2::ZERO, t0).spawned.is_some());
    }

    let busy = trail.on_move(Vec2::new(5.0, 5.0), t0 + ms(500));
    assert!(busy.spawned.is_none());
    assert!(busy.released.is_empty());

    let later = trail.on_move(Vec2::new(7.0, 7.0), t0 + ms(1000));
    assert_eq!(later.released.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(later.spawned, Some((0, Vec2::new(7.0, 7.0))));
    assert_eq!(trail.pool().active_count(), 1);
}

#[test]
fn frames_release_bubbles_after_their_lifetime() {
    let t0 = Instant::now();
    let mut trail = Trail::default();
    let pos = Vec2::new(42.0, 24.0);
    assert_eq!(trail.on_move(pos, t0).spawned, Some((0, pos)));

    let slot = trail.pool().slots()[0];
    assert!(slot.active);
    assert_eq!(slot.pos, pos);
    assert_eq!(slot.expires_at, Some(t0 + ms(1000)));

    assert!(trail.on_frame(t0 + ms(999)).is_empty());
    assert_eq!(trail.on_frame(t0 + ms(1000)).as_slice(), &[0]);
    assert_eq!(trail.pool().active_count(), 0);
    assert!(trail.on_frame(t0 + ms(2000)).is_empty());
}

#[test]
fn released_slot_is_reused_first() {
    let t0 = Instant::now();
    let mut pool = BubblePool::new(ms(1000));
    assert_eq!(pool.claim(Vec2::ZERO, t0), Some(0));
    assert_eq!(pool.claim(Vec2::ZERO, t0 + ms(500)), Some(1));

    assert_eq!(pool.release_expired(t0 + ms(1200)).as_slice(), &[0]);
    assert_eq!(pool.claim(Vec2::ONE, t0 + ms(1200)), Some(0));
    assert_eq!(pool.active_count(), 2);
}

#[test]
fn marker_scale_follows_hover_and_press() {
    let mut m = MarkerState::default();
    assert_eq!(m.scale(), 1.0);
    assert_eq!(m.glow_scale(), 1.0);
    assert_eq!(m.color(), "#f472b6");

    m.pressed = true;
    assert_eq!(m.scale(), 0.8);
    m.pressed = false;
    assert_eq!(m.scale(), 1.0);

    m.hovering = true;
    assert_eq!(m.scale(), 1.5);
    assert_eq!(m.glow_scale(), 1.3);
    assert_eq!(m.color(), "#ec4899");

    m.pressed = true;
    assert_eq!(m.scale(), 1.2);
    m.pressed = false;
    assert_eq!(m.scale(), 1.5);

    m.hovering = false;
    assert_eq!(m.scale(), 1.0);
    assert_eq!(m.color(), "#f472b6");
}

#[test]
fn marker_visibility_toggles_opacity() {
    let mut m = MarkerState::default();
    assert_eq!(m.opacity(), "1");
    m.visible = false;
    assert_eq!(m.opacity(), "0");
    m.visible = true;
    assert_eq!(m.opacity(), "1");
}
