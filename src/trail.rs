use crate::constants::*;
use glam::Vec2;
use instant::{Duration, Instant};
use smallvec::SmallVec;

// State behind the cursor replacement: marker hover/press/visibility, the
// bubble spawn throttle and the fixed-capacity bubble pool. `cursor.rs` owns
// the DOM side and mirrors these values onto elements.

pub type Released = SmallVec<[usize; BUBBLE_CAPACITY]>;

/// Startup capability check: narrow viewports and touch devices keep the
/// native cursor.
#[inline]
pub fn cursor_enabled(viewport_width: f64, touch_capable: bool) -> bool {
    viewport_width > CURSOR_MIN_VIEWPORT_WIDTH && !touch_capable
}

/// Timestamp-based rate limit: at most one accepted attempt per `interval`.
#[derive(Clone, Debug)]
pub struct SpawnThrottle {
    interval: Duration,
    last: Option<Instant>,
}

impl SpawnThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Accepts and records `now` when at least `interval` has passed since
    /// the last accepted attempt.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now < last + self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BubbleSlot {
    pub active: bool,
    pub pos: Vec2,
    pub expires_at: Option<Instant>,
}

/// Fixed set of reusable bubble sprites. A slot is busy from `claim` until
/// its deadline passes and `release_expired` hands it back.
#[derive(Clone, Debug)]
pub struct BubblePool {
    slots: [BubbleSlot; BUBBLE_CAPACITY],
    lifetime: Duration,
}

impl BubblePool {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            slots: [BubbleSlot::default(); BUBBLE_CAPACITY],
            lifetime,
        }
    }

    pub fn slots(&self) -> &[BubbleSlot] {
        &self.slots
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    /// Take the first free slot for a bubble at `pos`. A full pool drops the
    /// request.
    pub fn claim(&mut self, pos: Vec2, now: Instant) -> Option<usize> {
        let (i, slot) = self.slots.iter_mut().enumerate().find(|(_, s)| !s.active)?;
        *slot = BubbleSlot {
            active: true,
            pos,
            expires_at: Some(now + self.lifetime),
        };
        Some(i)
    }

    /// Free every slot whose lifetime has elapsed and report which ones.
    pub fn release_expired(&mut self, now: Instant) -> Released {
        let mut released = Released::new();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if !slot.active {
                continue;
            }
            if slot.expires_at.map_or(true, |t| now >= t) {
                slot.active = false;
                slot.expires_at = None;
                released.push(i);
            }
        }
        released
    }
}

/// Discrete marker state; scale, glow and fill are derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerState {
    pub hovering: bool,
    pub pressed: bool,
    pub visible: bool,
}

impl Default for MarkerState {
    fn default() -> Self {
        Self {
            hovering: false,
            pressed: false,
            visible: true,
        }
    }
}

impl MarkerState {
    pub fn scale(&self) -> f32 {
        match (self.hovering, self.pressed) {
            (false, false) => MARKER_SCALE_REST,
            (true, false) => MARKER_SCALE_HOVER,
            (false, true) => MARKER_SCALE_PRESSED,
            (true, true) => MARKER_SCALE_HOVER_PRESSED,
        }
    }

    pub fn glow_scale(&self) -> f32 {
        if self.hovering {
            GLOW_SCALE_HOVER
        } else {
            GLOW_SCALE_REST
        }
    }

    pub fn color(&self) -> &'static str {
        if self.hovering {
            MARKER_COLOR_HOVER
        } else {
            MARKER_COLOR_REST
        }
    }

    pub fn opacity(&self) -> &'static str {
        if self.visible {
            "1"
        } else {
            "0"
        }
    }
}

/// Result of one pointer move: slots whose lifetime ended (reset them) and
/// the slot that was just spawned, if any.
#[derive(Debug, Default)]
pub struct MoveOutcome {
    pub released: Released,
    pub spawned: Option<(usize, Vec2)>,
}

pub struct Trail {
    pub marker: MarkerState,
    throttle: SpawnThrottle,
    pool: BubblePool,
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(BUBBLE_SPAWN_INTERVAL_MS),
            Duration::from_millis(BUBBLE_LIFETIME_MS),
        )
    }
}

impl Trail {
    pub fn new(spawn_interval: Duration, bubble_lifetime: Duration) -> Self {
        Self {
            marker: MarkerState::default(),
            throttle: SpawnThrottle::new(spawn_interval),
            pool: BubblePool::new(bubble_lifetime),
        }
    }

    pub fn pool(&self) -> &BubblePool {
        &self.pool
    }

    /// Pointer moved to `pos`. Never waits on a busy pool: when the throttle
    /// admits the attempt but every slot is taken, nothing spawns.
    pub fn on_move(&mut self, pos: Vec2, now: Instant) -> MoveOutcome {
        let released = self.pool.release_expired(now);
        let spawned = if self.throttle.try_acquire(now) {
            self.pool.claim(pos, now).map(|i| (i, pos))
        } else {
            None
        };
        MoveOutcome { released, spawned }
    }

    /// Per-frame housekeeping: expire finished bubbles.
    pub fn on_frame(&mut self, now: Instant) -> Released {
        self.pool.release_expired(now)
    }
}
