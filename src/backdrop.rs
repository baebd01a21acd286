use crate::constants::*;
use glam::Vec2;

// Transform math for the reactive background. Each decorative element keeps
// a pointer-driven and a scroll-driven contribution; `ElementTransform::css`
// is the one place they are combined.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Group {
    Sphere,
    Shape,
    Mote,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::Sphere, Group::Shape, Group::Mote];

    pub fn selector(self) -> &'static str {
        match self {
            Group::Sphere => SPHERE_SELECTOR,
            Group::Shape => SHAPE_SELECTOR,
            Group::Mote => MOTE_SELECTOR,
        }
    }

    /// Per-index response ramp: later elements move further.
    #[inline]
    pub fn intensity(self, index: usize) -> f32 {
        let i = index as f32;
        match self {
            Group::Sphere => SPHERE_INTENSITY_BASE + i * SPHERE_INTENSITY_STEP,
            Group::Shape => SHAPE_INTENSITY_BASE + i * SHAPE_INTENSITY_STEP,
            Group::Mote => MOTE_INTENSITY_BASE + i * MOTE_INTENSITY_STEP,
        }
    }
}

/// Map a viewport pixel position to `[-1, 1]` on both axes. A degenerate
/// viewport maps everything to the centre.
#[inline]
pub fn normalize_pointer(pos: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    pos / viewport * 2.0 - Vec2::ONE
}

/// Fraction of the scrollable height traversed, 0 when nothing scrolls.
#[inline]
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f32 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0) as f32
}

/// +1 for even indices, -1 for odd ones.
#[inline]
pub fn direction(index: usize) -> f32 {
    if index % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rotation {
    Planar(f32),
    Tilt { x: f32, y: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPart {
    pub translate: Vec2,
    pub rotation: Option<Rotation>,
    pub scale: f32,
    pub opacity: Option<f32>,
}

pub fn pointer_part(group: Group, index: usize, n: Vec2) -> PointerPart {
    let k = group.intensity(index);
    let spread = n.x.abs() + n.y.abs();
    match group {
        Group::Sphere => PointerPart {
            translate: n * SPHERE_TRANSLATE_PX * k,
            rotation: Some(Rotation::Planar((n.x + n.y) * SPHERE_ROTATE_DEG)),
            scale: 1.0 + spread * SPHERE_SCALE_GAIN,
            opacity: None,
        },
        Group::Shape => PointerPart {
            translate: n * SHAPE_TRANSLATE_PX * k,
            rotation: Some(Rotation::Tilt {
                x: n.y * SHAPE_TILT_DEG * k,
                y: n.x * SHAPE_TILT_DEG * k,
            }),
            scale: 1.0 + spread * SHAPE_SCALE_GAIN,
            opacity: None,
        },
        Group::Mote => PointerPart {
            translate: n * MOTE_TRANSLATE_PX * k,
            rotation: None,
            scale: 1.0 + spread * MOTE_SCALE_GAIN,
            opacity: Some((MOTE_OPACITY_BASE + (n.x + n.y).abs() * MOTE_OPACITY_GAIN).min(1.0)),
        },
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollPart {
    pub drift_y: Option<f32>,
    pub rotate_z: Option<f32>,
}

pub fn scroll_part(group: Group, index: usize, progress: f32) -> ScrollPart {
    let d = progress * direction(index);
    match group {
        Group::Sphere => ScrollPart {
            drift_y: Some(d * SPHERE_SCROLL_DRIFT_PX),
            rotate_z: Some(d * SPHERE_SCROLL_ROTATE_DEG),
        },
        Group::Shape => ScrollPart {
            drift_y: None,
            rotate_z: Some(d * SHAPE_SCROLL_ROTATE_DEG),
        },
        Group::Mote => ScrollPart {
            drift_y: Some(d * MOTE_SCROLL_DRIFT_PX),
            rotate_z: None,
        },
    }
}

/// Both contributions for one element; either may still be unset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementTransform {
    pub pointer: Option<PointerPart>,
    pub scroll: Option<ScrollPart>,
}

impl ElementTransform {
    /// CSS `transform` value: pointer terms first, scroll terms after.
    pub fn css(&self) -> String {
        let mut terms: Vec<String> = Vec::with_capacity(6);
        if let Some(p) = &self.pointer {
            terms.push(format!("translate({:.3}px, {:.3}px)", p.translate.x, p.translate.y));
            match p.rotation {
                Some(Rotation::Planar(deg)) => terms.push(format!("rotate({:.3}deg)", deg)),
                Some(Rotation::Tilt { x, y }) => {
                    terms.push(format!("rotateX({:.3}deg)", x));
                    terms.push(format!("rotateY({:.3}deg)", y));
                }
                None => {}
            }
            terms.push(format!("scale({:.3})", p.scale));
        }
        if let Some(s) = &self.scroll {
            if let Some(dy) = s.drift_y {
                terms.push(format!("translateY({:.3}px)", dy));
            }
            if let Some(rz) = s.rotate_z {
                terms.push(format!("rotateZ({:.3}deg)", rz));
            }
        }
        terms.join(" ")
    }

    pub fn opacity(&self) -> Option<f32> {
        self.pointer.and_then(|p| p.opacity)
    }
}
