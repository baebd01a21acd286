/// Tuning constants for the three page effects.
///
/// These constants express intended behavior (populations, thresholds,
/// per-index ramps) and keep magic numbers out of the code.
// Particle field population and motion
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_SPEED_SPAN: f32 = 0.5; // velocity components drawn from [-span/2, span/2)
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;
pub const PARTICLE_RGB: (u8, u8, u8) = (102, 126, 234);

// Proximity links
pub const LINK_DISTANCE: f32 = 150.0;
pub const LINK_ALPHA_MAX: f32 = 0.1; // alpha at zero distance
pub const LINK_WIDTH: f64 = 1.0;
pub const GRID_MIN_PARTICLES: usize = 200; // below this the quadratic pair scan is used

// Particle canvas
pub const CANVAS_ID: &str = "particles-canvas";
pub const CANVAS_OPACITY: &str = "0.6";
pub const CANVAS_Z_INDEX: &str = "1";

// Cursor gating
pub const CURSOR_MIN_VIEWPORT_WIDTH: f64 = 768.0;

// Bubble pool
pub const BUBBLE_CAPACITY: usize = 8;
pub const BUBBLE_SPAWN_INTERVAL_MS: u64 = 150;
pub const BUBBLE_LIFETIME_MS: u64 = 1000;
pub const BUBBLE_ANIMATION: &str = "bubbleFloat 1s ease-out forwards";

// Marker scales (rest / hover / pressed)
pub const MARKER_SCALE_REST: f32 = 1.0;
pub const MARKER_SCALE_HOVER: f32 = 1.5;
pub const MARKER_SCALE_PRESSED: f32 = 0.8;
pub const MARKER_SCALE_HOVER_PRESSED: f32 = 1.2;
pub const GLOW_SCALE_REST: f32 = 1.0;
pub const GLOW_SCALE_HOVER: f32 = 1.3;

// Marker palette
pub const MARKER_COLOR_REST: &str = "#f472b6";
pub const MARKER_COLOR_HOVER: &str = "#ec4899";

// Reactive background: per-group pointer response
pub const SPHERE_INTENSITY_BASE: f32 = 1.0;
pub const SPHERE_INTENSITY_STEP: f32 = 0.2;
pub const SPHERE_TRANSLATE_PX: f32 = 100.0;
pub const SPHERE_ROTATE_DEG: f32 = 45.0;
pub const SPHERE_SCALE_GAIN: f32 = 0.3;

pub const SHAPE_INTENSITY_BASE: f32 = 0.8;
pub const SHAPE_INTENSITY_STEP: f32 = 0.1;
pub const SHAPE_TRANSLATE_PX: f32 = 40.0;
pub const SHAPE_TILT_DEG: f32 = 60.0;
pub const SHAPE_SCALE_GAIN: f32 = 0.2;

pub const MOTE_INTENSITY_BASE: f32 = 1.2;
pub const MOTE_INTENSITY_STEP: f32 = 0.15;
pub const MOTE_TRANSLATE_PX: f32 = 120.0;
pub const MOTE_SCALE_GAIN: f32 = 0.5;
pub const MOTE_OPACITY_BASE: f32 = 0.7;
pub const MOTE_OPACITY_GAIN: f32 = 0.3;

// Reactive background: scroll response at full progress
pub const SPHERE_SCROLL_DRIFT_PX: f32 = 200.0;
pub const SPHERE_SCROLL_ROTATE_DEG: f32 = 720.0;
pub const SHAPE_SCROLL_ROTATE_DEG: f32 = 360.0;
pub const MOTE_SCROLL_DRIFT_PX: f32 = 100.0;

// Reactive background anchors
pub const BACKGROUND_ID: &str = "interactiveBg";
pub const SPHERE_SELECTOR: &str = ".floating-sphere";
pub const SHAPE_SELECTOR: &str = ".geometric-shape";
pub const MOTE_SELECTOR: &str = ".particle";

// Cursor elements
pub const CURSOR_CLASS: &str = "fx-cursor";
pub const CURSOR_GLOW_CLASS: &str = "fx-cursor-glow";
pub const BUBBLE_CLASS: &str = "fx-bubble";
pub const CURSOR_LEFTOVER_SELECTOR: &str = ".fx-cursor, .fx-cursor-glow, .fx-bubble";
pub const INTERACTIVE_SELECTOR: &str = "a, button, .btn, .nav-link, .project-link, .social-link, \
     input, textarea, [role=\"button\"], .card, .project-card, .service-card, .honor-btn";
