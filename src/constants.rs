/// Motion and timing tuning constants for both animators.
///
/// Distances are CSS pixels, angles are degrees, times are milliseconds and
/// per-frame rates assume one step per display refresh.

// ---------------- Cursor companion ----------------

// Where the companion sits before the first pointer move (off-screen)
pub const COMPANION_START_X: f32 = -100.0;
pub const COMPANION_START_Y: f32 = -100.0;

pub const FOLLOW_BLEND: f32 = 0.12; // position easing per frame
pub const ROTATION_BLEND: f32 = 0.1; // rotation easing per frame
pub const ROTATION_PER_PX: f32 = 0.5; // target tilt per px of horizontal lag
pub const ROTATION_LIMIT_DEG: f32 = 25.0;

pub const MOVING_THRESHOLD_PX: f32 = 1.0;

// Eye offset = min(|d|^EXPONENT * GAIN, MAX)
pub const EYE_OFFSET_EXPONENT: f32 = 1.0;
pub const EYE_OFFSET_GAIN: f32 = 0.15;
pub const EYE_OFFSET_MAX: f32 = 6.0;
pub const EYE_NOISE_THRESHOLD_PX: f32 = 0.5; // eyes frozen below this lag

pub const BLINK_FIRST_DELAY_MS: f64 = 2000.0;
pub const BLINK_INTERVAL_MIN_MS: f64 = 2000.0;
pub const BLINK_INTERVAL_MAX_MS: f64 = 5000.0; // exclusive
pub const BLINK_DURATION_MS: f64 = 150.0;

pub const STARTLE_JUMP_PX: f32 = 80.0;
pub const STARTLE_DURATION_MS: f64 = 300.0;
pub const STARTLE_COOLDOWN_MS: f64 = 1000.0;

// Pose
pub const HOP_OFFSET_PX: f32 = -12.0;
pub const FLOAT_AMPLITUDE_PX: f32 = 4.0;
pub const FLOAT_PERIOD_MS: f64 = 3000.0;
pub const HOVER_SCALE: f32 = 1.1;

// Viewports narrower than this hide the companion (touch-sized layouts)
pub const COMPANION_MIN_VIEWPORT_WIDTH: f32 = 768.0;

// ---------------- Ambient particle field ----------------

pub const PARTICLE_AREA_PER_PARTICLE: f32 = 15000.0; // px² per particle
pub const PARTICLE_MAX_SIZE: f32 = 2.0;
pub const PARTICLE_MAX_SPEED: f32 = 0.25; // per axis, px/frame
pub const ATTRACTION_RADIUS: f32 = 200.0;
pub const ATTRACTION_STRENGTH: f32 = 1.0;
pub const CONNECTION_LINE_WIDTH: f32 = 1.0;

pub const BLOB_COUNT: usize = 3;
pub const BLOB_MIN_RADIUS: f32 = 300.0;
pub const BLOB_RADIUS_SPAN: f32 = 200.0;
pub const BLOB_MAX_SPEED: f32 = 0.25;
pub const BLOB_PULSE_AMPLITUDE: f32 = 30.0; // radius oscillation, px
pub const BLOB_PULSE_RATE: f32 = 0.01; // phase advance, rad/frame
pub const BLOB_BLUR_PX: f32 = 60.0;

// Pointer position assumed before the first move (far off-screen)
pub const POINTER_IDLE_X: f32 = -1000.0;
pub const POINTER_IDLE_Y: f32 = -1000.0;
