// Tuning constants for the gesture -> shape -> particle pipeline.
//
// These express intended behavior (counts, ranges, smoothing factors) and
// keep magic numbers out of the code.

// Particle field
pub const PARTICLE_COUNT: usize = 10_000;
pub const SPAWN_EXTENT: f32 = 100.0; // initial cloud spans +/- this per axis
pub const INITIAL_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

// Interpolation factors (fraction of remaining distance closed per tick)
pub const LERP_DEFAULT: f32 = 0.05;
pub const LERP_SCATTER: f32 = 0.1; // scatter converges faster for the blast effect
pub const LERP_COLOR: f32 = 0.05;

// Shape generation
pub const SPHERE_RADIUS: f32 = 30.0;
pub const SCATTER_RANGE: f32 = 300.0; // full cube edge, points land in +/- range/2

// Text rasterization and sampling
pub const TEXT_CANVAS_SIZE: u32 = 2048;
pub const TEXT_SAMPLE_STRIDE: u32 = 8;
pub const TEXT_SCALE: f32 = 0.12; // pixel -> scene-unit scale
pub const TEXT_LUMA_THRESHOLD: u8 = 128;
pub const TEXT_FONT: &str = "bold 340px sans-serif";

// Words rendered by the text shapes; the last two exercise non-Latin glyphs.
pub const HELLO_TEXT: &str = "Hello";
pub const GEMINI_TEXT: &str = "Gemini";
pub const GREAT_TEXT: &str = "真棒";
pub const GREETING_TEXT: &str = "你好";

// Per-shape uniform particle colors
pub const SPHERE_COLOR: [f32; 3] = [0.35, 0.55, 0.95];
pub const HELLO_COLOR: [f32; 3] = [0.95, 0.8, 0.25];
pub const GEMINI_COLOR: [f32; 3] = [0.65, 0.4, 0.95];
pub const GREAT_COLOR: [f32; 3] = [0.3, 0.9, 0.4];
pub const GREETING_COLOR: [f32; 3] = [0.95, 0.4, 0.55];
pub const SCATTER_COLOR: [f32; 3] = [0.95, 0.55, 0.2];

// Gesture classification
pub const OPEN_PALM_MIN_RAISED: usize = 4;

// Minimum time between gesture-driven shape switches
pub const GESTURE_SWITCH_MIN_INTERVAL_MS: f64 = 100.0;
