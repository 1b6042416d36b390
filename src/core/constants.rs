// Page-wide tuning constants. Everything the page scripts hard-code lives here.

// ---------------- Atmospheric particle field ----------------
pub const PARTICLE_COUNT: usize = 50;
// Half-width of the symmetric velocity range (px per frame)
pub const PARTICLE_SPEED: f32 = 0.25;
pub const PARTICLE_RADIUS_MIN: f32 = 100.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 200.0;
// How far past the viewport a particle may travel before bouncing
pub const PARTICLE_BOUNCE_MARGIN: f32 = 100.0;
pub const PARTICLE_ALPHA: f32 = 0.15;
// Hue, saturation %, lightness %
pub const PARTICLE_PALETTE: [[f32; 3]; 3] = [
    [225.0, 100.0, 60.0], // bright blue
    [260.0, 80.0, 60.0],  // purple
    [180.0, 80.0, 50.0],  // teal
];
// Deep navy trail fill painted under the particles every frame
pub const TRAIL_FILL_RGB: [u8; 3] = [10, 17, 40];
pub const TRAIL_FILL_ALPHA: f32 = 0.25;

// ---------------- Wireframe scene ----------------
pub const NOISE_COUNT: usize = 20;
pub const NOISE_RING_MIN: f32 = 4.0;
pub const NOISE_RING_SPAN: f32 = 5.0;
pub const NOISE_VERTICAL_SPREAD: f32 = 8.0;
pub const NOISE_FLOAT_AMPLITUDE: f32 = 0.5;
pub const NOISE_SPIN_RANGE: f32 = 0.01; // full width, centered on zero (rad per frame)
pub const NOISE_DRIFT_MIN: f32 = 0.002;
pub const NOISE_DRIFT_SPAN: f32 = 0.003;
pub const NOISE_PHASE_SPAN: f32 = 100.0;

pub const NOISE_BRIGHT_COLOR: u32 = 0x60A5FA;
pub const NOISE_BRIGHT_OPACITY: f32 = 0.6;
pub const NOISE_DIM_COLOR: u32 = 0x93C5FD;
pub const NOISE_DIM_OPACITY: f32 = 0.3;

pub const CORE_COLOR: u32 = 0x2E5CFF;
pub const CORE_SECONDARY_COLOR: u32 = 0x4B73FF;

// Camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_Z: f32 = 12.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Exponential-squared depth fog
pub const FOG_COLOR: u32 = 0x020817;
pub const FOG_DENSITY: f32 = 0.05;

// Pointer tilt (radians per unit of normalized pointer offset)
pub const TILT_GAIN: f32 = 0.05;

// Glow sprite
pub const GLOW_BASE_SCALE: f32 = 7.0;
pub const GLOW_PULSE: f32 = 0.5;
pub const GLOW_PULSE_RATE: f32 = 2.0;
pub const GLOW_INITIAL_SCALE: f32 = 8.0;
pub const GLOW_OPACITY: f32 = 0.8;
pub const GLOW_TEXTURE_SIZE: u32 = 64;

// Edges whose faces meet at less than this angle are dropped
pub const EDGE_THRESHOLD_DEG: f32 = 1.0;

// ---------------- Page interactions ----------------
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ACTIVE_CLASS: &str = "active";
pub const FORM_SENDING_MS: f64 = 1500.0;
pub const FORM_SENT_MS: f64 = 3000.0;
pub const SCENE_START_DELAY_MS: i32 = 100;

#[inline]
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
