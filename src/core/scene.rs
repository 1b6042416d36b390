use super::constants::*;
use super::geometry::{self, Triangles};
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::Rng;

/// Normalized pointer offset from the viewport center, -1..1 on both axes, y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn from_client(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Self {
        if viewport_w <= 0.0 || viewport_h <= 0.0 {
            return Self::default();
        }
        Self {
            x: (client_x / viewport_w) * 2.0 - 1.0,
            y: -(client_y / viewport_h) * 2.0 + 1.0,
        }
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn scene_default(width: f32, height: f32) -> Self {
        let mut cam = Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        };
        cam.set_viewport(width, height);
        cam
    }

    /// Track the container size. A degenerate size keeps the previous aspect.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Line color plus opacity, as handed to the line pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub rgb: [f32; 3],
    pub opacity: f32,
}

impl LineStyle {
    pub fn new(hex: u32, opacity: f32) -> Self {
        Self {
            rgb: hex_rgb(hex),
            opacity,
        }
    }
}

/// One of the three nested icosahedral shells at the center of the scene.
#[derive(Clone, Debug)]
pub struct CoreShell {
    pub radius: f32,
    pub detail: u32,
    pub style: LineStyle,
    pub rotation: Vec3,
}

impl CoreShell {
    pub fn triangles(&self) -> Triangles {
        geometry::icosahedron(self.radius, self.detail)
    }
}

/// Nucleus, middle shell, outer geodesic shell; innermost is brightest.
pub fn core_shells() -> [CoreShell; 3] {
    [
        CoreShell {
            radius: 0.8,
            detail: 0,
            style: LineStyle::new(CORE_COLOR, 0.9),
            rotation: Vec3::ZERO,
        },
        CoreShell {
            radius: 1.4,
            detail: 0,
            style: LineStyle::new(CORE_SECONDARY_COLOR, 0.5),
            rotation: Vec3::ZERO,
        },
        CoreShell {
            radius: 2.0,
            detail: 1,
            style: LineStyle::new(CORE_COLOR, 0.25),
            rotation: Vec3::ZERO,
        },
    ]
}

/// Shell Euler angles (XYZ) at elapsed time `t` seconds.
#[inline]
pub fn shell_rotations(t: f32) -> [Vec3; 3] {
    [
        Vec3::new(0.0, t * 0.2, t * 0.1),
        Vec3::new((t * 0.5).sin() * 0.1, -t * 0.15, 0.0),
        Vec3::new(0.0, t * 0.05, 0.0),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Cube,
    Tetra,
    Hexagon,
    Card,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Cube,
        ShapeKind::Tetra,
        ShapeKind::Hexagon,
        ShapeKind::Card,
    ];

    pub fn index(self) -> usize {
        match self {
            ShapeKind::Cube => 0,
            ShapeKind::Tetra => 1,
            ShapeKind::Hexagon => 2,
            ShapeKind::Card => 3,
        }
    }

    pub fn triangles(self) -> Triangles {
        match self {
            ShapeKind::Cube => geometry::cuboid(0.5, 0.5, 0.5),
            ShapeKind::Tetra => geometry::tetrahedron(0.6),
            ShapeKind::Hexagon => geometry::cylinder(0.4, 0.4, 0.1, 6),
            ShapeKind::Card => geometry::cuboid(0.1, 0.8, 0.5),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpacityTier {
    Bright,
    Dim,
}

impl OpacityTier {
    pub fn style(self) -> LineStyle {
        match self {
            OpacityTier::Bright => LineStyle::new(NOISE_BRIGHT_COLOR, NOISE_BRIGHT_OPACITY),
            OpacityTier::Dim => LineStyle::new(NOISE_DIM_COLOR, NOISE_DIM_OPACITY),
        }
    }
}

/// A small floating wireframe on the ring around the core.
///
/// `origin` is captured at construction and never changes; `position.y` is
/// recomputed from it every frame while `rotation` accumulates `spin`.
#[derive(Clone, Debug)]
pub struct NoiseShape {
    pub kind: ShapeKind,
    pub tier: OpacityTier,
    pub origin: Vec3,
    pub position: Vec3,
    pub rotation: Vec3,
    pub spin: Vec2,
    pub drift_speed: f32,
    pub offset: f32,
}

impl NoiseShape {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
        let tier = if rng.gen::<f32>() > 0.5 {
            OpacityTier::Bright
        } else {
            OpacityTier::Dim
        };
        let angle = rng.gen::<f32>() * std::f32::consts::TAU;
        let radius = NOISE_RING_MIN + rng.gen::<f32>() * NOISE_RING_SPAN;
        let y = (rng.gen::<f32>() - 0.5) * NOISE_VERTICAL_SPREAD;
        let origin = Vec3::new(angle.cos() * radius, y, angle.sin() * radius);
        let rotation = Vec3::new(
            rng.gen::<f32>() * std::f32::consts::PI,
            rng.gen::<f32>() * std::f32::consts::PI,
            0.0,
        );
        let drift_speed = NOISE_DRIFT_MIN + rng.gen::<f32>() * NOISE_DRIFT_SPAN;
        let spin = Vec2::new(
            (rng.gen::<f32>() - 0.5) * NOISE_SPIN_RANGE,
            (rng.gen::<f32>() - 0.5) * NOISE_SPIN_RANGE,
        );
        let offset = rng.gen::<f32>() * NOISE_PHASE_SPAN;
        Self {
            kind,
            tier,
            origin,
            position: origin,
            rotation,
            spin,
            drift_speed,
            offset,
        }
    }

    #[inline]
    pub fn float_y(&self, t: f32) -> f32 {
        self.origin.y + (t + self.offset).sin() * NOISE_FLOAT_AMPLITUDE
    }

    pub fn model(&self) -> Mat4 {
        Mat4::from_translation(self.position) * euler_xyz(self.rotation)
    }
}

#[inline]
pub fn glow_scale(t: f32) -> f32 {
    GLOW_BASE_SCALE + (t * GLOW_PULSE_RATE).sin() * GLOW_PULSE
}

#[inline]
fn euler_xyz(r: Vec3) -> Mat4 {
    Mat4::from_euler(EulerRot::XYZ, r.x, r.y, r.z)
}

/// Everything the wireframe renderer draws, stepped once per animation frame.
#[derive(Clone, Debug)]
pub struct WireframeScene {
    pub shells: [CoreShell; 3],
    pub noise: Vec<NoiseShape>,
    /// Whole-scene Euler angles derived from the pointer.
    pub tilt: Vec3,
    pub glow_scale: f32,
}

impl WireframeScene {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            shells: core_shells(),
            noise: (0..NOISE_COUNT).map(|_| NoiseShape::random(rng)).collect(),
            tilt: Vec3::ZERO,
            glow_scale: GLOW_INITIAL_SCALE,
        }
    }

    /// Advance to elapsed time `t` (seconds).
    ///
    /// Shell angles, tilt, float height and glow scale are set from `t` and
    /// `pointer` alone. Noise rotation is the one accumulated quantity: each
    /// call adds one frame of `spin`.
    pub fn update(&mut self, t: f32, pointer: PointerState) {
        for (shell, rot) in self.shells.iter_mut().zip(shell_rotations(t)) {
            shell.rotation = rot;
        }
        self.tilt = Vec3::new(-pointer.y * TILT_GAIN, pointer.x * TILT_GAIN, 0.0);
        for shape in &mut self.noise {
            shape.position.y = shape.float_y(t);
            shape.rotation.x += shape.spin.x;
            shape.rotation.y += shape.spin.y;
        }
        self.glow_scale = glow_scale(t);
    }

    pub fn scene_model(&self) -> Mat4 {
        euler_xyz(self.tilt)
    }

    pub fn shell_model(&self, i: usize) -> Mat4 {
        self.scene_model() * euler_xyz(self.shells[i].rotation)
    }

    pub fn noise_model(&self, i: usize) -> Mat4 {
        self.scene_model() * self.noise[i].model()
    }
}
