use super::constants::*;
use rand::Rng;

/// Translucent color picked from the particle palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    /// CSS color string, e.g. `hsla(225, 100%, 60%, 0.15)`.
    pub fn css(&self) -> String {
        format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
    }
}

/// A soft radial blob drifting across the hero canvas.
///
/// Fields:
/// - `x`, `y`: center in canvas pixels
/// - `vx`, `vy`: displacement applied once per frame
/// - `radius`: outer radius of the gradient disc
/// - `color`: center color; the gradient fades to transparent at `radius`
#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub color: Hsla,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let [h, s, l] = PARTICLE_PALETTE[rng.gen_range(0..PARTICLE_PALETTE.len())];
        Self {
            x: rng.gen::<f32>() * width,
            y: rng.gen::<f32>() * height,
            vx: (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_SPEED,
            vy: (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_SPEED,
            radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
            color: Hsla {
                h,
                s,
                l,
                a: PARTICLE_ALPHA,
            },
        }
    }

    /// Integrate one frame, then flip any axis that is past the padded bounds.
    ///
    /// The flip does not clamp, so a particle may overshoot by at most one
    /// frame's displacement before heading back.
    pub fn step(&mut self, width: f32, height: f32) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < -PARTICLE_BOUNCE_MARGIN || self.x > width + PARTICLE_BOUNCE_MARGIN {
            self.vx = -self.vx;
        }
        if self.y < -PARTICLE_BOUNCE_MARGIN || self.y > height + PARTICLE_BOUNCE_MARGIN {
            self.vy = -self.vy;
        }
    }
}

/// Fixed-size particle collection bound to a surface size.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a new surface size and regenerate every particle.
    pub fn resize<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(rng, self.width, self.height))
            .collect();
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.step(w, h);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// CSS fill used to fade the previous frame.
pub fn trail_fill_css() -> String {
    let [r, g, b] = TRAIL_FILL_RGB;
    format!("rgba({}, {}, {}, {})", r, g, b, TRAIL_FILL_ALPHA)
}
