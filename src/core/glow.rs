// Procedural texture for the glow sprite: a soft blue disc fading out.

/// (offset, [r, g, b, a]) with channels in 0..1, sorted by offset.
pub const GLOW_STOPS: [(f32, [f32; 4]); 3] = [
    (0.0, [46.0 / 255.0, 92.0 / 255.0, 1.0, 0.4]),
    (0.5, [46.0 / 255.0, 92.0 / 255.0, 1.0, 0.1]),
    (1.0, [0.0, 0.0, 0.0, 0.0]),
];

/// Interpolation across `stops` in premultiplied space, clamped at both
/// ends, returned as straight RGBA. A stop fading to transparent keeps its
/// color instead of darkening toward black.
pub fn gradient_at(stops: &[(f32, [f32; 4])], t: f32) -> [f32; 4] {
    let Some(first) = stops.first() else {
        return [0.0; 4];
    };
    if t <= first.0 {
        return first.1;
    }
    for pair in stops.windows(2) {
        let (o0, c0) = pair[0];
        let (o1, c1) = pair[1];
        if t <= o1 {
            let span = (o1 - o0).max(f32::EPSILON);
            let k = (t - o0) / span;
            let a = c0[3] + (c1[3] - c0[3]) * k;
            if a <= 0.0 {
                return [0.0; 4];
            }
            let rgb = [0, 1, 2].map(|i| {
                let (p0, p1) = (c0[i] * c0[3], c1[i] * c1[3]);
                (p0 + (p1 - p0) * k) / a
            });
            return [rgb[0], rgb[1], rgb[2], a];
        }
    }
    stops[stops.len() - 1].1
}

/// Square RGBA8 image of the radial gradient, sampled at pixel centers.
pub fn radial_gradient_rgba(size: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    let half = size as f32 * 0.5;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - half;
            let dy = y as f32 + 0.5 - half;
            let t = (dx * dx + dy * dy).sqrt() / half.max(f32::EPSILON);
            let c = gradient_at(&GLOW_STOPS, t);
            pixels.extend(c.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8));
        }
    }
    pixels
}
