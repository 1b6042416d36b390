use fnv::FnvHashMap;
use glam::Vec3;

/// Unindexed triangle list.
pub type Triangles = Vec<[Vec3; 3]>;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}

pub fn icosahedron(radius: f32, detail: u32) -> Triangles {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let v = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    const FACES: [[usize; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    let mut tris: Triangles = FACES.iter().map(|f| [v[f[0]], v[f[1]], v[f[2]]]).collect();
    for _ in 0..detail {
        tris = subdivide(&tris);
    }
    tris.iter()
        .map(|t| t.map(|p| p.normalize() * radius))
        .collect()
}

// Split every triangle into four at its edge midpoints.
fn subdivide(tris: &[[Vec3; 3]]) -> Triangles {
    let mut out = Vec::with_capacity(tris.len() * 4);
    for &[a, b, c] in tris {
        let ab = (a + b) * 0.5;
        let bc = (b + c) * 0.5;
        let ca = (c + a) * 0.5;
        out.push([a, ab, ca]);
        out.push([ab, b, bc]);
        out.push([ca, bc, c]);
        out.push([ab, bc, ca]);
    }
    out
}

pub fn tetrahedron(radius: f32) -> Triangles {
    let v = [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ]
    .map(|p| p.normalize() * radius);
    vec![
        [v[2], v[1], v[0]],
        [v[0], v[3], v[2]],
        [v[1], v[3], v[0]],
        [v[2], v[3], v[1]],
    ]
}

pub fn cuboid(width: f32, height: f32, depth: f32) -> Triangles {
    let h = Vec3::new(width, height, depth) * 0.5;
    let corner = |x: f32, y: f32, z: f32| Vec3::new(x * h.x, y * h.y, z * h.z);
    let quads = [
        // +x, -x
        [corner(1., -1., 1.), corner(1., -1., -1.), corner(1., 1., -1.), corner(1., 1., 1.)],
        [corner(-1., -1., -1.), corner(-1., -1., 1.), corner(-1., 1., 1.), corner(-1., 1., -1.)],
        // +y, -y
        [corner(-1., 1., 1.), corner(1., 1., 1.), corner(1., 1., -1.), corner(-1., 1., -1.)],
        [corner(-1., -1., -1.), corner(1., -1., -1.), corner(1., -1., 1.), corner(-1., -1., 1.)],
        // +z, -z
        [corner(-1., -1., 1.), corner(1., -1., 1.), corner(1., 1., 1.), corner(-1., 1., 1.)],
        [corner(1., -1., -1.), corner(-1., -1., -1.), corner(-1., 1., -1.), corner(1., 1., -1.)],
    ];
    let mut tris = Vec::with_capacity(12);
    for [a, b, c, d] in quads {
        tris.push([a, b, c]);
        tris.push([a, c, d]);
    }
    tris
}

/// Capped cylinder around the Y axis. Six radial segments give a hexagonal prism.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Triangles {
    let n = radial_segments.max(3);
    let half = height * 0.5;
    let ring = |r: f32, y: f32| -> Vec<Vec3> {
        (0..n)
            .map(|i| {
                let theta = i as f32 / n as f32 * std::f32::consts::TAU;
                Vec3::new(r * theta.sin(), y, r * theta.cos())
            })
            .collect()
    };
    let top = ring(radius_top, half);
    let bottom = ring(radius_bottom, -half);
    let top_center = Vec3::new(0.0, half, 0.0);
    let bottom_center = Vec3::new(0.0, -half, 0.0);
    let mut tris = Vec::with_capacity(n as usize * 4);
    for i in 0..n as usize {
        let j = (i + 1) % n as usize;
        tris.push([top[i], bottom[i], top[j]]);
        tris.push([bottom[i], bottom[j], top[j]]);
        tris.push([top_center, top[i], top[j]]);
        tris.push([bottom_center, bottom[j], bottom[i]]);
    }
    tris
}

fn face_normal(t: &[Vec3; 3]) -> Vec3 {
    (t[1] - t[0]).cross(t[2] - t[0]).normalize_or_zero()
}

// Positions are welded by rounding, so shared edges from separate triangles match.
fn weld_key(p: Vec3) -> [i64; 3] {
    const PRECISION: f32 = 1e4;
    [
        (p.x * PRECISION).round() as i64,
        (p.y * PRECISION).round() as i64,
        (p.z * PRECISION).round() as i64,
    ]
}

/// Extract the visible edges of a triangle mesh as line segments.
///
/// An edge is kept when only one face uses it or when the normals of its two
/// faces differ by more than `threshold_deg`. Diagonals splitting a flat face
/// are dropped.
pub fn edges(tris: &[[Vec3; 3]], threshold_deg: f32) -> Vec<[Vec3; 2]> {
    let threshold_dot = threshold_deg.to_radians().cos();
    // edge key -> (endpoints, first face normal, whether already resolved)
    let mut open: FnvHashMap<([i64; 3], [i64; 3]), ([Vec3; 2], Vec3)> = FnvHashMap::default();
    let mut order: Vec<([i64; 3], [i64; 3])> = Vec::new();
    let mut segments = Vec::new();

    for tri in tris {
        let normal = face_normal(tri);
        if normal == Vec3::ZERO {
            continue;
        }
        for k in 0..3 {
            let a = tri[k];
            let b = tri[(k + 1) % 3];
            let (ka, kb) = (weld_key(a), weld_key(b));
            if ka == kb {
                continue;
            }
            let key = if ka < kb { (ka, kb) } else { (kb, ka) };
            match open.remove(&key) {
                Some((ends, first)) => {
                    if first.dot(normal) <= threshold_dot {
                        segments.push(ends);
                    }
                }
                None => {
                    open.insert(key, ([a, b], normal));
                    order.push(key);
                }
            }
        }
    }
    // Border edges, in first-seen order so output is stable.
    for key in order {
        if let Some((ends, _)) = open.remove(&key) {
            segments.push(ends);
        }
    }
    segments
}

pub fn line_vertices(segments: &[[Vec3; 2]]) -> Vec<LineVertex> {
    segments
        .iter()
        .flat_map(|s| s.iter().map(|p| LineVertex { position: p.to_array() }))
        .collect()
}
