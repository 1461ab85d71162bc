use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;

/// Wireframe mesh ready for upload: positions feed the vertex buffer, edges
/// are index pairs for a line-list draw. Vertex normals are implicit for a
/// sphere (normalize the position) so only positions are stored.
pub struct WireMesh {
    pub positions: Vec<[f32; 3]>,
    pub edges: Vec<[u32; 2]>,
}

impl WireMesh {
    pub fn index_count(&self) -> u32 {
        (self.edges.len() * 2) as u32
    }
}

/// Canonical 12-vertex, 20-face icosahedron on the unit sphere.
fn base_icosahedron() -> (Vec<Vec3>, Vec<[u32; 3]>) {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let raw = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    let vertices = raw
        .iter()
        .map(|v| Vec3::from_array(*v).normalize())
        .collect();
    let faces = vec![
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
    (vertices, faces)
}

/// Subdivided icosahedron projected onto a sphere of the given radius.
///
/// Each round splits every triangle into four; edge midpoints are cached so
/// shared edges produce a single shared vertex.
pub fn icosphere(radius: f32, detail: u32) -> (Vec<Vec3>, Vec<[u32; 3]>) {
    let (mut vertices, mut faces) = base_icosahedron();

    for _ in 0..detail {
        let mut midpoints: FnvHashMap<(u32, u32), u32> = FnvHashMap::default();
        let mut next = Vec::with_capacity(faces.len() * 4);
        for [a, b, c] in &faces {
            let ab = midpoint(&mut vertices, &mut midpoints, *a, *b);
            let bc = midpoint(&mut vertices, &mut midpoints, *b, *c);
            let ca = midpoint(&mut vertices, &mut midpoints, *c, *a);
            next.push([*a, ab, ca]);
            next.push([*b, bc, ab]);
            next.push([*c, ca, bc]);
            next.push([ab, bc, ca]);
        }
        faces = next;
    }

    for v in &mut vertices {
        *v = v.normalize() * radius;
    }
    (vertices, faces)
}

fn midpoint(
    vertices: &mut Vec<Vec3>,
    cache: &mut FnvHashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = (a.min(b), a.max(b));
    if let Some(&idx) = cache.get(&key) {
        return idx;
    }
    let mid = ((vertices[a as usize] + vertices[b as usize]) * 0.5).normalize();
    let idx = vertices.len() as u32;
    vertices.push(mid);
    let _ = cache.insert(key, idx);
    idx
}

/// Unique undirected edges of a triangle list, in first-seen face order.
pub fn wireframe_edges(faces: &[[u32; 3]]) -> Vec<[u32; 2]> {
    let mut seen: FnvHashSet<(u32, u32)> = FnvHashSet::default();
    let mut edges = Vec::new();
    for [a, b, c] in faces {
        for (u, v) in [(*a, *b), (*b, *c), (*c, *a)] {
            let key = (u.min(v), u.max(v));
            if seen.insert(key) {
                edges.push([key.0, key.1]);
            }
        }
    }
    edges
}

pub fn icosphere_wireframe(radius: f32, detail: u32) -> WireMesh {
    let (vertices, faces) = icosphere(radius, detail);
    let edges = wireframe_edges(&faces);
    WireMesh {
        positions: vertices.iter().map(|v| v.to_array()).collect(),
        edges,
    }
}
