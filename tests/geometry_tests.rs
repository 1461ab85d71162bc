// Host-side tests for icosphere construction and wireframe extraction.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::*;
use std::collections::HashSet;

#[test]
fn base_icosahedron_counts() {
    let (vertices, faces) = icosphere(1.0, 0);
    assert_eq!(vertices.len(), 12);
    assert_eq!(faces.len(), 20);
    assert_eq!(wireframe_edges(&faces).len(), 30);
}

#[test]
fn subdivision_multiplies_faces_by_four() {
    for detail in 0..4 {
        let (_, faces) = icosphere(1.0, detail);
        assert_eq!(faces.len(), 20 * 4_usize.pow(detail));
    }
}

#[test]
fn euler_characteristic_holds_at_every_detail() {
    for detail in 0..4 {
        let (vertices, faces) = icosphere(1.0, detail);
        let edges = wireframe_edges(&faces);
        let v = vertices.len() as i64;
        let e = edges.len() as i64;
        let f = faces.len() as i64;
        assert_eq!(v - e + f, 2, "V - E + F != 2 at detail {detail}");
    }
}

#[test]
fn all_vertices_lie_on_the_sphere() {
    let radius = 0.7;
    let (vertices, _) = icosphere(radius, 2);
    for v in &vertices {
        assert!(
            (v.length() - radius).abs() < 1e-4,
            "vertex off the sphere: |{v:?}| = {}",
            v.length()
        );
    }
}

#[test]
fn shared_edge_midpoints_are_deduplicated() {
    // one round: V' = V + E = 12 + 30 = 42; no duplicate midpoints
    let (vertices, _) = icosphere(1.0, 1);
    assert_eq!(vertices.len(), 42);
}

#[test]
fn wireframe_edges_are_unique_and_in_range() {
    let (vertices, faces) = icosphere(1.0, 2);
    let edges = wireframe_edges(&faces);
    let mut seen = HashSet::new();
    for [a, b] in &edges {
        assert!(a < b, "edges are stored with ordered endpoints");
        assert!((*b as usize) < vertices.len());
        assert!(seen.insert((*a, *b)), "duplicate edge {a}-{b}");
    }
}

#[test]
fn wire_mesh_index_count_matches_edges() {
    let mesh = icosphere_wireframe(0.7, 1);
    assert_eq!(mesh.index_count() as usize, mesh.edges.len() * 2);
    assert_eq!(mesh.positions.len(), 42);
    // every index addresses a vertex
    for [a, b] in &mesh.edges {
        assert!((*a as usize) < mesh.positions.len());
        assert!((*b as usize) < mesh.positions.len());
    }
}
