//! Procedural geometry for the decorative scenes.
//!
//! Everything is built once per scene and kept in local space; the scenes
//! transform vertices every frame.

use std::f64::consts::{PI, TAU};

use fastrand::Rng;

use super::math::Vec3;

/// Vertices plus the edges (and optional quads) connecting them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<(usize, usize)>,
    pub faces: Vec<[usize; 4]>,
}

impl Mesh {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Drops the buffers and their allocations.
    pub fn release(&mut self) {
        *self = Self::default();
    }
}

pub fn particle_cloud(rng: &mut Rng, count: usize, extent: f64) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.f64() - 0.5) * extent,
                (rng.f64() - 0.5) * extent,
                (rng.f64() - 0.5) * extent,
            )
        })
        .collect()
}

fn torus_knot_curve(u: f64, p: f64, q: f64, radius: f64) -> Vec3 {
    let quo_over_p = q / p * u;
    let cs = quo_over_p.cos();

    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * u.sin() * 0.5,
        radius * quo_over_p.sin() * 0.5,
    )
}

/// Tube swept along a (p, q) torus knot.
pub fn torus_knot(
    radius: f64,
    tube: f64,
    tubular_segments: usize,
    radial_segments: usize,
    p: u32,
    q: u32,
) -> Mesh {
    let (p, q) = (f64::from(p), f64::from(q));
    let ring = radial_segments + 1;
    let mut vertices = Vec::with_capacity((tubular_segments + 1) * ring);

    for i in 0..=tubular_segments {
        let u = i as f64 / tubular_segments as f64 * p * TAU;
        let p1 = torus_knot_curve(u, p, q, radius);
        let p2 = torus_knot_curve(u + 0.01, p, q, radius);

        let tangent = p2 - p1;
        let binormal = tangent.cross(p2 + p1);
        let normal = binormal.cross(tangent).normalized();
        let binormal = binormal.normalized();

        for j in 0..=radial_segments {
            let v = j as f64 / radial_segments as f64 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            vertices.push(p1 + normal * cx + binormal * cy);
        }
    }

    let mut edges = Vec::with_capacity(tubular_segments * radial_segments * 2);
    for i in 0..tubular_segments {
        for j in 0..radial_segments {
            let a = i * ring + j;
            edges.push((a, a + ring));
            edges.push((a, a + 1));
        }
    }

    Mesh {
        vertices,
        edges,
        faces: Vec::new(),
    }
}

/// Latitude/longitude sphere.
pub fn uv_sphere(radius: f64, width_segments: usize, height_segments: usize) -> Mesh {
    let ring = width_segments + 1;
    let mut vertices = Vec::with_capacity((height_segments + 1) * ring);

    for iy in 0..=height_segments {
        let v = iy as f64 / height_segments as f64;
        for ix in 0..=width_segments {
            let u = ix as f64 / width_segments as f64;
            vertices.push(Vec3::new(
                -radius * (u * TAU).cos() * (v * PI).sin(),
                radius * (v * PI).cos(),
                radius * (u * TAU).sin() * (v * PI).sin(),
            ));
        }
    }

    let mut edges = Vec::new();
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * ring + ix;
            edges.push((a, a + ring));
            // The poles collapse to a point, no ring there.
            if iy > 0 {
                edges.push((a, a + 1));
            }
        }
    }

    Mesh {
        vertices,
        edges,
        faces: Vec::new(),
    }
}

/// Box centered on the origin. Faces wind counter-clockwise seen from outside.
pub fn cuboid(width: f64, height: f64, depth: f64) -> Mesh {
    let half = Vec3::new(width / 2.0, height / 2.0, depth / 2.0);
    let sign = |bit: bool| if bit { 1.0 } else { -1.0 };

    let vertices = (0..8usize)
        .map(|corner| {
            Vec3::new(
                sign(corner & 1 != 0) * half.x,
                sign(corner & 2 != 0) * half.y,
                sign(corner & 4 != 0) * half.z,
            )
        })
        .collect();

    let edges = (0..8usize)
        .flat_map(|corner| {
            [1usize, 2, 4]
                .into_iter()
                .filter(move |bit| corner & bit == 0)
                .map(move |bit| (corner, corner | bit))
        })
        .collect();

    let faces = vec![
        [1, 3, 7, 5],
        [0, 4, 6, 2],
        [2, 6, 7, 3],
        [0, 1, 5, 4],
        [4, 5, 7, 6],
        [0, 2, 3, 1],
    ];

    Mesh {
        vertices,
        edges,
        faces,
    }
}

/// Square grid on the XZ plane, split into its two center lines and the rest.
pub fn grid(size: f64, divisions: usize) -> (Mesh, Mesh) {
    let half = size / 2.0;
    let step = size / divisions as f64;
    let mut center = Mesh::default();
    let mut rest = Mesh::default();

    for i in 0..=divisions {
        let k = -half + i as f64 * step;
        let target = if i == divisions / 2 {
            &mut center
        } else {
            &mut rest
        };

        for (a, b) in [
            (Vec3::new(-half, 0.0, k), Vec3::new(half, 0.0, k)),
            (Vec3::new(k, 0.0, -half), Vec3::new(k, 0.0, half)),
        ] {
            let index = target.vertices.len();
            target.vertices.push(a);
            target.vertices.push(b);
            target.edges.push((index, index + 1));
        }
    }

    (center, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face_normal(mesh: &Mesh, face: [usize; 4]) -> Vec3 {
        let [a, b, c, _] = face.map(|index| mesh.vertices[index]);
        (b - a).cross(c - a).normalized()
    }

    #[test]
    fn particle_cloud_stays_inside_extent() {
        let mut rng = Rng::with_seed(7);
        let cloud = particle_cloud(&mut rng, 500, 10.0);

        assert_eq!(cloud.len(), 500);
        assert!(cloud
            .iter()
            .all(|p| p.x.abs() <= 5.0 && p.y.abs() <= 5.0 && p.z.abs() <= 5.0));
    }

    #[test]
    fn torus_knot_has_expected_topology() {
        let knot = torus_knot(1.0, 0.3, 100, 16, 2, 3);

        assert_eq!(knot.vertices.len(), 101 * 17);
        assert_eq!(knot.edges.len(), 100 * 16 * 2);
        assert!(knot
            .edges
            .iter()
            .all(|&(a, b)| a < knot.vertices.len() && b < knot.vertices.len()));
    }

    #[test]
    fn torus_knot_surface_stays_near_the_curve() {
        let knot = torus_knot(1.0, 0.3, 100, 16, 2, 3);
        // The curve lies within radius 1.5, the tube adds at most 0.3.
        assert!(knot.vertices.iter().all(|v| v.length() <= 1.5 + 0.3 + 1e-9));
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let sphere = uv_sphere(1.5, 32, 32);

        assert_eq!(sphere.vertices.len(), 33 * 33);
        assert!(sphere
            .vertices
            .iter()
            .all(|v| (v.length() - 1.5).abs() < 1e-9));
    }

    #[test]
    fn cuboid_has_twelve_axis_aligned_edges() {
        let cube = cuboid(1.0, 2.0, 3.0);

        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.edges.len(), 12);
        for &(a, b) in &cube.edges {
            let delta = cube.vertices[b] - cube.vertices[a];
            let axes = [delta.x, delta.y, delta.z]
                .iter()
                .filter(|component| component.abs() > 0.0)
                .count();
            assert_eq!(axes, 1);
        }
    }

    #[test]
    fn cuboid_faces_point_outward() {
        let cube = cuboid(1.0, 1.0, 1.0);

        for &face in &cube.faces {
            let centroid = face
                .iter()
                .fold(Vec3::ZERO, |sum, &index| sum + cube.vertices[index])
                * 0.25;
            assert!(face_normal(&cube, face).dot(centroid) > 0.0);
        }
    }

    #[test]
    fn grid_splits_center_lines() {
        let (center, rest) = grid(20.0, 20);

        assert_eq!(center.edges.len(), 2);
        assert_eq!(rest.edges.len(), 40);
        assert!(center.vertices.iter().any(|v| v.x == 0.0 && v.z == -10.0));
    }

    #[test]
    fn release_empties_the_mesh() {
        let mut cube = cuboid(1.0, 1.0, 1.0);
        cube.release();
        assert!(cube.is_empty());
        assert!(cube.edges.is_empty());
    }
}
