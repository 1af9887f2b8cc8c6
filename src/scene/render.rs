//! Perspective projection into a flat draw list.
//!
//! Scenes describe what is visible as a [`Frame`] of screen-space layers; the
//! surface that paints them never sees 3D data.

use super::geometry::Mesh;
use super::math::{Euler, Rgb, Transform, Vec3};
use super::Viewport;

const MIN_SPRITE_PX: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

/// Camera looking down its local -Z axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub rotation: Euler,
    pub fov_degrees: f64,
    pub aspect: f64,
    pub near: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub point: Point2,
    pub depth: f64,
}

impl Camera {
    pub fn perspective(fov_degrees: f64, viewport: Viewport) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Euler::default(),
            fov_degrees,
            aspect: viewport.aspect(),
            near: 0.1,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    fn to_view(&self, world: Vec3) -> Vec3 {
        (world - self.position)
            .rotate_x(-self.rotation.x)
            .rotate_y(-self.rotation.y)
            .rotate_z(-self.rotation.z)
    }

    pub fn project(&self, world: Vec3, viewport: Viewport) -> Option<Projected> {
        let view = self.to_view(world);
        let depth = -view.z;
        if depth <= self.near {
            return None;
        }

        let focal = 1.0 / (self.fov_degrees.to_radians() / 2.0).tan();
        let ndc_x = focal / self.aspect * view.x / depth;
        let ndc_y = focal * view.y / depth;

        Some(Projected {
            point: Point2 {
                x: (ndc_x + 1.0) / 2.0 * viewport.width,
                y: (1.0 - ndc_y) / 2.0 * viewport.height,
            },
            depth,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    Normal,
    Additive,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub center: Point2,
    pub size: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub corners: [Point2; 4],
    pub depth: f64,
    pub fill: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    Points {
        color: Rgb,
        alpha: f64,
        blend: Blend,
        sprites: Vec<Sprite>,
    },
    Lines {
        color: Rgb,
        alpha: f64,
        segments: Vec<[Point2; 2]>,
    },
    /// Painted in order, farthest first.
    Faces { faces: Vec<Face>, alpha: f64 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    layers: Vec<Layer>,
}

impl Frame {
    pub fn clear(&mut self) {
        self.layers.clear();
    }

    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Points with size attenuation: `size` world units at the given depth.
pub fn scatter(
    camera: &Camera,
    viewport: Viewport,
    points: &[Vec3],
    transform: &Transform,
    size: f64,
) -> Vec<Sprite> {
    let scale = viewport.height / 2.0;

    points
        .iter()
        .filter_map(|&local| camera.project(transform.apply(local), viewport))
        .map(|projected| Sprite {
            center: projected.point,
            size: (size * scale / projected.depth).max(MIN_SPRITE_PX),
        })
        .collect()
}

pub fn trace_edges(
    camera: &Camera,
    viewport: Viewport,
    mesh: &Mesh,
    transform: &Transform,
) -> Vec<[Point2; 2]> {
    let projected: Vec<Option<Projected>> = mesh
        .vertices
        .iter()
        .map(|&local| camera.project(transform.apply(local), viewport))
        .collect();

    mesh.edges
        .iter()
        .filter_map(|&(a, b)| match (projected.get(a)?, projected.get(b)?) {
            (Some(a), Some(b)) => Some([a.point, b.point]),
            _ => None,
        })
        .collect()
}

/// Front faces lit by one directional light over an ambient floor.
pub fn shade_faces(
    camera: &Camera,
    viewport: Viewport,
    mesh: &Mesh,
    transform: &Transform,
    color: Rgb,
    light: Vec3,
    ambient: f64,
) -> Vec<Face> {
    let light = light.normalized();
    let world: Vec<Vec3> = mesh
        .vertices
        .iter()
        .map(|&local| transform.apply(local))
        .collect();

    let mut faces: Vec<Face> = mesh
        .faces
        .iter()
        .filter_map(|&[a, b, c, d]| {
            let corners = [*world.get(a)?, *world.get(b)?, *world.get(c)?, *world.get(d)?];
            let normal = (corners[1] - corners[0])
                .cross(corners[2] - corners[0])
                .normalized();
            let centroid = (corners[0] + corners[1] + corners[2] + corners[3]) * 0.25;
            if normal.dot(camera.position - centroid) <= 0.0 {
                return None;
            }

            let projected = [
                camera.project(corners[0], viewport)?,
                camera.project(corners[1], viewport)?,
                camera.project(corners[2], viewport)?,
                camera.project(corners[3], viewport)?,
            ];
            let depth = projected.iter().map(|p| p.depth).sum::<f64>() / 4.0;
            let diffuse = normal.dot(light).max(0.0);

            Some(Face {
                corners: projected.map(|p| p.point),
                depth,
                fill: color.scaled(ambient + (1.0 - ambient) * diffuse),
            })
        })
        .collect();

    faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    faces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::geometry::cuboid;

    const EPSILON: f64 = 1e-9;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    fn camera_at(z: f64) -> Camera {
        let mut camera = Camera::perspective(75.0, viewport());
        camera.position = Vec3::new(0.0, 0.0, z);
        camera
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let projected = camera_at(5.0)
            .project(Vec3::ZERO, viewport())
            .expect("origin is in front of the camera");

        assert!((projected.point.x - 400.0).abs() < EPSILON);
        assert!((projected.point.y - 300.0).abs() < EPSILON);
        assert!((projected.depth - 5.0).abs() < EPSILON);
    }

    #[test]
    fn points_behind_the_camera_are_dropped() {
        assert!(camera_at(5.0).project(Vec3::new(0.0, 0.0, 6.0), viewport()).is_none());
    }

    #[test]
    fn up_is_up_on_screen() {
        let projected = camera_at(5.0)
            .project(Vec3::new(0.0, 1.0, 0.0), viewport())
            .expect("visible");
        assert!(projected.point.y < 300.0);
    }

    #[test]
    fn yawed_camera_still_faces_origin() {
        let angle = 0.7_f64;
        let mut camera = camera_at(0.0);
        camera.position = Vec3::new(5.0 * angle.sin(), 0.0, 5.0 * angle.cos());
        camera.rotation = Euler::new(0.0, angle, 0.0);

        let projected = camera.project(Vec3::ZERO, viewport()).expect("visible");
        assert!((projected.point.x - 400.0).abs() < 1e-6);
    }

    #[test]
    fn sprites_shrink_with_distance() {
        let camera = camera_at(5.0);
        let points = [Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, -20.0)];
        let sprites = scatter(&camera, viewport(), &points, &Transform::default(), 0.2);

        assert_eq!(sprites.len(), 2);
        assert!(sprites[0].size > sprites[1].size);
    }

    #[test]
    fn cube_shows_at_most_three_faces_sorted_back_to_front() {
        let camera = camera_at(5.0);
        let cube = cuboid(1.0, 1.0, 1.0);
        let transform = Transform {
            position: Vec3::ZERO,
            rotation: Euler::new(0.4, 0.6, 0.0),
        };
        let faces = shade_faces(
            &camera,
            viewport(),
            &cube,
            &transform,
            Rgb::hex(0x3366ff),
            Vec3::new(1.0, 1.0, 1.0),
            0.2,
        );

        assert!(!faces.is_empty() && faces.len() <= 3);
        assert!(faces.windows(2).all(|pair| pair[0].depth >= pair[1].depth));
    }

    #[test]
    fn edges_with_hidden_endpoints_are_skipped() {
        let camera = camera_at(0.3);
        let cube = cuboid(1.0, 1.0, 1.0);
        let segments = trace_edges(&camera, viewport(), &cube, &Transform::default());

        // Only the back face (z = -0.5) is fully in front of the camera.
        assert_eq!(segments.len(), 4);
    }
}
