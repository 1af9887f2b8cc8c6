use std::f64::consts::PI;

use fastrand::Rng;

use super::geometry::{cuboid, Mesh};
use super::math::{Euler, Rgb, Transform, Vec3};
use super::render::{shade_faces, trace_edges, Camera, Frame, Layer};
use super::{Palette, Scene, Viewport, FIELD_OF_VIEW, REFERENCE_FPS};
use crate::theme::Theme;

const CUBE_COUNT: usize = 20;
const WIREFRAME_CHANCE: f64 = 0.3;
const SPREAD: f64 = 10.0;
const DEPTH_SHIFT: f64 = -5.0;
const MAX_SPIN_PER_FRAME: f64 = 0.01;
const MAX_FLOAT_PER_FRAME: f64 = 0.005;
const KEY_LIGHT: Vec3 = Vec3::new(2.0, 3.0, 4.0);
const CAMERA_Z: f64 = 5.0;
const SCROLL_TRAVEL: f64 = 2.0;
const SOLID_ALPHA: f64 = 0.9;
const WIREFRAME_ALPHA: f64 = 0.8;

struct FloatingCube {
    mesh: Mesh,
    color: Rgb,
    wireframe: bool,
    transform: Transform,
    /// Radians per reference frame.
    spin: Vec3,
    float_speed: f64,
}

impl FloatingCube {
    fn random(rng: &mut Rng, theme: Theme) -> Self {
        let mesh = cuboid(
            rng.f64() * 0.5 + 0.1,
            rng.f64() * 0.5 + 0.1,
            rng.f64() * 0.5 + 0.1,
        );

        let color = match theme {
            Theme::Light => Rgb::new(
                rng.f64() * 0.3 + 0.2,
                rng.f64() * 0.3 + 0.2,
                rng.f64() * 0.5 + 0.5,
            ),
            Theme::Dark => Rgb::new(rng.f64() * 0.2, rng.f64() * 0.2 + 0.5, rng.f64()),
        };

        let wireframe = rng.f64() < WIREFRAME_CHANCE;
        let position = Vec3::new(
            (rng.f64() - 0.5) * SPREAD,
            (rng.f64() - 0.5) * SPREAD,
            (rng.f64() - 0.5) * SPREAD + DEPTH_SHIFT,
        );
        let rotation = Euler::new(rng.f64() * PI, rng.f64() * PI, 0.0);
        let spin = Vec3::new(
            (rng.f64() - 0.5) * MAX_SPIN_PER_FRAME,
            (rng.f64() - 0.5) * MAX_SPIN_PER_FRAME,
            (rng.f64() - 0.5) * MAX_SPIN_PER_FRAME,
        );

        Self {
            mesh,
            color,
            wireframe,
            transform: Transform { position, rotation },
            spin,
            float_speed: (rng.f64() - 0.5) * MAX_FLOAT_PER_FRAME,
        }
    }

    fn advance(&mut self, frames: f64, elapsed: f64) {
        let rotation = &mut self.transform.rotation;
        rotation.x += self.spin.x * frames;
        rotation.y += self.spin.y * frames;
        rotation.z += self.spin.z * frames;
        self.transform.position.y += elapsed.sin() * self.float_speed * frames;
    }
}

/// Drifting, tumbling boxes; scroll pans the camera vertically.
pub struct ProjectsScene {
    cubes: Vec<FloatingCube>,
    ambient: f64,
    camera: Camera,
    elapsed: f64,
}

impl Scene for ProjectsScene {
    const NAME: &'static str = "projects";
    const SCROLL_PARALLAX: bool = true;

    fn build(palette: &Palette, viewport: Viewport, rng: &mut Rng) -> Self {
        let mut camera = Camera::perspective(FIELD_OF_VIEW, viewport);
        camera.position = Vec3::new(0.0, 0.0, CAMERA_Z);

        Self {
            cubes: (0..CUBE_COUNT)
                .map(|_| FloatingCube::random(rng, palette.theme))
                .collect(),
            ambient: palette.ambient,
            camera,
            elapsed: 0.0,
        }
    }

    fn tick(&mut self, elapsed: f64) {
        let frames = (elapsed - self.elapsed).max(0.0) * REFERENCE_FPS;
        self.elapsed = elapsed;

        for cube in &mut self.cubes {
            cube.advance(frames, elapsed);
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        self.camera.set_viewport(viewport);
    }

    fn scroll(&mut self, progress: f64) {
        self.camera.position.y = (0.5 - progress) * SCROLL_TRAVEL;
    }

    fn draw(&self, frame: &mut Frame, viewport: Viewport) {
        if self.cubes.is_empty() {
            return;
        }

        let mut faces = Vec::new();
        for cube in self.cubes.iter().filter(|cube| !cube.wireframe) {
            faces.extend(shade_faces(
                &self.camera,
                viewport,
                &cube.mesh,
                &cube.transform,
                cube.color,
                KEY_LIGHT,
                self.ambient,
            ));
        }
        faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        frame.push(Layer::Faces {
            faces,
            alpha: SOLID_ALPHA,
        });

        for cube in self.cubes.iter().filter(|cube| cube.wireframe) {
            frame.push(Layer::Lines {
                color: cube.color,
                alpha: WIREFRAME_ALPHA,
                segments: trace_edges(&self.camera, viewport, &cube.mesh, &cube.transform),
            });
        }
    }

    fn dispose(&mut self) {
        self.cubes = Vec::new();
    }
}
