use std::f64::consts::TAU;

use fastrand::Rng;

use super::geometry::{particle_cloud, torus_knot, Mesh};
use super::math::{Euler, Rgb, Transform, Vec3};
use super::render::{scatter, trace_edges, Blend, Camera, Frame, Layer};
use super::{Palette, PointerParallax, Scene, Viewport, FIELD_OF_VIEW};

const PARTICLE_COUNT: usize = 2_000;
const CLOUD_EXTENT: f64 = 10.0;
const PARTICLE_SIZE: f64 = 0.02;
const CAMERA_DISTANCE: f64 = 5.0;
/// Orbit speed factor, one turn per 120 s.
const AUTO_ROTATE_SPEED: f64 = 0.5;
const KNOT_SPIN: (f64, f64) = (0.3, 0.2);
const FIELD_SPIN: (f64, f64) = (0.05, 0.03);
const KNOT_PARALLAX: f64 = 0.5;
const FIELD_PARALLAX: f64 = 0.2;
const WIREFRAME_ALPHA: f64 = 0.85;

/// Particle field around a slowly orbiting wireframe torus knot.
pub struct HeroScene {
    particles: Vec<Vec3>,
    knot: Mesh,
    particle_color: Rgb,
    particle_opacity: f64,
    knot_color: Rgb,
    camera: Camera,
    elapsed: f64,
    knot_parallax: PointerParallax,
    field_parallax: PointerParallax,
}

impl HeroScene {
    fn orbit(&mut self) {
        let angle = self.elapsed * TAU / 60.0 * AUTO_ROTATE_SPEED;
        self.camera.position = Vec3::new(
            CAMERA_DISTANCE * angle.sin(),
            0.0,
            CAMERA_DISTANCE * angle.cos(),
        );
        self.camera.rotation = Euler::new(0.0, angle, 0.0);
    }

    fn spin(&self, rates: (f64, f64), parallax: &PointerParallax) -> Transform {
        let offset = parallax.offset(self.elapsed);
        Transform {
            position: Vec3::ZERO,
            rotation: Euler::new(
                self.elapsed * rates.0 + offset.x,
                self.elapsed * rates.1 + offset.y,
                0.0,
            ),
        }
    }
}

impl Scene for HeroScene {
    const NAME: &'static str = "hero";
    const POINTER_PARALLAX: bool = true;

    fn build(palette: &Palette, viewport: Viewport, rng: &mut Rng) -> Self {
        let mut scene = Self {
            particles: particle_cloud(rng, PARTICLE_COUNT, CLOUD_EXTENT),
            knot: torus_knot(1.0, 0.3, 100, 16, 2, 3),
            particle_color: palette.particle,
            particle_opacity: palette.particle_opacity,
            knot_color: palette.primary,
            camera: Camera::perspective(FIELD_OF_VIEW, viewport),
            elapsed: 0.0,
            knot_parallax: PointerParallax::new(KNOT_PARALLAX),
            field_parallax: PointerParallax::new(FIELD_PARALLAX),
        };
        scene.orbit();
        scene
    }

    fn tick(&mut self, elapsed: f64) {
        self.elapsed = elapsed;
        self.orbit();
    }

    fn resize(&mut self, viewport: Viewport) {
        self.camera.set_viewport(viewport);
    }

    fn pointer(&mut self, x: f64, y: f64, now: f64) {
        self.knot_parallax.aim(x, y, now);
        self.field_parallax.aim(x, y, now);
    }

    fn draw(&self, frame: &mut Frame, viewport: Viewport) {
        if self.knot.is_empty() {
            return;
        }

        let field = self.spin(FIELD_SPIN, &self.field_parallax);
        frame.push(Layer::Points {
            color: self.particle_color,
            alpha: self.particle_opacity,
            blend: Blend::Additive,
            sprites: scatter(&self.camera, viewport, &self.particles, &field, PARTICLE_SIZE),
        });

        let knot = self.spin(KNOT_SPIN, &self.knot_parallax);
        frame.push(Layer::Lines {
            color: self.knot_color,
            alpha: WIREFRAME_ALPHA,
            segments: trace_edges(&self.camera, viewport, &self.knot, &knot),
        });
    }

    fn dispose(&mut self) {
        self.particles = Vec::new();
        self.knot.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn scene(theme: Theme) -> HeroScene {
        let mut rng = Rng::with_seed(42);
        HeroScene::build(&Palette::for_theme(theme), Viewport::new(1280.0, 720.0), &mut rng)
    }

    #[test]
    fn builds_particles_and_knot_in_theme_colors() {
        let scene = scene(Theme::Light);

        assert_eq!(scene.particles.len(), PARTICLE_COUNT);
        assert!(!scene.knot.is_empty());
        assert_eq!(scene.knot_color, Rgb::hex(0x0078ff));
        assert_eq!(scene.particle_opacity, 0.5);
    }

    #[test]
    fn camera_orbits_at_constant_distance() {
        let mut scene = scene(Theme::Dark);
        scene.tick(30.0);

        assert!((scene.camera.position.length() - CAMERA_DISTANCE).abs() < 1e-9);
        assert!((scene.camera.rotation.y - TAU / 4.0).abs() < 1e-9);
    }

    #[test]
    fn pointer_offsets_the_knot_more_than_the_field() {
        let mut scene = scene(Theme::Dark);
        scene.pointer(0.5, 0.5, 0.0);
        scene.tick(PointerParallax::DURATION);

        let knot = scene.spin(KNOT_SPIN, &scene.knot_parallax);
        let field = scene.spin(FIELD_SPIN, &scene.field_parallax);
        let t = PointerParallax::DURATION;

        assert!((knot.rotation.x - (t * KNOT_SPIN.0 + 0.25)).abs() < 1e-9);
        assert!((field.rotation.x - (t * FIELD_SPIN.0 + 0.1)).abs() < 1e-9);
    }

    #[test]
    fn draws_points_then_lines() {
        let scene = scene(Theme::Dark);
        let mut frame = Frame::default();
        scene.draw(&mut frame, Viewport::new(1280.0, 720.0));

        assert!(matches!(
            frame.layers(),
            [Layer::Points { sprites, .. }, Layer::Lines { segments, .. }]
                if !sprites.is_empty() && !segments.is_empty()
        ));
    }

    #[test]
    fn disposed_scene_draws_nothing() {
        let mut scene = scene(Theme::Dark);
        scene.dispose();

        let mut frame = Frame::default();
        scene.draw(&mut frame, Viewport::new(1280.0, 720.0));
        assert!(frame.is_empty());
        assert!(scene.particles.is_empty());
    }
}
