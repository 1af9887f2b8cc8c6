use fastrand::Rng;

use super::geometry::{particle_cloud, uv_sphere, Mesh};
use super::math::{Euler, Rgb, Transform, Vec3};
use super::render::{scatter, trace_edges, Blend, Camera, Frame, Layer};
use super::{Palette, PointerParallax, Scene, Viewport, FIELD_OF_VIEW};

const PARTICLE_COUNT: usize = 1_000;
const CLOUD_EXTENT: f64 = 10.0;
const PARTICLE_SIZE: f64 = 0.02;
const SPHERE_RADIUS: f64 = 1.5;
const SPHERE_SEGMENTS: usize = 32;
const SPHERE_SPIN: (f64, f64) = (0.2, 0.3);
const FIELD_SPIN: (f64, f64) = (0.05, 0.03);
const SPHERE_PARALLAX: f64 = 0.5;
const FIELD_PARALLAX: f64 = 0.2;
const WIREFRAME_ALPHA: f64 = 0.7;

/// Wireframe globe in the secondary color inside a sparse particle field.
pub struct ContactScene {
    particles: Vec<Vec3>,
    sphere: Mesh,
    particle_color: Rgb,
    particle_opacity: f64,
    sphere_color: Rgb,
    camera: Camera,
    elapsed: f64,
    sphere_parallax: PointerParallax,
    field_parallax: PointerParallax,
}

impl ContactScene {
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

impl Scene for ContactScene {
    const NAME: &'static str = "contact";
    const POINTER_PARALLAX: bool = true;

    fn build(palette: &Palette, viewport: Viewport, rng: &mut Rng) -> Self {
        let mut camera = Camera::perspective(FIELD_OF_VIEW, viewport);
        camera.position = Vec3::new(0.0, 0.0, 5.0);

        Self {
            particles: particle_cloud(rng, PARTICLE_COUNT, CLOUD_EXTENT),
            sphere: uv_sphere(SPHERE_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
            particle_color: palette.particle,
            particle_opacity: palette.particle_opacity,
            sphere_color: palette.secondary,
            camera,
            elapsed: 0.0,
            sphere_parallax: PointerParallax::new(SPHERE_PARALLAX),
            field_parallax: PointerParallax::new(FIELD_PARALLAX),
        }
    }

    fn tick(&mut self, elapsed: f64) {
        self.elapsed = elapsed;
    }

    fn resize(&mut self, viewport: Viewport) {
        self.camera.set_viewport(viewport);
    }

    fn pointer(&mut self, x: f64, y: f64, now: f64) {
        self.sphere_parallax.aim(x, y, now);
        self.field_parallax.aim(x, y, now);
    }

    fn draw(&self, frame: &mut Frame, viewport: Viewport) {
        if self.sphere.is_empty() {
            return;
        }

        let field = self.spin(FIELD_SPIN, &self.field_parallax);
        frame.push(Layer::Points {
            color: self.particle_color,
            alpha: self.particle_opacity,
            blend: Blend::Additive,
            sprites: scatter(&self.camera, viewport, &self.particles, &field, PARTICLE_SIZE),
        });

        let sphere = self.spin(SPHERE_SPIN, &self.sphere_parallax);
        frame.push(Layer::Lines {
            color: self.sphere_color,
            alpha: WIREFRAME_ALPHA,
            segments: trace_edges(&self.camera, viewport, &self.sphere, &sphere),
        });
    }

    fn dispose(&mut self) {
        self.particles = Vec::new();
        self.sphere.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn scene(theme: Theme) -> ContactScene {
        let mut rng = Rng::with_seed(9);
        ContactScene::build(&Palette::for_theme(theme), Viewport::new(1024.0, 768.0), &mut rng)
    }

    #[test]
    fn sphere_uses_the_secondary_color() {
        assert_eq!(scene(Theme::Dark).sphere_color, Rgb::hex(0xff3e6c));
        assert_eq!(scene(Theme::Light).sphere_color, Rgb::hex(0xe91e63));
    }

    #[test]
    fn field_is_half_the_hero_density() {
        assert_eq!(scene(Theme::Dark).particles.len(), 1_000);
    }

    #[test]
    fn sphere_spins_with_time() {
        let mut scene = scene(Theme::Dark);
        scene.tick(10.0);

        let transform = scene.spin(SPHERE_SPIN, &scene.sphere_parallax);
        assert!((transform.rotation.x - 2.0).abs() < 1e-9);
        assert!((transform.rotation.y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn whole_sphere_is_on_screen() {
        let scene = scene(Theme::Dark);
        let mut frame = Frame::default();
        scene.draw(&mut frame, Viewport::new(1024.0, 768.0));

        let Some(Layer::Lines { segments, .. }) = frame.layers().last() else {
            panic!("sphere layer missing");
        };
        assert_eq!(segments.len(), scene.sphere.edges.len());
    }

    #[test]
    fn dispose_releases_geometry() {
        let mut scene = scene(Theme::Light);
        scene.dispose();

        let mut frame = Frame::default();
        scene.draw(&mut frame, Viewport::new(1024.0, 768.0));
        assert!(frame.is_empty());
    }
}
