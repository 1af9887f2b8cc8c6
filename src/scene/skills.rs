use std::f64::consts::PI;

use fastrand::Rng;

use super::geometry::{grid, Mesh};
use super::math::{Euler, Rgb, Transform, Vec3};
use super::render::{trace_edges, Camera, Frame, Layer};
use super::{Palette, Scene, Viewport, FIELD_OF_VIEW, REFERENCE_FPS};

const GRID_SIZE: f64 = 20.0;
const GRID_DIVISIONS: usize = 20;
const GRID_DEPTH: f64 = -5.0;
const SPIN_PER_FRAME: f64 = 0.002;
const SCROLL_TILT: f64 = 0.5;
const LINE_ALPHA: f64 = 0.6;

/// A receding floor grid that spins slowly and tilts with scroll.
pub struct SkillsScene {
    center_lines: Mesh,
    lines: Mesh,
    accent: Rgb,
    line_color: Rgb,
    camera: Camera,
    spin: f64,
    tilt: f64,
}

impl SkillsScene {
    fn transform(&self) -> Transform {
        Transform {
            position: Vec3::new(0.0, GRID_DEPTH, 0.0),
            rotation: Euler::new(self.tilt, self.spin, 0.0),
        }
    }
}

impl Scene for SkillsScene {
    const NAME: &'static str = "skills";
    const SCROLL_PARALLAX: bool = true;

    fn build(palette: &Palette, viewport: Viewport, _rng: &mut Rng) -> Self {
        let (center_lines, lines) = grid(GRID_SIZE, GRID_DIVISIONS);
        let mut camera = Camera::perspective(FIELD_OF_VIEW, viewport);
        camera.position = Vec3::new(0.0, 2.0, 10.0);
        camera.rotation = Euler::new(-PI / 16.0, 0.0, 0.0);

        Self {
            center_lines,
            lines,
            accent: palette.primary,
            line_color: palette.grid,
            camera,
            spin: 0.0,
            tilt: 0.0,
        }
    }

    fn tick(&mut self, elapsed: f64) {
        self.spin = elapsed * SPIN_PER_FRAME * REFERENCE_FPS;
    }

    fn resize(&mut self, viewport: Viewport) {
        self.camera.set_viewport(viewport);
    }

    fn scroll(&mut self, progress: f64) {
        self.tilt = progress * SCROLL_TILT;
    }

    fn draw(&self, frame: &mut Frame, viewport: Viewport) {
        if self.lines.is_empty() {
            return;
        }

        let transform = self.transform();
        frame.push(Layer::Lines {
            color: self.line_color,
            alpha: LINE_ALPHA,
            segments: trace_edges(&self.camera, viewport, &self.lines, &transform),
        });
        frame.push(Layer::Lines {
            color: self.accent,
            alpha: LINE_ALPHA,
            segments: trace_edges(&self.camera, viewport, &self.center_lines, &transform),
        });
    }

    fn dispose(&mut self) {
        self.center_lines.release();
        self.lines.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn scene() -> SkillsScene {
        let mut rng = Rng::with_seed(1);
        SkillsScene::build(&Palette::for_theme(Theme::Dark), Viewport::new(1280.0, 720.0), &mut rng)
    }

    #[test]
    fn spins_two_milliradians_per_reference_frame() {
        let mut scene = scene();
        scene.tick(1.0);
        assert!((scene.spin - 0.12).abs() < 1e-12);
    }

    #[test]
    fn scroll_progress_tilts_the_grid() {
        let mut scene = scene();
        scene.scroll(0.5);
        assert_eq!(scene.transform().rotation.x, 0.25);
    }

    #[test]
    fn center_lines_use_the_accent() {
        let scene = scene();
        let mut frame = Frame::default();
        scene.draw(&mut frame, Viewport::new(1280.0, 720.0));

        let colors: Vec<Rgb> = frame
            .layers()
            .iter()
            .filter_map(|layer| match layer {
                Layer::Lines { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(colors, vec![Rgb::hex(0x111111), Rgb::hex(0x00c8ff)]);
    }

    #[test]
    fn grid_is_visible_from_the_camera() {
        let scene = scene();
        let mut frame = Frame::default();
        scene.draw(&mut frame, Viewport::new(1280.0, 720.0));

        assert!(matches!(
            frame.layers().first(),
            Some(Layer::Lines { segments, .. }) if !segments.is_empty()
        ));
    }
}
