//! Decorative backdrops rendered behind the page sections.
//!
//! A [`Scene`] owns its geometry and animation state, a [`Surface`] paints
//! the frames it produces, and [`host::mount`] ties both to the input and
//! frame sources of a [`host::Host`].

pub mod contact;
pub mod geometry;
pub mod hero;
pub mod host;
pub mod math;
pub mod projects;
pub mod render;
pub mod skills;

use fastrand::Rng;

use crate::motion::{Ease, Tween};
use crate::theme::Theme;

use self::math::{Euler, Rgb};
use self::render::Frame;

pub const FIELD_OF_VIEW: f64 = 75.0;

/// Reference refresh rate for motion expressed per frame.
pub const REFERENCE_FPS: f64 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const FALLBACK: Self = Self::new(1280.0, 720.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn aspect(self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Pointer position mapped to `-0.5..=0.5` on both axes.
    pub fn normalize(self, client_x: f64, client_y: f64) -> (f64, f64) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return (0.0, 0.0);
        }

        (client_x / self.width - 0.5, client_y / self.height - 0.5)
    }
}

/// Theme-derived colors shared by every scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub theme: Theme,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub particle: Rgb,
    pub particle_opacity: f64,
    pub grid: Rgb,
    pub ambient: f64,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                theme,
                primary: Rgb::hex(0x0078ff),
                secondary: Rgb::hex(0xe91e63),
                particle: Rgb::hex(0x333333),
                particle_opacity: 0.5,
                grid: Rgb::hex(0xdddddd),
                ambient: 0.4,
            },
            Theme::Dark => Self {
                theme,
                primary: Rgb::hex(0x00c8ff),
                secondary: Rgb::hex(0xff3e6c),
                particle: Rgb::hex(0xffffff),
                particle_opacity: 0.8,
                grid: Rgb::hex(0x111111),
                ambient: 0.2,
            },
        }
    }
}

/// Eased rotation offset following the pointer: vertical movement tilts
/// about X, horizontal movement turns about Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerParallax {
    strength: f64,
    pitch: Tween,
    yaw: Tween,
}

impl PointerParallax {
    pub const DURATION: f64 = 2.0;

    pub fn new(strength: f64) -> Self {
        Self {
            strength,
            pitch: Tween::settled(0.0, Self::DURATION, Ease::Power2Out),
            yaw: Tween::settled(0.0, Self::DURATION, Ease::Power2Out),
        }
    }

    pub fn aim(&mut self, x: f64, y: f64, now: f64) {
        self.pitch.retarget(now, y * self.strength);
        self.yaw.retarget(now, x * self.strength);
    }

    pub fn offset(&self, now: f64) -> Euler {
        Euler::new(self.pitch.value_at(now), self.yaw.value_at(now), 0.0)
    }
}

pub trait Scene {
    const NAME: &'static str;
    /// Listens to pointer movement for rotation parallax.
    const POINTER_PARALLAX: bool = false;
    /// Listens to scroll for section parallax.
    const SCROLL_PARALLAX: bool = false;

    fn build(palette: &Palette, viewport: Viewport, rng: &mut Rng) -> Self
    where
        Self: Sized;

    /// Advances to `elapsed` seconds since the scene started.
    fn tick(&mut self, elapsed: f64);

    fn resize(&mut self, viewport: Viewport);

    /// Normalized pointer position, received at `now` seconds.
    fn pointer(&mut self, _x: f64, _y: f64, _now: f64) {}

    fn scroll(&mut self, _progress: f64) {}

    fn draw(&self, frame: &mut Frame, viewport: Viewport);

    /// Releases geometry. The scene draws nothing afterwards.
    fn dispose(&mut self);
}

pub trait Surface {
    fn resize(&mut self, viewport: Viewport);
    fn present(&mut self, frame: &Frame);
    fn release(&mut self);
}
