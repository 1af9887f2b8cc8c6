//! Wiring between a scene, its surface and the page's event sources.

use std::{cell::RefCell, rc::Rc};

use crate::motion::{parallax_progress, SectionBounds};

use super::render::Frame;
use super::{Scene, Surface, Viewport};

/// Event and frame sources. Every registration returns a handle that
/// unregisters itself when dropped.
pub trait Host {
    type Handle;

    fn viewport(&self) -> Viewport;
    fn on_resize(&self, handler: Box<dyn FnMut(Viewport)>) -> Self::Handle;
    /// Pointer position in client pixels.
    fn on_pointer(&self, handler: Box<dyn FnMut(f64, f64)>) -> Self::Handle;
    /// Scroll offset and viewport height.
    fn on_scroll(&self, handler: Box<dyn FnMut(f64, f64)>) -> Self::Handle;
    /// Called once per display frame with a millisecond timestamp.
    fn on_frame(&self, handler: Box<dyn FnMut(f64)>) -> Self::Handle;
}

pub type BoundsProbe = Box<dyn Fn() -> Option<SectionBounds>>;

struct Stage<S, R> {
    scene: S,
    surface: R,
    viewport: Viewport,
    origin: Option<f64>,
    elapsed: f64,
    frame: Frame,
    disposed: bool,
}

impl<S: Scene, R: Surface> Stage<S, R> {
    fn render(&mut self, timestamp_ms: f64) {
        if self.disposed {
            return;
        }

        let origin = *self.origin.get_or_insert(timestamp_ms);
        self.elapsed = ((timestamp_ms - origin) / 1_000.0).max(0.0);
        self.scene.tick(self.elapsed);

        self.frame.clear();
        self.scene.draw(&mut self.frame, self.viewport);
        self.surface.present(&self.frame);
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.scene.resize(viewport);
        self.surface.resize(viewport);
    }

    fn pointer(&mut self, client_x: f64, client_y: f64) {
        let (x, y) = self.viewport.normalize(client_x, client_y);
        self.scene.pointer(x, y, self.elapsed);
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }

        self.disposed = true;
        self.frame.clear();
        self.scene.dispose();
        self.surface.release();
    }
}

/// A running scene. Dropping it unregisters every listener and the frame
/// loop, then disposes the scene and releases the surface.
pub struct Mounted<T, S: Scene, R: Surface> {
    handles: Vec<T>,
    stage: Rc<RefCell<Stage<S, R>>>,
}

impl<T, S: Scene, R: Surface> Mounted<T, S, R> {
    pub fn registrations(&self) -> usize {
        self.handles.len()
    }
}

impl<T, S: Scene, R: Surface> Drop for Mounted<T, S, R> {
    fn drop(&mut self) {
        self.handles.clear();
        if let Ok(mut stage) = self.stage.try_borrow_mut() {
            stage.dispose();
        }
    }
}

pub fn mount<H, S, R>(
    host: &H,
    scene: S,
    mut surface: R,
    bounds: Option<BoundsProbe>,
) -> Mounted<H::Handle, S, R>
where
    H: Host,
    S: Scene + 'static,
    R: Surface + 'static,
{
    let viewport = host.viewport();
    surface.resize(viewport);

    let stage = Rc::new(RefCell::new(Stage {
        scene,
        surface,
        viewport,
        origin: None,
        elapsed: 0.0,
        frame: Frame::default(),
        disposed: false,
    }));
    let mut handles = Vec::with_capacity(4);

    {
        let stage = stage.clone();
        handles.push(host.on_resize(Box::new(move |viewport| {
            stage.borrow_mut().resize(viewport);
        })));
    }

    if S::POINTER_PARALLAX {
        let stage = stage.clone();
        handles.push(host.on_pointer(Box::new(move |x, y| {
            stage.borrow_mut().pointer(x, y);
        })));
    }

    if let Some(probe) = bounds.filter(|_| S::SCROLL_PARALLAX) {
        let stage = stage.clone();
        handles.push(host.on_scroll(Box::new(move |scroll_y, viewport_height| {
            let Some(bounds) = probe() else {
                return;
            };
            if let Some(progress) = parallax_progress(scroll_y, bounds, viewport_height) {
                stage.borrow_mut().scene.scroll(progress);
            }
        })));
    }

    {
        let stage = stage.clone();
        handles.push(host.on_frame(Box::new(move |timestamp| {
            stage.borrow_mut().render(timestamp);
        })));
    }

    Mounted { handles, stage }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{
        contact::ContactScene, hero::HeroScene, projects::ProjectsScene, skills::SkillsScene,
        Palette,
    };
    use crate::theme::Theme;
    use fastrand::Rng;
    use std::{cell::Cell, collections::BTreeMap};

    enum Registered {
        Resize(Box<dyn FnMut(Viewport)>),
        Pointer(Box<dyn FnMut(f64, f64)>),
        Scroll(Box<dyn FnMut(f64, f64)>),
        Frame(Box<dyn FnMut(f64)>),
    }

    type Registry = Rc<RefCell<BTreeMap<usize, Registered>>>;

    #[derive(Clone, Default)]
    struct MockHost {
        registry: Registry,
        next_id: Rc<Cell<usize>>,
    }

    struct MockHandle {
        id: usize,
        registry: Registry,
    }

    impl Drop for MockHandle {
        fn drop(&mut self) {
            self.registry.borrow_mut().remove(&self.id);
        }
    }

    impl MockHost {
        fn register(&self, entry: Registered) -> MockHandle {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.registry.borrow_mut().insert(id, entry);
            MockHandle {
                id,
                registry: self.registry.clone(),
            }
        }

        fn live(&self) -> usize {
            self.registry.borrow().len()
        }

        fn frame(&self, timestamp: f64) {
            for entry in self.registry.borrow_mut().values_mut() {
                if let Registered::Frame(handler) = entry {
                    handler(timestamp);
                }
            }
        }

        fn scroll(&self, scroll_y: f64, viewport_height: f64) {
            for entry in self.registry.borrow_mut().values_mut() {
                if let Registered::Scroll(handler) = entry {
                    handler(scroll_y, viewport_height);
                }
            }
        }

        fn pointer(&self, x: f64, y: f64) {
            for entry in self.registry.borrow_mut().values_mut() {
                if let Registered::Pointer(handler) = entry {
                    handler(x, y);
                }
            }
        }

        fn resize(&self, viewport: Viewport) {
            for entry in self.registry.borrow_mut().values_mut() {
                if let Registered::Resize(handler) = entry {
                    handler(viewport);
                }
            }
        }
    }

    impl Host for MockHost {
        type Handle = MockHandle;

        fn viewport(&self) -> Viewport {
            Viewport::new(800.0, 600.0)
        }

        fn on_resize(&self, handler: Box<dyn FnMut(Viewport)>) -> MockHandle {
            self.register(Registered::Resize(handler))
        }

        fn on_pointer(&self, handler: Box<dyn FnMut(f64, f64)>) -> MockHandle {
            self.register(Registered::Pointer(handler))
        }

        fn on_scroll(&self, handler: Box<dyn FnMut(f64, f64)>) -> MockHandle {
            self.register(Registered::Scroll(handler))
        }

        fn on_frame(&self, handler: Box<dyn FnMut(f64)>) -> MockHandle {
            self.register(Registered::Frame(handler))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSurface {
        presented: Rc<Cell<usize>>,
        last_layers: Rc<Cell<usize>>,
        resized: Rc<Cell<usize>>,
        released: Rc<Cell<bool>>,
    }

    impl Surface for RecordingSurface {
        fn resize(&mut self, _viewport: Viewport) {
            self.resized.set(self.resized.get() + 1);
        }

        fn present(&mut self, frame: &Frame) {
            self.presented.set(self.presented.get() + 1);
            self.last_layers.set(frame.layers().len());
        }

        fn release(&mut self) {
            self.released.set(true);
        }
    }

    #[derive(Clone, Default)]
    struct Calls {
        ticks: Rc<RefCell<Vec<f64>>>,
        pointers: Rc<RefCell<Vec<(f64, f64, f64)>>>,
        scrolls: Rc<RefCell<Vec<f64>>>,
        disposed: Rc<Cell<bool>>,
    }

    struct ProbeScene {
        calls: Calls,
    }

    impl Scene for ProbeScene {
        const NAME: &'static str = "probe";
        const POINTER_PARALLAX: bool = true;
        const SCROLL_PARALLAX: bool = true;

        fn build(_palette: &Palette, _viewport: Viewport, _rng: &mut Rng) -> Self {
            Self {
                calls: Calls::default(),
            }
        }

        fn tick(&mut self, elapsed: f64) {
            self.calls.ticks.borrow_mut().push(elapsed);
        }

        fn resize(&mut self, _viewport: Viewport) {}

        fn pointer(&mut self, x: f64, y: f64, now: f64) {
            self.calls.pointers.borrow_mut().push((x, y, now));
        }

        fn scroll(&mut self, progress: f64) {
            self.calls.scrolls.borrow_mut().push(progress);
        }

        fn draw(&self, _frame: &mut Frame, _viewport: Viewport) {}

        fn dispose(&mut self) {
            self.calls.disposed.set(true);
        }
    }

    fn section_probe() -> Option<BoundsProbe> {
        Some(Box::new(|| {
            Some(SectionBounds {
                top: 1_000.0,
                height: 600.0,
            })
        }))
    }

    fn mount_and_drop<S: Scene + 'static>() {
        let host = MockHost::default();
        let surface = RecordingSurface::default();
        let mut rng = Rng::with_seed(11);
        let scene = S::build(&Palette::for_theme(Theme::Dark), host.viewport(), &mut rng);

        let mounted = mount(&host, scene, surface.clone(), section_probe());
        assert!(host.live() >= 2, "{} registered too little", S::NAME);
        assert_eq!(host.live(), mounted.registrations());

        drop(mounted);
        assert_eq!(host.live(), 0, "{} left listeners behind", S::NAME);
        assert!(surface.released.get());
    }

    #[test]
    fn every_scene_unmounts_cleanly() {
        mount_and_drop::<HeroScene>();
        mount_and_drop::<SkillsScene>();
        mount_and_drop::<ProjectsScene>();
        mount_and_drop::<ContactScene>();
    }

    #[test]
    fn pointer_scenes_skip_scroll_and_scroll_scenes_skip_pointer() {
        let host = MockHost::default();
        let mut rng = Rng::with_seed(3);
        let palette = Palette::for_theme(Theme::Light);

        let hero = mount(
            &host,
            HeroScene::build(&palette, host.viewport(), &mut rng),
            RecordingSurface::default(),
            section_probe(),
        );
        let skills = mount(
            &host,
            SkillsScene::build(&palette, host.viewport(), &mut rng),
            RecordingSurface::default(),
            section_probe(),
        );

        assert_eq!(hero.registrations(), 3);
        assert_eq!(skills.registrations(), 3);
        assert_eq!(
            host.registry
                .borrow()
                .values()
                .filter(|entry| matches!(entry, Registered::Pointer(_)))
                .count(),
            1
        );
    }

    #[test]
    fn scroll_scene_without_section_only_listens_to_resize_and_frames() {
        let host = MockHost::default();
        let mut rng = Rng::with_seed(3);
        let scene = SkillsScene::build(&Palette::for_theme(Theme::Dark), host.viewport(), &mut rng);

        let mounted = mount(&host, scene, RecordingSurface::default(), None);
        assert_eq!(mounted.registrations(), 2);
    }

    #[test]
    fn frames_are_timed_from_the_first_one_and_presented() {
        let host = MockHost::default();
        let calls = Calls::default();
        let surface = RecordingSurface::default();
        let mounted = mount(
            &host,
            ProbeScene {
                calls: calls.clone(),
            },
            surface.clone(),
            None,
        );

        host.frame(5_000.0);
        host.frame(5_500.0);
        host.frame(7_000.0);

        assert_eq!(*calls.ticks.borrow(), vec![0.0, 0.5, 2.0]);
        assert_eq!(surface.presented.get(), 3);
        drop(mounted);
        assert!(calls.disposed.get());
    }

    #[test]
    fn pointer_is_normalized_and_stamped_with_scene_time() {
        let host = MockHost::default();
        let calls = Calls::default();
        let _mounted = mount(
            &host,
            ProbeScene {
                calls: calls.clone(),
            },
            RecordingSurface::default(),
            None,
        );

        host.frame(0.0);
        host.frame(1_500.0);
        host.pointer(600.0, 150.0);

        assert_eq!(*calls.pointers.borrow(), vec![(0.25, -0.25, 1.5)]);
    }

    #[test]
    fn scroll_outside_the_section_is_ignored() {
        let host = MockHost::default();
        let calls = Calls::default();
        let _mounted = mount(
            &host,
            ProbeScene {
                calls: calls.clone(),
            },
            RecordingSurface::default(),
            section_probe(),
        );

        host.scroll(100.0, 800.0);
        host.scroll(900.0, 800.0);
        host.scroll(2_000.0, 800.0);

        assert_eq!(*calls.scrolls.borrow(), vec![0.5]);
    }

    #[test]
    fn resize_reaches_surface_and_later_pointer_math() {
        let host = MockHost::default();
        let calls = Calls::default();
        let surface = RecordingSurface::default();
        let _mounted = mount(
            &host,
            ProbeScene {
                calls: calls.clone(),
            },
            surface.clone(),
            None,
        );

        host.resize(Viewport::new(400.0, 400.0));
        host.pointer(400.0, 0.0);

        assert_eq!(surface.resized.get(), 2);
        assert_eq!(*calls.pointers.borrow(), vec![(0.5, -0.5, 0.0)]);
    }

    #[test]
    fn real_scenes_produce_layers() {
        let host = MockHost::default();
        let surface = RecordingSurface::default();
        let mut rng = Rng::with_seed(5);
        let scene = ContactScene::build(&Palette::for_theme(Theme::Dark), host.viewport(), &mut rng);
        let _mounted = mount(&host, scene, surface.clone(), None);

        host.frame(16.0);
        assert!(surface.last_layers.get() >= 2);
    }
}
